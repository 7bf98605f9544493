extern crate datepick as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::CalendarDate;
use lib::events::Dispatcher;
use lib::ui::app::App;
use nix::sys::termios;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

use chrono::NaiveDate;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dpk",
    author = "reedts <j.reedts@gmail.com>",
    about = "datepick - a month-grid date picker for the terminal."
)]
pub struct Args {
    #[structopt(
        short = "d",
        long = "date",
        help = "initially selected date (YYYY-MM-DD)",
        parse(try_from_str = parse_date)
    )]
    pub date: Option<CalendarDate>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<CalendarDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(CalendarDate::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(STDIN).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("datepick ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let committed = {
        let stdout = stdout();
        let mut term = Terminal::new(stdout.lock())?;

        let mut app = App::new(&config, args.date);

        if args.show {
            app.draw(&mut term);
            None
        } else {
            let dispatcher = Dispatcher::from_config(&config);
            app.run(dispatcher, term)?
        }
    };

    // the terminal is restored at this point, hand the picked date to
    // whoever called us
    if let Some(date) = committed {
        println!("{}", date);
    }

    Ok(())
}
