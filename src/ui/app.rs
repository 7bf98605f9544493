use std::fmt::Write as _;
use std::sync::mpsc;

use termion::event::Event as InputEvent;
use unsegen::base::*;
use unsegen::input::Key;
use unsegen::widget::*;

use crate::calendar::CalendarDate;
use crate::cmds::Cmd;
use crate::config::Config;
use crate::control::Controller;
use crate::events::{Dispatcher, Event};
use crate::picker::{DatePicker, PickerOptions};

use super::calendar::MonthPane;
use super::Theme;

struct StatusLine {
    text: String,
    style: StyleModifier,
}

impl Widget for StatusLine {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window);
        cursor.set_style_modifier(self.style);
        write!(&mut cursor, "{}", self.text).unwrap();
    }
}

/// The interactive shell around the picker: draws it, feeds it input read
/// off the dispatcher and stops once a date was committed or the user
/// gave up.
pub struct App<'a> {
    config: &'a Config,
    controller: Controller<'a, DatePicker>,
    commits: mpsc::Receiver<CalendarDate>,
    theme: Theme,
    committed: Option<CalendarDate>,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, initial: Option<CalendarDate>) -> App<'a> {
        let (tx, rx) = mpsc::channel();

        let options = PickerOptions {
            confirm_adjacent: config.confirm_adjacent,
        };
        let picker = DatePicker::new(options, tx).with_date(initial);

        App {
            config,
            controller: Controller::new(&config.key_map, picker),
            commits: rx,
            theme: Theme::default(),
            committed: None,
            quit: false,
        }
    }

    fn status_text(&self) -> String {
        let picker = self.controller.inner();

        let mut text = match picker.selected() {
            Some(date) => format!(" {}", date),
            None => " no selection".to_owned(),
        };

        text.push_str("  (enter: pick");
        if self.config.show_today {
            text.push_str(", t: today");
        }
        text.push_str(", q: quit)");
        text
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(MonthPane::new(self.controller.inner(), &self.theme))
            .widget(StatusLine {
                text: self.status_text(),
                style: self.theme.status_style,
            })
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Update => self.controller.inner_mut().update_now(),
            Event::Input(input) => {
                if input.matches(Key::Esc) {
                    self.quit = true;
                    return;
                }

                // with the affordance hidden, the today shortcut is inert
                if !self.config.show_today {
                    if let InputEvent::Key(key) = &input.event {
                        if self.config.key_map.get(key) == Some(&Cmd::ConfirmToday) {
                            return;
                        }
                    }
                }

                match self.controller.handle(input) {
                    Ok(Cmd::Exit) => self.quit = true,
                    Ok(_) => {}
                    Err(err) => log::warn!("{}", err),
                }
            }
        }

        while let Ok(date) = self.commits.try_recv() {
            self.committed = Some(date);
            self.quit = true;
        }
    }

    pub fn draw(&self, term: &mut Terminal) {
        let root = term.create_root_window();
        self.as_widget().draw(root, RenderingHints::new());
        term.present();
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<Option<CalendarDate>, Box<dyn std::error::Error>> {
        while !self.quit {
            self.draw(&mut term);

            match dispatcher.next() {
                Ok(event) => self.handle(event),
                Err(_) => break,
            }
        }

        Ok(self.committed.take())
    }
}
