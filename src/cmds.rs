use std::error;
use std::fmt;
use std::result;

/// The closed set of commands a host can send to the picker. Parameters
/// ride on the variant instead of stringly-typed event tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    StepDay(i64),
    StepWeek(i64),
    StepMonth(i32),
    JumpTo(u32),
    Confirm,
    ConfirmToday,
    Exit,
}

pub type CmdResult = result::Result<Cmd, CmdError>;

#[derive(Debug, Clone)]
pub struct CmdError {
    message: String,
}

impl CmdError {
    pub fn new(message: String) -> Self {
        CmdError { message }
    }
}

impl fmt::Display for CmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error::Error for CmdError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
