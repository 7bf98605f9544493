//! A month-grid date picker for the terminal: a pure grid builder, a
//! keyboard-driven cursor state machine and the unsegen widgets that show
//! them.

pub mod calendar;
pub mod cmds;
pub mod config;
pub mod control;
pub mod events;
pub mod grid;
pub mod picker;
pub mod ui;

pub use calendar::{CalendarDate, Clock, MonthFormat};
pub use cmds::{Cmd, CmdError, CmdResult};
pub use grid::{build_month_view, DayCell, MonthView, Week};
pub use picker::{DatePicker, PickerOptions};
