use std::sync::mpsc;

use crate::calendar::{
    days_in_month, CalendarDate, ChronoMonthFormat, Clock, MonthFormat, SystemClock,
};
use crate::cmds::{Cmd, CmdResult};
use crate::control::Control;
use crate::grid::{build_month_view, DayCell, MonthView};

#[derive(Debug, Clone, Copy, Default)]
pub struct PickerOptions {
    /// Allow committing a padding cell directly instead of only
    /// navigating onto it.
    pub confirm_adjacent: bool,
}

/// The month-grid picker state machine: a committed selection and an
/// independent cursor the navigation commands move around. Every mutation
/// re-normalizes the cursor and keeps the month view in step with it.
/// Committed dates are emitted exactly once through the commit sink.
pub struct DatePicker {
    selected: Option<CalendarDate>,
    cursor: CalendarDate,
    today: CalendarDate,
    view: MonthView,
    month_label: String,
    options: PickerOptions,
    clock: Box<dyn Clock>,
    format: Box<dyn MonthFormat>,
    commits: mpsc::Sender<CalendarDate>,
}

impl DatePicker {
    pub fn new(options: PickerOptions, commits: mpsc::Sender<CalendarDate>) -> DatePicker {
        DatePicker::with_collaborators(
            options,
            commits,
            Box::new(SystemClock),
            Box::new(ChronoMonthFormat),
        )
    }

    pub fn with_collaborators(
        options: PickerOptions,
        commits: mpsc::Sender<CalendarDate>,
        clock: Box<dyn Clock>,
        format: Box<dyn MonthFormat>,
    ) -> DatePicker {
        let today = clock.today();
        let view = build_month_view(today.year, today.month0 as i32);
        let month_label = format.month_label(today.year, today.month0);

        DatePicker {
            selected: None,
            cursor: today,
            today,
            view,
            month_label,
            options,
            clock,
            format,
            commits,
        }
    }

    /// Starts from a pre-selected date, in the manner of an input value
    /// handed to the widget by its host.
    pub fn with_date(mut self, date: Option<CalendarDate>) -> DatePicker {
        self.set_selected_date(date);
        self
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn cursor(&self) -> CalendarDate {
        self.cursor
    }

    pub fn view(&self) -> &MonthView {
        &self.view
    }

    pub fn month_label(&self) -> &str {
        &self.month_label
    }

    pub fn is_selected(&self, cell: &DayCell) -> bool {
        self.selected == Some(cell.date)
    }

    pub fn is_cursor(&self, cell: &DayCell) -> bool {
        self.cursor == cell.date
    }

    pub fn is_today(&self, cell: &DayCell) -> bool {
        self.today == cell.date
    }

    /// Replaces the committed selection. A concrete date also re-anchors
    /// the cursor on it; clearing the selection leaves the cursor alone.
    pub fn set_selected_date(&mut self, date: Option<CalendarDate>) {
        self.selected = date.map(CalendarDate::clamped);
        if let Some(date) = self.selected {
            self.cursor = date;
        }
        self.render();
    }

    /// Drops the selection and returns the cursor to today.
    pub fn reset(&mut self) {
        self.selected = None;
        self.today = self.clock.today();
        self.cursor = self.today;
        self.render();
    }

    /// Refreshes the today marker from the clock, without touching the
    /// cursor or the selection.
    pub fn update_now(&mut self) {
        self.today = self.clock.today();
    }

    pub fn move_cursor_by_days(&mut self, delta: i64) {
        self.cursor = self.cursor.step_days(delta);
        self.render();
    }

    pub fn move_cursor_by_months(&mut self, delta: i32) {
        self.cursor = self.cursor.step_months(delta);
        self.render();
    }

    /// Moves the cursor inside its month. Days past the end of the month
    /// are pulled back to the last valid day by the render step.
    pub fn move_cursor_to_day_of_month(&mut self, day: u32) {
        self.cursor = self.cursor.with_day(day.max(1));
        self.render();
    }

    /// Commits the cell under the cursor. Returns the committed date, or
    /// `None` when the cell is disabled by policy.
    pub fn confirm_cursor(&mut self) -> Option<CalendarDate> {
        let cell = *self.view.cell_at(self.cursor)?;
        self.commit(&cell)
    }

    /// Commits today's date directly, leaving cursor and selection as
    /// they are.
    pub fn confirm_today(&mut self) -> CalendarDate {
        let today = self.clock.today();
        self.emit(today);
        today
    }

    /// The pointer path: navigates onto the cell and commits it. Padding
    /// cells always shift the view; whether they commit is a policy
    /// decision.
    pub fn select_cell(&mut self, cell: &DayCell) -> Option<CalendarDate> {
        self.cursor = cell.date;
        let committed = self.commit(cell);
        self.render();
        committed
    }

    fn commit(&mut self, cell: &DayCell) -> Option<CalendarDate> {
        if !cell.in_month && !self.options.confirm_adjacent {
            log::debug!("ignoring confirm on {}: outside the current month", cell.date);
            return None;
        }

        self.selected = Some(cell.date);
        self.emit(cell.date);
        Some(cell.date)
    }

    fn emit(&self, date: CalendarDate) {
        log::info!("date committed: {}", date);
        if self.commits.send(date).is_err() {
            log::warn!("committed date {} has no receiver", date);
        }
    }

    // Runs after every mutation: keep the cursor day inside the limits of
    // its month, rebuild the view when the cursor left the shown month and
    // refresh the label.
    fn render(&mut self) {
        let last_day = days_in_month(self.cursor.year, self.cursor.month0);
        if self.cursor.day > last_day {
            self.cursor = self.cursor.with_day(last_day);
        }

        if self.view.year() != self.cursor.year || self.view.month0() != self.cursor.month0 {
            self.view = build_month_view(self.cursor.year, self.cursor.month0 as i32);
            log::debug!("month view rebuilt for {}", self.cursor);
        }

        self.month_label = self
            .format
            .month_label(self.cursor.year, self.cursor.month0);
    }
}

impl Control for DatePicker {
    fn send_cmd(&mut self, cmd: &Cmd) -> CmdResult {
        match *cmd {
            Cmd::StepDay(days) => {
                self.move_cursor_by_days(days);
                Ok(Cmd::Noop)
            }
            Cmd::StepWeek(weeks) => {
                self.move_cursor_by_days(7 * weeks);
                Ok(Cmd::Noop)
            }
            Cmd::StepMonth(months) => {
                self.move_cursor_by_months(months);
                Ok(Cmd::Noop)
            }
            Cmd::JumpTo(day) => {
                self.move_cursor_to_day_of_month(day);
                Ok(Cmd::Noop)
            }
            Cmd::Confirm => {
                self.confirm_cursor();
                Ok(Cmd::Noop)
            }
            Cmd::ConfirmToday => {
                self.confirm_today();
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}
