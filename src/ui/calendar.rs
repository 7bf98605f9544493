use std::fmt;
use std::fmt::Write;

use unsegen::base::*;
use unsegen::widget::*;

use crate::picker::DatePicker;

use super::Theme;

struct DayLabel {
    day_num: u32,
    is_selected: bool,
    is_today: bool,
    selected_char: Option<char>,
    today_char: Option<char>,
}

impl DayLabel {
    const CELL_WIDTH: usize = 4;
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_selected = if self.is_selected {
            self.selected_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_selected, self.day_num)
    }
}

/// Draws one month of the picker: the label line, the weekday header and
/// the week rows underneath, relying on line wrapping at exactly seven
/// cells per row.
pub struct MonthPane<'a> {
    picker: &'a DatePicker,
    theme: &'a Theme,
}

impl<'a> MonthPane<'a> {
    const COLUMNS: usize = 7;
    const LABEL_ROWS: usize = 1;
    const HEADER_ROWS: usize = 1;

    const HEADER: &'static [&'static str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    pub fn new(picker: &'a DatePicker, theme: &'a Theme) -> Self {
        MonthPane { picker, theme }
    }

    fn width() -> usize {
        Self::COLUMNS * DayLabel::CELL_WIDTH
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::width()),
            height: RowDemand::exact(
                Self::LABEL_ROWS + Self::HEADER_ROWS + self.picker.view().weeks().len(),
            ),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.theme;

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        // every line below is padded to the full pane width, so wrapping
        // is what advances the rows
        cursor.set_style_modifier(theme.label_style);
        write!(
            &mut cursor,
            "{:^width$}",
            self.picker.month_label(),
            width = Self::width()
        )
        .unwrap();

        cursor.set_style_modifier(theme.header_style);
        for &head in Self::HEADER {
            write!(&mut cursor, "{:>width$}", head, width = DayLabel::CELL_WIDTH).unwrap();
        }

        for week in self.picker.view().weeks() {
            for cell in week {
                let style = if self.picker.is_cursor(cell) {
                    theme.focus_day_style
                } else if !cell.in_month {
                    theme.padding_day_style
                } else {
                    theme.day_style
                };

                cursor.set_style_modifier(style);
                write!(
                    &mut cursor,
                    "{}",
                    DayLabel {
                        day_num: cell.date.day,
                        is_selected: self.picker.is_selected(cell),
                        is_today: self.picker.is_today(cell),
                        selected_char: theme.selected_day_char,
                        today_char: theme.today_day_char,
                    }
                )
                .unwrap();
            }
        }
    }
}
