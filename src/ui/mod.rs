pub mod app;
pub mod calendar;

pub use app::App;
pub use calendar::MonthPane;

use unsegen::base::style::*;

#[derive(Clone, Debug)]
pub struct Theme {
    pub label_style: StyleModifier,
    pub header_style: StyleModifier,
    pub day_style: StyleModifier,
    pub padding_day_style: StyleModifier,
    pub focus_day_style: StyleModifier,
    pub status_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub selected_day_char: Option<char>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            label_style: StyleModifier::new(),
            header_style: StyleModifier::new().fg_color(Color::Yellow),
            day_style: StyleModifier::new(),
            padding_day_style: StyleModifier::new().fg_color(Color::LightBlack),
            focus_day_style: StyleModifier::new().bg_color(Color::Blue),
            status_style: StyleModifier::new(),
            today_day_char: Some('*'),
            selected_day_char: Some('>'),
        }
    }
}
