use chrono::{Datelike, Duration, Local, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt;

/// A calendar day without time-of-day or timezone. `month0` is the
/// zero-based month index, following chrono's `month0`/`day0` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month0: i32, day: u32) -> CalendarDate {
        let (year, month0) = carry_months(year, month0);
        CalendarDate { year, month0, day }.clamped()
    }

    pub fn first_of(year: i32, month0: i32) -> CalendarDate {
        let (year, month0) = carry_months(year, month0);
        CalendarDate {
            year,
            month0,
            day: 1,
        }
    }

    /// Same date with the day forced inside the limits of its month.
    pub fn clamped(self) -> CalendarDate {
        CalendarDate::from(self.to_naive())
    }

    pub fn with_day(self, day: u32) -> CalendarDate {
        CalendarDate { day, ..self }
    }

    pub fn step_days(self, delta: i64) -> CalendarDate {
        CalendarDate::from(self.to_naive() + Duration::days(delta))
    }

    /// Moves by whole months, landing on day 1 of the target month so a
    /// long source day never overflows into the month after the target.
    pub fn step_months(self, delta: i32) -> CalendarDate {
        CalendarDate::first_of(self.year, self.month0 as i32 + delta)
    }

    /// Weekday column of this date in a Sunday-first week, 0 = Sunday.
    pub fn weekday_from_sunday(self) -> u32 {
        self.to_naive().weekday().num_days_from_sunday()
    }

    fn to_naive(self) -> NaiveDate {
        let (year, month0) = carry_months(self.year, self.month0 as i32);
        let day = self.day.min(days_in_month(year, month0)).max(1);
        NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .expect("normalized calendar date is representable")
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month0: date.month0(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month0 + 1,
            self.day
        )
    }
}

/// Normalizes a zero-based month index by carrying whole years, so
/// `(2023, 12)` becomes `(2024, 0)` and `(2024, -1)` becomes `(2023, 11)`.
pub fn carry_months(year: i32, month0: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month0 as i64;
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

/// Number of days in a month, as the distance between its first day and
/// the first day of the following month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (year, month0) = carry_months(year, month0 as i32);
    let (next_year, next_month0) = carry_months(year, month0 as i32 + 1);

    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .expect("normalized month index is representable")
        .signed_duration_since(
            NaiveDate::from_ymd_opt(year, month0 + 1, 1)
                .expect("normalized month index is representable"),
        )
        .num_days() as u32
}

pub trait Clock {
    fn today(&self) -> CalendarDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

pub trait MonthFormat {
    fn month_label(&self, year: i32, month0: u32) -> String;
}

pub struct ChronoMonthFormat;

impl MonthFormat for ChronoMonthFormat {
    fn month_label(&self, year: i32, month0: u32) -> String {
        let month = Month::from_u32(month0 + 1).unwrap_or(Month::January);
        format!("{} {}", month.name(), year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
    }

    #[test]
    fn month_index_carries_into_years() {
        assert_eq!(carry_months(2024, 12), (2025, 0));
        assert_eq!(carry_months(2024, -1), (2023, 11));
        assert_eq!(carry_months(2024, 25), (2026, 1));
        assert_eq!(carry_months(2024, -13), (2022, 11));
        assert_eq!(carry_months(2024, 5), (2024, 5));
    }

    #[test]
    fn day_steps_roll_over_months_and_years() {
        let leap_feb = CalendarDate::new(2024, 1, 29);
        assert_eq!(leap_feb.step_days(1), CalendarDate::new(2024, 2, 1));

        let new_year = CalendarDate::new(2024, 0, 1);
        assert_eq!(new_year.step_days(-1), CalendarDate::new(2023, 11, 31));

        let week_later = CalendarDate::new(2024, 1, 27).step_days(7);
        assert_eq!(week_later, CalendarDate::new(2024, 2, 5));
    }

    #[test]
    fn month_steps_land_on_the_first() {
        let end_of_january = CalendarDate::new(2024, 0, 31);
        assert_eq!(end_of_january.step_months(1), CalendarDate::new(2024, 1, 1));
        assert_eq!(
            end_of_january.step_months(-1),
            CalendarDate::new(2023, 11, 1)
        );
        assert_eq!(
            end_of_january.step_months(12),
            CalendarDate::new(2025, 0, 1)
        );
    }

    #[test]
    fn weekday_is_sunday_first() {
        // 2024-02-01 was a Thursday, 2015-02-01 a Sunday
        assert_eq!(CalendarDate::new(2024, 1, 1).weekday_from_sunday(), 4);
        assert_eq!(CalendarDate::new(2015, 1, 1).weekday_from_sunday(), 0);
    }

    #[test]
    fn out_of_range_days_are_clamped() {
        assert_eq!(
            CalendarDate {
                year: 2024,
                month0: 1,
                day: 31
            }
            .clamped(),
            CalendarDate::new(2024, 1, 29)
        );
    }

    #[test]
    fn dates_format_as_iso() {
        assert_eq!(CalendarDate::new(2024, 1, 3).to_string(), "2024-02-03");
    }

    #[test]
    fn month_labels_use_english_month_names() {
        let format = ChronoMonthFormat;
        assert_eq!(format.month_label(2024, 0), "January 2024");
        assert_eq!(format.month_label(2023, 11), "December 2023");
    }
}
