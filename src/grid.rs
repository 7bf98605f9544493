use std::convert::TryFrom;

use crate::calendar::{carry_months, days_in_month, CalendarDate};

/// One cell of the month grid. Cells borrowed from an adjacent month to
/// fill out a week carry `in_month = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub in_month: bool,
}

pub type Week = [DayCell; 7];

/// All week rows needed to display one month, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month0: u32,
    weeks: Vec<Week>,
}

impl MonthView {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    pub fn cell_at(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }
}

/// Builds the view of one month: all of its days plus the trailing days of
/// the previous month and leading days of the next month needed to complete
/// the first and last week. A `month0` outside 0..=11 carries into the year.
pub fn build_month_view(year: i32, month0: i32) -> MonthView {
    let (year, month0) = carry_months(year, month0);
    let last_day = days_in_month(year, month0);

    let mut cells = Vec::with_capacity(42);

    // Trailing days of the previous month, one per weekday column in front
    // of the 1st.
    let offset = CalendarDate::first_of(year, month0 as i32).weekday_from_sunday();
    let (prev_year, prev_month0) = carry_months(year, month0 as i32 - 1);
    let prev_last_day = days_in_month(prev_year, prev_month0);
    for day in prev_last_day - offset + 1..=prev_last_day {
        cells.push(DayCell {
            date: CalendarDate {
                year: prev_year,
                month0: prev_month0,
                day,
            },
            in_month: false,
        });
    }

    for day in 1..=last_day {
        cells.push(DayCell {
            date: CalendarDate { year, month0, day },
            in_month: true,
        });
    }

    // Leading days of the next month, only if the last week is ragged.
    let rem = cells.len() % 7;
    if rem != 0 {
        let (next_year, next_month0) = carry_months(year, month0 as i32 + 1);
        for day in 1..=(7 - rem) as u32 {
            cells.push(DayCell {
                date: CalendarDate {
                    year: next_year,
                    month0: next_month0,
                    day,
                },
                in_month: false,
            });
        }
    }

    let weeks = cells
        .chunks_exact(7)
        .map(|chunk| Week::try_from(chunk).expect("padding completes whole weeks"))
        .collect();

    MonthView {
        year,
        month0,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_is_whole_weeks_of_exactly_the_month() {
        let months = [
            (1900, 1),
            (1999, 11),
            (2000, 1),
            (2015, 1),
            (2023, 0),
            (2024, 1),
            (2024, 3),
            (2024, 11),
            (2026, 7),
        ];

        for &(year, month0) in &months {
            let view = build_month_view(year, month0 as i32);
            let total: usize = view.weeks().len() * 7;
            assert_eq!(view.cells().count(), total);
            assert!(view.weeks().len() >= 4 && view.weeks().len() <= 6);

            let in_month: Vec<u32> = view
                .cells()
                .filter(|cell| cell.in_month)
                .map(|cell| cell.date.day)
                .collect();
            let expected: Vec<u32> = (1..=days_in_month(year, month0)).collect();
            assert_eq!(in_month, expected, "{}-{}", year, month0);
        }
    }

    #[test]
    fn cells_are_strictly_chronological() {
        for &(year, month0) in &[(2023, 11), (2024, 0), (2024, 1), (2026, 7)] {
            let view = build_month_view(year, month0);
            let dates: Vec<_> = view.cells().map(|cell| cell.date).collect();
            assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn first_cell_sits_in_the_sunday_column() {
        for &(year, month0) in &[(2015, 1), (2023, 5), (2024, 1), (2026, 7)] {
            let view = build_month_view(year, month0);
            let first = view.cells().next().expect("view is never empty");
            assert_eq!(first.date.weekday_from_sunday(), 0);

            // day 1 of the month lands on its own weekday column
            let day_one = CalendarDate::new(year, month0, 1);
            let leading = view.cells().take_while(|cell| !cell.in_month).count();
            assert_eq!(leading as u32, day_one.weekday_from_sunday());
        }
    }

    #[test]
    fn building_twice_yields_equal_views() {
        assert_eq!(build_month_view(2024, 1), build_month_view(2024, 1));
    }

    #[test]
    fn month_index_carries_across_year_boundaries() {
        assert_eq!(build_month_view(2023, 12), build_month_view(2024, 0));
        assert_eq!(build_month_view(2024, -1), build_month_view(2023, 11));
    }

    #[test]
    fn leap_february_2024_layout() {
        // February 2024 starts on a Thursday and has 29 days: four January
        // cells in front, two March cells behind, five rows in total.
        let view = build_month_view(2024, 1);
        assert_eq!(view.weeks().len(), 5);

        let first_week: Vec<u32> = view.weeks()[0].iter().map(|cell| cell.date.day).collect();
        assert_eq!(first_week, [28, 29, 30, 31, 1, 2, 3]);
        assert!(view.weeks()[0][..4]
            .iter()
            .all(|cell| !cell.in_month && cell.date.month0 == 0));

        let last_in_month = view
            .cells()
            .filter(|cell| cell.in_month)
            .last()
            .expect("february has days");
        assert_eq!(last_in_month.date.day, 29);

        let trailing: Vec<_> = view
            .cells()
            .skip_while(|cell| !cell.in_month)
            .skip_while(|cell| cell.in_month)
            .collect();
        assert_eq!(trailing.len(), 2);
        assert!(trailing
            .iter()
            .all(|cell| !cell.in_month && cell.date.month0 == 2));
    }

    #[test]
    fn aligned_month_gets_no_padding_at_all() {
        // February 2015: 28 days starting on a Sunday.
        let view = build_month_view(2015, 1);
        assert_eq!(view.weeks().len(), 4);
        assert!(view.cells().all(|cell| cell.in_month));
    }

    #[test]
    fn long_month_with_late_start_needs_six_rows() {
        // August 2026 starts on a Saturday and has 31 days.
        let view = build_month_view(2026, 7);
        assert_eq!(view.weeks().len(), 6);
        assert_eq!(view.cells().filter(|cell| !cell.in_month).count(), 6 + 5);
    }
}
