use crate::models::{DAYS_PER_WEEK, DayCell, MonthGrid, WeekRow, YearCalendar};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// Years the service renders and accepts habit dates for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lays out every month of `year` as Monday-first week rows.
///
/// Years chrono cannot represent produce twelve empty month grids.
pub fn build(year: i32) -> YearCalendar {
    let months = (1..=12).map(|month| build_month(year, month)).collect();
    YearCalendar { year, months }
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

fn build_month(year: i32, month: u32) -> MonthGrid {
    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid {
            month,
            weeks: Vec::new(),
        };
    };

    let days: Vec<NaiveDate> = first_day
        .iter_days()
        .take_while(|date| date.month() == month)
        .collect();

    let first_weekday = first_day.weekday().num_days_from_monday() as usize;
    let week_count = (days.len() + first_weekday).div_ceil(DAYS_PER_WEEK);

    let mut weeks: Vec<WeekRow> = vec![[None; DAYS_PER_WEEK]; week_count];
    for (index, date) in days.into_iter().enumerate() {
        let slot = first_weekday + index;
        weeks[slot / DAYS_PER_WEEK][slot % DAYS_PER_WEEK] = Some(DayCell { date, index });
    }

    MonthGrid { month, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(grid: &MonthGrid) -> usize {
        grid.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter(|slot| slot.is_some())
            .count()
    }

    fn leading_blanks(grid: &MonthGrid) -> usize {
        grid.weeks[0].iter().take_while(|slot| slot.is_none()).count()
    }

    fn days_in_month(year: i32, month: u32) -> usize {
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
        (next - first).num_days() as usize
    }

    #[test]
    fn leap_year_february_has_29_days() {
        let calendar = build(2024);
        assert_eq!(calendar.months.len(), 12);
        assert_eq!(filled(&calendar.months[1]), 29);
        assert_eq!(filled(&build(2023).months[1]), 28);
        assert_eq!(filled(&build(1900).months[1]), 28);
        assert_eq!(filled(&build(2000).months[1]), 29);
    }

    #[test]
    fn january_2024_starts_on_monday() {
        let january = &build(2024).months[0];
        assert_eq!(january.month, 1);
        assert_eq!(leading_blanks(january), 0);
        assert_eq!(january.weeks.len(), 5);
        assert_eq!(january.weeks[0][0].unwrap().key(), "2024-01-01");
    }

    #[test]
    fn sunday_start_fills_the_whole_first_row_with_blanks() {
        // 2023-10-01 is a Sunday.
        let october = &build(2023).months[9];
        assert_eq!(leading_blanks(october), 6);
        assert_eq!(october.weeks.len(), 6);
        let first = october.weeks[0][6].unwrap();
        assert_eq!(first.key(), "2023-10-01");
        assert_eq!(first.index, 0);
    }

    #[test]
    fn february_2021_fits_in_exactly_four_rows() {
        let february = &build(2021).months[1];
        assert_eq!(february.weeks.len(), 4);
        assert!(february.weeks.iter().flatten().all(|slot| slot.is_some()));
    }

    #[test]
    fn every_month_matches_day_count_and_weekday_offset() {
        for year in [1600, 1999, 2024, 2025, 2100, 2400] {
            let calendar = build(year);
            assert_eq!(calendar.months.len(), 12);
            for (offset, grid) in calendar.months.iter().enumerate() {
                let month = offset as u32 + 1;
                assert_eq!(grid.month, month);
                assert_eq!(filled(grid), days_in_month(year, month));

                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let expected = first.weekday().num_days_from_monday() as usize;
                assert!(expected < 7);
                assert_eq!(leading_blanks(grid), expected);
                assert_eq!(
                    grid.weeks.len(),
                    (days_in_month(year, month) + expected).div_ceil(7)
                );
            }
        }
    }

    #[test]
    fn days_are_in_order_with_sequential_indexes() {
        let march = &build(2024).months[2];
        let cells: Vec<DayCell> = march.weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(cells.len(), 31);
        for (position, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index, position);
            assert_eq!(cell.date.day() as usize, position + 1);
        }
        assert_eq!(cells[4].label(), "Tuesday, March 5, 2024");
    }

    #[test]
    fn unrepresentable_year_yields_empty_months() {
        let calendar = build(i32::MAX);
        assert_eq!(calendar.months.len(), 12);
        assert!(calendar.months.iter().all(|grid| grid.weeks.is_empty()));
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
