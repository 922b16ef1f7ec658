//! Calendar arithmetic and month-grid construction for the booking views.
//!
//! The UI renders whatever grid this module produces; all date math and
//! booking lookups happen here so the components stay presentational.

use crate::HallBooking;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Column headers for the seven-day grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Kind of cell in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCellKind {
    /// Blank cell before the first weekday of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell in a month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// YYYY-MM-DD key, empty for padding cells
    pub date_key: String,
    pub has_bookings: bool,
    pub kind: DayCellKind,
}

/// A calendar month with per-day booking flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: u32,
    pub year: u32,
    /// Weekday of the 1st (0 = Sunday, 1 = Monday, ...)
    pub first_day_of_week: u32,
    pub days: Vec<DayCell>,
}

/// Check if a year is a leap year
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Get the weekday of the 1st of a month (0 = Sunday, 1 = Monday, ...)
pub fn first_day_of_month(month: u32, year: u32) -> u32 {
    NaiveDate::from_ymd_opt(year as i32, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the zero-padded YYYY-MM-DD key for a date
pub fn date_key(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// All bookings falling on the given date key, in dataset order
pub fn bookings_on<'a>(bookings: &'a [HallBooking], key: &str) -> Vec<&'a HallBooking> {
    bookings.iter().filter(|booking| booking.date == key).collect()
}

/// Build the grid for one month: leading padding cells for the weekdays
/// before the 1st, then one cell per day flagged with whether any booking's
/// date string matches that day's key exactly.
pub fn build_month_grid(month: u32, year: u32, bookings: &[HallBooking]) -> MonthGrid {
    let first_day = first_day_of_month(month, year);
    let mut days = Vec::new();

    for _ in 0..first_day {
        days.push(DayCell {
            day: 0,
            date_key: String::new(),
            has_bookings: false,
            kind: DayCellKind::PaddingBefore,
        });
    }

    for day in 1..=days_in_month(month, year) {
        let key = date_key(year, month, day);
        let has_bookings = bookings.iter().any(|booking| booking.date == key);
        days.push(DayCell {
            day,
            date_key: key,
            has_bookings,
            kind: DayCellKind::MonthDay,
        });
    }

    MonthGrid {
        month,
        year,
        first_day_of_week: first_day,
        days,
    }
}

/// The month before the given one
pub fn previous_month(month: u32, year: u32) -> (u32, u32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// The month after the given one
pub fn next_month(month: u32, year: u32) -> (u32, u32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Normalize a forward month offset across year boundaries (months are 1-based)
pub fn month_offset(month: u32, year: u32, offset: u32) -> (u32, u32) {
    let index = (month - 1) + offset;
    (index % 12 + 1, year + index / 12)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid",
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Format a YYYY-MM-DD key for the day modal header, e.g.
/// "Thursday, May 15, 2025". Falls back to the raw key if it doesn't parse.
pub fn format_long_date(key: &str) -> String {
    match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}, {} {}, {}",
            weekday_name(date.weekday()),
            month_name(date.month()),
            date.day(),
            date.year()
        ),
        Err(_) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookingStatus;

    fn test_booking(id: u32, date: &str) -> HallBooking {
        HallBooking {
            id,
            hall_name: "Grand Ballroom".to_string(),
            date: date.to_string(),
            event_type: "Wedding".to_string(),
            guests: 100,
            status: BookingStatus::Confirmed,
            time_slots: Vec::new(),
        }
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024)); // Divisible by 4
        assert!(!is_leap_year(2025)); // Regular year
        assert!(!is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(is_leap_year(2000)); // Divisible by 400
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2025), 31);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(12, 2025), 31);
    }

    #[test]
    fn test_first_day_of_month() {
        // May 2025 starts on a Thursday
        assert_eq!(first_day_of_month(5, 2025), 4);
        // June 2025 starts on a Sunday
        assert_eq!(first_day_of_month(6, 2025), 0);
        // February 2024 starts on a Thursday
        assert_eq!(first_day_of_month(2, 2024), 4);
    }

    #[test]
    fn test_date_key_zero_pads() {
        assert_eq!(date_key(2025, 5, 3), "2025-05-03");
        assert_eq!(date_key(2025, 11, 28), "2025-11-28");
    }

    #[test]
    fn test_grid_shape_for_every_month() {
        for year in [2024u32, 2025] {
            for month in 1..=12u32 {
                let grid = build_month_grid(month, year, &[]);

                let padding = grid
                    .days
                    .iter()
                    .filter(|cell| cell.kind == DayCellKind::PaddingBefore)
                    .count();
                let month_days = grid
                    .days
                    .iter()
                    .filter(|cell| cell.kind == DayCellKind::MonthDay)
                    .count();

                assert_eq!(grid.month, month);
                assert_eq!(grid.year, year);
                assert_eq!(grid.first_day_of_week, first_day_of_month(month, year));
                assert_eq!(padding as u32, first_day_of_month(month, year));
                assert_eq!(month_days as u32, days_in_month(month, year));
                // Padding always comes first
                assert!(grid
                    .days
                    .iter()
                    .take(padding)
                    .all(|cell| cell.kind == DayCellKind::PaddingBefore));
            }
        }
    }

    #[test]
    fn test_day_flagged_iff_booking_date_matches() {
        let bookings = vec![
            test_booking(1, "2025-05-15"),
            test_booking(2, "2025-05-15"),
            test_booking(3, "2025-06-05"),
        ];

        let grid = build_month_grid(5, 2025, &bookings);
        for cell in grid.days.iter().filter(|c| c.kind == DayCellKind::MonthDay) {
            let expected = bookings.iter().any(|b| b.date == cell.date_key);
            assert_eq!(cell.has_bookings, expected, "day {}", cell.day);
        }

        // The June booking must not leak into May
        let may_15 = grid.days.iter().find(|c| c.day == 15).unwrap();
        assert!(may_15.has_bookings);
        let may_5 = grid.days.iter().find(|c| c.day == 5).unwrap();
        assert!(!may_5.has_bookings);
    }

    #[test]
    fn test_bookings_on_keeps_dataset_order() {
        let bookings = vec![
            test_booking(3, "2025-05-15"),
            test_booking(1, "2025-05-20"),
            test_booking(2, "2025-05-15"),
        ];

        let on_15th: Vec<u32> = bookings_on(&bookings, "2025-05-15")
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(on_15th, vec![3, 2]);
        assert!(bookings_on(&bookings, "2025-05-16").is_empty());
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        assert_eq!(previous_month(6, 2025), (5, 2025));
        assert_eq!(previous_month(1, 2025), (12, 2024));
        assert_eq!(next_month(6, 2025), (7, 2025));
        assert_eq!(next_month(12, 2025), (1, 2026));
    }

    #[test]
    fn test_month_offset_normalizes() {
        assert_eq!(month_offset(5, 2025, 0), (5, 2025));
        assert_eq!(month_offset(5, 2025, 2), (7, 2025));
        assert_eq!(month_offset(11, 2025, 2), (1, 2026));
        assert_eq!(month_offset(12, 2025, 1), (1, 2026));
        assert_eq!(month_offset(12, 2025, 13), (1, 2027));
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2025-05-15"), "Thursday, May 15, 2025");
        assert_eq!(format_long_date("2025-07-04"), "Friday, July 4, 2025");
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
    }
}
