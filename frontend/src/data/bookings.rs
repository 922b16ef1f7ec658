//! Static hall-booking datasets backing the booking page and the
//! today's-bookings dashboard tab. Nothing here is ever mutated.

use once_cell::sync::Lazy;
use shared::{
    AccentColor, BookingStats, BookingStatus, BookingTimeSlot, HallBooking, TimeSlotGroup,
    TodayBooking,
};

/// Headline numbers for the booking page stats cards
pub const BOOKING_STATS: BookingStats = BookingStats {
    upcoming_bookings: 18,
    current_month_revenue: 3450,
    available_bookings: 15234,
};

fn booking(
    id: u32,
    hall_name: &str,
    date: &str,
    event_type: &str,
    guests: u32,
    status: BookingStatus,
    time_slots: &[(&str, &str, &str)],
) -> HallBooking {
    HallBooking {
        id,
        hall_name: hall_name.to_string(),
        date: date.to_string(),
        event_type: event_type.to_string(),
        guests,
        status,
        time_slots: time_slots
            .iter()
            .map(|(time, period, details)| BookingTimeSlot {
                time: time.to_string(),
                period: period.to_string(),
                details: details.to_string(),
            })
            .collect(),
    }
}

static HALL_BOOKINGS: Lazy<Vec<HallBooking>> = Lazy::new(|| {
    use BookingStatus::{Confirmed, Pending};

    vec![
        // May 2025 bookings
        booking(1, "Grand Ballroom", "2025-05-15", "Wedding", 250, Confirmed, &[
            ("09:00 AM - 12:00 PM", "Morning", "Wedding ceremony setup and ceremony"),
            ("06:00 PM - 11:00 PM", "Evening", "Reception party with dinner and dancing"),
        ]),
        booking(2, "Garden Pavilion", "2025-05-20", "Engagement", 120, Pending, &[
            ("02:00 PM - 05:00 PM", "Afternoon", "Engagement ceremony with refreshments"),
        ]),
        booking(3, "Royal Hall", "2025-05-25", "Anniversary", 80, Confirmed, &[
            ("07:00 PM - 11:00 PM", "Night", "50th anniversary celebration with family dinner"),
        ]),
        booking(4, "Grand Ballroom", "2025-05-28", "Reception", 300, Confirmed, &[
            ("04:00 PM - 07:00 PM", "Afternoon", "Wedding reception with cocktail hour"),
        ]),
        // June 2025 bookings
        booking(5, "Ocean View", "2025-06-05", "Wedding", 200, Pending, &[
            ("10:00 AM - 01:00 PM", "Morning", "Beach wedding ceremony with brunch"),
            ("06:00 PM - 12:00 AM", "Night", "Reception dinner with live music"),
        ]),
        booking(6, "Crystal Palace", "2025-06-12", "Corporate Event", 150, Confirmed, &[
            ("09:00 AM - 05:00 PM", "Full Day", "Annual company conference with lunch"),
        ]),
        booking(7, "Garden Pavilion", "2025-06-18", "Birthday", 90, Confirmed, &[
            ("03:00 PM - 08:00 PM", "Afternoon", "50th birthday celebration with dinner"),
        ]),
        // July 2025 bookings
        booking(8, "Grand Ballroom", "2025-07-04", "Wedding", 280, Confirmed, &[
            ("11:00 AM - 02:00 PM", "Morning", "Independence Day wedding ceremony"),
            ("07:00 PM - 01:00 AM", "Night", "Reception with fireworks viewing"),
        ]),
        booking(9, "Royal Hall", "2025-07-10", "Engagement", 140, Confirmed, &[
            ("05:00 PM - 09:00 PM", "Evening", "Summer engagement party with outdoor setup"),
        ]),
        booking(10, "Ocean View", "2025-07-15", "Anniversary", 100, Pending, &[
            ("06:30 PM - 10:30 PM", "Evening", "25th anniversary celebration with sunset view"),
        ]),
        booking(11, "Crystal Palace", "2025-07-22", "Wedding", 220, Confirmed, &[
            ("04:00 PM - 11:00 PM", "Evening", "Summer wedding with garden ceremony"),
        ]),
        booking(12, "Garden Pavilion", "2025-07-28", "Reception", 180, Confirmed, &[
            ("12:00 PM - 04:00 PM", "Afternoon", "Post-wedding reception brunch"),
        ]),
        // August 2025 bookings
        booking(13, "Grand Ballroom", "2025-08-08", "Corporate Event", 200, Confirmed, &[
            ("08:00 AM - 06:00 PM", "Full Day", "Product launch event with presentations"),
        ]),
        booking(14, "Royal Hall", "2025-08-14", "Wedding", 160, Pending, &[
            ("03:00 PM - 09:00 PM", "Afternoon", "Intimate wedding celebration"),
        ]),
        booking(15, "Ocean View", "2025-08-20", "Birthday", 75, Confirmed, &[
            ("07:00 PM - 11:00 PM", "Night", "Milestone birthday party with live band"),
        ]),
    ]
});

pub fn hall_bookings() -> &'static [HallBooking] {
    &HALL_BOOKINGS
}

fn today(
    name: &str,
    service: &str,
    time: &str,
    duration: &str,
    status: BookingStatus,
    color: AccentColor,
) -> TodayBooking {
    TodayBooking {
        name: name.to_string(),
        service: service.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        status,
        color,
    }
}

static TODAYS_BOOKINGS: Lazy<Vec<TodayBooking>> = Lazy::new(|| {
    use AccentColor::*;
    use BookingStatus::{Confirmed, Pending};

    vec![
        today("Sarah Johnson", "Hair Cut & Styling", "9:00 AM", "1.5 hours", Confirmed, Green),
        today("Michael Brown", "Beard Trim", "11:00 AM", "30 minutes", Confirmed, Blue),
        today("Emma Wilson", "Full Service", "2:00 PM", "2 hours", Pending, Orange),
        today("David Lee", "Hair Wash & Cut", "4:30 PM", "1 hour", Confirmed, Purple),
        today("Lisa Anderson", "Color Treatment", "6:00 PM", "2.5 hours", Confirmed, Teal),
        today("John Doe", "Manicure & Pedicure", "7:30 AM", "1 hour", Pending, Red),
        today("Olivia Smith", "Facial Treatment", "10:30 AM", "1 hour", Confirmed, Green),
        today("James Miller", "Shampoo & Blowdry", "12:30 PM", "45 minutes", Confirmed, Yellow),
        today("Sophia Taylor", "Pedicure", "3:00 PM", "1 hour", Pending, Brown),
        today("Ethan Davis", "Hair Treatment", "5:00 PM", "1.5 hours", Confirmed, Blue),
    ]
});

pub fn todays_bookings() -> &'static [TodayBooking] {
    &TODAYS_BOOKINGS
}

fn slot_group(period: &str, times: &[&str]) -> TimeSlotGroup {
    TimeSlotGroup {
        period: period.to_string(),
        times: times.iter().map(|t| t.to_string()).collect(),
    }
}

/// Preset still-available slots offered in the day modal. Days that already
/// have bookings get a reduced set; free days get the full grid.
pub fn available_time_slots(has_bookings: bool) -> Vec<TimeSlotGroup> {
    if has_bookings {
        return vec![
            slot_group("Morning", &["9:00 AM", "10:00 AM"]),
            slot_group("Afternoon", &["1:00 PM", "3:00 PM"]),
            slot_group("Evening", &["8:00 PM", "9:00 PM"]),
        ];
    }

    vec![
        slot_group("Morning", &["9:00 AM", "10:00 AM", "11:00 AM"]),
        slot_group("Afternoon", &["12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM"]),
        slot_group("Evening", &["5:00 PM", "6:00 PM", "7:00 PM"]),
        slot_group("Night", &["8:00 PM", "9:00 PM", "10:00 PM"]),
    ]
}
