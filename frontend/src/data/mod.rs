pub mod bookings;
pub mod notifications;

pub use bookings::{available_time_slots, hall_bookings, todays_bookings, BOOKING_STATS};
pub use notifications::notifications;
