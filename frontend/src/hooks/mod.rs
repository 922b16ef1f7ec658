pub mod use_booking_table;
pub mod use_calendar;
pub mod use_dashboard_filters;
