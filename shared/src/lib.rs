use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod calendar;
pub mod facets;
pub mod table;

/// A hall reservation shown in the booking table and calendar views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallBooking {
    pub id: u32,
    pub hall_name: String,
    /// Booking date in YYYY-MM-DD format
    pub date: String,
    pub event_type: String,
    pub guests: u32,
    pub status: BookingStatus,
    /// Reserved time slots for this booking, empty when none were recorded
    #[serde(default)]
    pub time_slots: Vec<BookingTimeSlot>,
}

/// Confirmation state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    /// Every status, in the order the status dropdown lists them
    pub const ALL: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Pending" => Ok(BookingStatus::Pending),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct ParseStatusError(pub String);

/// One reserved stretch of a booking's day, e.g. "09:00 AM - 12:00 PM" in the Morning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingTimeSlot {
    pub time: String,
    pub period: String,
    pub details: String,
}

/// A group of still-available times offered for one period of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotGroup {
    pub period: String,
    pub times: Vec<String>,
}

/// Headline numbers for the booking page stats cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStats {
    pub upcoming_bookings: u32,
    pub current_month_revenue: u32,
    pub available_bookings: u32,
}

/// An activity-feed entry on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub category: String,
    pub status: String,
    pub title: String,
    pub message: String,
    /// Humanized timestamp, e.g. "10 minutes ago"
    pub time: String,
    pub icon: NotificationIcon,
    pub color: AccentColor,
    pub badge: Option<String>,
}

/// Which glyph a notification renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationIcon {
    Calendar,
    CreditCard,
    Users,
    Bell,
}

impl NotificationIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationIcon::Calendar => "📅",
            NotificationIcon::CreditCard => "💳",
            NotificationIcon::Users => "👥",
            NotificationIcon::Bell => "🔔",
        }
    }
}

/// Color tag carried by notifications and today's bookings.
///
/// The hex values are the fixed product palette; tags without a palette
/// entry of their own (brown, gray) fall back to the neutral colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccentColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Yellow,
    Teal,
    Pink,
    Indigo,
    Cyan,
    Brown,
    Gray,
}

impl AccentColor {
    /// Strong tone used for left borders and icon strokes
    pub fn border_hex(&self) -> &'static str {
        match self {
            AccentColor::Blue => "#3B82F6",
            AccentColor::Green => "#10B981",
            AccentColor::Purple => "#8B5CF6",
            AccentColor::Orange => "#F97316",
            AccentColor::Red => "#EF4444",
            AccentColor::Yellow => "#EAB308",
            AccentColor::Teal => "#14B8A6",
            AccentColor::Pink => "#EC4899",
            AccentColor::Indigo => "#6366F1",
            AccentColor::Cyan => "#06B6D4",
            AccentColor::Brown | AccentColor::Gray => "#6B7280",
        }
    }

    /// Soft tone used behind icons and status pills
    pub fn background_hex(&self) -> &'static str {
        match self {
            AccentColor::Blue => "#DBEAFE",
            AccentColor::Green => "#D1FAE5",
            AccentColor::Purple => "#EDE9FE",
            AccentColor::Orange => "#FED7AA",
            AccentColor::Red => "#FEE2E2",
            AccentColor::Yellow => "#FEF3C7",
            AccentColor::Teal => "#CCFBF1",
            AccentColor::Pink => "#FCE7F3",
            AccentColor::Indigo => "#E0E7FF",
            AccentColor::Cyan => "#CFFAFE",
            AccentColor::Brown | AccentColor::Gray => "#F3F4F6",
        }
    }

    /// Text tone paired with `background_hex`
    pub fn text_hex(&self) -> &'static str {
        self.border_hex()
    }
}

/// One of today's service appointments listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayBooking {
    pub name: String,
    pub service: String,
    pub time: String,
    pub duration: String,
    pub status: BookingStatus,
    pub color: AccentColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label_roundtrip() {
        for status in BookingStatus::ALL {
            assert_eq!(status.label().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = "Cancelled".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("Cancelled".to_string()));

        // Parsing is exact; lowercase form values are not statuses
        assert!("confirmed".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_accent_color_fallback() {
        assert_eq!(AccentColor::Brown.border_hex(), AccentColor::Gray.border_hex());
        assert_eq!(AccentColor::Brown.background_hex(), "#F3F4F6");
        assert_eq!(AccentColor::Teal.text_hex(), "#14B8A6");
    }

    #[test]
    fn test_booking_time_slots_default_when_missing() {
        let json = r#"{
            "id": 99,
            "hall_name": "Grand Ballroom",
            "date": "2025-05-15",
            "event_type": "Wedding",
            "guests": 250,
            "status": "Confirmed"
        }"#;

        let booking: HallBooking = serde_json::from_str(json).unwrap();
        assert!(booking.time_slots.is_empty());
    }
}
