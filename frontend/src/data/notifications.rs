//! Static notification feed for the dashboard. The duplicated cancellation
//! entries mirror the seeded product data.

use once_cell::sync::Lazy;
use shared::{AccentColor, Notification, NotificationIcon};

fn notification(
    status: &str,
    category: &str,
    title: &str,
    message: &str,
    time: &str,
    icon: NotificationIcon,
    color: AccentColor,
    badge: Option<&str>,
) -> Notification {
    Notification {
        status: status.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        icon,
        color,
        badge: badge.map(|b| b.to_string()),
    }
}

static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    use AccentColor::*;
    use NotificationIcon::*;

    vec![
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, None,
        ),
        notification(
            "new", "booking", "New Booking",
            "Sarah Johnson has made a new booking on Friday 10:00 AM",
            "1 hour ago", Calendar, Green, None,
        ),
        notification(
            "received", "payment", "Payment Received",
            "You've received a payment of $150 from Michael Brown",
            "3 hours ago", CreditCard, Yellow, Some("New"),
        ),
        notification(
            "new", "customer", "New Customer",
            "Emma Wilson has created a new account",
            "5 hours ago", Users, Blue, Some("New"),
        ),
        notification(
            "info", "system", "System Update",
            "System maintenance completed successfully",
            "1 day ago", Bell, Purple, None,
        ),
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, Some("New"),
        ),
        notification(
            "received", "payment", "Payment Received",
            "You've received a payment of $150 from Michael Brown",
            "3 hours ago", CreditCard, Yellow, Some("New"),
        ),
        notification(
            "new", "customer", "New Customer",
            "Emma Wilson has created a new account",
            "5 hours ago", Users, Blue, Some("New"),
        ),
        notification(
            "info", "system", "System Update",
            "System maintenance completed successfully",
            "1 day ago", Bell, Purple, None,
        ),
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, Some("New"),
        ),
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, Some("New"),
        ),
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, Some("New"),
        ),
        notification(
            "canceled", "booking", "Booking Cancellation",
            "John Smith has canceled their booking for tomorrow at 2:00 PM",
            "10 minutes ago", Calendar, Red, Some("New"),
        ),
    ]
});

pub fn notifications() -> &'static [Notification] {
    &NOTIFICATIONS
}
