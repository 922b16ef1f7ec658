use shared::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationListProps {
    /// Already-filtered feed entries
    pub notifications: Vec<Notification>,
    /// Size of the unfiltered feed, for the summary line
    pub total: usize,
}

#[function_component(NotificationList)]
pub fn notification_list(props: &NotificationListProps) -> Html {
    html! {
        <div class="feed">
            <p class="feed-summary">
                {format!(
                    "Showing {} of {} notifications",
                    props.notifications.len(),
                    props.total
                )}
            </p>
            <div class="feed-scroll">
                {for props.notifications.iter().map(|notification| {
                    html! {
                        <div
                            class="feed-card"
                            style={format!("border-left: 4px solid {}", notification.color.border_hex())}
                        >
                            <div
                                class="feed-card-icon"
                                style={format!("background-color: {}", notification.color.background_hex())}
                            >
                                <span style={format!("color: {}", notification.color.text_hex())}>
                                    {notification.icon.glyph()}
                                </span>
                            </div>
                            <div class="feed-card-body">
                                <h3 class="feed-card-title">{&notification.title}</h3>
                                <p class="feed-card-message">{&notification.message}</p>
                                <p class="feed-card-time">{&notification.time}</p>
                            </div>
                            {if let Some(badge) = &notification.badge {
                                html! { <span class="feed-card-badge">{badge}</span> }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
