use crate::services::text::capitalize_first;
use shared::TodayBooking;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodayBookingListProps {
    /// Already-filtered appointments
    pub bookings: Vec<TodayBooking>,
    /// Size of the unfiltered list, for the summary line
    pub total: usize,
}

#[function_component(TodayBookingList)]
pub fn today_booking_list(props: &TodayBookingListProps) -> Html {
    html! {
        <div class="feed">
            <p class="feed-summary">
                {format!(
                    "Showing {} of {} bookings scheduled for today",
                    props.bookings.len(),
                    props.total
                )}
            </p>
            <div class="feed-scroll">
                {for props.bookings.iter().map(|booking| {
                    html! {
                        <div
                            class="feed-card"
                            style={format!("border-left: 4px solid {}", booking.color.border_hex())}
                        >
                            <div
                                class="feed-card-icon"
                                style={format!("background-color: {}", booking.color.background_hex())}
                            >
                                <span style={format!("color: {}", booking.color.text_hex())}>
                                    {"📅"}
                                </span>
                            </div>
                            <div class="feed-card-body">
                                <h3 class="feed-card-title">{&booking.name}</h3>
                                <p class="feed-card-message">{&booking.service}</p>
                                <p class="feed-card-time">
                                    {format!("{} • {}", booking.time, booking.duration)}
                                </p>
                                <span
                                    class="feed-card-status"
                                    style={format!(
                                        "background-color: {}; color: {}",
                                        booking.color.background_hex(),
                                        booking.color.text_hex()
                                    )}
                                >
                                    {capitalize_first(booking.status.label())}
                                </span>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
