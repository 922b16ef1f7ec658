use crate::data;
use shared::calendar;
use shared::{BookingStatus, TimeSlotGroup};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotModalProps {
    /// YYYY-MM-DD key of the clicked day
    pub date_key: String,
    pub on_close: Callback<()>,
}

fn status_pill(status: BookingStatus) -> Html {
    let class = match status {
        BookingStatus::Confirmed => "status-pill confirmed",
        BookingStatus::Pending => "status-pill pending",
    };
    html! { <span class={class}>{status.label()}</span> }
}

fn slot_group_buttons(group: &TimeSlotGroup) -> Html {
    html! {
        <div class="slot-group">
            <h5 class="slot-group-period">{&group.period}</h5>
            <div class="slot-times">
                {for group.times.iter().map(|time| {
                    html! { <button type="button" class="slot-time-btn">{time}</button> }
                })}
            </div>
        </div>
    }
}

/// Day detail overlay: existing bookings for the date (if any) with their
/// reserved slots, followed by the still-available slot presets.
#[function_component(TimeSlotModal)]
pub fn time_slot_modal(props: &TimeSlotModalProps) -> Html {
    let existing = calendar::bookings_on(data::hall_bookings(), &props.date_key);
    let has_bookings = !existing.is_empty();
    let slot_groups = data::available_time_slots(has_bookings);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal time-slot-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3>{calendar::format_long_date(&props.date_key)}</h3>
                    <button class="modal-close" onclick={on_close_click.clone()}>{"✕"}</button>
                </div>

                {if has_bookings {
                    html! {
                        <div class="modal-body">
                            <div class="existing-bookings">
                                <h4 class="modal-section-title">{"Existing Bookings"}</h4>
                                {for existing.iter().map(|booking| {
                                    html! {
                                        <div class="existing-booking-card">
                                            <div class="existing-booking-head">
                                                <h5>{&booking.hall_name}</h5>
                                                {status_pill(booking.status)}
                                            </div>
                                            <p class="existing-booking-meta">
                                                <strong>{"Event: "}</strong>{&booking.event_type}
                                                {" • "}
                                                <strong>{"Guests: "}</strong>{booking.guests}
                                            </p>
                                            <div class="existing-booking-slots">
                                                {for booking.time_slots.iter().map(|slot| {
                                                    html! {
                                                        <div class="reserved-slot">
                                                            <div class="reserved-slot-head">
                                                                <span class="reserved-slot-time">{&slot.time}</span>
                                                                <span class="reserved-slot-period">{&slot.period}</span>
                                                            </div>
                                                            <p class="reserved-slot-details">{&slot.details}</p>
                                                        </div>
                                                    }
                                                })}
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>

                            <div class="available-slots">
                                <h4 class="modal-section-title">{"Still Available"}</h4>
                                {for slot_groups.iter().map(slot_group_buttons)}
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="modal-body">
                            <div class="day-available-banner">
                                <div class="day-available-icon">{"✅"}</div>
                                <h4>{"Day Available for Booking"}</h4>
                                <p>{"This date is completely available. Choose from the time slots below."}</p>
                            </div>
                            {for slot_groups.iter().map(slot_group_buttons)}
                        </div>
                    }
                }}

                <div class="modal-footer">
                    <button class="btn btn-secondary" onclick={on_close_click}>{"Close"}</button>
                    <button class="btn btn-primary">
                        {if has_bookings { "Book Available Slot" } else { "Book Now" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
