pub mod booking_form;
pub mod booking_table;
pub mod month_calendar;
pub mod time_slot_modal;

use crate::components::stat_card::StatCard;
use crate::data;
use crate::hooks::use_calendar::use_calendar;
use crate::services::logging::Logger;
use crate::services::text::format_thousands;
use booking_form::BookingForm;
use booking_table::BookingTable;
use month_calendar::MonthCalendar;
use shared::calendar;
use time_slot_modal::TimeSlotModal;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum BookingTab {
    Form,
    Data,
    Calendar,
}

/// The booking page: stats row plus the form / data table / calendar tabs.
/// Clicking a calendar day opens the time-slot modal for that date.
#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let active_tab = use_state(|| BookingTab::Calendar);
    let selected_date = use_state(|| Option::<String>::None);
    let calendar_view = use_calendar();

    let on_day_click = {
        let selected_date = selected_date.clone();
        Callback::from(move |key: String| {
            Logger::debug_with_component("BookingPage", &format!("day selected: {}", key));
            selected_date.set(Some(key));
        })
    };

    let close_modal = {
        let selected_date = selected_date.clone();
        Callback::from(move |_: ()| selected_date.set(None))
    };

    let tab_button = |tab: BookingTab, label: &str| -> Html {
        let active_tab = active_tab.clone();
        let class = if *active_tab == tab {
            "tab-btn active"
        } else {
            "tab-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
        html! { <button class={class} {onclick}>{label}</button> }
    };

    let stats = data::BOOKING_STATS;
    let month = calendar_view.state.current_month;
    let year = calendar_view.state.current_year;
    let visible_months: Vec<(u32, u32)> = (0..3)
        .map(|offset| calendar::month_offset(month, year, offset))
        .collect();

    html! {
        <div class="page booking-page">
            <header class="page-header">
                <h1>{"Booking"}</h1>
                <button class="page-header-icon">{"📖"}</button>
            </header>

            <main class="page-main">
                <div class="stats-grid">
                    <StatCard
                        title="Upcoming bookings"
                        value={stats.upcoming_bookings.to_string()}
                        caption="+4 from yesterday"
                        icon="🕐"
                    />
                    <StatCard
                        title="Current month revenue"
                        value={format!("$ {}", format_thousands(stats.current_month_revenue))}
                        caption="5 payments awaiting"
                        icon="💲"
                    />
                    <StatCard
                        title="Current month Available bookings"
                        value={format!("$ {}", format_thousands(stats.available_bookings))}
                        caption="+12% from last month"
                        icon="✅"
                    />
                </div>

                <div class="tab-panel">
                    <div class="tab-strip">
                        {tab_button(BookingTab::Form, "Booking Form")}
                        {tab_button(BookingTab::Data, "Booking Data")}
                        {tab_button(BookingTab::Calendar, "Calendar")}
                    </div>

                    {match *active_tab {
                        BookingTab::Form => html! { <BookingForm /> },
                        BookingTab::Data => html! { <BookingTable /> },
                        BookingTab::Calendar => html! {
                            <div class="calendar-tab">
                                <div class="calendar-tab-header">
                                    <div>
                                        <h2>{"Booking Calendar"}</h2>
                                        <p class="calendar-hint">
                                            {"Gray indicates booked days, green indicates available days"}
                                        </p>
                                    </div>
                                    <div class="calendar-nav">
                                        <button
                                            class="calendar-nav-btn"
                                            onclick={calendar_view.actions.prev_month.clone()}
                                        >
                                            {"‹"}
                                        </button>
                                        <span class="calendar-nav-label">
                                            {format!("{} {}", calendar::month_name(month), year)}
                                        </span>
                                        <button
                                            class="calendar-nav-btn"
                                            onclick={calendar_view.actions.next_month.clone()}
                                        >
                                            {"›"}
                                        </button>
                                    </div>
                                </div>

                                <div class="three-month-grid">
                                    {for visible_months.iter().map(|(m, y)| {
                                        html! {
                                            <MonthCalendar
                                                month={*m}
                                                year={*y}
                                                title={format!("{} {}", calendar::month_name(*m), y)}
                                                on_day_click={on_day_click.clone()}
                                            />
                                        }
                                    })}
                                </div>

                                <div class="calendar-legend">
                                    <div class="legend-item">
                                        <span class="legend-swatch booked"></span>
                                        <span>{"Booked"}</span>
                                    </div>
                                    <div class="legend-item">
                                        <span class="legend-swatch available"></span>
                                        <span>{"Available"}</span>
                                    </div>
                                    <div class="legend-item">
                                        <span class="legend-dots">
                                            <span class="booking-dot"></span>
                                            <span class="booking-dot"></span>
                                            <span class="booking-dot"></span>
                                        </span>
                                        <span>{"Has bookings"}</span>
                                    </div>
                                </div>
                            </div>
                        },
                    }}
                </div>
            </main>

            {if let Some(date_key) = (*selected_date).clone() {
                html! { <TimeSlotModal {date_key} on_close={close_modal} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
