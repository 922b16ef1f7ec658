use crate::data;
use shared::calendar::{self, DayCellKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthCalendarProps {
    pub month: u32,
    pub year: u32,
    pub title: String,
    /// Emits the clicked day's YYYY-MM-DD key
    pub on_day_click: Callback<String>,
}

/// One month of the booking calendar: weekday header row, leading blanks,
/// then a cell per day styled booked or available. Booked days carry the
/// three-dot marker.
#[function_component(MonthCalendar)]
pub fn month_calendar(props: &MonthCalendarProps) -> Html {
    let grid = calendar::build_month_grid(props.month, props.year, data::hall_bookings());

    let mut cells = Vec::new();
    for cell in &grid.days {
        match cell.kind {
            DayCellKind::PaddingBefore => {
                cells.push(html! { <div class="calendar-day empty"></div> });
            }
            DayCellKind::MonthDay => {
                let day_class = if cell.has_bookings {
                    "calendar-day booked"
                } else {
                    "calendar-day available"
                };

                let onclick = {
                    let on_day_click = props.on_day_click.clone();
                    let key = cell.date_key.clone();
                    Callback::from(move |_: MouseEvent| on_day_click.emit(key.clone()))
                };

                cells.push(html! {
                    <div class={day_class} {onclick}>
                        <span class="day-number">{cell.day}</span>
                        {if cell.has_bookings {
                            html! {
                                <div class="booking-dots">
                                    <span class="booking-dot"></span>
                                    <span class="booking-dot"></span>
                                    <span class="booking-dot"></span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                });
            }
        }
    }

    html! {
        <div class="month-calendar">
            <h3 class="month-calendar-title">{&props.title}</h3>
            <div class="month-calendar-body">
                <div class="calendar-weekdays">
                    {for calendar::WEEKDAY_LABELS.iter().map(|label| {
                        html! { <div class="weekday">{*label}</div> }
                    })}
                </div>
                <div class="calendar-grid">
                    {for cells}
                </div>
            </div>
        </div>
    }
}
