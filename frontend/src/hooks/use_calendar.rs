use shared::calendar;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub current_month: u32,
    pub current_year: u32,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

/// Month/year focus for the booking calendar with wrap-around navigation.
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    // May 2025 is the first month with seeded bookings
    let current_month = use_state(|| 5u32);
    let current_year = use_state(|| 2025u32);

    let prev_month = {
        let current_month = current_month.clone();
        let current_year = current_year.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = calendar::previous_month(*current_month, *current_year);
            current_month.set(month);
            current_year.set(year);
        })
    };

    let next_month = {
        let current_month = current_month.clone();
        let current_year = current_year.clone();
        Callback::from(move |_: MouseEvent| {
            let (month, year) = calendar::next_month(*current_month, *current_year);
            current_month.set(month);
            current_year.set(year);
        })
    };

    UseCalendarResult {
        state: CalendarState {
            current_month: *current_month,
            current_year: *current_year,
        },
        actions: UseCalendarActions {
            prev_month,
            next_month,
        },
    }
}
