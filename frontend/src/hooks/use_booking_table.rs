use crate::data;
use crate::services::logging::Logger;
use shared::table::{self, SortConfig, SortKey, StatusFilter, TablePage, TableQuery};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct BookingTableState {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortConfig>,
    /// Current page of filtered/sorted rows, recomputed every render
    pub page: TablePage,
}

pub struct UseBookingTableResult {
    pub state: BookingTableState,
    pub actions: BookingTableActions,
}

#[derive(Clone)]
pub struct BookingTableActions {
    pub set_search: Callback<String>,
    pub set_status: Callback<StatusFilter>,
    pub request_sort: Callback<SortKey>,
    pub go_to_page: Callback<usize>,
    pub previous_page: Callback<MouseEvent>,
    pub next_page: Callback<MouseEvent>,
}

/// Search/filter/sort/pagination state for the booking data table.
/// Any filter change resets the view to page 1.
#[hook]
pub fn use_booking_table(page_size: usize) -> UseBookingTableResult {
    let search = use_state(String::new);
    let status = use_state(|| StatusFilter::All);
    let sort = use_state(|| Option::<SortConfig>::None);
    let current_page = use_state(|| 1usize);

    let page = table::query_bookings(
        data::hall_bookings(),
        &TableQuery {
            search: (*search).clone(),
            status: *status,
            sort: *sort,
            page: *current_page,
            page_size,
        },
    );

    let set_search = {
        let search = search.clone();
        let current_page = current_page.clone();
        Callback::from(move |term: String| {
            search.set(term);
            current_page.set(1);
        })
    };

    let set_status = {
        let status = status.clone();
        let current_page = current_page.clone();
        Callback::from(move |filter: StatusFilter| {
            Logger::debug_with_component("BookingTable", &format!("status filter: {:?}", filter));
            status.set(filter);
            current_page.set(1);
        })
    };

    let request_sort = {
        let sort = sort.clone();
        let current_page = current_page.clone();
        Callback::from(move |key: SortKey| {
            let next = table::toggle_sort(*sort, key);
            Logger::debug_with_component("BookingTable", &format!("sort: {:?}", next));
            sort.set(Some(next));
            current_page.set(1);
        })
    };

    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            current_page.set(page);
        })
    };

    let previous_page = {
        let current_page = current_page.clone();
        Callback::from(move |_: MouseEvent| {
            current_page.set((*current_page).saturating_sub(1).max(1));
        })
    };

    let next_page = {
        let current_page = current_page.clone();
        let total_pages = page.total_pages;
        Callback::from(move |_: MouseEvent| {
            current_page.set((*current_page + 1).min(total_pages.max(1)));
        })
    };

    UseBookingTableResult {
        state: BookingTableState {
            search: (*search).clone(),
            status: *status,
            sort: *sort,
            page,
        },
        actions: BookingTableActions {
            set_search,
            set_status,
            request_sort,
            go_to_page,
            previous_page,
            next_page,
        },
    }
}
