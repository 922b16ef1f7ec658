use crate::hooks::use_booking_table::use_booking_table;
use shared::table::{self, PageItem, SortDirection, SortKey, StatusFilter};
use shared::BookingStatus;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const PAGE_SIZE: usize = 5;

/// The searchable, sortable, paginated booking data table.
#[function_component(BookingTable)]
pub fn booking_table() -> Html {
    let table = use_booking_table(PAGE_SIZE);
    let state = &table.state;
    let actions = &table.actions;

    let on_search_input = {
        let set_search = actions.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let on_status_change = {
        let set_status = actions.set_status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let filter = match select.value().parse::<BookingStatus>() {
                Ok(status) => StatusFilter::Only(status),
                Err(_) => StatusFilter::All,
            };
            set_status.emit(filter);
        })
    };

    let sort_indicator = |key: SortKey| -> Html {
        match state.sort {
            Some(active) if active.key == key => {
                let arrow = match active.direction {
                    SortDirection::Ascending => "↑",
                    SortDirection::Descending => "↓",
                };
                html! { <span class="sort-indicator">{arrow}</span> }
            }
            _ => html! {},
        }
    };

    let sortable_header = |key: SortKey, label: &str| -> Html {
        let request_sort = actions.request_sort.clone();
        let onclick = Callback::from(move |_: MouseEvent| request_sort.emit(key));
        html! {
            <th class="sortable" {onclick}>
                {label}
                {sort_indicator(key)}
            </th>
        }
    };

    let page = &state.page;
    let current = page.page;
    let total_pages = page.total_pages;

    let page_buttons = table::page_items(current, total_pages)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(number) => {
                let go_to_page = actions.go_to_page.clone();
                let class = if number == current {
                    "page-btn active"
                } else {
                    "page-btn"
                };
                let onclick = Callback::from(move |_: MouseEvent| go_to_page.emit(number));
                html! { <button class={class} {onclick}>{number}</button> }
            }
            PageItem::Ellipsis => html! { <span class="page-ellipsis">{"..."}</span> },
        })
        .collect::<Vec<Html>>();

    html! {
        <div class="booking-table-section">
            <div class="booking-table-toolbar">
                <div>
                    <h3>{"Booking Data"}</h3>
                    <p class="toolbar-hint">{"Manage all your bookings in one place"}</p>
                </div>
                <div class="toolbar-controls">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search bookings..."
                        value={state.search.clone()}
                        oninput={on_search_input}
                    />
                    <select class="status-select" onchange={on_status_change}>
                        <option value="All" selected={state.status == StatusFilter::All}>
                            {"All Status"}
                        </option>
                        {for BookingStatus::ALL.iter().map(|status| {
                            let selected = state.status == StatusFilter::Only(*status);
                            html! {
                                <option value={status.label()} selected={selected}>
                                    {status.label()}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </div>

            <div class="table-container">
                <table class="booking-table">
                    <thead>
                        <tr>
                            {sortable_header(SortKey::HallName, "Hall Name")}
                            {sortable_header(SortKey::Date, "Date")}
                            {sortable_header(SortKey::EventType, "Event Type")}
                            {sortable_header(SortKey::Guests, "Guests")}
                            {sortable_header(SortKey::Status, "Status")}
                            <th class="actions-col">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for page.rows.iter().map(|booking| {
                            let pill_class = match booking.status {
                                BookingStatus::Confirmed => "status-pill confirmed",
                                BookingStatus::Pending => "status-pill pending",
                            };
                            html! {
                                <tr key={booking.id.to_string()}>
                                    <td class="hall-name">{&booking.hall_name}</td>
                                    <td>{&booking.date}</td>
                                    <td>{&booking.event_type}</td>
                                    <td>{booking.guests}</td>
                                    <td><span class={pill_class}>{booking.status.label()}</span></td>
                                    <td class="actions-col">
                                        <button class="btn btn-small">{"View"}</button>
                                        <button class="btn btn-small">{"Edit"}</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>

                {if page.rows.is_empty() {
                    html! {
                        <div class="table-empty">
                            <p>{"No bookings found matching your criteria"}</p>
                        </div>
                    }
                } else { html! {} }}
            </div>

            <div class="pagination-bar">
                <p class="pagination-summary">
                    {format!(
                        "Showing {} to {} of {} results",
                        page.first_row, page.last_row, page.total_rows
                    )}
                </p>
                <nav class="pagination-controls">
                    <button
                        class="page-btn"
                        onclick={actions.previous_page.clone()}
                        disabled={current == 1 || total_pages == 0}
                    >
                        {"Previous"}
                    </button>
                    {for page_buttons.into_iter()}
                    <button
                        class="page-btn"
                        onclick={actions.next_page.clone()}
                        disabled={current == total_pages || total_pages == 0}
                    >
                        {"Next"}
                    </button>
                </nav>
            </div>
        </div>
    }
}
