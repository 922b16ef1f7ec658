pub mod booking_list;
pub mod notification_list;

use crate::components::stat_card::StatCard;
use crate::data;
use crate::hooks::use_dashboard_filters::{use_dashboard_filters, ActivityTab, FacetKind};
use crate::services::text::capitalize_first;
use booking_list::TodayBookingList;
use gloo::events::EventListener;
use notification_list::NotificationList;
use shared::facets;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

fn facet_row(
    facet: FacetKind,
    value: &str,
    display: String,
    count: usize,
    selected: bool,
    on_toggle: &Callback<(FacetKind, String)>,
) -> Html {
    let on_toggle = on_toggle.clone();
    let value = value.to_string();
    let onchange = Callback::from(move |_: Event| on_toggle.emit((facet, value.clone())));

    html! {
        <label class="filter-option">
            <input type="checkbox" checked={selected} {onchange} />
            <span class="filter-option-label">{display}</span>
            <span class="filter-option-count">{count}</span>
        </label>
    }
}

/// The dashboard: stats row plus the tabbed notifications / today's-bookings
/// feed with its multi-select filter dropdown and applied-filter chips.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let filters = use_dashboard_filters();
    let state = &filters.state;
    let actions = &filters.actions;

    let panel_ref = use_node_ref();
    let button_ref = use_node_ref();

    // Close the filter dropdown when clicking anywhere outside it
    {
        let close_panel = actions.close_panel.clone();
        let panel_ref = panel_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with(state.filter_open, move |open| {
            let mut listener = None;
            if *open {
                if let Some(window) = web_sys::window() {
                    listener = Some(EventListener::new(&window, "mousedown", move |event| {
                        if let Some(target) =
                            event.target().and_then(|t| t.dyn_into::<Element>().ok())
                        {
                            let inside_panel = panel_ref
                                .cast::<Element>()
                                .map(|el| el.contains(Some(&target)))
                                .unwrap_or(false);
                            let inside_button = button_ref
                                .cast::<Element>()
                                .map(|el| el.contains(Some(&target)))
                                .unwrap_or(false);
                            if !inside_panel && !inside_button {
                                close_panel.emit(());
                            }
                        }
                    }));
                }
            }
            move || drop(listener)
        });
    }

    let tab_button = |tab: ActivityTab, label: &str, count: usize| -> Html {
        let set_tab = actions.set_tab.clone();
        let class = if state.active_tab == tab {
            "tab-btn active"
        } else {
            "tab-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| set_tab.emit(tab));
        html! {
            <button class={class} {onclick}>
                {label}
                <span class="tab-count">{count}</span>
            </button>
        }
    };

    let filter_groups: Html = match state.active_tab {
        ActivityTab::Notifications => {
            let items = data::notifications();
            let categories = facets::unique_values(items, |n| n.category.clone());
            let category_counts = facets::count_by(items, |n| n.category.clone());
            let statuses = facets::unique_values(items, |n| n.status.clone());
            let status_counts = facets::count_by(items, |n| n.status.clone());

            html! {
                <>
                    <div class="filter-group">
                        <h4 class="filter-group-title">{"Type"}</h4>
                        {for categories.iter().map(|value| facet_row(
                            FacetKind::NotificationCategory,
                            value,
                            value.clone(),
                            facets::count_for(&category_counts, value),
                            state.notification_categories.contains(value),
                            &actions.toggle_facet,
                        ))}
                    </div>
                    <div class="filter-group">
                        <h4 class="filter-group-title">{"Status"}</h4>
                        {for statuses.iter().map(|value| facet_row(
                            FacetKind::NotificationStatus,
                            value,
                            capitalize_first(value),
                            facets::count_for(&status_counts, value),
                            state.notification_statuses.contains(value),
                            &actions.toggle_facet,
                        ))}
                    </div>
                </>
            }
        }
        ActivityTab::Bookings => {
            let items = data::todays_bookings();
            let services = facets::unique_values(items, |b| b.service.clone());
            let service_counts = facets::count_by(items, |b| b.service.clone());
            let statuses = facets::unique_values(items, |b| b.status.label().to_string());
            let status_counts = facets::count_by(items, |b| b.status.label().to_string());

            html! {
                <>
                    <div class="filter-group">
                        <h4 class="filter-group-title">{"Service"}</h4>
                        {for services.iter().map(|value| facet_row(
                            FacetKind::BookingService,
                            value,
                            value.clone(),
                            facets::count_for(&service_counts, value),
                            state.booking_services.contains(value),
                            &actions.toggle_facet,
                        ))}
                    </div>
                    <div class="filter-group">
                        <h4 class="filter-group-title">{"Status"}</h4>
                        {for statuses.iter().map(|value| facet_row(
                            FacetKind::BookingStatus,
                            value,
                            capitalize_first(value),
                            facets::count_for(&status_counts, value),
                            state.booking_statuses.contains(value),
                            &actions.toggle_facet,
                        ))}
                    </div>
                </>
            }
        }
    };

    let tab_noun = match state.active_tab {
        ActivityTab::Notifications => "Notifications",
        ActivityTab::Bookings => "Bookings",
    };

    html! {
        <div class="page dashboard-page">
            <header class="page-header">
                <h1>{"Dashboard"}</h1>
                <button class="page-header-icon">{"🔔"}</button>
            </header>

            <main class="page-main">
                <div class="stats-grid">
                    <StatCard
                        title="Up coming bookings"
                        value="12"
                        caption="+2 from yesterday"
                        icon="📅"
                    />
                    <StatCard
                        title="Pending Payments"
                        value="$ 2,350"
                        caption="3 payments awaiting"
                        icon="💳"
                    />
                    <StatCard
                        title="Total Revenue"
                        value="$ 12,234"
                        caption="+8% from last month"
                        icon="💲"
                    />
                </div>

                <div class="activity-panel">
                    <div class="tab-strip">
                        {tab_button(
                            ActivityTab::Notifications,
                            "Notifications",
                            state.filtered_notifications.len(),
                        )}
                        {tab_button(
                            ActivityTab::Bookings,
                            "Today's Bookings",
                            state.filtered_bookings.len(),
                        )}
                    </div>

                    <div class="activity-card">
                        <div class="activity-card-header">
                            <h2>{"Recent Activity"}</h2>

                            <div class="filter-anchor">
                                <button
                                    class="filter-btn"
                                    ref={button_ref.clone()}
                                    onclick={actions.toggle_panel.clone()}
                                >
                                    {"Filter"}
                                    <span class="filter-count">{state.active_filter_count}</span>
                                    <span class={if state.filter_open { "chevron open" } else { "chevron" }}>
                                        {"▾"}
                                    </span>
                                </button>

                                {if state.filter_open {
                                    let clear_all = actions.clear_all.clone();
                                    html! {
                                        <div class="filter-dropdown" ref={panel_ref.clone()}>
                                            <div class="filter-dropdown-header">
                                                <h3>{format!("Filter {}", tab_noun)}</h3>
                                                <p>{format!(
                                                    "Choose which {} to display",
                                                    tab_noun.to_lowercase()
                                                )}</p>
                                            </div>
                                            <div class="filter-dropdown-body">
                                                {filter_groups}
                                                {if state.active_filter_count > 0 {
                                                    html! {
                                                        <button
                                                            class="clear-filters-btn"
                                                            onclick={Callback::from(move |_: MouseEvent| {
                                                                clear_all.emit(())
                                                            })}
                                                        >
                                                            {"Clear All Filters"}
                                                        </button>
                                                    }
                                                } else { html! {} }}
                                            </div>
                                        </div>
                                    }
                                } else { html! {} }}
                            </div>
                        </div>

                        {if !state.applied_filters.is_empty() {
                            let clear_all = actions.clear_all.clone();
                            html! {
                                <div class="applied-filters">
                                    {for state.applied_filters.iter().map(|filter| {
                                        let remove = actions.remove_filter.clone();
                                        let filter_value = filter.clone();
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            remove.emit(filter_value.clone())
                                        });
                                        html! {
                                            <span class="filter-chip">
                                                {filter.chip_label()}
                                                <button class="filter-chip-remove" {onclick}>{"✕"}</button>
                                            </span>
                                        }
                                    })}
                                    <button
                                        class="clear-all-link"
                                        onclick={Callback::from(move |_: MouseEvent| clear_all.emit(()))}
                                    >
                                        {"Clear All"}
                                    </button>
                                </div>
                            }
                        } else { html! {} }}

                        {match state.active_tab {
                            ActivityTab::Notifications => html! {
                                <NotificationList
                                    notifications={state.filtered_notifications.clone()}
                                    total={data::notifications().len()}
                                />
                            },
                            ActivityTab::Bookings => html! {
                                <TodayBookingList
                                    bookings={state.filtered_bookings.clone()}
                                    total={data::todays_bookings().len()}
                                />
                            },
                        }}
                    </div>
                </div>
            </main>
        </div>
    }
}
