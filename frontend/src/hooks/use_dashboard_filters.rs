use crate::data;
use crate::services::logging::Logger;
use crate::services::text::capitalize_first;
use shared::{facets, Notification, TodayBooking};
use web_sys::MouseEvent;
use yew::prelude::*;

/// Which activity feed is in front
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivityTab {
    Notifications,
    Bookings,
}

/// Which checkbox group a selection belongs to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FacetKind {
    NotificationCategory,
    NotificationStatus,
    BookingService,
    BookingStatus,
}

impl FacetKind {
    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::NotificationCategory => "Type",
            FacetKind::NotificationStatus | FacetKind::BookingStatus => "Status",
            FacetKind::BookingService => "Service",
        }
    }
}

/// One selected facet value, shown as a removable chip
#[derive(Clone, PartialEq, Debug)]
pub struct AppliedFilter {
    pub facet: FacetKind,
    pub value: String,
}

impl AppliedFilter {
    pub fn chip_label(&self) -> String {
        match self.facet {
            FacetKind::NotificationStatus | FacetKind::BookingStatus => {
                format!("{}: {}", self.facet.label(), capitalize_first(&self.value))
            }
            _ => format!("{}: {}", self.facet.label(), self.value),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DashboardFilterState {
    pub active_tab: ActivityTab,
    pub filter_open: bool,
    pub notification_categories: Vec<String>,
    pub notification_statuses: Vec<String>,
    pub booking_services: Vec<String>,
    pub booking_statuses: Vec<String>,
    pub filtered_notifications: Vec<Notification>,
    pub filtered_bookings: Vec<TodayBooking>,
    /// Chips for the active tab's selections
    pub applied_filters: Vec<AppliedFilter>,
    pub active_filter_count: usize,
}

pub struct UseDashboardFiltersResult {
    pub state: DashboardFilterState,
    pub actions: DashboardFilterActions,
}

#[derive(Clone)]
pub struct DashboardFilterActions {
    pub set_tab: Callback<ActivityTab>,
    pub toggle_panel: Callback<MouseEvent>,
    pub close_panel: Callback<()>,
    pub toggle_facet: Callback<(FacetKind, String)>,
    pub remove_filter: Callback<AppliedFilter>,
    /// Clears every selection of the active tab
    pub clear_all: Callback<()>,
}

/// All dashboard feed filtering: the two tabs keep fully independent facet
/// selections, and the filtered lists are derived on every render.
#[hook]
pub fn use_dashboard_filters() -> UseDashboardFiltersResult {
    let active_tab = use_state(|| ActivityTab::Notifications);
    let filter_open = use_state(|| false);
    let notification_categories = use_state(Vec::<String>::new);
    let notification_statuses = use_state(Vec::<String>::new);
    let booking_services = use_state(Vec::<String>::new);
    let booking_statuses = use_state(Vec::<String>::new);

    let filtered_notifications: Vec<Notification> = facets::filter_by_facets(
        data::notifications(),
        notification_categories.as_slice(),
        |n| n.category.clone(),
        notification_statuses.as_slice(),
        |n| n.status.clone(),
    )
    .into_iter()
    .cloned()
    .collect();

    let filtered_bookings: Vec<TodayBooking> = facets::filter_by_facets(
        data::todays_bookings(),
        booking_services.as_slice(),
        |b| b.service.clone(),
        booking_statuses.as_slice(),
        |b| b.status.label().to_string(),
    )
    .into_iter()
    .cloned()
    .collect();

    let applied_filters: Vec<AppliedFilter> = match *active_tab {
        ActivityTab::Notifications => notification_categories
            .iter()
            .map(|value| AppliedFilter {
                facet: FacetKind::NotificationCategory,
                value: value.clone(),
            })
            .chain(notification_statuses.iter().map(|value| AppliedFilter {
                facet: FacetKind::NotificationStatus,
                value: value.clone(),
            }))
            .collect(),
        ActivityTab::Bookings => booking_services
            .iter()
            .map(|value| AppliedFilter {
                facet: FacetKind::BookingService,
                value: value.clone(),
            })
            .chain(booking_statuses.iter().map(|value| AppliedFilter {
                facet: FacetKind::BookingStatus,
                value: value.clone(),
            }))
            .collect(),
    };
    let active_filter_count = applied_filters.len();

    let set_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: ActivityTab| {
            Logger::debug_with_component("Dashboard", &format!("switching tab: {:?}", tab));
            active_tab.set(tab);
        })
    };

    let toggle_panel = {
        let filter_open = filter_open.clone();
        Callback::from(move |_: MouseEvent| {
            filter_open.set(!*filter_open);
        })
    };

    let close_panel = {
        let filter_open = filter_open.clone();
        Callback::from(move |_: ()| {
            filter_open.set(false);
        })
    };

    let toggle_facet = {
        let notification_categories = notification_categories.clone();
        let notification_statuses = notification_statuses.clone();
        let booking_services = booking_services.clone();
        let booking_statuses = booking_statuses.clone();
        Callback::from(move |(facet, value): (FacetKind, String)| {
            match facet {
                FacetKind::NotificationCategory => notification_categories
                    .set(facets::toggle_value(notification_categories.as_slice(), &value)),
                FacetKind::NotificationStatus => notification_statuses
                    .set(facets::toggle_value(notification_statuses.as_slice(), &value)),
                FacetKind::BookingService => booking_services
                    .set(facets::toggle_value(booking_services.as_slice(), &value)),
                FacetKind::BookingStatus => booking_statuses
                    .set(facets::toggle_value(booking_statuses.as_slice(), &value)),
            }
        })
    };

    // A chip only exists while its value is selected, so removal is a toggle
    let remove_filter = {
        let toggle_facet = toggle_facet.clone();
        Callback::from(move |filter: AppliedFilter| {
            toggle_facet.emit((filter.facet, filter.value));
        })
    };

    let clear_all = {
        let active_tab = active_tab.clone();
        let notification_categories = notification_categories.clone();
        let notification_statuses = notification_statuses.clone();
        let booking_services = booking_services.clone();
        let booking_statuses = booking_statuses.clone();
        Callback::from(move |_: ()| match *active_tab {
            ActivityTab::Notifications => {
                notification_categories.set(Vec::new());
                notification_statuses.set(Vec::new());
            }
            ActivityTab::Bookings => {
                booking_services.set(Vec::new());
                booking_statuses.set(Vec::new());
            }
        })
    };

    UseDashboardFiltersResult {
        state: DashboardFilterState {
            active_tab: *active_tab,
            filter_open: *filter_open,
            notification_categories: (*notification_categories).clone(),
            notification_statuses: (*notification_statuses).clone(),
            booking_services: (*booking_services).clone(),
            booking_statuses: (*booking_statuses).clone(),
            filtered_notifications,
            filtered_bookings,
            applied_filters,
            active_filter_count,
        },
        actions: DashboardFilterActions {
            set_tab,
            toggle_panel,
            close_panel,
            toggle_facet,
            remove_filter,
            clear_all,
        },
    }
}
