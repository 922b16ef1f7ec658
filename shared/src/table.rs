//! Client-side filtering, sorting, and pagination for the booking table.
//!
//! `query_bookings` is the single entry point the table hook calls: it
//! applies the free-text search, the status filter, the optional sort, and
//! slices out the requested page.

use crate::{BookingStatus, HallBooking};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column a table sort can be keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    HallName,
    Date,
    EventType,
    Guests,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one key, one direction. Ties keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Status dropdown selection: everything, or one exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    Only(BookingStatus),
}

/// Everything the table view needs to ask for one page of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortConfig>,
    /// Requested page, 1-based; clamped into range by `paginate`
    pub page: usize,
    pub page_size: usize,
}

/// One page of filtered/sorted rows plus the numbers for the results line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePage {
    pub rows: Vec<HallBooking>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    /// 1-based index of the first row on this page, 0 when the page is empty
    pub first_row: usize,
    /// 1-based index of the last row on this page, 0 when the page is empty
    pub last_row: usize,
}

/// Case-insensitive substring match across the searchable fields.
/// `term` must already be lowercased.
fn matches_search(booking: &HallBooking, term: &str) -> bool {
    booking.hall_name.to_lowercase().contains(term)
        || booking.event_type.to_lowercase().contains(term)
        || booking.date.contains(term)
        || booking.status.label().to_lowercase().contains(term)
}

/// Apply the search term and status filter, preserving input order
pub fn filter_bookings(
    bookings: &[HallBooking],
    search: &str,
    status: StatusFilter,
) -> Vec<HallBooking> {
    let term = search.trim().to_lowercase();

    bookings
        .iter()
        .filter(|booking| term.is_empty() || matches_search(booking, &term))
        .filter(|booking| match status {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => booking.status == wanted,
        })
        .cloned()
        .collect()
}

fn compare_by(a: &HallBooking, b: &HallBooking, key: SortKey) -> Ordering {
    match key {
        SortKey::HallName => a.hall_name.cmp(&b.hall_name),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::EventType => a.event_type.cmp(&b.event_type),
        SortKey::Guests => a.guests.cmp(&b.guests),
        SortKey::Status => a.status.label().cmp(b.status.label()),
    }
}

/// Stable sort by the configured key and direction
pub fn sort_bookings(rows: &mut [HallBooking], sort: SortConfig) {
    rows.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Next sort state when a column header is clicked: a new key starts
/// ascending, re-clicking the current ascending key flips to descending.
pub fn toggle_sort(current: Option<SortConfig>, key: SortKey) -> SortConfig {
    let direction = match current {
        Some(active) if active.key == key && active.direction == SortDirection::Ascending => {
            SortDirection::Descending
        }
        _ => SortDirection::Ascending,
    };
    SortConfig { key, direction }
}

/// Slice out one page, clamping the requested page to `[1, total_pages]`
/// (page 1 when there are no rows at all).
pub fn paginate(rows: Vec<HallBooking>, page: usize, page_size: usize) -> TablePage {
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_rows);
    let page_rows = if start < total_rows {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    TablePage {
        first_row: if page_rows.is_empty() { 0 } else { start + 1 },
        last_row: if page_rows.is_empty() { 0 } else { end },
        rows: page_rows,
        page,
        total_pages,
        total_rows,
    }
}

/// Filter, sort, and paginate in one pass
pub fn query_bookings(bookings: &[HallBooking], query: &TableQuery) -> TablePage {
    let mut rows = filter_bookings(bookings, &query.search, query.status);
    if let Some(sort) = query.sort {
        sort_bookings(&mut rows, sort);
    }
    paginate(rows, query.page, query.page_size)
}

/// An entry in the numbered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// The windowed page-button row: always page 1 and the last page, the
/// current page and its neighbors, with ellipses standing in for the gaps.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for page in 1..=total {
        let in_window = page + 1 >= current && page <= current + 1;
        if page == 1 || page == total || in_window {
            items.push(PageItem::Page(page));
        } else if page + 2 == current || page == current + 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: u32, hall: &str, date: &str, event: &str, guests: u32, status: BookingStatus) -> HallBooking {
        HallBooking {
            id,
            hall_name: hall.to_string(),
            date: date.to_string(),
            event_type: event.to_string(),
            guests,
            status,
            time_slots: Vec::new(),
        }
    }

    fn sample() -> Vec<HallBooking> {
        vec![
            booking(1, "Grand Ballroom", "2025-05-15", "Wedding", 250, BookingStatus::Confirmed),
            booking(2, "Garden Pavilion", "2025-05-20", "Engagement", 120, BookingStatus::Pending),
            booking(3, "Royal Hall", "2025-05-25", "Anniversary", 80, BookingStatus::Confirmed),
            booking(4, "Ocean View", "2025-06-05", "Wedding", 200, BookingStatus::Pending),
            booking(5, "Crystal Palace", "2025-06-12", "Corporate Event", 150, BookingStatus::Confirmed),
        ]
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let rows = filter_bookings(&sample(), "", StatusFilter::All);
        assert_eq!(rows.len(), 5);

        let rows = filter_bookings(&sample(), "   ", StatusFilter::All);
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let ids = |term: &str| -> Vec<u32> {
            filter_bookings(&sample(), term, StatusFilter::All)
                .iter()
                .map(|b| b.id)
                .collect()
        };

        assert_eq!(ids("GRAND"), vec![1]);
        assert_eq!(ids("wedding"), vec![1, 4]);
        assert_eq!(ids("2025-06"), vec![4, 5]);
        assert_eq!(ids("pending"), vec![2, 4]);
        assert_eq!(ids("no such hall"), Vec::<u32>::new());
    }

    #[test]
    fn test_status_filter_is_exact() {
        let rows = filter_bookings(&sample(), "", StatusFilter::Only(BookingStatus::Pending));
        assert!(rows.iter().all(|b| b.status == BookingStatus::Pending));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sort_by_guests_both_directions() {
        let mut rows = sample();
        sort_bookings(
            &mut rows,
            SortConfig { key: SortKey::Guests, direction: SortDirection::Ascending },
        );
        let guests: Vec<u32> = rows.iter().map(|b| b.guests).collect();
        assert_eq!(guests, vec![80, 120, 150, 200, 250]);

        sort_bookings(
            &mut rows,
            SortConfig { key: SortKey::Guests, direction: SortDirection::Descending },
        );
        let guests: Vec<u32> = rows.iter().map(|b| b.guests).collect();
        assert_eq!(guests, vec![250, 200, 150, 120, 80]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut rows = sample();
        sort_bookings(
            &mut rows,
            SortConfig { key: SortKey::EventType, direction: SortDirection::Ascending },
        );

        // The two weddings tie on the key and keep dataset order (1 before 4)
        let wedding_ids: Vec<u32> = rows
            .iter()
            .filter(|b| b.event_type == "Wedding")
            .map(|b| b.id)
            .collect();
        assert_eq!(wedding_ids, vec![1, 4]);
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let first = toggle_sort(None, SortKey::Date);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = toggle_sort(Some(first), SortKey::Date);
        assert_eq!(second.direction, SortDirection::Descending);

        // A third click starts over ascending
        let third = toggle_sort(Some(second), SortKey::Date);
        assert_eq!(third.direction, SortDirection::Ascending);

        // Switching keys always starts ascending
        let switched = toggle_sort(Some(first), SortKey::Guests);
        assert_eq!(switched.key, SortKey::Guests);
        assert_eq!(switched.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_paginate_slices_and_reports_indices() {
        let page = paginate(sample(), 1, 2);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_rows, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.first_row, page.last_row), (1, 2));

        let last = paginate(sample(), 3, 2);
        assert_eq!(last.rows.len(), 1);
        assert_eq!((last.first_row, last.last_row), (5, 5));
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let past_end = paginate(sample(), 99, 2);
        assert_eq!(past_end.page, 3);
        assert_eq!(past_end.rows.len(), 1);

        let below_start = paginate(sample(), 0, 2);
        assert_eq!(below_start.page, 1);

        let empty = paginate(Vec::new(), 7, 5);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.rows.is_empty());
        assert_eq!((empty.first_row, empty.last_row), (0, 0));
    }

    #[test]
    fn test_query_composes_filter_sort_page() {
        let query = TableQuery {
            search: "wedding".to_string(),
            status: StatusFilter::All,
            sort: Some(SortConfig { key: SortKey::Guests, direction: SortDirection::Ascending }),
            page: 1,
            page_size: 5,
        };

        let page = query_bookings(&sample(), &query);
        let ids: Vec<u32> = page.rows.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 1]);
        assert_eq!(page.total_rows, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_new_search_at_page_one_shows_first_page() {
        // The hook resets to page 1 whenever a filter changes; querying the
        // narrowed set at page 1 must land inside range even if the old page
        // number no longer exists.
        let query = TableQuery {
            search: "royal".to_string(),
            status: StatusFilter::All,
            sort: None,
            page: 1,
            page_size: 2,
        };
        let page = query_bookings(&sample(), &query);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_rows, 1);
    }

    #[test]
    fn test_page_items_windowing() {
        assert_eq!(
            page_items(1, 3),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );

        assert_eq!(
            page_items(5, 9),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(9),
            ]
        );

        // Near the front edge there is no leading ellipsis
        assert_eq!(
            page_items(2, 6),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Ellipsis,
                PageItem::Page(6),
            ]
        );

        assert_eq!(page_items(1, 0), Vec::<PageItem>::new());
    }
}
