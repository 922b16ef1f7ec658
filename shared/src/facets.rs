//! Independent multi-select facet filtering for the dashboard feeds.
//!
//! A facet is one checkbox group (category, status, service). Within a
//! facet the selected values act as a union; across facets selections
//! combine with AND. An empty selection leaves that facet inactive.

/// Distinct values of one facet, in first-seen dataset order
pub fn unique_values<T, F>(items: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    let mut values = Vec::new();
    for item in items {
        let value = key(item);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

/// Per-value counts over the unfiltered set, in first-seen order.
/// These feed the count pills in the filter panel; they deliberately do not
/// react to the other facet's selection.
pub fn count_by<T, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> String,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let value = key(item);
        match counts.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Count for one value in a `count_by` result, 0 when absent
pub fn count_for(counts: &[(String, usize)], value: &str) -> usize {
    counts
        .iter()
        .find(|(existing, _)| existing == value)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

/// Membership test for one facet: an empty selection matches everything
pub fn matches_facet(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// Items where both facets match (AND across facets, union within each)
pub fn filter_by_facets<'a, T, FA, FB>(
    items: &'a [T],
    selected_a: &[String],
    key_a: FA,
    selected_b: &[String],
    key_b: FB,
) -> Vec<&'a T>
where
    FA: Fn(&T) -> String,
    FB: Fn(&T) -> String,
{
    items
        .iter()
        .filter(|item| {
            matches_facet(selected_a, &key_a(item)) && matches_facet(selected_b, &key_b(item))
        })
        .collect()
}

/// Checkbox toggle: remove the value if selected, append it otherwise
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|s| s == value) {
        selected.iter().filter(|s| *s != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        category: &'static str,
        status: &'static str,
    }

    fn sample() -> Vec<Item> {
        vec![
            Item { category: "booking", status: "canceled" },
            Item { category: "booking", status: "new" },
            Item { category: "payment", status: "received" },
            Item { category: "customer", status: "new" },
            Item { category: "system", status: "info" },
            Item { category: "booking", status: "canceled" },
        ]
    }

    fn category(item: &Item) -> String {
        item.category.to_string()
    }

    fn status(item: &Item) -> String {
        item.status.to_string()
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        assert_eq!(
            unique_values(&sample(), category),
            vec!["booking", "payment", "customer", "system"]
        );
    }

    #[test]
    fn test_counts_over_unfiltered_set() {
        let counts = count_by(&sample(), category);
        assert_eq!(count_for(&counts, "booking"), 3);
        assert_eq!(count_for(&counts, "payment"), 1);
        assert_eq!(count_for(&counts, "missing"), 0);
    }

    #[test]
    fn test_empty_selection_is_inactive() {
        let items = sample();
        let filtered = filter_by_facets(&items, &[], category, &[], status);
        assert_eq!(filtered.len(), items.len());
    }

    #[test]
    fn test_union_within_facet() {
        let items = sample();
        let selected = vec!["payment".to_string(), "system".to_string()];
        let filtered = filter_by_facets(&items, &selected, category, &[], status);
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|item| item.category == "payment" || item.category == "system"));
    }

    #[test]
    fn test_and_across_facets() {
        let items = sample();
        let categories = vec!["booking".to_string(), "customer".to_string()];
        let statuses = vec!["new".to_string()];
        let filtered = filter_by_facets(&items, &categories, category, &statuses, status);

        // Union (booking ∪ customer) intersected with status == new
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|item| item.status == "new"));
    }

    #[test]
    fn test_toggle_value_adds_then_removes() {
        let selected = toggle_value(&[], "booking");
        assert_eq!(selected, vec!["booking"]);

        let selected = toggle_value(&selected, "payment");
        assert_eq!(selected, vec!["booking", "payment"]);

        let selected = toggle_value(&selected, "booking");
        assert_eq!(selected, vec!["payment"]);
    }
}
