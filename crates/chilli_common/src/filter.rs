//! Filter engine: turns the flat item list plus UI state into the visible
//! item set, grouped by category.

use std::collections::HashMap;

use crate::catalog::{MenuItem, UiState, ALL_CATEGORIES};

/// Visible items partitioned by category. Within each category the
/// original list order is preserved; `order` records categories by first
/// appearance so items outside the taxonomy stay renderable.
#[derive(Debug, Default)]
pub struct Grouping<'a> {
    order: Vec<&'a str>,
    groups: HashMap<&'a str, Vec<&'a MenuItem>>,
}

impl<'a> Grouping<'a> {
    /// True when zero items are visible. A valid terminal state that
    /// triggers the empty-results display, not an error.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&[&'a MenuItem]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.groups.contains_key(category)
    }

    /// Categories in order of first appearance in the input list.
    pub fn categories(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    pub fn total_items(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    fn push(&mut self, item: &'a MenuItem) {
        let category = item.category.as_str();
        if !self.groups.contains_key(category) {
            self.order.push(category);
        }
        self.groups.entry(category).or_default().push(item);
    }
}

/// Compute the visible item set for the current state.
///
/// An item is visible iff it matches the search text AND the category
/// restriction. A non-empty search query suspends the category
/// restriction entirely (search spans all categories); with no query,
/// `active_category` restricts to one category unless it is the "All"
/// sentinel.
pub fn compute_visible<'a>(items: &'a [MenuItem], state: &UiState) -> Grouping<'a> {
    let query = state.search_query.to_lowercase();
    let mut grouping = Grouping::default();

    for item in items {
        let text_match = query.is_empty()
            || item.name.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query);

        let category_match = !query.is_empty()
            || state.active_category == ALL_CATEGORIES
            || item.category == state.active_category;

        if text_match && category_match {
            grouping.push(item);
        }
    }

    grouping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, description: &str, category: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price: 100.0,
            category: category.to_string(),
            veg: true,
            tag: None,
        }
    }

    fn state(active: &str, query: &str) -> UiState {
        UiState {
            active_category: active.to_string(),
            search_query: query.to_string(),
        }
    }

    #[test]
    fn all_and_empty_query_is_identity() {
        let items = vec![
            item("Veg Manchurian", "Crispy balls", "Veg Starters"),
            item("Hot & Sour", "Classic soup", "Soup"),
            item("Gobi 65", "Spiced cauliflower", "Veg Starters"),
        ];
        let grouping = compute_visible(&items, &state(ALL_CATEGORIES, ""));
        assert_eq!(grouping.total_items(), 3);
        let starters = grouping.get("Veg Starters").unwrap();
        // Original relative order preserved within the category.
        assert_eq!(starters[0].name, "Veg Manchurian");
        assert_eq!(starters[1].name, "Gobi 65");
        let order: Vec<_> = grouping.categories().collect();
        assert_eq!(order, vec!["Veg Starters", "Soup"]);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let items = vec![
            item("Chicken Soup", "", "Soup"),
            item("Veg Roll", "served with chicken-free mayo", "Rolls"),
            item("Paneer Tikka", "Smoky cottage cheese", "Veg Starters"),
        ];
        let grouping = compute_visible(&items, &state(ALL_CATEGORIES, "CHICKEN"));
        assert_eq!(grouping.total_items(), 2);
        assert!(grouping.contains("Soup"));
        assert!(grouping.contains("Rolls"));
        assert!(!grouping.contains("Veg Starters"));
    }

    #[test]
    fn search_suspends_category_restriction() {
        let items = vec![
            item("Paneer Tikka", "", "Veg Starters"),
            item("Chicken Soup", "", "Soup"),
        ];
        let grouping = compute_visible(&items, &state("Veg Starters", "chicken"));
        assert_eq!(grouping.total_items(), 1);
        assert!(grouping.contains("Soup"));
    }

    #[test]
    fn active_category_restricts_when_search_is_empty() {
        let items = vec![
            item("Paneer Tikka", "", "Veg Starters"),
            item("Chicken Soup", "", "Soup"),
        ];
        let grouping = compute_visible(&items, &state("Soup", ""));
        assert_eq!(grouping.total_items(), 1);
        assert!(grouping.contains("Soup"));
        assert!(!grouping.contains("Veg Starters"));
    }

    #[test]
    fn empty_description_never_matches() {
        let items = vec![item("Plain Naan", "", "Naan Roti")];
        let grouping = compute_visible(&items, &state(ALL_CATEGORIES, "butter"));
        assert!(grouping.is_empty());
    }

    #[test]
    fn no_matches_yields_the_empty_terminal_state() {
        let items = vec![item("Paneer Tikka", "", "Veg Starters")];
        let grouping = compute_visible(&items, &state(ALL_CATEGORIES, "zzz"));
        assert!(grouping.is_empty());
        assert_eq!(grouping.total_items(), 0);
        assert_eq!(grouping.categories().count(), 0);
    }
}
