//! End-to-end scenarios across loader, filter engine, navigation and
//! view-model builder, driven the way the binder drives them.

use chilli_common::catalog::{parse_catalog, MenuItem, UiState, ALL_CATEGORIES};
use chilli_common::filter::compute_visible;
use chilli_common::nav::build_nav;
use chilli_common::view_model::build_view_model;

fn sample_items() -> Vec<MenuItem> {
    parse_catalog(
        r#"
        // two-item fixture spanning both groups
        [
          { "name": "Paneer Tikka", "category": "Veg Starters", "price": 180, "veg": true },
          { "name": "Chicken Soup", "category": "Soup", "price": 120, "veg": false, "tag": "Spicy" }
        ]
        "#,
    )
    .unwrap()
}

#[test]
fn default_view_shows_both_groups_with_one_item_each() {
    let items = sample_items();
    let state = UiState {
        active_category: ALL_CATEGORIES.to_string(),
        search_query: String::new(),
    };

    let grouping = compute_visible(&items, &state);
    let tree = build_view_model(&grouping, &state);

    assert_eq!(tree.menu_sections.len(), 1);
    let starters = &tree.menu_sections[0];
    assert_eq!(starters.category, "Veg Starters");
    assert_eq!(starters.count, 1);
    assert!(starters.cards[0].veg);
    assert_eq!(starters.cards[0].price, "180.00");

    let snacks = tree.snacks.as_ref().expect("Snacks block present");
    assert_eq!(snacks.sections.len(), 1);
    let soup = &snacks.sections[0];
    assert_eq!(soup.category, "Soup");
    assert_eq!(soup.count, 1);
    let tag = soup.cards[0].tag.as_ref().expect("Spicy tag");
    assert_eq!(tag.style_key, Some("tag-spicy"));
}

#[test]
fn search_ignores_the_remembered_category() {
    let items = sample_items();
    // The binder remembers the pinned category while a search is typed.
    let mut state = UiState::default();
    state.activate("Veg Starters");
    state.set_search("chicken");

    let grouping = compute_visible(&items, &state);
    assert_eq!(grouping.total_items(), 1);
    assert!(grouping.contains("Soup"));

    // Clearing the search restores the pinned view.
    state.set_search("");
    let grouping = compute_visible(&items, &state);
    assert_eq!(grouping.total_items(), 1);
    assert!(grouping.contains("Veg Starters"));
}

#[test]
fn pinning_soup_hides_the_menu_group_entirely() {
    let items = sample_items();
    let mut state = UiState::default();
    state.activate("Soup");

    let tree = build_view_model(&compute_visible(&items, &state), &state);
    assert!(tree.menu_sections.is_empty());
    let snacks = tree.snacks.as_ref().unwrap();
    assert_eq!(snacks.sections.len(), 1);
    assert_eq!(snacks.sections[0].category, "Soup");
}

#[test]
fn hopeless_query_signals_the_empty_state() {
    let items = sample_items();
    let mut state = UiState::default();
    state.set_search("zzz");

    let grouping = compute_visible(&items, &state);
    assert!(grouping.is_empty());
    let tree = build_view_model(&grouping, &state);
    assert!(tree.empty);
}

#[test]
fn nav_and_render_agree_on_anchors() {
    let items = sample_items();
    let mut state = UiState::default();

    let nav = build_nav(&items, &mut state);
    assert_eq!(state.active_category, "Veg Starters");
    assert_eq!(nav.separator_before, Some(1));

    // Pinned to the defaulted category: its section anchor must exist in
    // the tree so activation can scroll to it.
    let tree = build_view_model(&compute_visible(&items, &state), &state);
    let active = &nav.buttons[nav.active_index().unwrap()];
    assert!(tree
        .menu_sections
        .iter()
        .any(|section| section.anchor == active.anchor));
}
