//! Navigation builder: derives the ordered category button list from the
//! taxonomy and the loaded data.

use crate::catalog::{MenuItem, UiState, ALL_CATEGORIES};
use crate::categories::{all_categories, group_of, section_anchor, Group};

#[derive(Debug, Clone)]
pub struct NavButton {
    pub category: String,
    /// Reflects `active_category`; presentation dims every button while a
    /// search is active without touching this flag's source state.
    pub active: bool,
    /// Snacks-group buttons get distinct styling.
    pub snacks: bool,
    /// Scroll target of the matching section.
    pub anchor: String,
}

#[derive(Debug, Clone, Default)]
pub struct NavModel {
    pub buttons: Vec<NavButton>,
    /// Index of the button before which the single group separator sits;
    /// present only when the Snacks group contributed buttons.
    pub separator_before: Option<usize>,
}

impl NavModel {
    pub fn active_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.active)
    }
}

/// Build the category buttons: taxonomy order ("Menu" then "Snacks"),
/// restricted to categories present in at least one item. Categories
/// outside the taxonomy never get a button.
///
/// If no category is active yet (empty or the "All" sentinel), the first
/// available category becomes active, which is why this takes the state
/// mutably.
pub fn build_nav(items: &[MenuItem], state: &mut UiState) -> NavModel {
    let present: Vec<&'static str> = all_categories()
        .filter(|category| items.iter().any(|item| item.category == *category))
        .collect();

    if state.active_category.is_empty() || state.active_category == ALL_CATEGORIES {
        state.active_category = present.first().copied().unwrap_or_default().to_string();
    }

    let buttons: Vec<NavButton> = present
        .iter()
        .map(|category| NavButton {
            category: category.to_string(),
            active: *category == state.active_category,
            snacks: group_of(category) == Some(Group::Snacks),
            anchor: section_anchor(category),
        })
        .collect();

    let separator_before = buttons.iter().position(|b| b.snacks);

    NavModel {
        buttons,
        separator_before,
    }
}
