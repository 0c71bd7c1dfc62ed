//! Section renderer: converts a grouped filter result into the
//! hierarchical view-model (groups → sections → cards) that a
//! presentation layer binds. No terminal or widget types leak in here.

use crate::catalog::{MenuItem, UiState};
use crate::categories::{category_icon, category_order, group_of, section_anchor, Group, Tag};
use crate::filter::Grouping;

/// Per-card animation stagger step. Purely cosmetic; presentation layers
/// may ignore it.
pub const STAGGER_STEP_MS: u32 = 55;

/// Optional promotional label on a card. `style_key` is `None` for labels
/// outside the closed tag vocabulary, which render as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub label: String,
    pub style_key: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub name: String,
    pub description: String,
    /// Fixed two decimals, currency-agnostic; the symbol is presentation.
    pub price: String,
    pub veg: bool,
    pub tag: Option<TagView>,
    pub stagger_ms: u32,
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub category: String,
    pub icon: &'static str,
    /// Stable scroll-target identifier derived from the category name.
    pub anchor: String,
    pub count: usize,
    pub cards: Vec<CardView>,
}

/// Wrapper block around the Snacks sections. Only emitted when at least
/// one Snacks category has visible items.
#[derive(Debug, Clone)]
pub struct SnacksBlock {
    pub title: &'static str,
    pub icon: &'static str,
    pub sections: Vec<SectionView>,
}

/// The full declarative render tree for one recomputation.
#[derive(Debug, Clone, Default)]
pub struct RenderTree {
    /// Sections of the "Menu" group in taxonomy order, followed by any
    /// categories outside the taxonomy in first-appearance order.
    pub menu_sections: Vec<SectionView>,
    pub snacks: Option<SnacksBlock>,
    /// Zero visible items: draw the empty-state, nothing else.
    pub empty: bool,
}

/// Build the render tree for the current grouping and state.
///
/// When the search is inactive and the active category pins one taxonomy
/// group, the other group's block is suppressed entirely; an active
/// search overrides both so every text match shows regardless of group.
pub fn build_view_model(grouping: &Grouping, state: &UiState) -> RenderTree {
    if grouping.is_empty() {
        return RenderTree {
            empty: true,
            ..RenderTree::default()
        };
    }

    let search = state.search_active();
    let only_snacks_visible = !search && group_of(&state.active_category) == Some(Group::Snacks);
    let only_menu_visible = !search && group_of(&state.active_category) == Some(Group::Menu);

    let mut menu_sections = Vec::new();
    if !only_snacks_visible {
        for category in category_order(Group::Menu) {
            if let Some(items) = grouping.get(category) {
                menu_sections.push(build_section(category, items));
            }
        }
        // Categories missing from the taxonomy render last, in first
        // appearance order. They never appear in the navigation.
        for category in grouping.categories() {
            if group_of(category).is_none() {
                if let Some(items) = grouping.get(category) {
                    menu_sections.push(build_section(category, items));
                }
            }
        }
    }

    let snacks_sections: Vec<SectionView> = category_order(Group::Snacks)
        .iter()
        .filter_map(|category| grouping.get(category).map(|items| build_section(category, items)))
        .collect();

    let snacks = if !only_menu_visible && !snacks_sections.is_empty() {
        Some(SnacksBlock {
            title: Group::Snacks.title(),
            icon: Group::Snacks.icon(),
            sections: snacks_sections,
        })
    } else {
        None
    };

    RenderTree {
        menu_sections,
        snacks,
        empty: false,
    }
}

fn build_section(category: &str, items: &[&MenuItem]) -> SectionView {
    SectionView {
        category: category.to_string(),
        icon: category_icon(category),
        anchor: section_anchor(category),
        count: items.len(),
        cards: items
            .iter()
            .enumerate()
            .map(|(i, item)| build_card(item, i))
            .collect(),
    }
}

fn build_card(item: &MenuItem, index: usize) -> CardView {
    let tag = item.tag.as_ref().map(|label| TagView {
        label: label.clone(),
        style_key: Tag::parse(label).map(Tag::style_key),
    });
    CardView {
        name: item.name.clone(),
        description: item.description.clone(),
        price: format!("{:.2}", item.price),
        veg: item.veg,
        tag,
        stagger_ms: index as u32 * STAGGER_STEP_MS,
    }
}
