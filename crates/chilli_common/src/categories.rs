//! Centralized category taxonomy for the Green Chilli menu
//!
//! This module provides the canonical category lists, their grouping and
//! display properties. All UI code should reference this module to ensure
//! consistency.

/// Top-level taxonomy partition. Every known category belongs to exactly
/// one group; the two lists below are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Menu,
    Snacks,
}

impl Group {
    pub fn title(&self) -> &'static str {
        match self {
            Group::Menu => "Menu",
            Group::Snacks => "Snacks",
        }
    }

    /// Glyph shown on the group header block (Snacks only today, but the
    /// lookup is uniform).
    pub fn icon(&self) -> &'static str {
        match self {
            Group::Menu => "🍛",
            Group::Snacks => "🍟",
        }
    }
}

/// Categories of the main "Menu" group, in display order.
pub fn menu_category_order() -> &'static [&'static str] {
    &[
        "Starter Indian",
        "Veg Starters",
        "Non Veg Starters",
        "Kabab Veg",
        "Kabab Non Veg",
        "Main Course: Paneer Special",
        "Main Course: Mushroom & Cashew",
        "Main Course: Vegetable Delights",
        "Main Course: Indian Non-Veg",
        "Mutton",
        "Chinese Rice",
        "Indian Rice",
        "Naan Roti",
        "Salad/Papad",
        "Drinks",
    ]
}

/// Categories of the "Snacks" group, in display order.
pub fn snacks_category_order() -> &'static [&'static str] {
    &["Soup", "Chowmein", "Rolls"]
}

/// Ordered category list for one group.
pub fn category_order(group: Group) -> &'static [&'static str] {
    match group {
        Group::Menu => menu_category_order(),
        Group::Snacks => snacks_category_order(),
    }
}

/// All known categories, "Menu" group first, then "Snacks".
pub fn all_categories() -> impl Iterator<Item = &'static str> {
    menu_category_order()
        .iter()
        .chain(snacks_category_order())
        .copied()
}

/// Which group a category belongs to. `None` for categories not in the
/// taxonomy; those are excluded from navigation and rendered best-effort
/// after the known sections.
pub fn group_of(category: &str) -> Option<Group> {
    if menu_category_order().contains(&category) {
        Some(Group::Menu)
    } else if snacks_category_order().contains(&category) {
        Some(Group::Snacks)
    } else {
        None
    }
}

/// Position of a category within its group's display order.
pub fn position_in_group(category: &str) -> Option<usize> {
    let group = group_of(category)?;
    category_order(group).iter().position(|c| *c == category)
}

/// Get the icon glyph for a category.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Starter Indian" => "🧆",
        "Veg Starters" => "🥦",
        "Non Veg Starters" => "🍗",
        "Kabab Veg" | "Kabab Non Veg" => "🍢",
        "Salad/Papad" => "🥗",
        "Main Course: Paneer Special" => "🧀",
        "Main Course: Mushroom & Cashew" => "🍄",
        "Main Course: Vegetable Delights" => "🥦",
        "Main Course: Indian Non-Veg" => "🍗",
        "Mutton" => "🥩",
        "Chinese Rice" => "🍚",
        "Indian Rice" => "🍛",
        "Naan Roti" => "🫓",
        "Drinks" => "🥤",
        "Soup" => "🍲",
        "Chowmein" => "🍜",
        "Rolls" => "🌯",
        _ => "🍽️",
    }
}

/// Stable identifier for a category section, used as a scroll target by
/// the navigation. Whitespace and '&' collapse to '-'.
pub fn section_anchor(category: &str) -> String {
    let slug: String = category
        .chars()
        .map(|c| if c.is_whitespace() || c == '&' { '-' } else { c })
        .collect();
    format!("section-{slug}")
}

/// Promotional label from the closed vocabulary. Anything outside this set
/// renders as plain text with no distinguishing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bestseller,
    Spicy,
    MustTry,
    ChefsPick,
    Seasonal,
    Signature,
}

impl Tag {
    /// Exact-match lookup; unrecognized labels are not an error.
    pub fn parse(label: &str) -> Option<Tag> {
        match label {
            "Bestseller" => Some(Tag::Bestseller),
            "Spicy" => Some(Tag::Spicy),
            "Must Try" => Some(Tag::MustTry),
            "Chef's Pick" => Some(Tag::ChefsPick),
            "Seasonal" => Some(Tag::Seasonal),
            "Signature" => Some(Tag::Signature),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tag::Bestseller => "Bestseller",
            Tag::Spicy => "Spicy",
            Tag::MustTry => "Must Try",
            Tag::ChefsPick => "Chef's Pick",
            Tag::Seasonal => "Seasonal",
            Tag::Signature => "Signature",
        }
    }

    /// Presentation style key for this tag.
    pub fn style_key(self) -> &'static str {
        match self {
            Tag::Bestseller => "tag-bestseller",
            Tag::Spicy => "tag-spicy",
            Tag::MustTry => "tag-must-try",
            Tag::ChefsPick => "tag-chefs-pick",
            Tag::Seasonal => "tag-seasonal",
            Tag::Signature => "tag-signature",
        }
    }
}
