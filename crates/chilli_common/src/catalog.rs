//! Catalog data model and loader.
//!
//! The catalog file is human-authored JSON that tolerates `//` line
//! comments; the comment marker and everything after it on a line is
//! stripped before parsing. The item list is loaded once at startup and
//! never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CatalogError;

/// Sentinel for "no single category selected": every category matches.
pub const ALL_CATEGORIES: &str = "All";

/// One dish as supplied by the catalog file. Read-only to the core.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// May be absent in the data; an empty description never matches a
    /// search query.
    #[serde(default)]
    pub description: String,
    /// Rendered with exactly two decimal places.
    pub price: f64,
    pub category: String,
    /// Vegetarian indicator; false selects the non-veg marker.
    #[serde(default)]
    pub veg: bool,
    /// Optional promotional label, see [`crate::categories::Tag`].
    #[serde(default)]
    pub tag: Option<String>,
}

/// Transient UI state. Single instance, owned by the view binder (the one
/// writer) and passed by reference to the filter engine and navigation
/// builder.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// A known category name, the [`ALL_CATEGORIES`] sentinel, or empty
    /// meaning "uninitialized, default to the first available category".
    pub active_category: String,
    /// Trimmed free text; empty means no search filter. While non-empty,
    /// category filtering is suspended.
    pub search_query: String,
}

impl UiState {
    pub fn search_active(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Binder entry point: category button activation.
    pub fn activate(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    /// Binder entry point: search text change. The raw input is trimmed;
    /// `active_category` is deliberately left alone so it can be restored
    /// when the search is cleared.
    pub fn set_search(&mut self, raw: &str) {
        self.search_query = raw.trim().to_string();
    }
}

/// Load and parse the catalog file. Any failure here is fatal to the view.
pub fn load_catalog(path: &Path) -> Result<Vec<MenuItem>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&raw)?;
    info!("loaded {} menu items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse catalog text: strip line comments, then structural JSON parsing.
pub fn parse_catalog(raw: &str) -> Result<Vec<MenuItem>, CatalogError> {
    let clean = strip_line_comments(raw);
    Ok(serde_json::from_str(&clean)?)
}

/// Remove `//` line comments: the marker and everything after it on each
/// line. The catalog format keeps string values free of `//`.
fn strip_line_comments(raw: &str) -> String {
    let mut clean = String::with_capacity(raw.len());
    for line in raw.lines() {
        match line.find("//") {
            Some(pos) => clean.push_str(&line[..pos]),
            None => clean.push_str(line),
        }
        clean.push('\n');
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_with_line_comments() {
        let raw = r#"
        // Green Chilli menu data
        [
          { "name": "Paneer Tikka", "description": "Smoky cottage cheese", "price": 180, "category": "Veg Starters", "veg": true }, // classic
          { "name": "Chicken Soup", "price": 120.5, "category": "Soup", "veg": false, "tag": "Spicy" }
        ]
        "#;
        let items = parse_catalog(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Paneer Tikka");
        assert!(items[0].veg);
        assert_eq!(items[1].price, 120.5);
        assert_eq!(items[1].tag.as_deref(), Some("Spicy"));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"[{ "name": "Plain Naan", "price": 40, "category": "Naan Roti" }]"#;
        let items = parse_catalog(raw).unwrap();
        assert_eq!(items[0].description, "");
        assert!(!items[0].veg);
        assert!(items[0].tag.is_none());
    }

    #[test]
    fn malformed_data_is_a_parse_error() {
        let raw = "[ { \"name\": \"Broken\" // missing the rest";
        let err = parse_catalog(raw).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_catalog(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn search_input_is_trimmed() {
        let mut state = UiState::default();
        state.set_search("  chicken  ");
        assert_eq!(state.search_query, "chicken");
        assert!(state.search_active());
        state.set_search("   ");
        assert!(!state.search_active());
    }
}
