//! TUI state - owns the catalog, the core UI state and the computed
//! navigation/render models.

use chilli_common::catalog::{MenuItem, UiState};
use chilli_common::config::{Config, Theme};
use chilli_common::filter::compute_visible;
use chilli_common::nav::{build_nav, NavModel};
use chilli_common::view_model::{build_view_model, RenderTree};
use tracing::warn;

pub struct AppState {
    items: Vec<MenuItem>,
    pub ui: UiState,
    pub nav: NavModel,
    pub tree: RenderTree,
    pub config: Config,
    /// Raw search box contents; `ui.search_query` holds the trimmed form.
    pub search_input: String,
    pub scroll_offset: usize,
    /// Section anchor to bring into view on the next draw, set on
    /// category activation. Ignored when the section is absent.
    pub pending_anchor: Option<String>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(items: Vec<MenuItem>, config: Config) -> Self {
        let mut state = Self {
            items,
            ui: UiState::default(),
            nav: NavModel::default(),
            tree: RenderTree::default(),
            config,
            search_input: String::new(),
            scroll_offset: 0,
            pending_anchor: None,
            show_help: false,
        };
        state.recompute();
        state
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Full recomputation from current state + catalog. Idempotent and
    /// total; every event handler ends here, so no render can observe a
    /// half-updated model.
    pub fn recompute(&mut self) {
        self.nav = build_nav(&self.items, &mut self.ui);
        let grouping = compute_visible(&self.items, &self.ui);
        self.tree = build_view_model(&grouping, &self.ui);
    }

    /// Category activation: step to the previous/next nav button,
    /// wrapping at the ends.
    pub fn step_category(&mut self, delta: isize) {
        if self.nav.buttons.is_empty() {
            return;
        }
        let current = self.nav.active_index().unwrap_or(0) as isize;
        let len = self.nav.buttons.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.activate_index(next);
    }

    fn activate_index(&mut self, index: usize) {
        let (category, anchor) = {
            let button = &self.nav.buttons[index];
            (button.category.clone(), button.anchor.clone())
        };
        self.ui.activate(&category);
        self.recompute();
        self.pending_anchor = Some(anchor);
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.search_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.search_changed();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_changed();
    }

    fn search_changed(&mut self) {
        let input = self.search_input.clone();
        self.ui.set_search(&input);
        self.recompute();
        self.scroll_offset = 0;
    }

    /// Theme toggle: restyles on the next draw, persists on every
    /// toggle. A write failure keeps the session theme.
    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        if let Err(e) = self.config.save() {
            warn!("could not persist theme preference: {e}");
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: String::new(),
            price: 100.0,
            category: category.to_string(),
            veg: true,
            tag: None,
        }
    }

    fn app() -> AppState {
        AppState::new(
            vec![
                item("Paneer Tikka", "Veg Starters"),
                item("Butter Naan", "Naan Roti"),
                item("Hot & Sour Soup", "Soup"),
            ],
            Config::default(),
        )
    }

    #[test]
    fn startup_defaults_to_the_first_available_category() {
        let state = app();
        assert_eq!(state.ui.active_category, "Veg Starters");
        assert_eq!(state.nav.active_index(), Some(0));
        assert_eq!(state.tree.menu_sections.len(), 1);
    }

    #[test]
    fn stepping_wraps_around_and_requests_a_scroll() {
        let mut state = app();
        state.step_category(-1);
        assert_eq!(state.ui.active_category, "Soup");
        assert_eq!(state.pending_anchor.as_deref(), Some("section-Soup"));
        state.step_category(1);
        assert_eq!(state.ui.active_category, "Veg Starters");
    }

    #[test]
    fn search_remembers_the_pinned_category() {
        let mut state = app();
        state.step_category(1); // Naan Roti
        for c in "soup".chars() {
            state.push_search_char(c);
        }
        assert!(state.ui.search_active());
        // Search spans all categories.
        assert!(state.tree.snacks.is_some());

        state.clear_search();
        assert!(!state.ui.search_active());
        assert_eq!(state.ui.active_category, "Naan Roti");
        assert_eq!(
            state.nav.buttons[state.nav.active_index().unwrap()].category,
            "Naan Roti"
        );
    }

    #[test]
    fn search_input_trims_while_raw_text_is_kept() {
        let mut state = app();
        state.push_search_char(' ');
        state.push_search_char('s');
        assert_eq!(state.search_input, " s");
        assert_eq!(state.ui.search_query, "s");
    }
}
