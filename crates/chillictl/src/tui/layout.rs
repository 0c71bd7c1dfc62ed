//! Layout - canonical screen grid for the TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Scroll-to-top hint appears in the status bar once the content has
/// scrolled past this many lines.
pub const SCROLL_TOP_HINT_LINES: usize = 8;

pub struct LayoutGrid {
    pub header: Rect,
    pub search: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen into the fixed rows: header, search box, category
/// bar, scrollable content, status bar.
pub fn compute_layout(size: Rect) -> LayoutGrid {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // search box (bordered)
            Constraint::Length(5), // category bar (bordered, wraps)
            Constraint::Min(1),    // menu content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    LayoutGrid {
        header: chunks[0],
        search: chunks[1],
        nav: chunks[2],
        content: chunks[3],
        status: chunks[4],
    }
}

pub fn should_show_scroll_top_hint(offset: usize) -> bool {
    offset >= SCROLL_TOP_HINT_LINES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_tiles_the_full_height() {
        let size = Rect::new(0, 0, 100, 40);
        let grid = compute_layout(size);
        let total = grid.header.height
            + grid.search.height
            + grid.nav.height
            + grid.content.height
            + grid.status.height;
        assert_eq!(total, 40);
        assert_eq!(grid.header.height, 1);
        assert_eq!(grid.status.y, 39);
    }

    #[test]
    fn tiny_terminal_still_produces_a_grid() {
        let grid = compute_layout(Rect::new(0, 0, 20, 6));
        assert!(grid.content.height <= 6);
    }

    #[test]
    fn scroll_top_hint_threshold() {
        assert!(!should_show_scroll_top_hint(0));
        assert!(!should_show_scroll_top_hint(SCROLL_TOP_HINT_LINES - 1));
        assert!(should_show_scroll_top_hint(SCROLL_TOP_HINT_LINES));
    }
}
