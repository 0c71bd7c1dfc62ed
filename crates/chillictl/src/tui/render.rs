//! Rendering - draws the view-model tree, search box, category bar and
//! status bar. All color decisions go through the theme palette so the
//! dark/light toggle restyles everything at once.

use chilli_common::config::Theme;
use chilli_common::view_model::{CardView, RenderTree, SectionView};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::{self, compute_layout};
use super::state::AppState;
use super::utils::{centered_rect, wrap_text};

/// Theme palette. Dark is the default; light flips to ink-on-paper.
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub veg: Color,
    pub non_veg: Color,
    pub price: Color,
    pub snacks: Color,
    pub active_bg: Color,
    pub active_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                text: Color::Rgb(225, 228, 225),
                dim: Color::Rgb(128, 136, 128),
                accent: Color::Rgb(120, 215, 120),
                border: Color::Rgb(70, 130, 70),
                header_bg: Color::Rgb(14, 40, 16),
                header_fg: Color::Rgb(185, 250, 185),
                veg: Color::Rgb(80, 200, 80),
                non_veg: Color::Rgb(220, 85, 80),
                price: Color::Rgb(250, 200, 95),
                snacks: Color::Rgb(250, 170, 85),
                active_bg: Color::Rgb(40, 110, 45),
                active_fg: Color::Rgb(240, 255, 240),
            },
            Theme::Light => Palette {
                text: Color::Rgb(35, 40, 35),
                dim: Color::Rgb(120, 125, 120),
                accent: Color::Rgb(20, 120, 20),
                border: Color::Rgb(60, 140, 60),
                header_bg: Color::Rgb(205, 235, 205),
                header_fg: Color::Rgb(15, 70, 15),
                veg: Color::Rgb(25, 140, 25),
                non_veg: Color::Rgb(180, 40, 35),
                price: Color::Rgb(150, 100, 10),
                snacks: Color::Rgb(185, 95, 10),
                active_bg: Color::Rgb(55, 145, 60),
                active_fg: Color::Rgb(250, 255, 250),
            },
        }
    }
}

/// Content lines plus the line offset of every section anchor, so
/// category activation can scroll its section into view.
pub struct ContentLines {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(String, usize)>,
}

pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme());
    let grid = compute_layout(f.size());

    draw_header(f, grid.header, state, &palette);
    draw_search(f, grid.search, state, &palette);
    draw_nav(f, grid.nav, state, &palette);
    draw_content(f, grid.content, state, &palette);
    draw_status(f, grid.status, state, &palette);

    if state.show_help {
        draw_help_overlay(f, f.size(), &palette);
    }
}

fn draw_header(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = format!(
        " Green Chilli v{} | {} dishes | {} theme",
        env!("CARGO_PKG_VERSION"),
        state.item_count(),
        state.theme().as_str(),
    );
    let header = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(palette.header_fg)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(palette.header_bg));
    f.render_widget(header, area);
}

fn draw_search(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = if state.search_input.is_empty() {
        Line::from(Span::styled(
            "type to search dishes…",
            Style::default().fg(palette.dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                state.search_input.clone(),
                Style::default().fg(palette.text),
            ),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ])
    };

    let search = Paragraph::new(line).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(search, area);
}

fn draw_nav(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let searching = state.ui.search_active();
    let mut spans: Vec<Span> = Vec::new();

    for (i, button) in state.nav.buttons.iter().enumerate() {
        if state.nav.separator_before == Some(i) {
            spans.push(Span::styled(" · ", Style::default().fg(palette.dim)));
        }
        let style = if searching {
            // Search spans all categories; the pinned one is remembered
            // but not highlighted.
            Style::default().fg(palette.dim)
        } else if button.active {
            Style::default()
                .fg(palette.active_fg)
                .bg(palette.active_bg)
                .add_modifier(Modifier::BOLD)
        } else if button.snacks {
            Style::default().fg(palette.snacks)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(format!(" {} ", button.category), style));
        spans.push(Span::raw(" "));
    }

    if spans.is_empty() {
        spans.push(Span::styled(
            "no categories",
            Style::default().fg(palette.dim),
        ));
    }

    let nav = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Categories ◂ ▸ ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(nav, area);
}

fn draw_content(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let content_width = area.width.saturating_sub(4) as usize;
    let content = build_content_lines(&state.tree, content_width, palette);

    let total_lines = content.lines.len();
    let visible_lines = area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let actual_scroll = state.scroll_offset.min(max_scroll);

    let scroll_indicator = if total_lines > visible_lines {
        let up = if actual_scroll > 0 { "▲" } else { " " };
        let down = if actual_scroll < max_scroll { "▼" } else { " " };
        format!(" {up}{down} ")
    } else {
        String::new()
    };

    let paragraph = Paragraph::new(content.lines)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(format!(" Menu{scroll_indicator}"))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .scroll((actual_scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let time_str = Local::now().format("%H:%M:%S").to_string();
    let context = if state.ui.search_active() {
        format!("search: \"{}\"", state.ui.search_query)
    } else {
        format!("category: {}", state.ui.active_category)
    };

    let mut text = format!(" {time_str} | {context}");
    if layout::should_show_scroll_top_hint(state.scroll_offset) {
        text.push_str(" | ▲ Home: top");
    }
    text.push_str(" | F1 help  Ctrl+T theme  Ctrl+C quit");

    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(palette.dim),
    )))
    .style(Style::default().bg(palette.header_bg));
    f.render_widget(status, area);
}

/// Line offset for the pending section anchor at the given viewport, or
/// `None` when no section with that anchor is rendered.
pub fn scroll_target(state: &AppState, viewport: Rect) -> Option<usize> {
    let anchor = state.pending_anchor.as_ref()?;
    let palette = Palette::for_theme(state.theme());
    let width = viewport.width.saturating_sub(4) as usize;
    let content = build_content_lines(&state.tree, width, &palette);
    content
        .anchors
        .iter()
        .find(|(a, _)| a == anchor)
        .map(|(_, offset)| *offset)
}

/// Flatten the render tree into styled lines: Menu sections first, then
/// the Snacks block behind its group header.
pub fn build_content_lines(tree: &RenderTree, width: usize, palette: &Palette) -> ContentLines {
    let mut out = ContentLines {
        lines: Vec::new(),
        anchors: Vec::new(),
    };

    if tree.empty {
        out.lines.push(Line::from(""));
        out.lines.push(Line::from(Span::styled(
            "  No dishes match your search.",
            Style::default()
                .fg(palette.snacks)
                .add_modifier(Modifier::BOLD),
        )));
        out.lines.push(Line::from(Span::styled(
            "  Try a different search or category.",
            Style::default().fg(palette.dim),
        )));
        return out;
    }

    for section in &tree.menu_sections {
        push_section_lines(&mut out, section, width, palette, false);
    }

    if let Some(snacks) = &tree.snacks {
        out.lines.push(Line::from(""));
        out.lines.push(Line::from(vec![
            Span::styled("── ", Style::default().fg(palette.dim)),
            Span::raw(snacks.icon.to_string()),
            Span::styled(
                format!(" {} ", snacks.title),
                Style::default()
                    .fg(palette.snacks)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("──", Style::default().fg(palette.dim)),
        ]));
        for section in &snacks.sections {
            push_section_lines(&mut out, section, width, palette, true);
        }
    }

    out
}

fn push_section_lines(
    out: &mut ContentLines,
    section: &SectionView,
    width: usize,
    palette: &Palette,
    snacks: bool,
) {
    out.anchors.push((section.anchor.clone(), out.lines.len()));
    out.lines.push(Line::from(""));

    let heading_color = if snacks { palette.snacks } else { palette.accent };
    out.lines.push(Line::from(vec![
        Span::raw(format!("{} ", section.icon)),
        Span::styled(
            section.category.clone(),
            Style::default()
                .fg(heading_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} items", section.count),
            Style::default().fg(palette.dim),
        ),
    ]));

    for card in &section.cards {
        push_card_lines(out, card, width, palette);
    }
}

fn push_card_lines(out: &mut ContentLines, card: &CardView, width: usize, palette: &Palette) {
    let marker_color = if card.veg { palette.veg } else { palette.non_veg };
    let mut spans = vec![
        Span::raw("  "),
        Span::styled("●", Style::default().fg(marker_color)),
        Span::styled(format!(" {}", card.name), Style::default().fg(palette.text)),
        Span::styled(
            format!("  ₹{}", card.price),
            Style::default().fg(palette.price),
        ),
    ];
    if let Some(tag) = &card.tag {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", tag.label),
            tag_style(tag.style_key, palette),
        ));
    }
    out.lines.push(Line::from(spans));

    if !card.description.is_empty() {
        for wrapped in wrap_text(&card.description, width.saturating_sub(6)) {
            out.lines.push(Line::from(Span::styled(
                format!("      {wrapped}"),
                Style::default().fg(palette.dim),
            )));
        }
    }
}

/// Tag style keys map onto colors; labels without a key render plain.
fn tag_style(style_key: Option<&'static str>, palette: &Palette) -> Style {
    let color = match style_key {
        Some("tag-bestseller") => Color::Rgb(235, 195, 60),
        Some("tag-spicy") => palette.non_veg,
        Some("tag-must-try") => Color::Rgb(210, 110, 230),
        Some("tag-chefs-pick") => Color::Rgb(95, 200, 220),
        Some("tag-seasonal") => palette.veg,
        Some("tag-signature") => Color::Rgb(120, 150, 250),
        _ => return Style::default().fg(palette.dim),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let overlay = centered_rect(60, 60, area);
    let lines = vec![
        Line::from(""),
        Line::from("  type          search dishes"),
        Line::from("  Esc / Ctrl+U  clear search"),
        Line::from("  ◂ ▸           previous / next category"),
        Line::from("  ▴ ▾ PgUp PgDn scroll"),
        Line::from("  Home          back to top"),
        Line::from("  Ctrl+T        toggle dark/light theme"),
        Line::from("  F1            close this help"),
        Line::from("  Ctrl+C        quit"),
    ];
    let help = Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(Clear, overlay);
    f.render_widget(help, overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chilli_common::catalog::{MenuItem, UiState, ALL_CATEGORIES};
    use chilli_common::filter::compute_visible;
    use chilli_common::view_model::build_view_model;

    fn tree() -> RenderTree {
        let items = vec![
            MenuItem {
                name: "Paneer Tikka".into(),
                description: "Smoky cottage cheese cubes straight off the grill".into(),
                price: 180.0,
                category: "Veg Starters".into(),
                veg: true,
                tag: Some("Bestseller".into()),
            },
            MenuItem {
                name: "Chicken Soup".into(),
                description: String::new(),
                price: 120.0,
                category: "Soup".into(),
                veg: false,
                tag: None,
            },
        ];
        let state = UiState {
            active_category: ALL_CATEGORIES.into(),
            search_query: String::new(),
        };
        build_view_model(&compute_visible(&items, &state), &state)
    }

    #[test]
    fn anchors_point_at_section_headings() {
        let palette = Palette::for_theme(Theme::Dark);
        let content = build_content_lines(&tree(), 80, &palette);

        assert_eq!(content.anchors.len(), 2);
        let (anchor, offset) = &content.anchors[0];
        assert_eq!(anchor, "section-Veg-Starters");
        // Blank spacer line, then the heading.
        let heading: String = content.lines[offset + 1]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(heading.contains("Veg Starters"));
    }

    #[test]
    fn descriptions_wrap_to_the_given_width() {
        let palette = Palette::for_theme(Theme::Dark);
        let narrow = build_content_lines(&tree(), 30, &palette);
        let wide = build_content_lines(&tree(), 120, &palette);
        assert!(narrow.lines.len() > wide.lines.len());
    }

    #[test]
    fn empty_tree_renders_the_empty_state() {
        let palette = Palette::for_theme(Theme::Light);
        let empty = RenderTree {
            empty: true,
            ..RenderTree::default()
        };
        let content = build_content_lines(&empty, 80, &palette);
        assert!(content.anchors.is_empty());
        let all_text: String = content
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(all_text.contains("No dishes match"));
    }
}
