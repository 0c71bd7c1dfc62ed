//! Non-interactive commands: one-shot menu listing and theme preference.

use anyhow::{bail, Result};
use chilli_common::catalog::{MenuItem, UiState, ALL_CATEGORIES};
use chilli_common::config::{Config, Theme};
use chilli_common::filter::compute_visible;
use chilli_common::view_model::{build_view_model, SectionView};
use owo_colors::{AnsiColors, OwoColorize};

/// Render the catalog once to stdout through the same filter engine and
/// view-model the TUI binds.
pub fn list(items: &[MenuItem], category: Option<String>, search: Option<String>) -> Result<()> {
    let mut state = UiState {
        active_category: category.unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        search_query: String::new(),
    };
    state.set_search(search.as_deref().unwrap_or_default());

    let grouping = compute_visible(items, &state);
    let tree = build_view_model(&grouping, &state);

    if tree.empty {
        println!("{}", "No dishes match.".yellow());
        return Ok(());
    }

    for section in &tree.menu_sections {
        print_section(section);
    }

    if let Some(snacks) = &tree.snacks {
        println!();
        println!("{} {}", snacks.icon, snacks.title.bold().underline());
        for section in &snacks.sections {
            print_section(section);
        }
    }

    Ok(())
}

fn print_section(section: &SectionView) {
    println!();
    println!(
        "{} {}  {}",
        section.icon,
        section.category.bold().green(),
        format!("({} items)", section.count).dimmed()
    );
    for card in &section.cards {
        let marker = if card.veg {
            "●".green().to_string()
        } else {
            "●".red().to_string()
        };
        let mut line = format!("  {marker} {:<38} ₹{:>8}", card.name, card.price);
        if let Some(tag) = &card.tag {
            line.push_str(&format!(
                "  [{}]",
                tag.label.color(tag_color(tag.style_key))
            ));
        }
        println!("{line}");
        if !card.description.is_empty() {
            println!("      {}", card.description.dimmed());
        }
    }
}

/// Tag style keys map onto terminal colors here; unknown tags stay plain.
fn tag_color(style_key: Option<&'static str>) -> AnsiColors {
    match style_key {
        Some("tag-bestseller") => AnsiColors::Yellow,
        Some("tag-spicy") => AnsiColors::Red,
        Some("tag-must-try") => AnsiColors::Magenta,
        Some("tag-chefs-pick") => AnsiColors::Cyan,
        Some("tag-seasonal") => AnsiColors::Green,
        Some("tag-signature") => AnsiColors::Blue,
        _ => AnsiColors::White,
    }
}

/// Show or persist the theme preference.
pub fn theme(config: &mut Config, value: Option<String>) -> Result<()> {
    match value {
        None => {
            println!("{}", config.theme.as_str());
            Ok(())
        }
        Some(value) => match Theme::parse(&value) {
            Some(theme) => {
                config.theme = theme;
                config.save()?;
                println!("theme set to {}", theme.as_str().bold());
                Ok(())
            }
            None => bail!("theme must be \"dark\" or \"light\", got \"{value}\""),
        },
    }
}
