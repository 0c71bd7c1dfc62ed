//! Event loop - terminal setup, input dispatch and the render cycle.
//!
//! Single-threaded and cooperative: every piece of work runs in response
//! to a discrete input event, and each iteration redraws the whole tree
//! from current state.

use std::io;
use std::time::Duration;

use anyhow::Result;
use chilli_common::catalog::MenuItem;
use chilli_common::config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::layout::compute_layout;
use super::render::{draw_ui, scroll_target};
use super::state::AppState;

/// Run the TUI over an already-loaded catalog. The catalog is immutable
/// from here on; only UI state changes.
pub fn run(items: Vec<MenuItem>, config: Config) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("failed to enable raw mode: {e}. Ensure you're running in a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("failed to initialize terminal: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(items, config);
    let result = run_event_loop(&mut terminal, &mut state);

    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        // Resolve a requested section scroll before drawing, using the
        // real viewport width. A vanished section leaves the scroll put.
        if state.pending_anchor.is_some() {
            if let Ok(size) = terminal.size() {
                let grid = compute_layout(size);
                if let Some(offset) = scroll_target(state, grid.content) {
                    state.scroll_offset = offset;
                }
            }
            state.pending_anchor = None;
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll_by(-3),
                MouseEventKind::ScrollDown => state.scroll_by(3),
                _ => {}
            },
            Event::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('q'), KeyModifiers::CONTROL) => break,
                (KeyCode::Char('t'), KeyModifiers::CONTROL) => state.toggle_theme(),
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.clear_search(),
                (KeyCode::F(1), _) => state.show_help = !state.show_help,
                (KeyCode::Esc, _) => {
                    if state.show_help {
                        state.show_help = false;
                    } else {
                        state.clear_search();
                    }
                }
                (KeyCode::Left, _) => state.step_category(-1),
                (KeyCode::Right, _) => state.step_category(1),
                (KeyCode::Up, _) => state.scroll_by(-1),
                (KeyCode::Down, _) => state.scroll_by(1),
                (KeyCode::PageUp, _) => state.scroll_by(-10),
                (KeyCode::PageDown, _) => state.scroll_by(10),
                (KeyCode::Home, _) => state.scroll_to_top(),
                (KeyCode::Backspace, _) => state.pop_search_char(),
                (KeyCode::Char(c), KeyModifiers::NONE)
                | (KeyCode::Char(c), KeyModifiers::SHIFT) => state.push_search_char(c),
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}
