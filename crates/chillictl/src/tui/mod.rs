//! Interactive TUI - the view binder over `chilli_common`.
//!
//! The event loop is the single writer of the core UI state; every input
//! funnels into a state mutation followed by a full recomputation of the
//! render tree.

mod event_loop;
mod layout;
mod render;
mod state;
mod utils;

pub use event_loop::run;
