//! Chilli Common - Shared core for the Green Chilli menu browser
//!
//! Everything that decides *what* is shown lives here: the catalog data
//! model, the category taxonomy, the filter engine, the navigation builder
//! and the view-model builder. Presentation layers (TUI, plain stdout)
//! only bind the structures this crate produces.

pub mod catalog;
pub mod categories;
pub mod config;
pub mod error;
pub mod filter;
pub mod nav;
pub mod view_model;

pub use catalog::{MenuItem, UiState, ALL_CATEGORIES};
pub use error::CatalogError;
