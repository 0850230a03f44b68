//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::core::catalog::{Catalog, StaticCatalog};
use crate::core::model::Topic;
use crate::core::state::App;

/// Creates a test App backed by the builtin sample deck.
pub fn test_app() -> App {
    App::new(Arc::new(StaticCatalog::builtin()))
}

/// Looks up a topic by title in the category currently on screen.
pub fn topic_named(app: &App, title: &str) -> Topic {
    let category = app
        .navigation
        .current_category()
        .expect("a category must be open");
    app.catalog
        .topics(category)
        .iter()
        .find(|t| t.title == title)
        .cloned()
        .expect("topic exists in the builtin deck")
}

/// Flattens a test terminal's buffer into one string for `contains` checks.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
