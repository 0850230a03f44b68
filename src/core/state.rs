//! # Application State
//!
//! Core state for the dashboard. Domain data and navigation only; cursor
//! positions and scroll offsets live in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn Catalog>     // read-only categories/topics/questions
//! ├── navigation: Navigation        // active screen + review progress
//! ├── status_message: String        // status bar text
//! └── dashboard: DashboardOptions   // which summary panels to show
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Navigation;

/// Which summary panels the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub show_upcoming_reviews: bool,
    pub show_recent_progress: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            show_upcoming_reviews: true,
            show_recent_progress: true,
        }
    }
}

pub struct App {
    pub catalog: Arc<dyn Catalog>,
    pub navigation: Navigation,
    pub status_message: String,
    pub dashboard: DashboardOptions,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            navigation: Navigation::new(),
            status_message: String::from("Pick a category to start"),
            dashboard: DashboardOptions::default(),
        }
    }

    pub fn from_config(catalog: Arc<dyn Catalog>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.dashboard = config.dashboard;
        app
    }
}
