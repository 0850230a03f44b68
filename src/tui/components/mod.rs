//! # TUI Components
//!
//! One component per screen, plus the title bar.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: breadcrumb and status message
//! - `ReviewSession`: renders a `ReviewView`; all of its state lives in the core
//!
//! ### Stateful Components (Event-Driven)
//!
//! Presentation-only state (cursor, scroll) is kept in `TuiState` and
//! borrowed by a transient wrapper each frame:
//! - `DashboardState` / `Dashboard`: category cursor
//! - `TopicListState` / `CategoryDetail`: topic cursor and scroll offset
//!
//! Each state type implements `EventHandler` and emits a screen-level event
//! (`DashboardEvent`, `CategoryEvent`, `ReviewEvent`). `tui::run` turns those
//! into core `Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status bar)
//! ├── dashboard.rs        (categories + summary panels)
//! ├── category_detail.rs  (scrollable topic cards)
//! └── review_session.rs   (question card + controls)
//! ```

pub mod category_detail;
pub mod dashboard;
pub mod review_session;
mod title_bar;

pub use category_detail::{CategoryDetail, CategoryEvent, TopicListState};
pub use dashboard::{Dashboard, DashboardEvent, DashboardState};
pub use review_session::{ReviewEvent, ReviewKeys, ReviewSession};
pub use title_bar::TitleBar;
