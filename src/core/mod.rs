//! # Core Application Logic
//!
//! This module contains the dashboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (read-only)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view() (what to draw)│
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Categories, topics, questions and dashboard panel entries
//! - [`catalog`]: The `Catalog` trait, builtin data and deck files
//! - [`navigation`]: The `Screen` enum and its four transitions
//! - [`review`]: Question position and hint/answer disclosure
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`view`]: `ScreenView`, the description adapters render
//! - [`config`]: `~/.prepdeck/config.toml` and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod model;
pub mod navigation;
pub mod review;
pub mod state;
pub mod view;
