//! # Domain Model
//!
//! The read-only records the dashboard is built from. Nothing in here
//! changes while the app runs; navigation and review state live in
//! [`navigation`](super::navigation) and [`review`](super::review).
//!
//! ```text
//! Category ──< Topic ──< Question
//!
//! Dashboard panels:
//!   UpcomingReview   (topic, category, "due in" text)
//!   RecentProgress   (topic, category, status)
//! ```

use serde::{Deserialize, Serialize};

/// Symbolic glyph for a category. The TUI picks the actual characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    #[default]
    Code,
    Brain,
    Database,
    BookOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: CategoryIcon,
    /// Advertised topic count shown on the dashboard card.
    pub topic_count: u32,
    /// Percentage, 0–100.
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Mastered,
    InProgress,
    ReviewNeeded,
}

impl TopicStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TopicStatus::Mastered => "Mastered",
            TopicStatus::InProgress => "In Progress",
            TopicStatus::ReviewNeeded => "Review Needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Unique within its category.
    pub id: u32,
    pub title: String,
    pub progress: u8,
    /// Free-form display text ("2 days ago"); never parsed.
    pub last_reviewed: String,
    /// Free-form display text ("3 days", "Today"); never parsed.
    pub next_review: String,
    pub difficulty: Difficulty,
    pub status: TopicStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub answer: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpcomingReview {
    pub id: u32,
    pub topic: String,
    pub category: String,
    pub due_in: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Mastered,
    InProgress,
    Started,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Mastered => "Mastered",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::Started => "Started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecentProgress {
    pub id: u32,
    pub topic: String,
    pub category: String,
    pub status: ProgressStatus,
}
