//! # Navigation
//!
//! Which screen is active, and the only four ways to move between them.
//!
//! ```text
//!                 select_category            select_topic
//!   Dashboard ───────────────────▶ Category ──────────────▶ Review
//!             ◀─────────────────── Detail   ◀────────────── Session
//!              go_back_to_dashboard          go_back_to_category
//! ```
//!
//! A transition requested from the wrong screen does nothing and reports
//! `false`. Leaving a screen drops everything it owned, so re-entering a
//! review always starts from the first question.

use log::debug;

use crate::core::model::{Category, Question, Topic};
use crate::core::review::ReviewProgress;

/// State owned by an active review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    /// The category the session was started from; restored on the way back.
    pub category: Category,
    pub topic: Topic,
    pub questions: Vec<Question>,
    pub progress: ReviewProgress,
}

impl ReviewSession {
    fn new(category: Category, topic: Topic, questions: Vec<Question>) -> Self {
        let progress = ReviewProgress::new(questions.len());
        Self {
            category,
            topic,
            questions,
            progress,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.progress.current_index())
    }
}

/// The active screen. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    CategoryDetail { category: Category },
    ReviewSession(ReviewSession),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::CategoryDetail { .. } => "category detail",
            Screen::ReviewSession(_) => "review session",
        }
    }
}

#[derive(Debug, Default)]
pub struct Navigation {
    screen: Screen,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&ReviewSession> {
        match &self.screen {
            Screen::ReviewSession(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut ReviewSession> {
        match &mut self.screen {
            Screen::ReviewSession(session) => Some(session),
            _ => None,
        }
    }

    /// The category being browsed or reviewed, if any.
    pub fn current_category(&self) -> Option<&Category> {
        match &self.screen {
            Screen::Dashboard => None,
            Screen::CategoryDetail { category } => Some(category),
            Screen::ReviewSession(session) => Some(&session.category),
        }
    }

    pub fn select_category(&mut self, category: Category) -> bool {
        if !matches!(self.screen, Screen::Dashboard) {
            return self.rejected("select_category");
        }
        self.screen = Screen::CategoryDetail { category };
        true
    }

    pub fn go_back_to_dashboard(&mut self) -> bool {
        if !matches!(self.screen, Screen::CategoryDetail { .. }) {
            return self.rejected("go_back_to_dashboard");
        }
        self.screen = Screen::Dashboard;
        true
    }

    pub fn select_topic(&mut self, topic: Topic, questions: Vec<Question>) -> bool {
        let Screen::CategoryDetail { category } = &self.screen else {
            return self.rejected("select_topic");
        };
        let session = ReviewSession::new(category.clone(), topic, questions);
        self.screen = Screen::ReviewSession(session);
        true
    }

    pub fn go_back_to_category(&mut self) -> bool {
        let Screen::ReviewSession(session) = &self.screen else {
            return self.rejected("go_back_to_category");
        };
        let category = session.category.clone();
        self.screen = Screen::CategoryDetail { category };
        true
    }

    /// Go up one level from wherever we are. No-op on the dashboard.
    pub fn back(&mut self) -> bool {
        match self.screen {
            Screen::Dashboard => false,
            Screen::CategoryDetail { .. } => self.go_back_to_dashboard(),
            Screen::ReviewSession(_) => self.go_back_to_category(),
        }
    }

    fn rejected(&self, transition: &str) -> bool {
        debug!(
            "Ignoring {} while on the {} screen",
            transition,
            self.screen.name()
        );
        false
    }
}
