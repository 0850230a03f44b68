//! # Screen View
//!
//! A read-only description of what should be on screen right now, built
//! from [`App`] after every update. Adapters render this and nothing else,
//! so they never reach into navigation or review internals.

use crate::core::catalog::Catalog;
use crate::core::model::{Category, Question, RecentProgress, Topic, UpcomingReview};
use crate::core::navigation::Screen;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView<'a> {
    Dashboard {
        categories: &'a [Category],
        /// Empty when the panel is switched off.
        upcoming: &'a [UpcomingReview],
        /// Empty when the panel is switched off.
        recent: &'a [RecentProgress],
        show_upcoming: bool,
        show_recent: bool,
    },
    CategoryDetail {
        category: &'a Category,
        topics: &'a [Topic],
    },
    ReviewSession(ReviewView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView<'a> {
    pub category: &'a Category,
    pub topic: &'a Topic,
    /// `None` only when the topic has no questions.
    pub question: Option<&'a Question>,
    /// 1-based position of the current question; 0 when there are none.
    pub number: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub hints_visible: bool,
    pub answer_visible: bool,
    pub can_previous: bool,
    pub can_next: bool,
}

impl App {
    pub fn view(&self) -> ScreenView<'_> {
        match self.navigation.screen() {
            Screen::Dashboard => {
                let show_upcoming = self.dashboard.show_upcoming_reviews;
                let show_recent = self.dashboard.show_recent_progress;
                ScreenView::Dashboard {
                    categories: self.catalog.categories(),
                    upcoming: if show_upcoming {
                        self.catalog.upcoming_reviews()
                    } else {
                        &[]
                    },
                    recent: if show_recent {
                        self.catalog.recent_progress()
                    } else {
                        &[]
                    },
                    show_upcoming,
                    show_recent,
                }
            }
            Screen::CategoryDetail { category } => ScreenView::CategoryDetail {
                category,
                topics: self.catalog.topics(category),
            },
            Screen::ReviewSession(session) => {
                let progress = &session.progress;
                ScreenView::ReviewSession(ReviewView {
                    category: &session.category,
                    topic: &session.topic,
                    question: session.current_question(),
                    number: if progress.question_count() == 0 {
                        0
                    } else {
                        progress.current_index() + 1
                    },
                    total: progress.question_count(),
                    progress_percent: progress.progress_percent(),
                    hints_visible: progress.hints_visible(),
                    answer_visible: progress.answer_visible(),
                    can_previous: progress.can_go_previous(),
                    can_next: progress.can_go_next(),
                })
            }
        }
    }
}
