//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! User presses Enter on a category card? That's `Action::SelectCategory(category)`.
//! User presses `h` during a review? That's `Action::ToggleHints`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O happens here. The only thing that
//! leaves the core is the returned `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Actions that make no sense for the current screen (going back from the
//! dashboard, `NextQuestion` outside a review) are silently ignored.

use log::debug;

use crate::core::catalog::Catalog;
use crate::core::model::{Category, Topic};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(Category),
    GoBackToDashboard,
    SelectTopic(Topic),
    GoBackToCategory,
    /// Up one level, whichever screen is active.
    Back,
    NextQuestion,
    PreviousQuestion,
    ToggleHints,
    ToggleAnswer,
    Quit,
}

/// What the outer loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);

    match action {
        Action::SelectCategory(category) => {
            let name = category.name.clone();
            if app.navigation.select_category(category) {
                app.status_message = format!("Browsing {name}");
            }
        }
        Action::GoBackToDashboard => {
            if app.navigation.go_back_to_dashboard() {
                app.status_message = String::from("Pick a category to start");
            }
        }
        Action::SelectTopic(topic) => {
            let questions = match app.navigation.current_category() {
                Some(category) => app.catalog.questions(category, &topic).to_vec(),
                None => Vec::new(),
            };
            let title = topic.title.clone();
            let count = questions.len();
            if app.navigation.select_topic(topic, questions) {
                debug!("Review of '{}' started with {} questions", title, count);
                app.status_message = format!("Reviewing: {title}");
            }
        }
        Action::GoBackToCategory => {
            if app.navigation.go_back_to_category() {
                browsing_status(app);
            }
        }
        Action::Back => {
            if app.navigation.back() {
                if app.navigation.current_category().is_some() {
                    browsing_status(app);
                } else {
                    app.status_message = String::from("Pick a category to start");
                }
            }
        }
        Action::NextQuestion => {
            if let Some(session) = app.navigation.session_mut() {
                session.progress.next();
            }
        }
        Action::PreviousQuestion => {
            if let Some(session) = app.navigation.session_mut() {
                session.progress.previous();
            }
        }
        Action::ToggleHints => {
            if let Some(session) = app.navigation.session_mut() {
                session.progress.toggle_hints();
            }
        }
        Action::ToggleAnswer => {
            if let Some(session) = app.navigation.session_mut() {
                session.progress.toggle_answer();
            }
        }
        Action::Quit => return Effect::Quit,
    }

    Effect::None
}

fn browsing_status(app: &mut App) {
    if let Some(category) = app.navigation.current_category() {
        app.status_message = format!("Browsing {}", category.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Screen;
    use crate::test_support::{test_app, topic_named};

    #[test]
    fn test_select_category_updates_screen_and_status() {
        let mut app = test_app();
        let technical = app.catalog.categories()[0].clone();

        let effect = update(&mut app, Action::SelectCategory(technical.clone()));

        assert_eq!(effect, Effect::None);
        assert_eq!(
            app.navigation.screen(),
            &Screen::CategoryDetail { category: technical }
        );
        assert_eq!(app.status_message, "Browsing Technical");
    }

    #[test]
    fn test_select_topic_loads_questions_from_catalog() {
        let mut app = test_app();
        let technical = app.catalog.categories()[0].clone();
        update(&mut app, Action::SelectCategory(technical));
        let topic = topic_named(&app, "Advanced Topics");
        update(&mut app, Action::SelectTopic(topic));

        let session = app.navigation.session().unwrap();
        assert_eq!(session.topic.title, "Advanced Topics");
        assert_eq!(session.questions.len(), 2);
        assert_eq!(app.status_message, "Reviewing: Advanced Topics");
    }

    #[test]
    fn test_question_actions_drive_progress() {
        let mut app = test_app();
        let technical = app.catalog.categories()[0].clone();
        update(&mut app, Action::SelectCategory(technical));
        let topic = topic_named(&app, "Basic Concepts");
        update(&mut app, Action::SelectTopic(topic));

        update(&mut app, Action::ToggleHints);
        update(&mut app, Action::ToggleAnswer);
        update(&mut app, Action::NextQuestion);
        let progress = &app.navigation.session().unwrap().progress;
        assert_eq!(progress.current_index(), 1);
        assert!(!progress.hints_visible());
        assert!(!progress.answer_visible());

        update(&mut app, Action::NextQuestion);
        assert_eq!(app.navigation.session().unwrap().progress.current_index(), 1);

        update(&mut app, Action::PreviousQuestion);
        assert_eq!(app.navigation.session().unwrap().progress.current_index(), 0);
    }

    #[test]
    fn test_question_actions_ignored_outside_review() {
        let mut app = test_app();
        for action in [
            Action::NextQuestion,
            Action::PreviousQuestion,
            Action::ToggleHints,
            Action::ToggleAnswer,
            Action::GoBackToCategory,
            Action::Back,
        ] {
            assert_eq!(update(&mut app, action), Effect::None);
        }
        assert_eq!(app.navigation.screen(), &Screen::Dashboard);
        assert_eq!(app.status_message, "Pick a category to start");
    }

    #[test]
    fn test_back_from_review_then_category() {
        let mut app = test_app();
        let technical = app.catalog.categories()[0].clone();
        update(&mut app, Action::SelectCategory(technical));
        let topic = topic_named(&app, "Common Patterns");
        update(&mut app, Action::SelectTopic(topic));

        update(&mut app, Action::Back);
        assert!(matches!(app.navigation.screen(), Screen::CategoryDetail { .. }));
        assert_eq!(app.status_message, "Browsing Technical");

        update(&mut app, Action::Back);
        assert_eq!(app.navigation.screen(), &Screen::Dashboard);
        assert_eq!(app.status_message, "Pick a category to start");
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
