use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding};

use crate::core::state::App;
use crate::core::view::ScreenView;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryDetail, Dashboard, ReviewSession, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let view = app.view();

    TitleBar::new(breadcrumb(&view), app.status_message.clone()).render(frame, title_area);

    let main_area = padded(main_area);
    match &view {
        ScreenView::Dashboard {
            categories,
            upcoming,
            recent,
            show_upcoming,
            show_recent,
        } => {
            tui.dashboard.set_len(categories.len());
            Dashboard::new(
                &mut tui.dashboard,
                categories,
                upcoming,
                recent,
                *show_upcoming,
                *show_recent,
            )
            .render(frame, main_area);
        }
        ScreenView::CategoryDetail { category, topics } => {
            CategoryDetail::new(&mut tui.topics, category, topics).render(frame, main_area);
        }
        ScreenView::ReviewSession(review) => {
            ReviewSession::new(review).render(frame, main_area);
        }
    }

    frame.render_widget(
        Line::styled(help_text(&view), Style::default().fg(Color::DarkGray)).centered(),
        help_area,
    );
}

/// Screen path shown after the app title.
fn breadcrumb(view: &ScreenView<'_>) -> Vec<String> {
    match view {
        ScreenView::Dashboard { .. } => Vec::new(),
        ScreenView::CategoryDetail { category, .. } => vec![category.name.clone()],
        ScreenView::ReviewSession(review) => {
            vec![review.category.name.clone(), review.topic.title.clone()]
        }
    }
}

fn help_text(view: &ScreenView<'_>) -> &'static str {
    match view {
        ScreenView::Dashboard { .. } => " ↑↓ Move  Enter Open  1-9 Jump  q Quit ",
        ScreenView::CategoryDetail { .. } => " ↑↓ Move  Enter Start Review  Esc Back ",
        ScreenView::ReviewSession(_) => " ←→ Prev/Next  h Hints  a Answer  Esc Back ",
    }
}

fn padded(area: Rect) -> Rect {
    Block::default().padding(Padding::new(2, 2, 1, 0)).inner(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::catalog::Catalog;
    use crate::test_support::{buffer_text, test_app, topic_named};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_draw_dashboard() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Interview Prep"));
        assert!(text.contains("Interview Preparation Dashboard"));
        assert!(text.contains("q Quit"));
        assert_eq!(tui.dashboard.len, 4);
    }

    #[test]
    fn test_draw_follows_navigation() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let technologies = app.catalog.categories()[2].clone();
        update(&mut app, Action::SelectCategory(technologies));

        let text = draw(&app, &mut tui);
        assert!(text.contains("Interview Prep › Technologies"));
        assert!(text.contains("Back to Dashboard"));
        assert!(text.contains("Enter Start Review"));

        let topic = topic_named(&app, "Advanced Topics");
        update(&mut app, Action::SelectTopic(topic));
        update(&mut app, Action::NextQuestion);

        let text = draw(&app, &mut tui);
        assert!(text.contains("Technologies › Advanced Topics"));
        assert!(text.contains("Question 2/2"));
        assert!(text.contains("Progress: 100%"));
        assert!(text.contains("h Hints"));
    }

    #[test]
    fn test_breadcrumb_per_screen() {
        let mut app = test_app();
        assert!(breadcrumb(&app.view()).is_empty());

        let technical = app.catalog.categories()[0].clone();
        update(&mut app, Action::SelectCategory(technical));
        assert_eq!(breadcrumb(&app.view()), vec!["Technical".to_string()]);
    }
}
