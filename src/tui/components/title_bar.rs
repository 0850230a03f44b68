//! # TitleBar Component
//!
//! Top status bar: where you are, plus the current status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Breadcrumb + status**: `"Interview Prep › Technical › Basic Concepts | Reviewing: Basic Concepts"`
//! 2. **Breadcrumb only**: `"Interview Prep › Technical"`
//!
//! TitleBar is purely presentational. It receives everything as props and
//! has no state of its own.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::style::ACCENT;

pub const APP_TITLE: &str = "Interview Prep";

pub struct TitleBar {
    /// Screen path below the app title, outermost first.
    pub breadcrumb: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<String>, status_message: String) -> Self {
        Self {
            breadcrumb,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from(APP_TITLE);
        for crumb in &self.breadcrumb {
            text.push_str(" › ");
            text.push_str(crumb);
        }
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_with_breadcrumb_and_status() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new(
            vec!["Technical".to_string(), "Basic Concepts".to_string()],
            "Reviewing: Basic Concepts".to_string(),
        );

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Interview Prep"));
        assert!(text.contains("Technical"));
        assert!(text.contains("Basic Concepts"));
        assert!(text.contains("| Reviewing: Basic Concepts"));
    }

    #[test]
    fn test_title_bar_without_status_has_no_separator() {
        let title_bar = TitleBar::new(vec![], String::new());
        assert_eq!(title_bar.text(), "Interview Prep");
    }

    #[test]
    fn test_breadcrumb_joined_in_order() {
        let title_bar = TitleBar::new(
            vec!["Behavioral".to_string(), "Common Patterns".to_string()],
            String::new(),
        );
        assert_eq!(
            title_bar.text(),
            "Interview Prep › Behavioral › Common Patterns"
        );
    }
}
