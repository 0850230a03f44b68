//! # ReviewSession Component
//!
//! One question at a time: prompt, optional hints, optional answer, and
//! Previous/Next controls that dim at the ends of the session.
//!
//! All position and disclosure state lives in the core (`ReviewProgress`);
//! this component renders a `ReviewView` and turns keys into `ReviewEvent`s.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, LineGauge, Padding, Paragraph};

use crate::core::view::ReviewView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::style::{ACCENT, control_style};

/// Events emitted by the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    Back,
    Next,
    Previous,
    ToggleHints,
    ToggleAnswer,
}

/// Key bindings for the review screen. Holds no state.
pub struct ReviewKeys;

impl EventHandler for ReviewKeys {
    type Event = ReviewEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ReviewEvent> {
        match event {
            TuiEvent::Back => Some(ReviewEvent::Back),
            TuiEvent::CursorRight => Some(ReviewEvent::Next),
            TuiEvent::CursorLeft => Some(ReviewEvent::Previous),
            TuiEvent::InputChar('h') => Some(ReviewEvent::ToggleHints),
            TuiEvent::InputChar('a') | TuiEvent::InputChar(' ') | TuiEvent::Submit => {
                Some(ReviewEvent::ToggleAnswer)
            }
            _ => None,
        }
    }
}

/// Wrap `text` to `width` columns with the given indents.
fn wrap_lines(text: &str, width: usize, initial: &str, subsequent: &str) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(initial)
        .subsequent_indent(subsequent)
        .break_words(true);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Transient render wrapper for the review screen.
pub struct ReviewSession<'a> {
    view: &'a ReviewView<'a>,
}

impl<'a> ReviewSession<'a> {
    pub fn new(view: &'a ReviewView<'a>) -> Self {
        Self { view }
    }

    /// Body of the question card, already wrapped to `width`.
    fn card_lines(&self, width: usize) -> Vec<Line<'static>> {
        let view = self.view;
        let Some(question) = view.question else {
            return vec![Line::styled(
                "No questions for this topic yet.",
                Style::default().fg(Color::DarkGray),
            )];
        };

        let mut lines = Vec::new();
        for row in wrap_lines(&question.prompt, width, "", "") {
            lines.push(Line::styled(row, Style::default().add_modifier(Modifier::BOLD)));
        }
        lines.push(Line::from(""));

        let hints_label = if view.hints_visible { "Hide Hints" } else { "Show Hints" };
        lines.push(Line::from(vec![
            Span::styled("[h] ", Style::default().fg(Color::DarkGray)),
            Span::styled(hints_label, Style::default().fg(ACCENT)),
        ]));
        if view.hints_visible {
            if question.hints.is_empty() {
                lines.push(Line::styled(
                    "  No hints for this one.",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            for hint in &question.hints {
                for row in wrap_lines(hint, width, "  • ", "    ") {
                    lines.push(Line::styled(row, Style::default().fg(Color::Gray)));
                }
            }
        }
        lines.push(Line::from(""));

        let answer_label = if view.answer_visible { "Hide Answer" } else { "Show Answer" };
        lines.push(Line::from(vec![
            Span::styled("[a] ", Style::default().fg(Color::DarkGray)),
            Span::styled(answer_label, Style::default().fg(Color::Green)),
        ]));
        if view.answer_visible {
            for row in wrap_lines(&question.answer, width, "  ", "  ") {
                lines.push(Line::raw(row));
            }
        }
        lines
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [counter_area, gauge_area, _gap, body_area] =
            Layout::vertical([Length(1), Length(1), Length(1), Min(0)]).areas(inner);

        let [question_area, percent_area] =
            Layout::horizontal([Min(0), Length(16)]).areas(counter_area);
        if self.view.question.is_some() {
            frame.render_widget(
                Paragraph::new(format!("Question {}/{}", self.view.number, self.view.total))
                    .style(Style::default().fg(Color::Gray)),
                question_area,
            );
        }
        frame.render_widget(
            Paragraph::new(format!("Progress: {}%", self.view.progress_percent))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Right),
            percent_area,
        );

        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(ACCENT))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label("")
            .ratio(f64::from(self.view.progress_percent) / 100.0);
        frame.render_widget(gauge, gauge_area);

        let body = Paragraph::new(self.card_lines(body_area.width as usize));
        frame.render_widget(body, body_area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        frame.render_widget(
            Paragraph::new(Span::styled("◀ Previous", control_style(self.view.can_previous))),
            left,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Next ▶", control_style(self.view.can_next)))
                .alignment(Alignment::Right),
            right,
        );
    }
}

impl Component for ReviewSession<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [back_area, _, title_area, _, card_area, controls_area] =
            Layout::vertical([Length(1), Length(1), Length(1), Length(1), Min(0), Length(1)])
                .areas(area);

        frame.render_widget(
            Line::styled("← Back to Topic", Style::default().fg(Color::Gray)),
            back_area,
        );
        frame.render_widget(
            Line::styled(
                format!("Reviewing: {}", self.view.topic.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            title_area,
        );
        self.render_card(frame, card_area);
        self.render_controls(frame, controls_area);
    }
}
