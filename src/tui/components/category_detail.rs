//! # CategoryDetail Component
//!
//! Topic cards for one category, each with difficulty/status badges,
//! progress, review dates and a "Start Review" control.
//!
//! The card list lives in a `ScrollView`; the selected card is always kept
//! fully visible. Only a window of up to `WINDOW_CARDS` cards around the
//! selection is laid out, so the canvas stays small however many topics a
//! deck has.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::model::{Category, Topic};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::style::{
    ACCENT, badge, category_glyph, control_style, difficulty_style, topic_status_style,
    truncate_str,
};

/// Rows per topic card: two borders plus three lines of content.
pub const CARD_HEIGHT: u16 = 5;

/// Cards laid out on the scroll canvas at once.
pub const WINDOW_CARDS: usize = 64;

/// Canvas row where the card at `index` starts.
fn card_offset(index: usize) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(CARD_HEIGHT)
}

/// Cursor and scroll position over the topic cards.
#[derive(Default)]
pub struct TopicListState {
    pub selected: usize,
    pub len: usize,
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for keeping the selection in view)
    pub viewport_height: u16,
    /// Index of the first card on the scroll canvas.
    pub window_start: usize,
}

impl TopicListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.window_start = self.window_start.min(self.selected);
    }

    /// Range of topic indices currently on the scroll canvas.
    pub fn window(&self) -> std::ops::Range<usize> {
        let end = self.window_start.saturating_add(WINDOW_CARDS).min(self.len);
        self.window_start.min(end)..end
    }

    /// Move the canvas window so it contains the selection, keeping the
    /// on-screen position of the cards unchanged.
    fn shift_window(&mut self) {
        if self.window().contains(&self.selected) {
            return;
        }
        let new_start = self
            .selected
            .saturating_sub(WINDOW_CARDS / 2)
            .min(self.len.saturating_sub(WINDOW_CARDS));
        let card_rows = usize::from(CARD_HEIGHT);
        let absolute = self
            .window_start
            .saturating_mul(card_rows)
            .saturating_add(usize::from(self.scroll_state.offset().y));
        let relative = absolute.saturating_sub(new_start.saturating_mul(card_rows));
        self.window_start = new_start;
        self.scroll_state.set_offset(Position {
            x: 0,
            y: u16::try_from(relative).unwrap_or(u16::MAX),
        });
    }

    /// Scroll so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        if self.len == 0 || self.viewport_height == 0 {
            return;
        }
        self.shift_window();
        let card_top = card_offset(self.selected - self.window_start);
        let card_bottom = card_top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if card_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: card_top });
        } else if card_bottom > offset_y.saturating_add(self.viewport_height) {
            let new_y = card_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

/// Events emitted by the category screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryEvent {
    /// Review the topic at this index.
    StartReview(usize),
    Back,
}

impl EventHandler for TopicListState {
    type Event = CategoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.scroll_to_selected();
                }
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight if self.len > 0 => {
                Some(CategoryEvent::StartReview(self.selected))
            }
            TuiEvent::Back | TuiEvent::CursorLeft => Some(CategoryEvent::Back),
            _ => None,
        }
    }
}

/// Transient render wrapper for the category screen.
pub struct CategoryDetail<'a> {
    state: &'a mut TopicListState,
    category: &'a Category,
    topics: &'a [Topic],
}

impl<'a> CategoryDetail<'a> {
    pub fn new(state: &'a mut TopicListState, category: &'a Category, topics: &'a [Topic]) -> Self {
        Self {
            state,
            category,
            topics,
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled("← Back to Dashboard", Style::default().fg(Color::Gray)),
            Line::from(""),
            Line::from(vec![
                Span::styled(category_glyph(self.category.icon), Style::default().fg(ACCENT)),
                Span::raw("  "),
                Span::styled(
                    self.category.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::styled(
                format!("{} topics", self.topics.len()),
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// A single topic card. Always `CARD_HEIGHT` rows tall.
fn topic_card(topic: &Topic, width: u16, selected: bool) -> Paragraph<'static> {
    let inner = width.saturating_sub(4) as usize;
    let percent = format!("{}%", topic.progress);
    let difficulty = badge(topic.difficulty.label(), difficulty_style(topic.difficulty));
    let status = badge(topic.status.label(), topic_status_style(topic.status));
    let badges_width = difficulty.width() + 1 + status.width() + 2 + percent.len();
    let title = truncate_str(&topic.title, inner.saturating_sub(badges_width));

    let title_line = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        difficulty,
        Span::raw(" "),
        status,
        Span::raw("  "),
        Span::styled(percent, Style::default().fg(ACCENT)),
    ]);
    let dates_line = Line::styled(
        truncate_str(
            &format!(
                "Last reviewed: {}   Next review: {}",
                topic.last_reviewed, topic.next_review
            ),
            inner,
        ),
        Style::default().fg(Color::Gray),
    );
    let start_label = if selected { "▶ Start Review" } else { "  Start Review" };
    let start_line = Line::styled(start_label, control_style(selected));

    let border_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(vec![title_line, dates_line, start_line]).block(
        Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    )
}

impl Component for CategoryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [header_area, _gap, cards_area] =
            Layout::vertical([Length(4), Length(1), Min(0)]).areas(area);
        self.render_header(frame, header_area);

        if self.topics.is_empty() {
            let empty = Paragraph::new("No topics in this category yet.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, cards_area);
            return;
        }

        // Leave a column for the scrollbar
        let content_width = cards_area.width.saturating_sub(1);

        self.state.set_len(self.topics.len());
        self.state.viewport_height = cards_area.height;
        self.state.scroll_to_selected();

        let window = self.state.window();
        let total_height = card_offset(window.len());
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (row, index) in window.clone().enumerate() {
            let rect = Rect::new(0, card_offset(row), content_width, CARD_HEIGHT);
            let selected = index == self.state.selected;
            let card = topic_card(&self.topics[index], content_width, selected);
            scroll_view.render_widget(card, rect);
        }

        frame.render_stateful_widget(scroll_view, cards_area, &mut self.state.scroll_state);
    }
}
