//! # Dashboard Component
//!
//! Root screen: category list plus the "Upcoming Reviews" and
//! "Recent Progress" panels.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DashboardState` (cursor) lives in `TuiState`
//! - `Dashboard` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::model::{Category, RecentProgress, UpcomingReview};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::style::{ACCENT, badge, category_glyph, progress_status_style, truncate_str};
use unicode_width::UnicodeWidthStr;

/// Cursor over the category list. Persisted across frames.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub selected: usize,
    /// Number of categories on screen, synced before events are handled.
    pub len: usize,
    pub list_state: ListState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }
}

/// Events emitted by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Open the category at this index.
    Open(usize),
    Quit,
}

impl EventHandler for DashboardState {
    type Event = DashboardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DashboardEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight if self.len > 0 => {
                Some(DashboardEvent::Open(self.selected))
            }
            // 1-9 jump straight into a category
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)?.checked_sub(1)? as usize;
                if index < self.len {
                    self.selected = index;
                    self.list_state.select(Some(index));
                    Some(DashboardEvent::Open(index))
                } else {
                    None
                }
            }
            TuiEvent::Quit => Some(DashboardEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the dashboard.
pub struct Dashboard<'a> {
    state: &'a mut DashboardState,
    categories: &'a [Category],
    upcoming: &'a [UpcomingReview],
    recent: &'a [RecentProgress],
    show_upcoming: bool,
    show_recent: bool,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        state: &'a mut DashboardState,
        categories: &'a [Category],
        upcoming: &'a [UpcomingReview],
        recent: &'a [RecentProgress],
        show_upcoming: bool,
        show_recent: bool,
    ) -> Self {
        Self {
            state,
            categories,
            upcoming,
            recent,
            show_upcoming,
            show_recent,
        }
    }

    fn render_categories(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Categories ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.categories.is_empty() {
            let empty = Paragraph::new("No categories in this deck.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .categories
            .iter()
            .map(|category| {
                let glyph = category_glyph(category.icon);
                let count = format!("{} topics", category.topic_count);
                let percent = format!("{:>3}%", category.progress);
                // "</>  Technical ....  25 topics  65%"
                let fixed = glyph.width() + 2 + 2 + count.len() + 2 + percent.len();
                let name_width = inner_width.saturating_sub(fixed);
                let name = truncate_str(&category.name, name_width);
                ListItem::new(Line::from(vec![
                    Span::styled(glyph, Style::default().fg(ACCENT)),
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<width$}", name, width = name_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(count, Style::default().fg(Color::Gray)),
                    Span::raw("  "),
                    Span::styled(percent, Style::default().fg(ACCENT)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn render_upcoming(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(4) as usize;
        let mut lines = Vec::new();
        for review in self.upcoming {
            let due = format!("Due in {}", review.due_in);
            let topic_width = width.saturating_sub(due.len() + 1);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<w$}", truncate_str(&review.topic, topic_width), w = topic_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(due, Style::default().fg(Color::Yellow)),
            ]));
            lines.push(Line::styled(
                review.category.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if lines.is_empty() {
            lines.push(Line::styled("Nothing due.", Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Paragraph::new(lines).block(panel_block(" Upcoming Reviews ")), area);
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(4) as usize;
        let mut lines = Vec::new();
        for entry in self.recent {
            let label = entry.status.label();
            let topic_width = width.saturating_sub(label.len() + 3);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<w$}", truncate_str(&entry.topic, topic_width), w = topic_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge(label, progress_status_style(entry.status)),
            ]));
            lines.push(Line::styled(
                entry.category.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if lines.is_empty() {
            lines.push(Line::styled(
                "No recent activity.",
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(lines).block(panel_block(" Recent Progress ")), area);
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1))
}

impl Component for Dashboard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let list_height = u16::try_from(self.categories.len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let [header_area, list_area, panels_area] =
            Layout::vertical([Length(2), Length(list_height), Min(0)]).areas(area);

        let header = Paragraph::new(Line::styled(
            "Interview Preparation Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(header, header_area);

        self.render_categories(frame, list_area);

        match (self.show_upcoming, self.show_recent) {
            (true, true) => {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(panels_area);
                self.render_upcoming(frame, left);
                self.render_recent(frame, right);
            }
            (true, false) => self.render_upcoming(frame, panels_area),
            (false, true) => self.render_recent(frame, panels_area),
            (false, false) => {}
        }
    }
}
