//! Shared colors, glyphs and text helpers for the screens.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::model::{CategoryIcon, Difficulty, ProgressStatus, TopicStatus};

pub const ACCENT: Color = Color::Blue;

pub fn category_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Code => "</>",
        CategoryIcon::Brain => "(@)",
        CategoryIcon::Database => "[=]",
        CategoryIcon::BookOpen => "[|]",
    }
}

pub fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Easy => Style::default().fg(Color::Green),
        Difficulty::Medium => Style::default().fg(Color::Yellow),
        Difficulty::Hard => Style::default().fg(Color::Red),
    }
}

pub fn topic_status_style(status: TopicStatus) -> Style {
    match status {
        TopicStatus::Mastered => Style::default().fg(Color::Green),
        TopicStatus::InProgress => Style::default().fg(Color::Blue),
        TopicStatus::ReviewNeeded => Style::default().fg(Color::Yellow),
    }
}

pub fn progress_status_style(status: ProgressStatus) -> Style {
    match status {
        ProgressStatus::Mastered => Style::default().fg(Color::Green),
        ProgressStatus::InProgress => Style::default().fg(Color::Blue),
        ProgressStatus::Started => Style::default().fg(Color::Gray),
    }
}

/// `[ label ]` rendered in the given style.
pub fn badge(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[{label}]"), style.add_modifier(Modifier::BOLD))
}

/// Style for a button-like control that may be disabled.
pub fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// Truncate to `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_str("Kafka", 10), "Kafka");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("System Design Basics", 10), "System ...");
        assert_eq!(truncate_str("System Design Basics", 10).width(), 10);
    }

    #[test]
    fn test_truncate_counts_wide_chars_by_column() {
        // Each CJK char is two columns wide
        let cut = truncate_str("面试准备面试准备", 7);
        assert_eq!(cut, "面试...");
        assert!(cut.width() <= 7);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_str("Elasticsearch", 2), "..");
    }

    #[test]
    fn test_disabled_control_is_dimmed() {
        assert!(control_style(false).add_modifier.contains(Modifier::DIM));
        assert!(!control_style(true).add_modifier.contains(Modifier::DIM));
    }
}
