//! # Review Progress
//!
//! Position and disclosure state for one review session.
//!
//! ```text
//!  index:   0 ──next──▶ 1 ──next──▶ ... ──next──▶ n-1
//!             ◀─prev───   ◀─prev───       ◀─prev───
//!
//!  each index carries (hints_visible, answer_visible)
//!  both flags are cleared whenever the index moves
//! ```
//!
//! Moving past either end is a no-op. There is no "finished" state; the
//! session ends only when the user navigates back.

/// Transient state for a single review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewProgress {
    current_index: usize,
    question_count: usize,
    hints_visible: bool,
    answer_visible: bool,
}

impl ReviewProgress {
    /// Fresh session state: first question, nothing revealed.
    pub fn new(question_count: usize) -> Self {
        Self {
            current_index: 0,
            question_count,
            hints_visible: false,
            answer_visible: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn hints_visible(&self) -> bool {
        self.hints_visible
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.question_count
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance one question. Returns false (and changes nothing) at the last one.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        self.reset_disclosure();
        true
    }

    /// Step back one question. Returns false (and changes nothing) at the first one.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index -= 1;
        self.reset_disclosure();
        true
    }

    pub fn toggle_hints(&mut self) {
        self.hints_visible = !self.hints_visible;
    }

    pub fn toggle_answer(&mut self) {
        self.answer_visible = !self.answer_visible;
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_index, self.question_count)
    }

    fn reset_disclosure(&mut self) {
        self.hints_visible = false;
        self.answer_visible = false;
    }
}

/// `round((index + 1) / count * 100)`, rounding halves up. Zero for an empty session.
pub fn progress_percent(index: usize, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    let position = (index + 1).min(count);
    // (2·100·p + n) / 2n == floor(100·p/n + 1/2)
    ((200 * position + count) / (2 * count)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_first_question_hidden() {
        let progress = ReviewProgress::new(3);
        assert_eq!(progress.current_index(), 0);
        assert!(!progress.hints_visible());
        assert!(!progress.answer_visible());
        assert!(!progress.can_go_previous());
        assert!(progress.can_go_next());
    }

    #[test]
    fn test_next_advances_and_clears_flags() {
        let mut progress = ReviewProgress::new(2);
        progress.toggle_hints();
        progress.toggle_answer();

        assert!(progress.next());
        assert_eq!(progress.current_index(), 1);
        assert!(!progress.hints_visible());
        assert!(!progress.answer_visible());
    }

    #[test]
    fn test_next_is_noop_at_last_question() {
        let mut progress = ReviewProgress::new(2);
        progress.next();
        progress.toggle_answer();

        assert!(!progress.next());
        assert_eq!(progress.current_index(), 1);
        // A no-op leaves disclosure alone too
        assert!(progress.answer_visible());
    }

    #[test]
    fn test_previous_is_noop_at_first_question() {
        let mut progress = ReviewProgress::new(2);
        progress.toggle_hints();

        assert!(!progress.previous());
        assert_eq!(progress.current_index(), 0);
        assert!(progress.hints_visible());
    }

    #[test]
    fn test_previous_from_every_valid_index() {
        let count = 5;
        for start in 1..count {
            let mut progress = ReviewProgress::new(count);
            while progress.current_index() < start {
                progress.next();
            }
            progress.toggle_hints();
            progress.toggle_answer();

            assert!(progress.previous());
            assert_eq!(progress.current_index(), start - 1);
            assert!(!progress.hints_visible());
            assert!(!progress.answer_visible());
        }
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut progress = ReviewProgress::new(1);

        progress.toggle_hints();
        assert!(progress.hints_visible());
        assert!(!progress.answer_visible());

        progress.toggle_answer();
        assert!(progress.hints_visible());
        assert!(progress.answer_visible());

        progress.toggle_hints();
        assert!(!progress.hints_visible());
        assert!(progress.answer_visible());
    }

    #[test]
    fn test_progress_percent_two_questions() {
        assert_eq!(progress_percent(0, 2), 50);
        assert_eq!(progress_percent(1, 2), 100);
    }

    #[test]
    fn test_progress_percent_rounds_half_up() {
        assert_eq!(progress_percent(0, 8), 13); // 12.5
        assert_eq!(progress_percent(0, 3), 33); // 33.3
        assert_eq!(progress_percent(1, 3), 67); // 66.7
        assert_eq!(progress_percent(2, 3), 100);
    }

    #[test]
    fn test_empty_session_is_inert() {
        let mut progress = ReviewProgress::new(0);
        assert!(!progress.next());
        assert!(!progress.previous());
        assert_eq!(progress.current_index(), 0);
        assert_eq!(progress.progress_percent(), 0);
    }
}
