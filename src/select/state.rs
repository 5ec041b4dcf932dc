// Open/closed visibility, keyboard highlight, animation flags.

use serde::{Deserialize, Serialize};

/// Upper bound for keyboard highlight movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightBound {
    /// Stops on the last option.
    #[default]
    Last,
    /// May step one past the last option; commits from there are ignored.
    PastEnd,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub is_open: bool,
    pub highlighted: usize,
    pub entering: bool,
    pub exiting: bool,
}

impl InteractionState {
    /// Any real transition resets the highlight to the first option.
    pub fn set_open(&mut self, open: bool) {
        if self.is_open != open {
            self.is_open = open;
            self.highlighted = 0;
        }
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    /// Step the highlight by one. Returns false when the step would leave
    /// the allowed range, in which case nothing changes.
    pub fn step_highlight(&mut self, down: bool, len: usize, bound: HighlightBound) -> bool {
        let max = match bound {
            HighlightBound::Last => len.saturating_sub(1),
            HighlightBound::PastEnd => len,
        };
        let next = if down {
            self.highlighted + 1
        } else {
            match self.highlighted.checked_sub(1) {
                Some(i) => i,
                None => return false,
            }
        };
        if next > max {
            return false;
        }
        self.highlighted = next;
        true
    }

    pub fn clear_flags(&mut self) {
        self.entering = false;
        self.exiting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_reset_highlight() {
        let mut s = InteractionState::default();
        s.set_open(true);
        s.highlighted = 3;
        s.set_open(false);
        assert_eq!(s.highlighted, 0);

        s.set_open(true);
        s.highlighted = 2;
        s.toggle();
        assert!(!s.is_open);
        assert_eq!(s.highlighted, 0);
    }

    #[test]
    fn no_transition_keeps_highlight() {
        let mut s = InteractionState { is_open: true, highlighted: 2, ..Default::default() };
        s.set_open(true);
        assert_eq!(s.highlighted, 2);
    }

    #[test]
    fn clamps_at_last_option() {
        let mut s = InteractionState { is_open: true, highlighted: 1, ..Default::default() };
        assert!(s.step_highlight(true, 3, HighlightBound::Last));
        assert_eq!(s.highlighted, 2);
        assert!(!s.step_highlight(true, 3, HighlightBound::Last));
        assert_eq!(s.highlighted, 2);
    }

    #[test]
    fn past_end_allows_len() {
        let mut s = InteractionState { is_open: true, highlighted: 2, ..Default::default() };
        assert!(s.step_highlight(true, 3, HighlightBound::PastEnd));
        assert_eq!(s.highlighted, 3);
        assert!(!s.step_highlight(true, 3, HighlightBound::PastEnd));
        assert_eq!(s.highlighted, 3);
    }

    #[test]
    fn never_below_zero() {
        let mut s = InteractionState { is_open: true, ..Default::default() };
        assert!(!s.step_highlight(false, 3, HighlightBound::Last));
        assert_eq!(s.highlighted, 0);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut s = InteractionState { is_open: true, ..Default::default() };
        assert!(!s.step_highlight(true, 0, HighlightBound::Last));
        assert_eq!(s.highlighted, 0);
    }
}
