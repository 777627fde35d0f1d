// SPDX-License-Identifier: MPL-2.0
//! Open/closed flag and current index of the gallery viewer.
//!
//! Transitions are crate-private: only the viewer's own operations may
//! mutate the state. Index arithmetic takes the image count as a parameter
//! and treats a zero count as "nothing to navigate".

/// Snapshot of the viewer's visibility and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    is_open: bool,
    current_index: usize,
}

impl ViewerState {
    /// Initial state: closed, positioned on the first image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Index of the current (or last viewed) image.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Opens on `index`. The caller guarantees `index < len`.
    pub(crate) fn open_at(&mut self, index: usize) {
        self.current_index = index;
        self.is_open = true;
    }

    /// Closes the viewer. Returns `false` if it was already closed.
    pub(crate) fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    /// Moves to the next index, wrapping to 0. Returns `false` for an empty set.
    pub(crate) fn advance(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.current_index = (self.current_index + 1) % len;
        true
    }

    /// Moves to the previous index, wrapping to `len - 1`. Returns `false` for an empty set.
    pub(crate) fn retreat(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.current_index = (self.current_index % len + len - 1) % len;
        true
    }
}

/// Position of the current image within its set, for labels and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePosition {
    /// 0-based index.
    pub index: usize,
    /// Number of images in the set.
    pub total: usize,
}

impl ImagePosition {
    /// 1-based position as shown to users.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> ViewerState {
        let mut state = ViewerState::new();
        state.open_at(index);
        state
    }

    #[test]
    fn starts_closed_at_zero() {
        let state = ViewerState::new();
        assert!(!state.is_open());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut state = at(2);
        assert!(state.advance(3));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut state = at(0);
        assert!(state.retreat(3));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn advancing_len_times_is_cyclic() {
        for len in 1..6 {
            for start in 0..len {
                let mut state = at(start);
                for _ in 0..len {
                    state.advance(len);
                }
                assert_eq!(state, at(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn retreat_is_inverse_of_advance() {
        for len in 1..6 {
            for start in 0..len {
                let mut forward_back = at(start);
                forward_back.advance(len);
                forward_back.retreat(len);
                assert_eq!(forward_back, at(start));

                let mut back_forward = at(start);
                back_forward.retreat(len);
                back_forward.advance(len);
                assert_eq!(back_forward, at(start));
            }
        }
    }

    #[test]
    fn empty_set_leaves_state_unchanged() {
        let mut state = ViewerState::new();
        assert!(!state.advance(0));
        assert!(!state.retreat(0));
        assert_eq!(state, ViewerState::new());
    }

    #[test]
    fn close_reports_whether_it_changed_anything() {
        let mut state = at(1);
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state.current_index(), 1, "last viewed index is kept");
    }

    #[test]
    fn ordinal_is_one_based() {
        let position = ImagePosition { index: 0, total: 3 };
        assert_eq!(position.ordinal(), 1);
    }
}
