//! Per-depth header counters.

use crate::config::COUNTER_SLOTS;

/// Counters for one numbering pass, one slot per header depth.
///
/// Slot `d - 1` counts the headers seen at depth `d` since the last header
/// of any shallower depth. Advancing at depth `d` clears every deeper slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    slots: Vec<usize>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            slots: vec![0; COUNTER_SLOTS],
        }
    }
}

impl CounterState {
    /// Create an all-zero counter state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all counters for a new pass.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.slots.resize(COUNTER_SLOTS, 0);
    }

    /// Register a header at `depth` (1-based).
    ///
    /// Depths past the preallocated slots grow the state instead of being
    /// clamped. A depth of zero is ignored.
    pub fn advance(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        if depth > self.slots.len() {
            self.slots.resize(depth, 0);
        }
        self.slots[depth - 1] += 1;
        for slot in &mut self.slots[depth..] {
            *slot = 0;
        }
    }

    /// Label segments for a header at `depth`: the non-zero counts of
    /// depths `2..=depth`, in order.
    #[must_use]
    pub fn label_segments(&self, depth: usize) -> Vec<usize> {
        let end = depth.min(self.slots.len());
        self.slots
            .get(1..end)
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|&count| count > 0)
            .collect()
    }

    /// Raw slot values, index 0 being depth 1.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        let state = CounterState::new();
        assert_eq!(state.slots().len(), COUNTER_SLOTS);
        assert!(state.slots().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_advance_resets_deeper_slots() {
        let mut state = CounterState::new();
        state.advance(1);
        state.advance(2);
        state.advance(3);
        state.advance(3);
        assert_eq!(&state.slots()[..3], &[1, 1, 2]);

        state.advance(2);
        assert_eq!(&state.slots()[..3], &[1, 2, 0]);

        state.advance(1);
        assert_eq!(&state.slots()[..3], &[2, 0, 0]);
    }

    #[test]
    fn test_label_segments_skip_zero_ancestors() {
        let mut state = CounterState::new();
        state.advance(1);
        state.advance(4);
        // Depths 2 and 3 were never seen under this H1
        assert_eq!(state.label_segments(4), vec![1]);
    }

    #[test]
    fn test_label_segments_depth_one_is_empty() {
        let mut state = CounterState::new();
        state.advance(1);
        assert!(state.label_segments(1).is_empty());
    }

    #[test]
    fn test_advance_grows_past_preallocated_slots() {
        let mut state = CounterState::new();
        state.advance(12);
        assert_eq!(state.slots().len(), 12);
        assert_eq!(state.slots()[11], 1);
        assert_eq!(state.label_segments(12), vec![1]);
    }

    #[test]
    fn test_reset() {
        let mut state = CounterState::new();
        state.advance(12);
        state.reset();
        assert_eq!(state, CounterState::new());
    }
}
