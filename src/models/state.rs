/// First value the countdown emits.
pub const COUNTDOWN_START: u32 = 5;

/// The descending counter behind the countdown loop.
///
/// Yields every value from its start down to 1 exactly once, then stays
/// exhausted. Only the emitter mutates it, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    remaining: u32,
}

impl CountdownState {
    pub fn new() -> Self {
        Self::starting_at(COUNTDOWN_START)
    }

    /// A counter that starts at `start`. A start of 0 yields nothing.
    pub fn starting_at(start: u32) -> Self {
        Self { remaining: start }
    }

    /// The value the next step will consume, if any.
    pub fn current(&self) -> Option<u32> {
        (self.remaining > 0).then_some(self.remaining)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CountdownState {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.current()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CountdownState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_from_five() {
        let values: Vec<u32> = CountdownState::new().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_exhausted_after_one() {
        let mut state = CountdownState::starting_at(1);
        assert_eq!(state.current(), Some(1));
        assert_eq!(state.next(), Some(1));
        assert!(state.is_exhausted());
        assert_eq!(state.next(), None);
        assert_eq!(state.next(), None);
    }

    #[test]
    fn test_zero_start_yields_nothing() {
        let mut state = CountdownState::starting_at(0);
        assert!(state.is_exhausted());
        assert_eq!(state.len(), 0);
        assert_eq!(state.next(), None);
    }
}
