//! Touched Tracker.
//!
//! A field is touched once the user has left it, or once a submit was
//! attempted. The flag is monotonic: only an explicit reset clears it.

/// Merges the field-local flag with an externally supplied override.
pub fn effective_touched(local: bool, external: bool) -> bool {
    local || external
}

/// Local touched flag of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchState {
    touched: bool,
}

impl TouchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The field lost focus.
    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Submission forces every field touched.
    pub fn force(&mut self) {
        self.touched = true;
    }

    pub fn reset(&mut self) {
        self.touched = false;
    }

    /// Effective flag given an optional external override.
    pub fn merged(&self, external: Option<bool>) -> bool {
        effective_touched(self.touched, external.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, false)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(true, true, true)]
    fn test_effective_touched(#[case] local: bool, #[case] external: bool, #[case] expected: bool) {
        assert_eq!(effective_touched(local, external), expected);
    }

    #[test]
    fn test_blur_is_monotonic() {
        let mut state = TouchState::new();
        assert!(!state.is_touched());
        state.blur();
        state.blur();
        assert!(state.is_touched());
        state.force();
        assert!(state.is_touched());
    }

    #[test]
    fn test_reset_clears() {
        let mut state = TouchState::new();
        state.force();
        state.reset();
        assert!(!state.is_touched());
    }

    #[test]
    fn test_merged_with_override() {
        let state = TouchState::new();
        assert!(!state.merged(None));
        assert!(!state.merged(Some(false)));
        assert!(state.merged(Some(true)));
    }
}
