//! Click-toggle state for the demo controls.

/// Two-position toggle for a clickable control.
///
/// Mirrors the active/inactive tagging of the header controls: inactive
/// controls render in ink, active controls in the blood orange accent (or,
/// for the bill control, with the badge shown).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ControlState {
    #[default]
    Inactive,
    Active,
}

impl ControlState {
    /// Flip to the other position.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Inactive => Self::Active,
            Self::Active => Self::Inactive,
        }
    }

    /// Whether the control is in the active position.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        assert_eq!(ControlState::default(), ControlState::Inactive);
        assert!(!ControlState::default().is_active());
    }

    #[test]
    fn test_toggle_cycle() {
        let s = ControlState::Inactive;
        let s = s.toggle();
        assert!(s.is_active());
        let s = s.toggle();
        assert_eq!(s, ControlState::Inactive);
    }
}
