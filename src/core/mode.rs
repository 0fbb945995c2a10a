//! Difficulty mode

use std::fmt;

/// Difficulty flag controlling the minimum word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Any non-empty word is long enough
    #[default]
    Normal,
    /// Words need at least four letters
    Hard,
}

impl Mode {
    #[must_use]
    pub const fn from_hard(hard: bool) -> Self {
        if hard { Self::Hard } else { Self::Normal }
    }

    #[must_use]
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Hard)
    }

    /// A word is long enough only when its letter count is strictly greater
    /// than this value
    #[must_use]
    pub const fn length_floor(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Hard => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hard_maps_flag() {
        assert_eq!(Mode::from_hard(true), Mode::Hard);
        assert_eq!(Mode::from_hard(false), Mode::Normal);
        assert!(Mode::Hard.is_hard());
        assert!(!Mode::default().is_hard());
    }

    #[test]
    fn length_floors() {
        assert_eq!(Mode::Normal.length_floor(), 0);
        assert_eq!(Mode::Hard.length_floor(), 3);
    }
}
