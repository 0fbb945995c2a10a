//! Validation outcomes and rejection reasons

use std::fmt;

/// Why a submitted word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    TooShort,
    AlreadyUsed,
    NotPossible,
    NotAWord,
}

impl RejectionKind {
    /// Short heading suitable for an alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::AlreadyUsed => "Word already used",
            Self::NotPossible => "Word not possible",
            Self::NotAWord => "Come on.",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A rejected submission: the reason plus a message for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    kind: RejectionKind,
    detail: String,
}

impl Rejection {
    #[must_use]
    pub fn too_short() -> Self {
        Self {
            kind: RejectionKind::TooShort,
            detail: "Choose 4 or more letters.".to_string(),
        }
    }

    #[must_use]
    pub fn already_used() -> Self {
        Self {
            kind: RejectionKind::AlreadyUsed,
            detail: "Be more original!".to_string(),
        }
    }

    #[must_use]
    pub fn not_possible(word: &str, root: &str) -> Self {
        Self {
            kind: RejectionKind::NotPossible,
            detail: format!("You can't spell {word} from {root}"),
        }
    }

    #[must_use]
    pub fn not_a_word() -> Self {
        Self {
            kind: RejectionKind::NotAWord,
            detail: "Use a real word!".to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Human-readable message to show the player
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.detail)
    }
}

impl std::error::Error for Rejection {}

/// Result of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Word passed every rule; holds the normalized form
    Accepted(String),
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => Some(rejection.kind()),
        }
    }

    /// Convert into a `Result`, with the accepted word on success
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` if the word was turned down.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            Self::Accepted(word) => Ok(word),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

impl From<Result<String, Rejection>> for Verdict {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(word) => Self::Accepted(word),
            Err(rejection) => Self::Rejected(rejection),
        }
    }
}
