use crate::types::Dialect;

/// Failures of the conjugation contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConjugationError {
    /// The dialect has no rule for this (stem, root type, parameter)
    /// combination. Recoverable: callers enumerating forms skip it.
    #[error("{dialect} cannot produce this form: {detail}")]
    UnsupportedConfiguration { dialect: Dialect, detail: String },
    #[error("invalid parameter combination: {0}")]
    InvalidParameterCombination(String),
    #[error("stem 1 requires a stem-1 context (perfect and present vowels)")]
    MissingStem1Context,
    #[error("a root needs 3 or 4 radicals, got {0}")]
    UnsupportedRoot(usize),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ConjugationError {
    pub fn unsupported(dialect: Dialect, detail: impl Into<String>) -> Self {
        ConjugationError::UnsupportedConfiguration {
            dialect,
            detail: detail.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ConjugationError::UnsupportedConfiguration { .. })
    }
}

/// Malformed vocalized or transliterated text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("diacritic {mark:?} at position {position} has no letter to attach to")]
    OrphanMark { mark: char, position: usize },
    #[error("letter at position {position} carries two vowel marks")]
    ConflictingMarks { position: usize },
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}
