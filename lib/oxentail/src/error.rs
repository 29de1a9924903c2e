//! Error and warning types.

use std::fmt;

/// Errors that can occur while building an ontology or reasoning over it.
#[derive(Debug, thiserror::Error)]
pub enum OwlError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(#[from] oxiri::IriParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Reasoning(#[from] ReasoningError),
}

/// Result type for OWL operations.
pub type OwlResult<T> = Result<T, OwlError>;

/// A structurally invalid declaration, rejected before it reaches the ontology.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required operand is absent.
    MissingArgument,
    /// An individual is declared same as, or different from, itself.
    SelfReference,
    /// An n-ary axiom was given fewer than two operands.
    TooFewOperands,
    InvalidCardinality,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingArgument => "missing argument",
            Self::SelfReference => "self reference",
            Self::TooFewOperands => "too few operands",
            Self::InvalidCardinality => "invalid cardinality",
        })
    }
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_argument(argument: &str) -> Self {
        Self::new(
            ValidationErrorKind::MissingArgument,
            format!("the {argument} argument is required"),
        )
    }

    pub fn self_reference(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::SelfReference, message)
    }

    pub fn too_few_operands(axiom: &str, count: usize) -> Self {
        Self::new(
            ValidationErrorKind::TooFewOperands,
            format!("{axiom} requires at least 2 operands, got {count}"),
        )
    }

    pub fn invalid_cardinality(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidCardinality, message)
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A reasoning run that hit one of the configured limits.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ReasoningError {
    kind: ReasoningErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningErrorKind {
    MaxIterationsExceeded,
    MaxInferencesExceeded,
    Timeout,
}

impl fmt::Display for ReasoningErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MaxIterationsExceeded => "maximum iterations exceeded",
            Self::MaxInferencesExceeded => "maximum inferences exceeded",
            Self::Timeout => "timeout",
        })
    }
}

impl ReasoningError {
    pub fn max_iterations_exceeded(iterations: usize) -> Self {
        Self {
            kind: ReasoningErrorKind::MaxIterationsExceeded,
            message: format!("no fixpoint reached after {iterations} passes"),
        }
    }

    pub fn max_inferences_exceeded(limit: usize) -> Self {
        Self {
            kind: ReasoningErrorKind::MaxInferencesExceeded,
            message: format!("more than {limit} axioms inferred"),
        }
    }

    pub fn timeout(timeout: std::time::Duration) -> Self {
        Self {
            kind: ReasoningErrorKind::Timeout,
            message: format!("reasoning took longer than {}ms", timeout.as_millis()),
        }
    }

    pub fn kind(&self) -> ReasoningErrorKind {
        self.kind
    }
}

/// A declaration that was discarded because it would break OWL-DL integrity.
///
/// Unlike [`ValidationError`] this is not a failure: the ontology stays usable and
/// the offending axiom is simply not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwlWarning {
    kind: WarningKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Two individuals would be both same and different.
    SameAndDifferent,
    /// A property assertion contradicts a negative property assertion.
    NegativeAssertionConflict,
}

impl OwlWarning {
    pub(crate) fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> WarningKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OwlWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
