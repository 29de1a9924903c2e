use oxentail::OwlError;
use oxrdf::NamedNode;

/// Errors raised by the temporal extension.
///
/// Incomplete temporal data is never an error: the algebra just does not establish
/// the relation.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    #[error("The {0} interval identifier is missing")]
    MissingIntervalIdentifier(&'static str),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Owl(#[from] OwlError),
}

pub type TimeResult<T> = Result<T, TimeError>;

/// A [`TimeRegistry`](crate::TimeRegistry) lookup or registration failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown time unit {0}")]
    UnknownUnit(NamedNode),
    #[error("Unknown temporal reference system {0}")]
    UnknownReferenceSystem(NamedNode),
    #[error("{0} is not a positional temporal reference system")]
    NotPositional(NamedNode),
    #[error("{0} is not a calendar")]
    NotCalendar(NamedNode),
    #[error("{0} is already registered")]
    AlreadyRegistered(NamedNode),
}
