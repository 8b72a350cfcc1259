use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck must contain at least one slide")]
    EmptyDeck,

    #[error("slide index {index} is out of range for a deck of {len} slides")]
    OutOfRange { index: i64, len: usize },

    #[error("counter `{element}` has a non-integer target: {raw:?}")]
    InvalidTarget { element: String, raw: String },

    #[error("failed to load chart resource `{resource}`: {reason}")]
    LibraryLoad { resource: String, reason: String },

    #[error("chart library is not loaded")]
    LibraryNotLoaded,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid deck manifest: {0}")]
    InvalidManifest(String),
}
