//! Error types for deck lookups, draws, and formatting.

/// Alias for `Result<T, TarotError>`.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while drawing or looking up cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TarotError {
    /// A caller-supplied value is outside the accepted range or vocabulary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A search, suit, or name lookup matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected failure inside the engine.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TarotError {
    /// Build a [`TarotError::NotFound`] for a query that matched no card.
    pub fn no_card_matching(query: &str) -> Self {
        Self::NotFound(format!("no card found matching '{query}'"))
    }
}
