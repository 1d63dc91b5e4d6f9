/// Crate-wide result alias.
pub type ReelResult<T> = Result<T, ReelError>;

/// Errors raised for static invariant violations.
///
/// Runtime preconditions that the page is expected to hit (an element that is not mounted yet,
/// no pinned sections, zero scroll distance) are never reported through this type; those paths
/// log and return early instead.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration or declaration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid timeline segment or timeline construction.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Invalid scroll binding.
    #[error("binding error: {0}")]
    Binding(String),

    /// Layout measurement that cannot be turned into scroll ranges.
    #[error("layout error: {0}")]
    Layout(String),

    /// Config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with preserved source.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ReelError::Binding`].
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }

    /// Build a [`ReelError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ReelError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
