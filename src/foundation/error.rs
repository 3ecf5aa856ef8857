/// Crate-wide result alias.
pub type FlourishResult<T> = Result<T, FlourishError>;

/// All failure modes of the crate.
///
/// Every runtime failure here is a configuration problem surfaced eagerly
/// at construction; the per-frame paths never fail.
#[derive(thiserror::Error, Debug)]
pub enum FlourishError {
    /// A config or input value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlourishError {
    /// Shorthand for a [`FlourishError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
