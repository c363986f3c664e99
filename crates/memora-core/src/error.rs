/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The given string does not name an exercise in the catalog.
    #[error("unknown exercise: \"{0}\"")]
    UnknownExercise(String),

    /// A statistics value fell outside its valid range.
    #[error("invalid stats: {0}")]
    InvalidStats(String),
}
