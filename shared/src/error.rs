pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Faults surfaced to the application root. Rule violations keep their own
/// error types and are handled where they occur.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid_seed_data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("navigation_unavailable")]
    NavigationUnavailable,
}
