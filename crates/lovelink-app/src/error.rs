use thiserror::Error;

/// Operation declines. None are fatal: the caller surfaces a notice and
/// moves on, and the store is left untouched.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no acting identity supplied")]
    NotSignedIn,

    #[error("message text is empty")]
    EmptyMessage,

    #[error("rating must be between 1 and 5")]
    InvalidRating,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
