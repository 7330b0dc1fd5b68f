use delpresence_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated, run `delpresence auth login`")]
    NotAuthenticated,

    #[error("token expired, run `delpresence auth login` with a fresh token")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token store error: {0}")]
    TokenStore(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthenticated => ApiError::Unauthenticated,
            AuthError::TokenExpired => ApiError::TokenExpired,
            other => ApiError::Config(other.to_string()),
        }
    }
}
