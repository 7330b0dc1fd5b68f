use thiserror::Error;
use validator::ValidationErrors;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS, body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status or a
    /// non-`"success"` envelope status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Form validation failed before the request was sent.
    #[error("validation failed: {}", format_validation_errors(.0))]
    Validation(#[from] ValidationErrors),

    #[error("not authenticated, run `delpresence auth login`")]
    Unauthenticated,

    #[error("token expired, run `delpresence auth login` with a fresh token")]
    TokenExpired,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// HTTP status carried by the error, if the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Flattens validator errors into a single line.
///
/// Fields are sorted so the output is stable. Errors without a custom
/// message fall back to `"<field> is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_of_api_error() {
        let err = ApiError::api(409, "conflict");
        assert_eq!(err.status(), Some(409));
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_of_non_http_errors() {
        assert_eq!(ApiError::Unauthenticated.status(), None);
        assert_eq!(ApiError::parse("bad body").status(), None);
    }

    #[test]
    fn test_display_api_error() {
        let err = ApiError::api(404, "course not found");
        assert_eq!(err.to_string(), "API error (404): course not found");
    }

    #[test]
    fn test_format_validation_errors_uses_messages_and_fallback() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("length").with_message("Nama wajib diisi".into()),
        );
        errors.add("code", ValidationError::new("length"));

        let formatted = format_validation_errors(&errors);
        assert_eq!(formatted, "code is invalid, Nama wajib diisi");
    }

    #[test]
    fn test_serde_json_error_becomes_parse() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
