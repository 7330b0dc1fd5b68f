//! Claims carried by DelPresence access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access token claims.
///
/// Only `exp` is required; the rest depend on the issuing backend version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject claim
    #[serde(default)]
    pub sub: Option<String>,
    /// Numeric user id
    #[serde(default, alias = "id")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    /// Role name (e.g. `Admin`, `Dosen`)
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default)]
    pub iat: Option<i64>,
}

impl Claims {
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Best available label for the token owner.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.sub.clone())
            .or_else(|| self.user_id.map(|id| format!("user #{id}")))
            .unwrap_or_else(|| "unknown".to_string())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}
