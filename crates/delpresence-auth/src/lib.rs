//! # DelPresence Auth
//!
//! Bearer token handling for the DelPresence client.
//!
//! - [`claims`]: the claim set carried by DelPresence access tokens
//! - [`token`]: unverified claim decoding and expiry checks
//! - [`token_store`]: where the token lives between CLI invocations
//!
//! The client never holds the signing secret, so claims are decoded without
//! signature verification. They are only used to fail fast on expired tokens
//! and to show who is logged in; the backend remains the authority.
//!
//! # Example
//!
//! ```ignore
//! use delpresence_auth::{TokenStore, decode_unverified};
//!
//! let store = TokenStore::from_env()?;
//! if let Some(token) = store.load() {
//!     let claims = decode_unverified(&token)?;
//!     println!("logged in as {}", claims.display_name());
//! }
//! ```

pub mod claims;
pub mod error;
pub mod token;
pub mod token_store;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use token::{check_not_expired, decode_unverified};
pub use token_store::TokenStore;
