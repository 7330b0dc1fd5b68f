//! # DelPresence Core
//!
//! Core types, errors, and list utilities shared by the DelPresence client crates.
//!
//! - [`errors`]: the client error type and validation error formatting
//! - [`messages`]: Indonesian user-facing messages for every operation outcome
//! - [`pagination`]: client-side page slicing of fetched lists
//! - [`filter`]: the [`ListFilter`] trait plus text, semester and department normalization
//! - [`serde`]: deserialization helpers for loosely typed backend payloads
//!
//! # Example
//!
//! ```ignore
//! use delpresence_core::{ApiError, Operation, PaginationParams, paginate};
//!
//! let page = paginate(programs, &PaginationParams::page(2, 20));
//!
//! if let Err(err) = result {
//!     eprintln!("{}", err.user_message(Operation::Delete));
//! }
//! ```

pub mod errors;
pub mod filter;
pub mod messages;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{ApiError, format_validation_errors};
pub use filter::{DepartmentFilter, ListFilter, SemesterFilter, TextQuery};
pub use messages::Operation;
pub use pagination::{Page, PaginationMeta, PaginationParams, paginate};
