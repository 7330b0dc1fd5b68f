//! # DelPresence
//!
//! Typed client for the administrative side of the DelPresence academic
//! scheduling and attendance platform.
//!
//! ## Overview
//!
//! Staff manage study programs, courses, course groups, lecturer
//! assignments, class schedules, student groups and live attendance
//! sessions. Every operation is a call to the DelPresence REST backend; this
//! crate adds the local state the admin screens need on top of it:
//!
//! - **Filtering and search** of already-fetched lists, with semester and
//!   department name normalization
//! - **Pagination** of filtered lists
//! - **Attendance countdown** recomputed from a session's creation time and
//!   duration, re-synced against the server, with optional auto-close
//! - **Optimistic membership** changes for student groups, rolled back when
//!   the batch request fails
//!
//! Conflict detection, session persistence and QR/face verification stay on
//! the server.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── client.rs          # ApiClient: base URL, bearer token, JSON envelope
//! ├── logging.rs         # tracing subscriber setup
//! ├── modules/           # Feature modules
//! │   ├── study_programs/  # Study programs, faculties, lecturer lookup
//! │   ├── reference/       # Academic years and rooms
//! │   ├── courses/
//! │   ├── course_groups/
//! │   ├── assignments/     # Lecturer to course assignments
//! │   ├── schedules/       # Class schedules and conflict checks
//! │   ├── student_groups/  # Groups, members, optimistic roster
//! │   └── attendance/      # Sessions, countdown, watcher
//! └── utils/             # Span macros
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports, including the models from `delpresence-models`
//! - `service.rs`: One async function per endpoint
//! - `filter.rs`: [`ListFilter`](delpresence_core::ListFilter) implementations
//!
//! ## Quick Start
//!
//! ```bash
//! API_URL=http://localhost:8080
//! DELPRESENCE_TOKEN=<jwt>
//! ```
//!
//! ```ignore
//! use delpresence::ApiClient;
//! use delpresence::modules::courses::{CourseFilter, CourseService};
//! use delpresence_core::{ListFilter, PaginationParams, paginate};
//!
//! let client = ApiClient::from_env()?;
//! let courses = CourseService::list(&client, None).await?;
//! let filter = CourseFilter { semester: "ganjil".parse()?, ..Default::default() };
//! let page = paginate(filter.apply(&courses), &PaginationParams::page(1, 20));
//! ```
//!
//! ## Modules
//!
//! - [`client`]: HTTP client wrapper
//! - [`logging`]: Console and rolling JSON file logging
//! - [`modules`]: Feature modules
//! - [`utils`]: Tracing helpers

pub mod client;
pub mod logging;
pub mod modules;
pub mod utils;

pub use client::ApiClient;

// Re-export workspace crates for convenience
pub use delpresence_auth;
pub use delpresence_config;
pub use delpresence_core;
pub use delpresence_models;
