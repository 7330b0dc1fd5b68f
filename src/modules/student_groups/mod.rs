pub mod filter;
pub mod roster;
pub mod service;

pub use delpresence_models::student_groups::*;
pub use filter::{StudentFilter, StudentGroupFilter};
pub use roster::{MemberRoster, RosterSnapshot};
pub use service::StudentGroupService;
