pub mod filter;
pub mod service;

pub use delpresence_models::course_groups::*;
pub use filter::CourseGroupFilter;
pub use service::CourseGroupService;
