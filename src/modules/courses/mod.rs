pub mod filter;
pub mod service;

pub use delpresence_models::courses::*;
pub use filter::CourseFilter;
pub use service::CourseService;
