pub mod filter;
pub mod service;

pub use delpresence_models::assignments::*;
pub use filter::AssignmentFilter;
pub use service::AssignmentService;
