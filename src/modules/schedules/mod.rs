pub mod filter;
pub mod service;

pub use delpresence_models::schedules::*;
pub use filter::ScheduleFilter;
pub use service::{ScheduleService, sort_by_week};
