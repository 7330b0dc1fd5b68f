pub mod filter;
pub mod service;

pub use delpresence_models::study_programs::*;
pub use filter::StudyProgramFilter;
pub use service::StudyProgramService;
