pub mod service;

pub use delpresence_models::reference::*;
pub use service::ReferenceService;
