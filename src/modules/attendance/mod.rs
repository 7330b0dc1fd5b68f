pub mod countdown;
pub mod filter;
pub mod service;
pub mod watcher;

pub use countdown::{format_remaining, is_expired, remaining_seconds};
pub use delpresence_models::attendance::*;
pub use filter::SessionFilter;
pub use service::AttendanceService;
pub use watcher::{Clock, Countdown, SessionSource, SessionTracker, SystemClock, WatchEvent};
