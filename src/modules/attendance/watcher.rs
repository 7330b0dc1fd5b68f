//! Live countdown and auto-close loop for active attendance sessions.
//!
//! The watcher keeps a local copy of the active sessions, recomputes every
//! countdown on each tick and refetches the list on each sync. When a
//! session with `auto_close` runs out, the close endpoint is called once;
//! the backend stays the source of truth for the session's state.
//!
//! ```ignore
//! let (events_tx, mut events) = mpsc::channel(32);
//! let (stop_tx, stop) = watch::channel(false);
//! tokio::spawn(async move {
//!     watcher::run(&client, &SystemClock, &AttendanceConfig::from_env(), events_tx, stop).await
//! });
//! while let Some(event) = events.recv().await { /* render */ }
//! ```

use std::collections::HashSet;
use std::future::Future;

use chrono::{DateTime, Utc};
use delpresence_config::AttendanceConfig;
use delpresence_core::ApiError;
use delpresence_models::attendance::AttendanceSession;
use delpresence_models::ids::SessionId;
use tokio::sync::{mpsc, watch};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::modules::attendance::countdown::{is_expired, remaining_seconds};
use crate::modules::attendance::service::AttendanceService;

/// Where the watcher reads sessions from and sends close requests to.
pub trait SessionSource: Send + Sync {
    fn active_sessions(
        &self,
    ) -> impl Future<Output = Result<Vec<AttendanceSession>, ApiError>> + Send;

    fn close_session(&self, id: SessionId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl SessionSource for ApiClient {
    fn active_sessions(
        &self,
    ) -> impl Future<Output = Result<Vec<AttendanceSession>, ApiError>> + Send {
        AttendanceService::active_sessions(self)
    }

    fn close_session(&self, id: SessionId) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move {
            AttendanceService::close_session(self, id).await?;
            Ok(())
        }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One row of the live countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub session_id: SessionId,
    pub title: String,
    pub remaining_seconds: i64,
    pub auto_close: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    Synced { sessions: Vec<AttendanceSession> },
    Tick { countdowns: Vec<Countdown> },
    AutoClosed { session_id: SessionId },
    CloseFailed { session_id: SessionId, error: String },
    SyncFailed { error: String },
}

/// Local view of the active sessions plus the close requests already made.
#[derive(Debug, Default)]
pub struct SessionTracker {
    sessions: Vec<AttendanceSession>,
    closing: HashSet<SessionId>,
}

impl SessionTracker {
    pub fn sessions(&self) -> &[AttendanceSession] {
        &self.sessions
    }

    /// Replaces the tracked list with the server's active sessions.
    ///
    /// Close requests are remembered only for sessions still reported active.
    pub fn sync(&mut self, sessions: Vec<AttendanceSession>) {
        let active: Vec<AttendanceSession> =
            sessions.into_iter().filter(AttendanceSession::is_active).collect();
        self.closing
            .retain(|id| active.iter().any(|session| session.id == *id));
        self.sessions = active;
    }

    #[must_use]
    pub fn countdowns(&self, now: DateTime<Utc>) -> Vec<Countdown> {
        self.sessions
            .iter()
            .map(|session| Countdown {
                session_id: session.id,
                title: session.title(),
                remaining_seconds: remaining_seconds(session.created_at, session.duration, now),
                auto_close: session.auto_close,
            })
            .collect()
    }

    /// Expired auto-close sessions not yet requested; each is marked as requested.
    pub fn due_for_close(&mut self, now: DateTime<Utc>) -> Vec<SessionId> {
        let due: Vec<SessionId> = self
            .sessions
            .iter()
            .filter(|s| s.auto_close && is_expired(s.created_at, s.duration, now))
            .map(|s| s.id)
            .filter(|id| !self.closing.contains(id))
            .collect();
        self.closing.extend(due.iter().copied());
        due
    }

    pub fn close_succeeded(&mut self, id: SessionId) {
        self.sessions.retain(|s| s.id != id);
    }

    /// Makes the session eligible for another close attempt.
    pub fn close_failed(&mut self, id: SessionId) {
        self.closing.remove(&id);
    }
}

/// Runs until `shutdown` changes (or its sender is dropped) or `events` is closed.
pub async fn run<S, C>(
    source: &S,
    clock: &C,
    config: &AttendanceConfig,
    events: mpsc::Sender<WatchEvent>,
    mut shutdown: watch::Receiver<bool>,
) where
    S: SessionSource,
    C: Clock,
{
    let mut tracker = SessionTracker::default();
    let mut tick = interval(config.tick_interval);
    let mut sync = interval(config.sync_interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    sync.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        tick_ms = config.tick_interval.as_millis(),
        sync_ms = config.sync_interval.as_millis(),
        "Session watcher started"
    );

    if *shutdown.borrow() {
        return;
    }

    loop {
        let mut outgoing = Vec::new();

        tokio::select! {
            biased;

            _ = shutdown.changed() => break,

            _ = sync.tick() => match source.active_sessions().await {
                Ok(sessions) => {
                    tracker.sync(sessions);
                    debug!(active = tracker.sessions().len(), "Sessions synced");
                    outgoing.push(WatchEvent::Synced {
                        sessions: tracker.sessions().to_vec(),
                    });
                }
                Err(error) => {
                    warn!(%error, "Session sync failed; keeping previous list");
                    outgoing.push(WatchEvent::SyncFailed {
                        error: error.to_string(),
                    });
                }
            },

            _ = tick.tick() => {
                let now = clock.now();
                outgoing.push(WatchEvent::Tick {
                    countdowns: tracker.countdowns(now),
                });

                for session_id in tracker.due_for_close(now) {
                    match source.close_session(session_id).await {
                        Ok(()) => {
                            info!(session.id = %session_id, "Session auto-closed");
                            tracker.close_succeeded(session_id);
                            outgoing.push(WatchEvent::AutoClosed { session_id });
                        }
                        Err(error) => {
                            warn!(session.id = %session_id, %error, "Auto-close failed");
                            tracker.close_failed(session_id);
                            outgoing.push(WatchEvent::CloseFailed {
                                session_id,
                                error: error.to_string(),
                            });
                        }
                    }
                }
            }
        }

        for event in outgoing {
            if events.send(event).await.is_err() {
                debug!("Event receiver dropped; stopping watcher");
                return;
            }
        }
    }

    info!("Session watcher stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(id: u64, created_at: &str, duration: u32, auto_close: bool) -> AttendanceSession {
        serde_json::from_value(json!({
            "id": id,
            "course_schedule_id": 1,
            "course_code": "IF2201",
            "course_name": "Basis Data",
            "attendance_type": "QR_CODE",
            "status": "ACTIVE",
            "duration": duration,
            "auto_close": auto_close,
            "created_at": created_at,
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        "2024-03-04T01:20:00Z".parse().unwrap()
    }

    #[test]
    fn test_sync_keeps_only_active_sessions() {
        let mut closed = session(2, "2024-03-04T01:00:00Z", 15, false);
        closed.status = delpresence_models::value_types::SessionStatus::Closed;

        let mut tracker = SessionTracker::default();
        tracker.sync(vec![session(1, "2024-03-04T01:00:00Z", 30, false), closed]);
        assert_eq!(tracker.sessions().len(), 1);
    }

    #[test]
    fn test_countdowns() {
        let mut tracker = SessionTracker::default();
        tracker.sync(vec![session(1, "2024-03-04T01:00:00Z", 30, false)]);
        let countdowns = tracker.countdowns(now());
        assert_eq!(countdowns[0].remaining_seconds, 600);
        assert_eq!(countdowns[0].title, "IF2201 Basis Data");
    }

    #[test]
    fn test_due_for_close_only_once() {
        let mut tracker = SessionTracker::default();
        tracker.sync(vec![
            session(1, "2024-03-04T01:00:00Z", 15, true),
            session(2, "2024-03-04T01:00:00Z", 15, false),
            session(3, "2024-03-04T01:10:00Z", 15, true),
        ]);

        assert_eq!(tracker.due_for_close(now()), vec![SessionId::new(1)]);
        assert!(tracker.due_for_close(now()).is_empty());
    }

    #[test]
    fn test_pending_close_survives_sync_while_still_active() {
        let mut tracker = SessionTracker::default();
        let expired = session(1, "2024-03-04T01:00:00Z", 15, true);
        tracker.sync(vec![expired.clone()]);
        assert_eq!(tracker.due_for_close(now()).len(), 1);
        tracker.close_succeeded(SessionId::new(1));

        // Backend has not caught up yet.
        tracker.sync(vec![expired.clone()]);
        assert!(tracker.due_for_close(now()).is_empty());

        // Once the backend stops reporting it, the marker is dropped.
        tracker.sync(vec![]);
        tracker.sync(vec![expired]);
        assert_eq!(tracker.due_for_close(now()).len(), 1);
    }

    #[test]
    fn test_failed_close_is_retried() {
        let mut tracker = SessionTracker::default();
        tracker.sync(vec![session(1, "2024-03-04T01:00:00Z", 15, true)]);
        let due = tracker.due_for_close(now());
        tracker.close_failed(due[0]);
        assert_eq!(tracker.due_for_close(now()), due);
    }
}
