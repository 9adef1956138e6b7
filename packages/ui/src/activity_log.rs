//! Session activity: what happened to the user's session in this tab.
//!
//! Entries are [`AuthEvent`]s rather than free text, so the panel can tell a
//! sign-in from a refused attempt, and can single out sign-outs the server
//! never confirmed (the session is gone locally, but the server may still
//! consider the token live).

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn { note: String },
    SignedUp { note: String },
    /// The server or the network refused a submission.
    Rejected { reason: String },
    SignedOut,
    /// Cleared locally; the logout notification failed.
    SignOutUnconfirmed { reason: String },
}

impl AuthEvent {
    pub fn summary(&self) -> String {
        match self {
            AuthEvent::SignedIn { note } | AuthEvent::SignedUp { note } => note.clone(),
            AuthEvent::Rejected { reason } => format!("Sign-in refused: {reason}"),
            AuthEvent::SignedOut => "Signed out".to_string(),
            AuthEvent::SignOutUnconfirmed { reason } => {
                format!("Signed out on this device only: {reason}")
            }
        }
    }

    /// Starts a session.
    pub fn opens_session(&self) -> bool {
        matches!(self, AuthEvent::SignedIn { .. } | AuthEvent::SignedUp { .. })
    }

    /// Ends a session, confirmed or not.
    pub fn closes_session(&self) -> bool {
        matches!(
            self,
            AuthEvent::SignedOut | AuthEvent::SignOutUnconfirmed { .. }
        )
    }

    pub fn needs_attention(&self) -> bool {
        matches!(
            self,
            AuthEvent::Rejected { .. } | AuthEvent::SignOutUnconfirmed { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub event: AuthEvent,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<ActivityEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn record(&mut self, event: AuthEvent) {
        let summary = event.summary();
        match &event {
            AuthEvent::SignOutUnconfirmed { .. } => tracing::warn!("{}", summary),
            AuthEvent::Rejected { .. } => tracing::error!("{}", summary),
            _ => tracing::info!("{}", summary),
        }
        self.entries.push(ActivityEntry {
            timestamp: current_time(),
            event,
        });
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.last()
    }

    /// Sign-outs the server never acknowledged, oldest first.
    pub fn unconfirmed_sign_outs(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.event, AuthEvent::SignOutUnconfirmed { .. }))
    }

    pub fn attention_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.event.needs_attention())
            .count()
    }

    /// When the current session started, if the latest session event opened one.
    pub fn session_started(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.event.opens_session() || e.event.closes_session())
            .filter(|e| e.event.opens_session())
            .map(|e| e.timestamp.as_str())
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, event: AuthEvent) {
    log.write().record(event);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> AuthEvent {
        AuthEvent::SignedIn {
            note: "Login successful!".to_string(),
        }
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut log = ActivityLog::default();
        log.record(signed_in());
        log.record(AuthEvent::SignedOut);

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].event.summary(), "Login successful!");
        assert_eq!(log.latest().map(|e| &e.event), Some(&AuthEvent::SignedOut));
        assert_eq!(log.attention_count(), 0);
    }

    #[test]
    fn test_unconfirmed_sign_outs_are_singled_out() {
        let mut log = ActivityLog::default();
        log.record(signed_in());
        log.record(AuthEvent::SignOutUnconfirmed {
            reason: "HTTP error! status: 503".to_string(),
        });
        log.record(AuthEvent::Rejected {
            reason: "Invalid credentials".to_string(),
        });

        let unconfirmed: Vec<_> = log.unconfirmed_sign_outs().collect();
        assert_eq!(unconfirmed.len(), 1);
        assert_eq!(
            unconfirmed[0].event.summary(),
            "Signed out on this device only: HTTP error! status: 503"
        );
        assert_eq!(log.attention_count(), 2);
    }

    #[test]
    fn test_session_started_tracks_latest_session() {
        let mut log = ActivityLog::default();
        assert_eq!(log.session_started(), None);

        log.record(signed_in());
        assert!(log.session_started().is_some());

        log.record(AuthEvent::Rejected {
            reason: "ignored".to_string(),
        });
        assert!(log.session_started().is_some());

        log.record(AuthEvent::SignOutUnconfirmed {
            reason: "offline".to_string(),
        });
        assert_eq!(log.session_started(), None);

        log.record(AuthEvent::SignedUp {
            note: "Signup successful!".to_string(),
        });
        assert!(log.session_started().is_some());
    }

    #[test]
    fn test_timestamp_format() {
        let mut log = ActivityLog::default();
        log.record(AuthEvent::SignedOut);
        let ts = &log.entries[0].timestamp;
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }
}
