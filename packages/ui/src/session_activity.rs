//! Session activity view for the signed-in page.

use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, ActivityEntry, AuthEvent};
use crate::icons::{
    FaCircleExclamation, FaRightFromBracket, FaRightToBracket, FaTriangleExclamation, FaUserPlus,
};
use crate::{Icon, AUTH_CSS};

/// Current session status, unconfirmed sign-outs, then the event timeline.
#[component]
pub fn SessionActivity() -> Element {
    let mut log = use_activity_log();
    let snapshot = log();

    if !snapshot.visible {
        return rsx! {};
    }

    let status = match snapshot.session_started() {
        Some(since) => format!("Signed in since {since}"),
        None => "No active session".to_string(),
    };
    let unconfirmed: Vec<String> = snapshot
        .unconfirmed_sign_outs()
        .map(|e| format!("{}: {}", e.timestamp, e.event.summary()))
        .collect();
    let timeline: Vec<ActivityEntry> = snapshot.entries.iter().rev().cloned().collect();

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        section {
            class: "session-activity",
            header {
                class: "session-activity-header",
                div {
                    h3 { "Session activity" }
                    p { class: "session-activity-status", "{status}" }
                }
                button {
                    r#type: "button",
                    onclick: move |_| log.write().visible = false,
                    "Close"
                }
            }

            if !unconfirmed.is_empty() {
                div {
                    class: "session-activity-notice",
                    role: "alert",
                    Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
                    div {
                        p {
                            "Your session was cleared on this device, but the server did not confirm the sign-out."
                        }
                        ul {
                            for (i, line) in unconfirmed.into_iter().enumerate() {
                                li { key: "{i}", "{line}" }
                            }
                        }
                    }
                }
            }

            ol {
                class: "session-activity-timeline",
                if timeline.is_empty() {
                    li { class: "session-activity-empty", "No sign-in activity yet." }
                }
                for (i, entry) in timeline.into_iter().enumerate() {
                    TimelineItem { key: "{i}", entry }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(entry: ActivityEntry) -> Element {
    let kind = event_class(&entry.event);
    let summary = entry.event.summary();
    let icon = match entry.event {
        AuthEvent::SignedIn { .. } => rsx! { Icon { icon: FaRightToBracket, width: 12, height: 12 } },
        AuthEvent::SignedUp { .. } => rsx! { Icon { icon: FaUserPlus, width: 12, height: 12 } },
        AuthEvent::SignedOut => rsx! { Icon { icon: FaRightFromBracket, width: 12, height: 12 } },
        AuthEvent::SignOutUnconfirmed { .. } => {
            rsx! { Icon { icon: FaTriangleExclamation, width: 12, height: 12 } }
        }
        AuthEvent::Rejected { .. } => rsx! { Icon { icon: FaCircleExclamation, width: 12, height: 12 } },
    };

    rsx! {
        li {
            class: "session-activity-item {kind}",
            span {
                class: "session-activity-icon",
                {icon}
            }
            time { "{entry.timestamp}" }
            span { "{summary}" }
        }
    }
}

/// Shows or hides [`SessionActivity`]; highlighted while something needs attention.
#[component]
pub fn SessionActivityBadge() -> Element {
    let mut log = use_activity_log();
    let attention = log().attention_count();

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        button {
            r#type: "button",
            class: if attention > 0 { "session-activity-badge attention" } else { "session-activity-badge" },
            title: "Session activity",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            "Activity"
            if attention > 0 {
                span { class: "session-activity-count", "{attention}" }
            }
        }
    }
}

fn event_class(event: &AuthEvent) -> &'static str {
    match event {
        AuthEvent::SignedIn { .. } | AuthEvent::SignedUp { .. } => "opened",
        AuthEvent::SignedOut => "closed",
        AuthEvent::SignOutUnconfirmed { .. } => "unconfirmed",
        AuthEvent::Rejected { .. } => "refused",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_classes_are_distinct() {
        let events = [
            AuthEvent::SignedIn { note: String::new() },
            AuthEvent::SignedOut,
            AuthEvent::SignOutUnconfirmed { reason: String::new() },
            AuthEvent::Rejected { reason: String::new() },
        ];
        let classes: std::collections::HashSet<_> = events.iter().map(event_class).collect();
        assert_eq!(classes.len(), events.len());
        assert_eq!(
            event_class(&AuthEvent::SignedUp { note: String::new() }),
            event_class(&AuthEvent::SignedIn { note: String::new() })
        );
    }
}
