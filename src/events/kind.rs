//! # Event kinds emitted by the monitoring host.
//!
//! [`EventKind`] is the closed set of lifecycle events the notifier renders.
//! Each kind has a stable, case-sensitive wire name used by hosts that speak
//! strings (`"new-outage"`, `"service-ok"`, ...).
//!
//! ## Example
//! ```rust
//! use outage_console::EventKind;
//!
//! let kind: EventKind = "latency-warning".parse().unwrap();
//! assert_eq!(kind, EventKind::LatencyWarning);
//! assert_eq!(kind.as_str(), "latency-warning");
//! assert!("Latency-Warning".parse::<EventKind>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::RegisterError;

/// Classification of monitoring lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// First detected failure of a service (an outage begins).
    ///
    /// Payload: [`OutagePayload`](crate::OutagePayload).
    NewOutage,

    /// Outage persists on a repeated check.
    ///
    /// Payload: [`OutagePayload`](crate::OutagePayload).
    CurrentOutage,

    /// A single check failed; the host may or may not treat it as an outage yet.
    ///
    /// Payload: [`FailedCheckPayload`](crate::FailedCheckPayload).
    ServiceError,

    /// A successful check whose response time exceeded the host's threshold.
    ///
    /// Payload: [`TimingPayload`](crate::TimingPayload).
    LatencyWarning,

    /// Service recovered after an outage.
    ///
    /// Payload: the last [`OutagePayload`](crate::OutagePayload).
    ServiceBack,

    /// Routine successful check.
    ///
    /// Payload: [`TimingPayload`](crate::TimingPayload).
    ServiceOk,
}

impl EventKind {
    /// Every kind, in registration order.
    pub const ALL: [EventKind; 6] = [
        EventKind::NewOutage,
        EventKind::CurrentOutage,
        EventKind::ServiceError,
        EventKind::LatencyWarning,
        EventKind::ServiceBack,
        EventKind::ServiceOk,
    ];

    /// Returns the wire name of this kind.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NewOutage => "new-outage",
            EventKind::CurrentOutage => "current-outage",
            EventKind::ServiceError => "service-error",
            EventKind::LatencyWarning => "latency-warning",
            EventKind::ServiceBack => "service-back",
            EventKind::ServiceOk => "service-ok",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| RegisterError::UnknownEvent { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let err = "SERVICE-OK".parse::<EventKind>().unwrap_err();
        assert_eq!(
            err,
            RegisterError::UnknownEvent {
                name: "SERVICE-OK".into()
            }
        );
    }

    #[test]
    fn all_kinds_are_distinct() {
        let mut names: Vec<_> = EventKind::ALL.iter().map(EventKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EventKind::ALL.len());
    }
}
