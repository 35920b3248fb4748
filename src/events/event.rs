//! # Monitoring events delivered to the notifier.
//!
//! [`MonitorEvent`] pairs the [`Service`] an event concerns with the payload
//! shape of its [`EventKind`]. Handlers match on the variant, so a payload can
//! never be read with the wrong shape.
//!
//! Hosts that only speak JSON can go through [`MonitorEvent::from_json`],
//! which substitutes defaults for anything malformed.
//!
//! ## Example
//! ```rust
//! use outage_console::{EventKind, MonitorEvent};
//! use serde_json::json;
//!
//! let ev = MonitorEvent::from_json(
//!     EventKind::ServiceOk,
//!     &json!({"name": "api"}),
//!     &json!({"elapsedTime": 42}),
//! );
//!
//! assert_eq!(ev.kind(), EventKind::ServiceOk);
//! assert_eq!(ev.service().name(), Some("api"));
//! ```

use serde_json::Value;

use super::kind::EventKind;
use super::payload::{FailedCheckPayload, OutagePayload, Service, TimingPayload};

/// A single lifecycle event with its strongly typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    NewOutage {
        service: Service,
        outage: OutagePayload,
    },
    CurrentOutage {
        service: Service,
        outage: OutagePayload,
    },
    ServiceError {
        service: Service,
        check: FailedCheckPayload,
    },
    LatencyWarning {
        service: Service,
        timing: TimingPayload,
    },
    ServiceBack {
        service: Service,
        last_outage: OutagePayload,
    },
    ServiceOk {
        service: Service,
        timing: TimingPayload,
    },
}

impl MonitorEvent {
    /// Returns the kind of this event.
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            MonitorEvent::NewOutage { .. } => EventKind::NewOutage,
            MonitorEvent::CurrentOutage { .. } => EventKind::CurrentOutage,
            MonitorEvent::ServiceError { .. } => EventKind::ServiceError,
            MonitorEvent::LatencyWarning { .. } => EventKind::LatencyWarning,
            MonitorEvent::ServiceBack { .. } => EventKind::ServiceBack,
            MonitorEvent::ServiceOk { .. } => EventKind::ServiceOk,
        }
    }

    /// Returns the service this event concerns.
    #[inline]
    pub fn service(&self) -> &Service {
        match self {
            MonitorEvent::NewOutage { service, .. }
            | MonitorEvent::CurrentOutage { service, .. }
            | MonitorEvent::ServiceError { service, .. }
            | MonitorEvent::LatencyWarning { service, .. }
            | MonitorEvent::ServiceBack { service, .. }
            | MonitorEvent::ServiceOk { service, .. } => service,
        }
    }

    /// Builds an event from untyped host JSON.
    ///
    /// Never fails: missing or mistyped fields fall back to defaults and are
    /// rendered as placeholders later.
    pub fn from_json(kind: EventKind, service: &Value, payload: &Value) -> Self {
        let service = Service::from_value(service);
        match kind {
            EventKind::NewOutage => MonitorEvent::NewOutage {
                service,
                outage: OutagePayload::from_value(payload),
            },
            EventKind::CurrentOutage => MonitorEvent::CurrentOutage {
                service,
                outage: OutagePayload::from_value(payload),
            },
            EventKind::ServiceError => MonitorEvent::ServiceError {
                service,
                check: FailedCheckPayload::from_value(payload),
            },
            EventKind::LatencyWarning => MonitorEvent::LatencyWarning {
                service,
                timing: TimingPayload::from_value(payload),
            },
            EventKind::ServiceBack => MonitorEvent::ServiceBack {
                service,
                last_outage: OutagePayload::from_value(payload),
            },
            EventKind::ServiceOk => MonitorEvent::ServiceOk {
                service,
                timing: TimingPayload::from_value(payload),
            },
        }
    }
}
