//! Monitoring events: kinds and payloads.
//!
//! ## Contents
//! - [`EventKind`] closed set of lifecycle events with their wire names
//! - [`MonitorEvent`] an event plus its strongly typed payload
//! - [`Service`], [`ErrorValue`] and the per-kind payload records

mod event;
mod kind;
mod payload;

pub use event::MonitorEvent;
pub use kind::EventKind;
pub(crate) use payload::integral;
pub use payload::{
    ErrorValue, FailedCheckPayload, OutagePayload, Primitive, Service, TimingPayload,
    UNKNOWN_ERROR,
};
