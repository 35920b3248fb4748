//! # outage-console
//!
//! **outage-console** is a notification plugin for service-monitoring hosts.
//! It subscribes to six lifecycle events and prints each one as a
//! human-readable, color-coded console line.
//!
//! The crate makes no monitoring decisions of its own: whether a failed check
//! is already an outage, when latency is too high, or when a service counts as
//! recovered is decided by the host. The notifier only renders what it is given.
//!
//! ## Architecture
//! ```text
//!   check loop 1   check loop 2   check loop N        (host side)
//!        │              │              │
//!        └──── dispatch(MonitorEvent) ─┘
//!                       ▼
//!     ┌──────────────────────────────────────┐
//!     │ Dispatcher (EventHost)               │
//!     │  - kind → handlers                   │
//!     │  - panic isolation                   │
//!     └──────────────────┬───────────────────┘
//!                        ▼
//!     ┌──────────────────────────────────────┐
//!     │ ConsoleNotifier handler (per kind)   │
//!     │  Renderer ──► one line ──► LineSink  │
//!     └──────────────────────────────────────┘
//! ```
//!
//! Hosts with their own event routing implement [`EventHost`] and skip the
//! [`Dispatcher`] entirely. Delivery, queueing and threading stay with the
//! host; handlers run synchronously on whatever thread calls them.
//!
//! ## Events
//! | Wire name          | Line                                            |
//! |--------------------|-------------------------------------------------|
//! | `new-outage`       | `<name> down!. Error: <error>`                  |
//! | `current-outage`   | `<name> is still down!. Error: <error>`         |
//! | `service-error`    | `<name> check failed!. Error: <error>`          |
//! | `latency-warning`  | `<name> latency warning. Took: <ms> ms.`        |
//! | `service-back`     | `<name> is back. Down for <approx. duration>`   |
//! | `service-ok`       | `<name> responded OK! <ms> ms.`                 |
//!
//! ## Example
//! ```rust
//! use outage_console::{ConsoleNotifier, Dispatcher, MonitorEvent, NotifierConfig, Service, TimingPayload};
//!
//! let mut host = Dispatcher::new();
//! ConsoleNotifier::new(&NotifierConfig::default())
//!     .register(&mut host)
//!     .expect("dispatcher accepts every event kind");
//!
//! host.dispatch(&MonitorEvent::ServiceOk {
//!     service: Service::named("api"),
//!     timing: TimingPayload::new(42.0),
//! });
//! ```

mod config;
mod error;
mod events;
mod host;
mod notifier;
mod render;

// ---- Public re-exports ----

pub use config::{NotifierConfig, UNNAMED_SERVICE};
pub use error::RegisterError;
pub use events::{
    ErrorValue, EventKind, FailedCheckPayload, MonitorEvent, OutagePayload, Primitive,
    Service, TimingPayload, UNKNOWN_ERROR,
};
pub use host::{Dispatcher, EventHost, Handler};
pub use notifier::{ConsoleNotifier, LineSink, StdoutSink, WriterSink};
pub use render::{Color, HumanizeThresholds, Palette, Renderer, humanize};

/// Registers a stdout [`ConsoleNotifier`] with default configuration on `host`.
///
/// Not idempotent: calling it twice on the same host binds every handler twice.
///
/// # Errors
/// Same as [`ConsoleNotifier::register`]: the first kind the host rejects is
/// returned, and kinds bound before it stay bound.
pub fn register<H>(host: &mut H) -> Result<(), RegisterError>
where
    H: EventHost + ?Sized,
{
    ConsoleNotifier::default().register(host)
}
