//! # Host subscription capability.
//!
//! [`EventHost`] is the one capability the notifier needs from a monitoring
//! host: attach a handler to an event kind. Anything that can route
//! [`MonitorEvent`]s by kind can implement it; [`Dispatcher`](crate::Dispatcher)
//! is the in-process implementation shipped with this crate.
//!
//! ## Example
//! ```rust
//! use outage_console::{EventHost, EventKind, Handler, RegisterError};
//!
//! /// A host that only accepts outage events.
//! #[derive(Default)]
//! struct OutagesOnly(Vec<(EventKind, Handler)>);
//!
//! impl EventHost for OutagesOnly {
//!     fn on(&mut self, kind: EventKind, handler: Handler) -> Result<(), RegisterError> {
//!         if kind != EventKind::NewOutage {
//!             return Err(RegisterError::Unsupported { kind });
//!         }
//!         self.0.push((kind, handler));
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::error::RegisterError;
use crate::events::{EventKind, MonitorEvent};

/// Event handler bound to a kind.
///
/// Handlers are synchronous and must not panic; hosts may invoke them from
/// any thread, concurrently.
pub type Handler = Arc<dyn Fn(&MonitorEvent) + Send + Sync + 'static>;

/// Subscription capability exposed by a monitoring host.
pub trait EventHost {
    /// Binds `handler` to `kind`.
    ///
    /// Returns [`RegisterError::Unsupported`] when the host cannot deliver
    /// events of this kind. Binding the same kind twice adds a second handler.
    fn on(&mut self, kind: EventKind, handler: Handler) -> Result<(), RegisterError>;
}
