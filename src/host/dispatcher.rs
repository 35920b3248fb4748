//! # In-process event dispatch.
//!
//! [`Dispatcher`] routes each [`MonitorEvent`] to the handlers bound for its
//! kind. The host calls [`Dispatcher::dispatch`] on its own thread; every
//! call runs the matching handlers to completion before returning, so nothing
//! is queued and nothing is dropped.
//!
//! ## Architecture
//! ```text
//! dispatch(event)
//!     │
//!     ├──► handlers[event.kind()][0](event)
//!     │         └──────► panic → caught, logged
//!     └──► handlers[event.kind()][N](event)
//! ```
//!
//! ## Rules
//! - **Closed routing**: handlers are keyed by [`EventKind`], never by string.
//! - **Capability set**: a dispatcher built with [`Dispatcher::with_kinds`]
//!   rejects bindings for other kinds with [`RegisterError::Unsupported`].
//! - **Panic isolation**: a panicking handler is caught with `catch_unwind`;
//!   remaining handlers still run and the caller never sees the panic.
//! - **Per-handler order**: handlers for one kind run in binding order.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if a handler panics while holding a lock.

use std::collections::{BTreeSet, HashMap};
use std::panic::{self, AssertUnwindSafe};

use super::event_host::{EventHost, Handler};
use crate::error::RegisterError;
use crate::events::{EventKind, MonitorEvent};

/// Kind-keyed handler table.
pub struct Dispatcher {
    supported: BTreeSet<EventKind>,
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    /// Creates a dispatcher that accepts every kind.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kinds(EventKind::ALL)
    }

    /// Creates a dispatcher that accepts only `kinds`.
    #[must_use]
    pub fn with_kinds(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        Self {
            supported: kinds.into_iter().collect(),
            handlers: HashMap::new(),
        }
    }

    /// Number of handlers bound to `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Runs every handler bound to the event's kind.
    ///
    /// Returns how many handlers completed without panicking.
    pub fn dispatch(&self, ev: &MonitorEvent) -> usize {
        let kind = ev.kind();
        let Some(handlers) = self.handlers.get(&kind) else {
            tracing::trace!(event = %kind, "no handlers bound");
            return 0;
        };

        let mut completed = 0;
        for handler in handlers {
            match panic::catch_unwind(AssertUnwindSafe(|| handler(ev))) {
                Ok(()) => completed += 1,
                Err(panic_err) => {
                    let info = if let Some(msg) = panic_err.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = panic_err.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    };
                    tracing::error!(event = %kind, %info, "event handler panicked");
                }
            }
        }
        tracing::trace!(event = %kind, handlers = handlers.len(), completed, "dispatched");
        completed
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHost for Dispatcher {
    fn on(&mut self, kind: EventKind, handler: Handler) -> Result<(), RegisterError> {
        if !self.supported.contains(&kind) {
            return Err(RegisterError::Unsupported { kind });
        }
        self.handlers.entry(kind).or_default().push(handler);
        Ok(())
    }
}
