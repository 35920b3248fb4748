//! # ConsoleNotifier — lifecycle events as colored console lines
//!
//! Binds one handler per [`EventKind`] on a host and prints each event it
//! receives as a single line.
//!
//! ## Example output
//! ```text
//! api down!. Error: "connect ECONNREFUSED"
//! api is still down!. Error: "connect ECONNREFUSED"
//! api check failed!. Error: {"status":503}
//! api latency warning. Took: 1500 ms.
//! api is back. Down for 2 minutes
//! api responded OK! 42 ms.
//! ```
//!
//! ## Rules
//! - Handlers never panic or fail on malformed data; placeholders are printed instead.
//! - Sink write failures are logged at `debug` and dropped.
//! - Registration is not idempotent: registering twice prints every line twice.

use std::sync::Arc;

use chrono::Utc;

use super::sink::{LineSink, StdoutSink};
use crate::config::NotifierConfig;
use crate::error::RegisterError;
use crate::events::{EventKind, MonitorEvent};
use crate::host::{EventHost, Handler};
use crate::render::Renderer;

/// Console notifier plugin.
#[derive(Clone)]
pub struct ConsoleNotifier {
    renderer: Arc<Renderer>,
    sink: Arc<dyn LineSink>,
}

impl ConsoleNotifier {
    /// Creates a notifier printing to standard output.
    #[must_use]
    pub fn new(cfg: &NotifierConfig) -> Self {
        Self::with_sink(cfg, Arc::new(StdoutSink::new()))
    }

    /// Creates a notifier printing to `sink`.
    #[must_use]
    pub fn with_sink(cfg: &NotifierConfig, sink: Arc<dyn LineSink>) -> Self {
        Self {
            renderer: Arc::new(Renderer::new(cfg)),
            sink,
        }
    }

    /// Binds one handler for each kind in [`EventKind::ALL`] on `host`.
    ///
    /// # Errors
    /// Returns [`RegisterError::Unsupported`] for the first kind the host
    /// rejects. Registration stops there; handlers for the kinds bound before
    /// it stay bound, so treat the host as misconfigured rather than retrying
    /// on the same host.
    pub fn register<H>(&self, host: &mut H) -> Result<(), RegisterError>
    where
        H: EventHost + ?Sized,
    {
        for kind in EventKind::ALL {
            host.on(kind, self.handler(kind))?;
            tracing::debug!(event = %kind, "console handler registered");
        }
        Ok(())
    }

    /// Returns the handler for `kind`.
    ///
    /// Events of any other kind routed to it are ignored.
    pub fn handler(&self, kind: EventKind) -> Handler {
        let me = self.clone();
        Arc::new(move |ev: &MonitorEvent| {
            if ev.kind() != kind {
                tracing::warn!(bound = %kind, got = %ev.kind(), "misrouted event ignored");
                return;
            }
            me.notify(ev);
        })
    }

    /// Renders `ev` and writes it to the sink.
    pub fn notify(&self, ev: &MonitorEvent) {
        let line = self.renderer.render(ev, Utc::now());
        if let Err(err) = self.sink.write_line(&line) {
            tracing::debug!(event = %ev.kind(), error = %err, "console write failed");
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new(&NotifierConfig::default())
    }
}
