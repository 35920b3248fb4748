//! # Example: console
//!
//! Wires the console notifier into an in-process host and dispatches one
//! event of every kind.
//!
//! ## Flow
//! ```text
//! ConsoleNotifier::register(&mut Dispatcher)
//!     └─► Dispatcher::dispatch(MonitorEvent) ──► handler ──► stdout
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=outage_console=debug cargo run --example console
//! ```

use chrono::{TimeDelta, Utc};
use outage_console::{
    ConsoleNotifier, Dispatcher, ErrorValue, FailedCheckPayload, MonitorEvent, NotifierConfig,
    OutagePayload, Service, TimingPayload,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = NotifierConfig::default();
    let mut host = Dispatcher::new();
    ConsoleNotifier::new(&cfg).register(&mut host)?;

    let api = Service::named("api");
    let refused = ErrorValue::from(json!({"code": "ECONNREFUSED", "port": 443}));
    let started = Utc::now() - TimeDelta::minutes(7);

    for ev in [
        MonitorEvent::ServiceOk {
            service: api.clone(),
            timing: TimingPayload::new(42.0),
        },
        MonitorEvent::LatencyWarning {
            service: api.clone(),
            timing: TimingPayload::new(1500.0),
        },
        MonitorEvent::ServiceError {
            service: api.clone(),
            check: FailedCheckPayload::new(refused.clone(), 1),
        },
        MonitorEvent::NewOutage {
            service: api.clone(),
            outage: OutagePayload::new(refused.clone(), started),
        },
        MonitorEvent::CurrentOutage {
            service: api.clone(),
            outage: OutagePayload::new(refused, started),
        },
        MonitorEvent::ServiceBack {
            service: api,
            last_outage: OutagePayload::new(ErrorValue::Unknown, started),
        },
    ] {
        host.dispatch(&ev);
    }
    Ok(())
}
