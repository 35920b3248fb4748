//! # Event-to-line rendering.
//!
//! [`Renderer`] turns one [`MonitorEvent`] into one console line. Color is
//! applied to substrings only; the plain text of every line is fixed:
//!
//! ```text
//! api down!. Error: "timeout"
//! api is still down!. Error: "timeout"
//! api check failed!. Error: {"code":503}
//! api latency warning. Took: 1500 ms.
//! api is back. Down for 2 minutes
//! api responded OK! 42 ms.
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::duration::{HumanizeThresholds, humanize};
use super::palette::{Color, Palette};
use crate::config::NotifierConfig;
use crate::events::{ErrorValue, MonitorEvent, OutagePayload, Service, TimingPayload, integral};

/// Phrase used when an outage record has no start time.
const UNKNOWN_PERIOD: &str = "an unknown period";

/// Stateless formatter built from a [`NotifierConfig`].
#[derive(Clone, Debug)]
pub struct Renderer {
    palette: Palette,
    thresholds: HumanizeThresholds,
    unnamed_service: String,
}

impl Renderer {
    #[must_use]
    pub fn new(cfg: &NotifierConfig) -> Self {
        Self {
            palette: Palette::new(cfg.color),
            thresholds: cfg.thresholds,
            unnamed_service: cfg.unnamed_service.clone(),
        }
    }

    /// Renders `ev` as a single line without a trailing newline.
    ///
    /// `now` is only consulted for `service-back`.
    pub fn render(&self, ev: &MonitorEvent, now: DateTime<Utc>) -> String {
        match ev {
            MonitorEvent::NewOutage { service, outage } => {
                self.failure(service, " down!", &outage.error)
            }
            MonitorEvent::CurrentOutage { service, outage } => {
                self.failure(service, " is still down!", &outage.error)
            }
            MonitorEvent::ServiceError { service, check } => {
                self.failure(service, " check failed!", &check.error)
            }
            MonitorEvent::LatencyWarning { service, timing } => self.latency(service, timing),
            MonitorEvent::ServiceBack {
                service,
                last_outage,
            } => self.back(service, last_outage, now),
            MonitorEvent::ServiceOk { service, timing } => self.ok(service, timing),
        }
    }

    fn name<'a>(&'a self, service: &'a Service) -> &'a str {
        service.name().unwrap_or(&self.unnamed_service)
    }

    fn failure(&self, service: &Service, what: &str, error: &ErrorValue) -> String {
        let p = &self.palette;
        format!(
            "{}{}. Error: {}",
            self.name(service),
            p.paint(what, Color::Red),
            p.paint(&error.render(), Color::Red),
        )
    }

    fn latency(&self, service: &Service, timing: &TimingPayload) -> String {
        let p = &self.palette;
        let took = format!("{} ms.", format_ms(timing.elapsed_time));
        format!(
            "{}{}. Took: {}",
            self.name(service),
            p.paint(" latency warning", Color::Yellow),
            p.paint(&took, Color::Yellow),
        )
    }

    fn back(&self, service: &Service, last_outage: &OutagePayload, now: DateTime<Utc>) -> String {
        let p = &self.palette;
        let down_for = match last_outage.timestamp {
            Some(started) => {
                let elapsed_ms = now.timestamp_millis().saturating_sub(started).max(0);
                humanize(
                    Duration::from_millis(elapsed_ms.unsigned_abs()),
                    &self.thresholds,
                )
            }
            None => UNKNOWN_PERIOD.to_owned(),
        };
        format!(
            "{}{}{}{}",
            p.paint(self.name(service), Color::White),
            p.paint(" is back", Color::Green),
            p.paint(". Down for ", Color::Gray),
            p.paint(&down_for, Color::White),
        )
    }

    fn ok(&self, service: &Service, timing: &TimingPayload) -> String {
        let p = &self.palette;
        let took = format!("{} ms.", format_ms(timing.elapsed_time));
        format!(
            "{} responded {} {}",
            self.name(service),
            p.paint("OK!", Color::Green),
            p.paint(&took, Color::Gray),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&NotifierConfig::default())
    }
}

/// Formats milliseconds the way a JSON number prints: integral values without
/// a fractional part. Missing values print as `?`.
fn format_ms(ms: Option<f64>) -> String {
    match ms {
        Some(v) if v.is_finite() => integral(v).map_or_else(|| format!("{v}"), |i| i.to_string()),
        _ => "?".to_owned(),
    }
}
