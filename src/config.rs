//! # Notifier configuration.
//!
//! Provides [`NotifierConfig`], an immutable value injected when the notifier
//! is built. Nothing here is read from the environment; hosts decide how to
//! fill it in.

use crate::render::HumanizeThresholds;

/// Default placeholder for services that arrive without a usable name.
pub const UNNAMED_SERVICE: &str = "<unnamed service>";

/// Configuration for the console notifier.
///
/// ## Field semantics
/// - `color`: emit ANSI color sequences (`false` = plain text)
/// - `thresholds`: unit cut-overs for "down for ..." durations
/// - `unnamed_service`: text printed in place of a missing service name
#[derive(Clone, Debug)]
pub struct NotifierConfig {
    /// Whether rendered lines carry ANSI color.
    ///
    /// Terminal capability detection is the host's job; set this to `false`
    /// when writing to a file or pipe.
    pub color: bool,

    /// Thresholds used to humanize outage durations.
    pub thresholds: HumanizeThresholds,

    /// Placeholder for missing or blank service names.
    pub unnamed_service: String,
}

impl Default for NotifierConfig {
    /// Default configuration:
    ///
    /// - `color = true`
    /// - `thresholds = HumanizeThresholds::default()`
    /// - `unnamed_service = "<unnamed service>"`
    fn default() -> Self {
        Self {
            color: true,
            thresholds: HumanizeThresholds::default(),
            unnamed_service: UNNAMED_SERVICE.to_owned(),
        }
    }
}
