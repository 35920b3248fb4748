//! The console notifier plugin and its output sinks.

mod console;
mod sink;

pub use console::ConsoleNotifier;
pub use sink::{LineSink, StdoutSink, WriterSink};
