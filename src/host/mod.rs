//! Host side of the plugin boundary.
//!
//! - [`EventHost`] the subscription capability a host must expose
//! - [`Handler`] the callback type bound to each event kind
//! - [`Dispatcher`] in-process host: kind-keyed routing, panic isolation

mod dispatcher;
mod event_host;

pub use dispatcher::Dispatcher;
pub use event_host::{EventHost, Handler};
