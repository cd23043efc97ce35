//! Edge-triggered message channel over a shared device name.
//!
//! This is the layer hosts talk to. Bind a device, register handlers, then call
//! [`Channel::tick`] once per scheduling cycle. Each tick forces a reconnect,
//! decodes the peer's frame from the status text and, when the payload changed,
//! runs every matching handler in registration order.
//!
//! Absorbed anomalies (no decodable frame, unchanged payload) are emitted as
//! `tracing` `debug!`/`trace!` events for diagnostics only. They never reach the
//! channel's log callback, which sees new messages and nothing else.

pub mod channel;
pub mod config;
pub mod connector;
pub mod error;
pub mod handler;

pub use channel::{Channel, LogFn, TickOutcome};
pub use config::ChannelConfig;
pub use connector::{connect, connect_with_config};
pub use error::{ChannelError, Result};
pub use handler::{Action, Handler, HandlerRegistry, Matcher, Responder};
