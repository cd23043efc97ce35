//! Device capability and link driver for name-field messaging.
//!
//! The lowest layer of beamcomm. A [`Device`] is anything exposing a power
//! toggle, a multi-line status text and a writable name. The [`LinkDriver`]
//! owns exactly one device and forces a reconnect cycle on every step so the
//! status text reflects the peer's current name.

pub mod device;
pub mod driver;
pub mod error;
pub mod sim;

pub use device::{find_by_name_substring, Device};
pub use driver::{LinkDriver, NameWriter};
pub use error::{LinkError, Result};
pub use sim::{LinkPhase, SimulatedDevice};
