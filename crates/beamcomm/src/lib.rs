//! Best-effort text messaging over a shared device name field.
//!
//! Two endpoints each own a device whose name the other side can read. A
//! message is written as `<tag> [msg:<payload>]` into the local name and picked
//! up by the peer when it polls its own status text.
//!
//! # Crate Structure
//!
//! - [`link`]: Device capability, lookup by tag, link driver, simulated devices
//! - [`frame`]: Text frame codec, noise prefixes, change detection
//! - [`channel`]: Handler registry and the steppable [`channel::Channel`]

/// Re-export link types.
pub mod link {
    pub use beamcomm_link::*;
}

/// Re-export frame types.
pub mod frame {
    pub use beamcomm_frame::*;
}

/// Re-export channel types.
pub mod channel {
    pub use beamcomm_channel::*;
}
