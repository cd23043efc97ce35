use tracing::{debug, trace};

use crate::device::{find_by_name_substring, Device};
use crate::error::Result;

/// Outbound half of a link: anything that can overwrite the local name.
pub trait NameWriter {
    /// Set the local name field to `text`.
    fn write_name(&mut self, text: &str);
}

/// Owns one device for the lifetime of a channel.
///
/// The device only refreshes its status text while (re)establishing a
/// connection, so [`force_reconnect`](Self::force_reconnect) cycles power
/// unconditionally before every read.
pub struct LinkDriver<D> {
    device: D,
    cycles: u64,
}

impl<D: Device> LinkDriver<D> {
    /// Bind an explicit device.
    pub fn new(device: D) -> Self {
        Self { device, cycles: 0 }
    }

    /// Bind the first candidate whose name contains `tag`.
    ///
    /// Returns `Err(LinkError::DeviceNotFound)` when nothing matches.
    pub fn bind<I>(candidates: I, tag: &str) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
    {
        find_by_name_substring(candidates, tag).map(Self::new)
    }

    /// Power the device off and back on.
    pub fn force_reconnect(&mut self) {
        self.device.set_power(false);
        self.device.set_power(true);
        self.cycles = self.cycles.wrapping_add(1);
        trace!(cycle = self.cycles, "forced reconnect");
    }

    /// Current status text of the device, verbatim.
    pub fn read_status(&self) -> String {
        self.device.status_text()
    }

    /// Current name of the bound device.
    pub fn device_name(&self) -> String {
        self.device.name()
    }

    /// Number of reconnect cycles issued so far.
    pub fn reconnect_cycles(&self) -> u64 {
        self.cycles
    }

    /// Borrow the bound device.
    pub fn get_ref(&self) -> &D {
        &self.device
    }

    /// Mutably borrow the bound device.
    pub fn get_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the driver and return the device.
    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D: Device> NameWriter for LinkDriver<D> {
    fn write_name(&mut self, text: &str) {
        debug!(len = text.len(), "writing local name");
        self.device.set_name(text);
    }
}

impl<D> std::fmt::Debug for LinkDriver<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkDriver")
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}
