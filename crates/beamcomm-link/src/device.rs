use tracing::{debug, info};

use crate::error::{LinkError, Result};

/// A physical endpoint whose name field is readable by the remote side.
///
/// This is the capability the link consumes: a power toggle, the device's
/// multi-line status text and its writable name. Calls are synchronous and
/// must not block indefinitely; timeouts belong to the implementation.
pub trait Device {
    /// Current name of the device.
    fn name(&self) -> String;

    /// Switch the device off or on.
    fn set_power(&mut self, on: bool);

    /// Current multi-line status text, verbatim.
    ///
    /// When the link is informative this has exactly three newline-separated
    /// lines, the last one carrying the peer's name.
    fn status_text(&self) -> String;

    /// Overwrite the device's name.
    fn set_name(&mut self, text: &str);
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn set_power(&mut self, on: bool) {
        (**self).set_power(on);
    }

    fn status_text(&self) -> String {
        (**self).status_text()
    }

    fn set_name(&mut self, text: &str) {
        (**self).set_name(text);
    }
}

/// Pick the first candidate whose name contains `tag`.
///
/// Multiple matches are not an error; later candidates are dropped.
pub fn find_by_name_substring<D, I>(candidates: I, tag: &str) -> Result<D>
where
    D: Device,
    I: IntoIterator<Item = D>,
{
    let mut scanned = 0usize;
    for device in candidates {
        scanned += 1;
        if device.name().contains(tag) {
            info!(tag, name = %device.name(), "bound device");
            return Ok(device);
        }
    }

    debug!(tag, scanned, "no device matched tag");
    Err(LinkError::DeviceNotFound {
        tag: tag.to_string(),
    })
}
