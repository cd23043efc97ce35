use beamcomm_link::{find_by_name_substring, Device};

use crate::channel::{Channel, LogFn};
use crate::config::ChannelConfig;
use crate::error::Result;

/// Bind the first candidate whose name contains `tag` and build a channel on it.
pub fn connect<D, I>(candidates: I, tag: &str) -> Result<Channel<D>>
where
    D: Device,
    I: IntoIterator<Item = D>,
{
    connect_with_config(candidates, tag, ChannelConfig::default(), None)
}

/// Connect with explicit configuration and an optional log observer.
///
/// Fails with `LinkError::DeviceNotFound` when no candidate matches. The tag
/// used for lookup is also the tag embedded in outbound frames.
pub fn connect_with_config<D, I>(
    candidates: I,
    tag: &str,
    config: ChannelConfig,
    on_log: Option<LogFn>,
) -> Result<Channel<D>>
where
    D: Device,
    I: IntoIterator<Item = D>,
{
    let device = find_by_name_substring(candidates, tag)?;
    Ok(Channel::from_device_with_config(
        device,
        Some(tag),
        config,
        on_log,
    ))
}

#[cfg(test)]
mod tests {
    use beamcomm_link::{LinkError, SimulatedDevice};

    use super::*;
    use crate::error::ChannelError;

    #[test]
    fn connect_binds_first_tagged_device() {
        let (a, _b) = SimulatedDevice::pair("Antenna [tx]", "Antenna [rx]");
        let spare = SimulatedDevice::standalone("Spare antenna");
        let channel = connect(vec![spare, a], "[tx]").expect("tagged device should bind");

        assert_eq!(channel.tag(), "[tx]");
        assert_eq!(channel.device().name(), "Antenna [tx]");
    }

    #[test]
    fn connect_without_match_is_device_not_found() {
        let spare = SimulatedDevice::standalone("Spare antenna");
        let err = connect(vec![spare], "[tx]").expect_err("no device should match");

        assert!(matches!(
            err,
            ChannelError::Link(LinkError::DeviceNotFound { ref tag }) if tag == "[tx]"
        ));
        assert_eq!(
            err.to_string(),
            "link error: unable to find device by tag: [tx]"
        );
    }

    #[test]
    fn connect_with_config_keeps_config() {
        let (a, _b) = SimulatedDevice::pair("Antenna [tx]", "Antenna [rx]");
        let config = ChannelConfig::default().with_noise_prefix("Locked on ");
        let channel =
            connect_with_config(vec![a], "[tx]", config.clone(), None).expect("should bind");
        assert_eq!(channel.config(), &config);
        assert_eq!(channel.handler_count(), 0);
    }
}
