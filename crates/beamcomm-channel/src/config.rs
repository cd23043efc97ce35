use beamcomm_frame::FrameConfig;

/// Controls channel behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Codec settings (noise prefixes).
    pub frame: FrameConfig,
}

impl ChannelConfig {
    /// Add a noise prefix to strip after the built-in ones.
    pub fn with_noise_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.frame = self.frame.with_noise_prefix(prefix);
        self
    }
}
