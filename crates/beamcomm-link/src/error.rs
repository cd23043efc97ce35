/// Errors that can occur while binding a link to a device.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// No candidate device has a name containing the tag.
    #[error("unable to find device by tag: {tag}")]
    DeviceNotFound { tag: String },
}

pub type Result<T> = std::result::Result<T, LinkError>;
