//! Text frame codec and change detection for name-field messaging.
//!
//! A frame is a payload wrapped as `<tag> [msg:<payload>]` and written into a
//! device name. The peer sees it as the third line of its own status block,
//! possibly behind a connection-state prefix. Decoding:
//! - requires exactly three status lines
//! - strips known noise prefixes from the third line
//! - extracts the text between the last `[msg:` and the last `]`
//!
//! Payloads are not escaped. A payload containing `]` or `[msg:` will not
//! decode back to itself.

pub mod codec;
pub mod detector;
pub mod error;
pub mod noise;

pub use codec::{
    decode_frame, decode_status, encode_frame, Frame, FrameConfig, MSG_CLOSE, MSG_OPEN,
    PAYLOAD_LINE, STATUS_LINES,
};
pub use detector::ChangeDetector;
pub use error::{FrameError, Result};
pub use noise::{strip_noise, CONNECTED, DEFAULT_NOISE_PREFIXES, ESTABLISHING, ROTATING};
