use beamcomm_frame::{encode_frame, MSG_CLOSE, MSG_OPEN};

use crate::cmd::EncodeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_frame, FrameOutput, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    if is_ambiguous(&args.payload) {
        tracing::warn!(
            payload = %args.payload,
            "payload contains frame markers and will not decode back unchanged"
        );
    }

    let frame = encode_frame(&args.tag, &args.payload);
    print_frame(
        &FrameOutput {
            tag: &args.tag,
            payload: &args.payload,
            frame: &frame,
        },
        format,
    );
    Ok(SUCCESS)
}

/// True when the last-marker decode rule would not recover `payload`.
fn is_ambiguous(payload: &str) -> bool {
    payload.contains(MSG_OPEN) || payload.contains(MSG_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_payloads_are_not_ambiguous() {
        assert!(!is_ambiguous("ping"));
        assert!(!is_ambiguous("[bracket"));
    }

    #[test]
    fn marker_payloads_are_ambiguous() {
        assert!(is_ambiguous("a]b"));
        assert!(is_ambiguous("x[msg:y"));
    }
}
