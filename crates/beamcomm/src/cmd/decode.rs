use std::fs;
use std::io::Read;

use beamcomm_frame::{decode_status, FrameConfig};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_decode, DecodeOutput, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let raw = resolve_status(&args)?;
    let config = args
        .noise_prefixes
        .iter()
        .fold(FrameConfig::default(), |config, prefix| {
            config.with_noise_prefix(prefix.as_str())
        });

    let lines = raw.split('\n').count();
    match decode_status(&raw, &config) {
        Ok(payload) => {
            print_decode(
                &DecodeOutput {
                    ok: true,
                    payload: Some(&payload),
                    reason: None,
                    lines,
                },
                format,
            );
            Ok(SUCCESS)
        }
        Err(err) => {
            print_decode(
                &DecodeOutput {
                    ok: false,
                    payload: None,
                    reason: Some(err.to_string()),
                    lines,
                },
                format,
            );
            Err(frame_error("no decodable frame", &err))
        }
    }
}

fn resolve_status(args: &DecodeArgs) -> CliResult<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map(strip_final_newline)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(strip_final_newline(buf))
}

// Files and pipes end with a newline the device never produced.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_final_newline() {
        assert_eq!(strip_final_newline("a\nb\nc\n".to_string()), "a\nb\nc");
        assert_eq!(strip_final_newline("a\nb\n\n".to_string()), "a\nb\n");
        assert_eq!(strip_final_newline("abc".to_string()), "abc");
    }
}
