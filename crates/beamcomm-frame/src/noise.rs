//! Known non-payload prefixes on the status line.
//!
//! The device reports its acquisition state in front of the peer's name. These
//! strings are not part of any frame and are removed before marker search.

/// Reported while the device turns towards its target.
pub const ROTATING: &str = "Rotating towards ";

/// Reported while the link handshake is in progress.
pub const ESTABLISHING: &str = "Trying to establish connection to ";

/// Reported once the link is up.
pub const CONNECTED: &str = "Connected to ";

/// Prefixes checked by default, in order.
pub const DEFAULT_NOISE_PREFIXES: [&str; 3] = [ROTATING, ESTABLISHING, CONNECTED];

/// Remove matching prefixes from the front of `line`.
///
/// Every prefix is checked once, in order, against what is left after the
/// previous ones. The known prefixes are mutually exclusive, so in practice at
/// most one is removed.
pub fn strip_noise<'a, S: AsRef<str>>(line: &'a str, prefixes: &[S]) -> &'a str {
    let mut rest = line;
    for prefix in prefixes {
        if let Some(stripped) = rest.strip_prefix(prefix.as_ref()) {
            rest = stripped;
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_each_known_prefix() {
        for prefix in DEFAULT_NOISE_PREFIXES {
            let line = format!("{prefix}[tx] [msg:hi]");
            assert_eq!(strip_noise(&line, &DEFAULT_NOISE_PREFIXES), "[tx] [msg:hi]");
        }
    }

    #[test]
    fn leaves_unprefixed_line_alone() {
        assert_eq!(
            strip_noise("[tx] [msg:hi]", &DEFAULT_NOISE_PREFIXES),
            "[tx] [msg:hi]"
        );
    }

    #[test]
    fn prefix_in_middle_is_kept() {
        let line = "[tx] Connected to [msg:hi]";
        assert_eq!(strip_noise(line, &DEFAULT_NOISE_PREFIXES), line);
    }

    #[test]
    fn custom_prefixes() {
        let prefixes = vec!["Locked: ".to_string()];
        assert_eq!(strip_noise("Locked: body", &prefixes), "body");
    }
}
