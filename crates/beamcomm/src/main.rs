mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "beamcomm", version, about = "Name-field messaging CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "BEAMCOMM_LOG",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["beamcomm", "encode", "--tag", "[tx]", "ping"])
            .expect("encode args should parse");
        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from([
            "beamcomm",
            "decode",
            "--text",
            "a\nb\nc",
            "--file",
            "/tmp/status.txt",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_simulate_with_bounds() {
        let cli = Cli::try_parse_from([
            "beamcomm",
            "--format",
            "json",
            "simulate",
            "--ticks",
            "4",
            "--interval",
            "5ms",
        ])
        .expect("simulate args should parse");
        match cli.command {
            Command::Simulate(args) => {
                assert_eq!(args.ticks, Some(4));
                assert_eq!(args.interval, "5ms");
                assert_eq!(args.tag_a, "[tx]");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn encode_requires_tag() {
        let err = Cli::try_parse_from(["beamcomm", "encode", "ping"])
            .expect_err("missing tag should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
