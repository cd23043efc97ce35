use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod simulate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a payload into a name-field frame.
    Encode(EncodeArgs),
    /// Decode a payload from a device status block.
    Decode(DecodeArgs),
    /// Run two simulated endpoints exchanging counted ping/pong messages.
    Simulate(SimulateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Simulate(args) => simulate::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Endpoint tag placed in front of the message.
    #[arg(long, short = 't')]
    pub tag: String,
    /// Message payload.
    pub payload: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Status text to decode. Reads stdin when neither --text nor --file is given.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
    /// Read status text from file.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Extra noise prefix to strip (repeatable), checked after the built-in ones.
    #[arg(long = "noise-prefix", value_name = "PREFIX")]
    pub noise_prefixes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Tag of the first endpoint.
    #[arg(long, default_value = "[tx]")]
    pub tag_a: String,
    /// Tag of the second endpoint.
    #[arg(long, default_value = "[rx]")]
    pub tag_b: String,
    /// Payload the first endpoint sends before the first tick.
    #[arg(long, default_value = "ping")]
    pub first: String,
    /// Stop after N ticks. Runs until Ctrl-C when omitted.
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Pause between ticks (e.g. 250ms, 1s).
    #[arg(long, default_value = "100ms")]
    pub interval: String,
    /// Echo channel log lines ("New Message: ...") to stderr.
    #[arg(long)]
    pub echo: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
