use std::io::{IsTerminal, Write};

use beamcomm_channel::TickOutcome;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameOutput<'a> {
    pub tag: &'a str,
    pub payload: &'a str,
    pub frame: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DecodeOutput<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub lines: usize,
}

/// One endpoint's result for one simulation tick.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TickRecord {
    pub tick: u64,
    pub endpoint: String,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    pub fired: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TickRecord {
    pub fn new(tick: u64, endpoint: &str, outcome: &TickOutcome) -> Self {
        let (kind, payload, fired, detail) = match outcome {
            TickOutcome::NoFrame(err) => ("no_frame", None, 0, Some(err.to_string())),
            TickOutcome::Unchanged => ("unchanged", None, 0, None),
            TickOutcome::Dispatched { payload, fired } => {
                ("dispatched", Some(payload.clone()), *fired, None)
            }
        };
        Self {
            tick,
            endpoint: endpoint.to_string(),
            outcome: kind,
            payload,
            fired,
            detail,
        }
    }
}

pub fn print_frame(out: &FrameOutput<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = new_table(vec!["TAG", "PAYLOAD", "FRAME"]);
            table.add_row(vec![out.tag, out.payload, out.frame]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("tag={} payload={} frame={}", out.tag, out.payload, out.frame);
        }
        OutputFormat::Raw => print_raw(out.frame),
    }
}

pub fn print_decode(out: &DecodeOutput<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table => {
            let mut table = new_table(vec!["OK", "LINES", "PAYLOAD", "REASON"]);
            table.add_row(vec![
                out.ok.to_string(),
                out.lines.to_string(),
                out.payload.unwrap_or("-").to_string(),
                out.reason.clone().unwrap_or_else(|| "-".to_string()),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match (out.payload, &out.reason) {
            (Some(payload), _) => println!("ok payload={payload}"),
            (None, Some(reason)) => println!("not-ok lines={} reason={reason}", out.lines),
            (None, None) => println!("not-ok lines={}", out.lines),
        },
        OutputFormat::Raw => {
            if let Some(payload) = out.payload {
                print_raw(payload);
            }
        }
    }
}

/// Print a record as it happens. Table output is deferred to [`print_tick_table`].
pub fn print_tick(record: &TickRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(record),
        OutputFormat::Table => {}
        OutputFormat::Pretty => match (&record.payload, &record.detail) {
            (Some(payload), _) => println!(
                "tick={} endpoint={} {} payload={} fired={}",
                record.tick, record.endpoint, record.outcome, payload, record.fired
            ),
            (None, Some(detail)) => println!(
                "tick={} endpoint={} {} ({detail})",
                record.tick, record.endpoint, record.outcome
            ),
            (None, None) => println!(
                "tick={} endpoint={} {}",
                record.tick, record.endpoint, record.outcome
            ),
        },
        OutputFormat::Raw => {
            if let Some(payload) = &record.payload {
                println!("{payload}");
            }
        }
    }
}

pub fn print_tick_table(records: &[TickRecord]) {
    let mut table = new_table(vec!["TICK", "ENDPOINT", "OUTCOME", "PAYLOAD", "FIRED"]);
    for record in records {
        table.add_row(vec![
            record.tick.to_string(),
            record.endpoint.clone(),
            record.outcome.to_string(),
            record
                .payload
                .clone()
                .or_else(|| record.detail.clone())
                .unwrap_or_default(),
            record.fired.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn print_raw(text: &str) {
    let mut out = std::io::stdout();
    let _ = out.write_all(text.as_bytes());
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table<T: Into<comfy_table::Cell>>(header: Vec<T>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}
