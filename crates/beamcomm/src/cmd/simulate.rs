use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use beamcomm_channel::{connect_with_config, Channel, ChannelConfig, LogFn, Responder};
use beamcomm_link::SimulatedDevice;

use crate::cmd::SimulateArgs;
use crate::exit::{channel_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_tick, print_tick_table, OutputFormat, TickRecord};

/// Name of the unaimed device listed ahead of the pair during lookup.
const SPARE_NAME: &str = "Antenna (spare)";

/// Two channels on opposite ends of one simulated beam.
struct Simulation {
    a: Channel<SimulatedDevice>,
    b: Channel<SimulatedDevice>,
}

impl Simulation {
    fn build(args: &SimulateArgs) -> CliResult<Self> {
        if args.tag_a == args.tag_b {
            return Err(CliError::new(USAGE, "--tag-a and --tag-b must differ"));
        }
        for tag in [&args.tag_a, &args.tag_b] {
            if SPARE_NAME.contains(tag.as_str()) {
                return Err(CliError::new(
                    USAGE,
                    format!("tag {tag:?} would match the spare device {SPARE_NAME:?}"),
                ));
            }
        }

        let (dev_a, dev_b) = SimulatedDevice::pair(
            format!("Antenna {}", args.tag_a),
            format!("Antenna {}", args.tag_b),
        );
        let spare = SimulatedDevice::standalone(SPARE_NAME);

        let mut a = connect_with_config(
            [spare.clone(), dev_a.clone(), dev_b.clone()],
            &args.tag_a,
            ChannelConfig::default(),
            echo_log(args.echo, &args.tag_a),
        )
        .map_err(|err| channel_error("connect failed", err))?;
        let mut b = connect_with_config(
            [spare, dev_b, dev_a],
            &args.tag_b,
            ChannelConfig::default(),
            echo_log(args.echo, &args.tag_b),
        )
        .map_err(|err| channel_error("connect failed", err))?;

        a.on_match(|p| p.starts_with("pong"), counted_reply("ping"));
        b.on_match(|p| p.starts_with("ping"), counted_reply("pong"));
        a.send(&args.first);

        Ok(Self { a, b })
    }

    /// Tick the receiving side first, then the sender.
    fn step(&mut self, tick: u64) -> [TickRecord; 2] {
        let b = self.b.tick();
        let a = self.a.tick();
        [
            TickRecord::new(tick, self.b.tag(), &b),
            TickRecord::new(tick, self.a.tag(), &a),
        ]
    }
}

pub fn run(args: SimulateArgs, format: OutputFormat) -> CliResult<i32> {
    let interval = parse_duration(&args.interval)?;
    let mut sim = Simulation::build(&args)?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut records = Vec::new();
    let mut tick = 0u64;
    while running.load(Ordering::SeqCst) && args.ticks.map_or(true, |limit| tick < limit) {
        tick += 1;
        for record in sim.step(tick) {
            print_tick(&record, format);
            if matches!(format, OutputFormat::Table) {
                records.push(record);
            }
        }

        if args.ticks.map_or(true, |limit| tick < limit) {
            thread::sleep(interval);
        }
    }

    if matches!(format, OutputFormat::Table) {
        print_tick_table(&records);
    }
    tracing::info!(ticks = tick, "simulation stopped");

    Ok(SUCCESS)
}

/// Reply with `reply` and the received sequence number plus one.
fn counted_reply(reply: &'static str) -> impl FnMut(&str, &mut Responder<'_>) + 'static {
    move |received: &str, out: &mut Responder<'_>| {
        out.send(&next_payload(reply, received));
    }
}

fn next_payload(reply: &str, received: &str) -> String {
    let seq = received
        .rsplit_once(' ')
        .and_then(|(_, n)| n.parse::<u64>().ok())
        .unwrap_or(0);
    format!("{reply} {}", seq.saturating_add(1))
}

fn echo_log(enabled: bool, tag: &str) -> Option<LogFn> {
    if !enabled {
        return None;
    }
    let tag = tag.to_string();
    Some(Box::new(move |line: &str| eprintln!("{tag} {line}")))
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, millis) = if let Some(num) = input.strip_suffix("ms") {
        (num, true)
    } else if let Some(num) = input.strip_suffix('s') {
        (num, false)
    } else {
        (input, true)
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    if millis {
        Ok(Duration::from_millis(value))
    } else {
        Ok(Duration::from_secs(value))
    }
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
