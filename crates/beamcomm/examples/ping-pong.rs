//! Two endpoints on one simulated beam, bouncing a counter back and forth.
//!
//! Run with:
//!   cargo run --example ping-pong
//!
//! The same exchange with tick records on stdout:
//!   cargo run --features cli -- simulate --ticks 5 --format pretty

use std::thread;
use std::time::Duration;

use beamcomm::channel::{connect, Responder};
use beamcomm::link::SimulatedDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (left, right) = SimulatedDevice::pair("Antenna [left]", "Antenna [right]");

    let mut a = connect(vec![left], "[left]")?;
    let mut b = connect(vec![right], "[right]")?;

    a.on_match(
        |p| p.starts_with("pong"),
        |p: &str, out: &mut Responder<'_>| out.send(&format!("ping after {p}")),
    );
    b.on_match(
        |p| p.starts_with("ping"),
        |p: &str, out: &mut Responder<'_>| out.send(&format!("pong after {p}")),
    );

    a.send("ping");

    for tick in 1..=4 {
        eprintln!("tick {tick}: right {:?}", b.tick());
        eprintln!("tick {tick}: left  {:?}", a.tick());
        thread::sleep(Duration::from_millis(50));
    }

    Ok(())
}
