//! In-process simulated devices.
//!
//! Two [`SimulatedDevice`]s created with [`SimulatedDevice::pair`] point at each
//! other: each one's status text names the other end. Like the real hardware,
//! status is only refreshed when a device is powered on, so a reader that never
//! cycles power keeps seeing whatever name the peer had at the last power-on.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::device::Device;

const TYPE_LINE: &str = "Type: Laser Antenna";
const POWERED_LINE: &str = "Current Input: 2.00 MW";
const UNPOWERED_LINE: &str = "Current Input: 0 W";
const IDLE_LINE: &str = "Idle";

/// Acquisition phase reported on the last status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPhase {
    Rotating,
    Establishing,
    #[default]
    Connected,
}

impl LinkPhase {
    /// Text the device puts in front of the peer's name.
    pub fn prefix(self) -> &'static str {
        match self {
            LinkPhase::Rotating => "Rotating towards ",
            LinkPhase::Establishing => "Trying to establish connection to ",
            LinkPhase::Connected => "Connected to ",
        }
    }
}

#[derive(Debug)]
struct Endpoint {
    name: String,
    powered: bool,
    phase: LinkPhase,
    status: String,
}

#[derive(Debug)]
struct Beam {
    ends: Vec<Endpoint>,
}

/// One end of a simulated beam.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    beam: Arc<Mutex<Beam>>,
    side: usize,
    peer: Option<usize>,
}

impl SimulatedDevice {
    /// Create two devices aimed at each other, both powered and connected.
    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> (Self, Self) {
        let beam = Arc::new(Mutex::new(Beam {
            ends: vec![Endpoint::new(a.into()), Endpoint::new(b.into())],
        }));
        let first = Self {
            beam: beam.clone(),
            side: 0,
            peer: Some(1),
        };
        let second = Self {
            beam,
            side: 1,
            peer: Some(0),
        };
        first.refresh();
        second.refresh();
        (first, second)
    }

    /// Create a powered device with nothing to aim at.
    pub fn standalone(name: impl Into<String>) -> Self {
        let device = Self {
            beam: Arc::new(Mutex::new(Beam {
                ends: vec![Endpoint::new(name.into())],
            })),
            side: 0,
            peer: None,
        };
        device.refresh();
        device
    }

    /// Change the acquisition phase. Takes effect at the next power-on.
    pub fn set_phase(&self, phase: LinkPhase) {
        self.lock().ends[self.side].phase = phase;
    }

    /// Name of the remote end, if any.
    pub fn peer_name(&self) -> Option<String> {
        let beam = self.lock();
        self.peer.map(|peer| beam.ends[peer].name.clone())
    }

    /// Whether this end is currently powered.
    pub fn is_powered(&self) -> bool {
        self.lock().ends[self.side].powered
    }

    fn refresh(&self) {
        let mut beam = self.lock();
        let end = &beam.ends[self.side];
        let status = match self.peer {
            Some(peer) => format!(
                "{TYPE_LINE}\n{POWERED_LINE}\n{}{}",
                end.phase.prefix(),
                beam.ends[peer].name
            ),
            None => format!("{TYPE_LINE}\n{POWERED_LINE}\n{IDLE_LINE}"),
        };
        beam.ends[self.side].status = status;
    }

    fn lock(&self) -> MutexGuard<'_, Beam> {
        self.beam.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Endpoint {
    fn new(name: String) -> Self {
        Self {
            name,
            powered: true,
            phase: LinkPhase::default(),
            status: String::new(),
        }
    }
}

impl Device for SimulatedDevice {
    fn name(&self) -> String {
        self.lock().ends[self.side].name.clone()
    }

    fn set_power(&mut self, on: bool) {
        let was_powered = {
            let mut beam = self.lock();
            let end = &mut beam.ends[self.side];
            let was_powered = end.powered;
            end.powered = on;
            if !on {
                end.status = format!("{TYPE_LINE}\n{UNPOWERED_LINE}");
            }
            was_powered
        };
        if on && !was_powered {
            self.refresh();
        }
    }

    fn status_text(&self) -> String {
        self.lock().ends[self.side].status.clone()
    }

    fn set_name(&mut self, text: &str) {
        self.lock().ends[self.side].name = text.to_string();
    }
}
