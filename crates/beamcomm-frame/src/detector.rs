/// Remembers the last dispatched payload and reports only transitions.
///
/// Starts empty, so an empty payload is never reported until something else
/// has been seen first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    last_seen: String,
}

impl ChangeDetector {
    /// Create a detector with an empty last-seen value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records `payload` iff it differs from the last one.
    ///
    /// Comparison is exact; nothing is normalized.
    pub fn observe(&mut self, payload: &str) -> bool {
        if payload == self.last_seen {
            return false;
        }
        self.last_seen.clear();
        self.last_seen.push_str(payload);
        true
    }

    /// The most recently accepted payload.
    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }
}
