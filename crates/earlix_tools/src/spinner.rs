//! Busy indicator for long derivations.

use earlix::BusyIndicator;
use std::io::{self, IsTerminal, Write};

// Update interval in pulses; wall-clock speed depends on item throughput.
const INTERVAL: u32 = 10_000;
const GLYPHS: [char; 4] = ['|', '/', '-', '\\'];

/// A spinner on stderr, advanced once per [`INTERVAL`] pulses.
///
/// Fully disabled when stdout is redirected away from a terminal, so piped
/// output stays clean.
pub struct Spinner {
    pulses: u32,
    frame: usize,
    enabled: bool,
}

impl Spinner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pulses: 0,
            frame: 0,
            enabled: io::stdout().is_terminal(),
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator for Spinner {
    fn pulse(&mut self) {
        if !self.enabled {
            return;
        }
        self.pulses += 1;
        if self.pulses < INTERVAL {
            return;
        }
        self.pulses = 0;

        let mut err = io::stderr();
        let _ = write!(err, "\r{}", GLYPHS[self.frame]);
        let _ = err.flush();
        self.frame = (self.frame + 1) % GLYPHS.len();
    }

    fn cancel(&mut self) {
        if !self.enabled {
            return;
        }
        self.pulses = 0;
        let mut err = io::stderr();
        let _ = write!(err, "\r \r");
        let _ = err.flush();
    }
}
