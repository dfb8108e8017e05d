//! Replay of a [Trace] as timed reveal events.
//!
//! The visited cells are revealed first, one every `visit_delay`. The path phase begins once the
//! last visited cell has had its slot, i.e. at `visit_delay * visited.len()`, and reveals one
//! path cell every `path_delay`. Offsets are measured from the start of the playback so any
//! scheduler (a terminal loop, a GUI timer, a test) can drive it.
use std::time::Duration;

use crate::{AnimationConfig, Coord, Trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Visited,
    ShortestPath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    pub coord: Coord,
    pub phase: Phase,
    /// Time since the start of the playback at which the cell is revealed.
    pub offset: Duration,
}

/// Finite iterator over the [RevealEvent]s of a trace. Clone it to restart.
#[derive(Clone, Debug)]
pub struct Playback {
    visited: Vec<Coord>,
    path: Vec<Coord>,
    config: AnimationConfig,
    step: usize,
}

impl Playback {
    pub fn new(trace: &Trace, config: &AnimationConfig) -> Playback {
        Playback {
            visited: trace.visited.clone(),
            path: trace.path.clone(),
            config: *config,
            step: 0,
        }
    }

    /// Offset at which the path phase begins.
    pub fn path_phase_offset(&self) -> Duration {
        scale(self.config.visit_delay, self.visited.len())
    }

    /// Offset of the last event, or zero for an empty playback.
    pub fn total_duration(&self) -> Duration {
        match self.path.len() {
            0 => self.visited.len().checked_sub(1).map_or(Duration::ZERO, |last| {
                scale(self.config.visit_delay, last)
            }),
            n => self.path_phase_offset() + scale(self.config.path_delay, n - 1),
        }
    }

    /// Starts over from the first event.
    pub fn restart(&mut self) {
        self.step = 0;
    }

    fn event(&self, step: usize) -> Option<RevealEvent> {
        if let Some(&coord) = self.visited.get(step) {
            return Some(RevealEvent {
                coord,
                phase: Phase::Visited,
                offset: scale(self.config.visit_delay, step),
            });
        }
        let i = step - self.visited.len();
        self.path.get(i).map(|&coord| RevealEvent {
            coord,
            phase: Phase::ShortestPath,
            offset: self.path_phase_offset() + scale(self.config.path_delay, i),
        })
    }
}

fn scale(delay: Duration, steps: usize) -> Duration {
    delay.saturating_mul(u32::try_from(steps).unwrap_or(u32::MAX))
}

impl Iterator for Playback {
    type Item = RevealEvent;

    fn next(&mut self) -> Option<RevealEvent> {
        let event = self.event(self.step)?;
        self.step += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.visited.len() + self.path.len()).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback {}
