//! Session score tally.

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Wins per player and draws, across rounds.
///
/// Only the session mutates a score: once per round, on the transition
/// into a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
    #[serde(rename = "Draws")]
    draws: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total rounds decided.
    pub fn rounds(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Counts one decided round. In-progress outcomes are not counted.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinX => self.x += 1,
            Outcome::WinO => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Zeroes every counter.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
