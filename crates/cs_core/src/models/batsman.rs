use serde::{Deserialize, Serialize};

/// Per-player batting record for a single innings.
///
/// Created once per named player at setup and mutated only through
/// ball-scoring events. A dismissed batsman stays in the roster and is
/// displayed with status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batsman {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dot_balls: u32,
    pub out: bool,
}

impl Batsman {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            dot_balls: 0,
            out: false,
        }
    }

    /// Credit one delivery faced off the bat.
    ///
    /// Balls faced always advances by one. A run value of exactly 4 or 6 is
    /// classified as that boundary type; byes and leg-byes never reach this
    /// method, so the boundary counters need no cross-validation.
    pub fn record_delivery(&mut self, runs_off_bat: u32) {
        self.runs += runs_off_bat;
        self.balls += 1;
        match runs_off_bat {
            0 => self.dot_balls += 1,
            4 => self.fours += 1,
            6 => self.sixes += 1,
            _ => {}
        }
    }

    /// Monotonic out flag. Idempotent.
    pub fn mark_dismissed(&mut self) {
        self.out = true;
    }

    /// Runs per hundred balls, rounded to two decimals. 0 before the first ball.
    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            return 0.0;
        }
        round2(self.runs as f64 / self.balls as f64 * 100.0)
    }

    /// Share of runs scored in boundaries, rounded to two decimals. 0 while scoreless.
    pub fn boundary_percentage(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        let boundary_runs = (self.fours * 4 + self.sixes * 6) as f64;
        round2(boundary_runs / self.runs as f64 * 100.0)
    }

    /// Display projection for scorecards.
    pub fn card(&self) -> BatsmanCard {
        BatsmanCard {
            name: self.name.clone(),
            runs: self.runs,
            balls: self.balls,
            fours: self.fours,
            sixes: self.sixes,
            dot_balls: self.dot_balls,
            strike_rate: self.strike_rate(),
            boundary_percentage: self.boundary_percentage(),
            status: if self.out {
                BattingStatus::Out
            } else {
                BattingStatus::NotOut
            },
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One scorecard row: stored counters plus the derived rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatsmanCard {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dot_balls: u32,
    pub strike_rate: f64,
    pub boundary_percentage: f64,
    pub status: BattingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BattingStatus {
    NotOut,
    Out,
}
