//! Innings state machine.
//!
//! Consumes one validated ball event at a time and deterministically updates
//! score, batting records, strike rotation, free-hit status, and the
//! over/ball counters. The engine never refuses an event on its own: gating
//! once the innings is over belongs to the caller (see [`crate::session`]).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::batsman::Batsman;
use crate::models::events::{BallEvent, ExtraKind};
use crate::models::extras::ExtrasLedger;
use crate::models::setup::MatchSetup;
use crate::models::summary::InningsSummary;


pub const BALLS_PER_OVER: u32 = 6;

/// Result of a wicket attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum WicketOutcome {
    /// The striker was dismissed. `incoming` names the replacement when the
    /// roster still had an unused slot.
    Taken {
        dismissed: String,
        incoming: Option<String>,
    },
    /// Free hit was active: the delivery counts, the dismissal does not.
    FreeHitReprieve,
}

/// Live state of one batting innings.
///
/// The pair at the crease is stored as two roster indices, `[striker,
/// non_striker]`, so mutating a batsman through either slot and through the
/// roster stays consistent. `Clone` is a deep copy; the undo stack relies on
/// that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Innings {
    pub team_name: String,
    pub players: Vec<Batsman>,
    pub max_overs: u32,
    pub total_runs: u32,
    pub wickets: u32,
    /// Legal deliveries only; wides and no-balls never advance it.
    pub balls_bowled: u32,
    pub extras: ExtrasLedger,
    /// Roster indices of the pair at the crease: `[striker, non_striker]`.
    current: [usize; 2],
    /// Next unused roster slot to bring in after a dismissal.
    next_batsman_index: usize,
    pub free_hit: bool,
}

impl Innings {
    /// Build a fresh innings from a fully validated setup.
    pub fn new(setup: &MatchSetup) -> Result<Self> {
        setup.validate()?;
        Ok(Self {
            team_name: setup.team_name.trim().to_string(),
            players: setup.players.iter().map(|n| Batsman::new(n.trim())).collect(),
            max_overs: setup.max_overs,
            total_runs: 0,
            wickets: 0,
            balls_bowled: 0,
            extras: ExtrasLedger::default(),
            current: [0, 1],
            next_batsman_index: 2,
            free_hit: false,
        })
    }

    pub fn striker(&self) -> &Batsman {
        &self.players[self.current[0]]
    }

    pub fn non_striker(&self) -> &Batsman {
        &self.players[self.current[1]]
    }

    fn swap_strike(&mut self) {
        self.current.swap(0, 1);
    }

    /// Count one legal delivery and rotate ends when it closes the over.
    /// Callers apply any odd-runs rotation before this.
    fn consume_legal_ball(&mut self) {
        self.balls_bowled += 1;
        if self.balls_bowled % BALLS_PER_OVER == 0 {
            self.swap_strike();
        }
    }

    // ========================
    // Ball events
    // ========================

    /// Runs off the bat on a legal delivery. Odd runs rotate the strike,
    /// then end-of-over rotation applies on top; the two swaps can cancel.
    pub fn record_bat_runs(&mut self, runs: u32) {
        self.players[self.current[0]].record_delivery(runs);
        self.total_runs += runs;
        if runs % 2 == 1 {
            self.swap_strike();
        }
        self.consume_legal_ball();
        self.free_hit = false;
    }

    /// Wide, no-ball, bye or leg-bye.
    ///
    /// For a no-ball, `runs` is the effective total: 1 automatic plus any
    /// runs off the bat, which are credited to the striker.
    pub fn record_extra(&mut self, runs: u32, kind: ExtraKind) {
        match kind {
            ExtraKind::Wide => {
                self.total_runs += runs;
                self.extras.wide += runs;
                // Not a legal delivery. Ends change on an EVEN wide count
                // under this scorer's model, the inverse of the legal-ball
                // parity rule.
                if runs % 2 == 0 {
                    self.swap_strike();
                }
            }
            ExtraKind::NoBall => {
                self.total_runs += 1;
                self.extras.no_ball += 1;
                self.free_hit = true;
                if runs > 1 {
                    let bat_runs = runs - 1;
                    self.players[self.current[0]].record_delivery(bat_runs);
                    self.total_runs += bat_runs;
                    if bat_runs % 2 == 1 {
                        self.swap_strike();
                    }
                }
                // Never a legal delivery, so no over can end on it.
            }
            ExtraKind::Bye | ExtraKind::LegBye => {
                self.total_runs += runs;
                self.extras.add(kind, runs);
                if runs % 2 == 1 {
                    self.swap_strike();
                }
                self.consume_legal_ball();
                self.free_hit = false;
            }
        }
    }

    /// Wicket attempt on a legal delivery.
    ///
    /// On a free hit the dismissal is suppressed but the ball is still
    /// consumed. Otherwise the striker is dismissed and the next unused
    /// roster slot, if any, takes the striker's end; the non-striker is
    /// undisturbed.
    pub fn record_wicket(&mut self) -> WicketOutcome {
        if self.free_hit {
            log::info!("wicket attempt on free hit: not counted");
            self.consume_legal_ball();
            self.free_hit = false;
            return WicketOutcome::FreeHitReprieve;
        }

        let striker_idx = self.current[0];
        self.players[striker_idx].mark_dismissed();
        let dismissed = self.players[striker_idx].name.clone();
        self.wickets += 1;

        let incoming = if self.next_batsman_index < self.players.len() {
            self.current[0] = self.next_batsman_index;
            self.next_batsman_index += 1;
            Some(self.players[self.current[0]].name.clone())
        } else {
            None
        };

        self.consume_legal_ball();
        self.free_hit = false;
        WicketOutcome::Taken { dismissed, incoming }
    }

    /// Apply one pre-validated ball event. Returns the wicket outcome when
    /// the event was a wicket attempt.
    pub fn apply(&mut self, event: &BallEvent) -> Option<WicketOutcome> {
        match *event {
            BallEvent::BatRuns { runs } => {
                self.record_bat_runs(runs);
                None
            }
            BallEvent::Wide { runs } => {
                self.record_extra(runs, ExtraKind::Wide);
                None
            }
            BallEvent::NoBall { runs } => {
                self.record_extra(runs, ExtraKind::NoBall);
                None
            }
            BallEvent::Bye { runs } => {
                self.record_extra(runs, ExtraKind::Bye);
                None
            }
            BallEvent::LegBye { runs } => {
                self.record_extra(runs, ExtraKind::LegBye);
                None
            }
            BallEvent::Wicket => Some(self.record_wicket()),
        }
    }

    // ========================
    // Queries
    // ========================

    /// True once one player stands alone or the overs are used up.
    pub fn is_innings_over(&self) -> bool {
        let all_out = self.wickets >= self.players.len() as u32 - 1;
        let overs_done = self.balls_bowled >= self.max_overs * BALLS_PER_OVER;
        all_out || overs_done
    }

    /// `"<completed overs>.<balls in current over>"`
    pub fn overs_display(&self) -> String {
        format!(
            "{}.{}",
            self.balls_bowled / BALLS_PER_OVER,
            self.balls_bowled % BALLS_PER_OVER
        )
    }

    pub fn summary(&self) -> InningsSummary {
        InningsSummary {
            score: format!("{}/{}", self.total_runs, self.wickets),
            overs: self.overs_display(),
            extras: self.extras.clone(),
            extras_total: self.extras.total(),
            on_strike: self.striker().name.clone(),
            at_other_end: self.non_striker().name.clone(),
            free_hit: self.free_hit,
            batsmen: self.players.iter().map(Batsman::card).collect(),
        }
    }
}
