use serde::{Deserialize, Serialize};

use super::batsman::BatsmanCard;
use super::extras::ExtrasLedger;

/// Read-only scoreboard aggregate for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsSummary {
    /// `"<runs>/<wickets>"`
    pub score: String,
    /// `"<completed overs>.<balls in current over>"`
    pub overs: String,
    pub extras: ExtrasLedger,
    pub extras_total: u32,
    pub on_strike: String,
    pub at_other_end: String,
    pub free_hit: bool,
    pub batsmen: Vec<BatsmanCard>,
}
