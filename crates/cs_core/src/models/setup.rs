use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 11;
pub const MIN_OVERS_LIMIT: u32 = 1;
pub const MAX_OVERS_LIMIT: u32 = 50;

/// Parameters for starting an innings.
///
/// Validated in full before any innings state is built; a partially valid
/// setup is never accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSetup {
    pub team_name: String,
    /// Batting order, top to bottom.
    pub players: Vec<String>,
    pub max_overs: u32,
}

impl MatchSetup {
    pub fn validate(&self) -> Result<()> {
        if self.team_name.trim().is_empty() {
            return Err(ScoreError::EmptyTeamName);
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ScoreError::InvalidSquadSize {
                found: self.players.len(),
            });
        }
        let mut seen = HashSet::new();
        for (slot, name) in self.players.iter().enumerate() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(ScoreError::EmptyPlayerName { slot });
            }
            if !seen.insert(trimmed) {
                return Err(ScoreError::DuplicatePlayerName {
                    name: trimmed.to_string(),
                });
            }
        }
        if !(MIN_OVERS_LIMIT..=MAX_OVERS_LIMIT).contains(&self.max_overs) {
            return Err(ScoreError::InvalidOversLimit {
                found: self.max_overs,
            });
        }
        Ok(())
    }
}
