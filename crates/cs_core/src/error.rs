use thiserror::Error;

use crate::models::ExtraKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Team name must not be empty")]
    EmptyTeamName,

    #[error("Invalid squad size: {found} (expected 2 to 11 players)")]
    InvalidSquadSize { found: usize },

    #[error("Player name must not be empty (slot {slot})")]
    EmptyPlayerName { slot: usize },

    #[error("Duplicate player name: {name}")]
    DuplicatePlayerName { name: String },

    #[error("Invalid overs limit: {found} (expected 1 to 50)")]
    InvalidOversLimit { found: u32 },

    #[error("Invalid bat runs: {runs} (expected 0, 1, 2, 3, 4 or 6)")]
    InvalidBatRuns { runs: u32 },

    #[error("Invalid {kind} runs: {runs}")]
    InvalidExtraRuns { kind: ExtraKind, runs: u32 },

    #[error("No innings in progress")]
    NoActiveInnings,

    #[error("Innings is over; no further deliveries accepted")]
    InningsOver,

    #[error("Nothing to undo")]
    NothingToUndo,
}

pub type Result<T> = std::result::Result<T, ScoreError>;
