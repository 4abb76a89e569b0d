//! # cs_core - Cricket Innings Scoring Engine
//!
//! This library tracks the live state of a single cricket innings: runs,
//! wickets, overs, extras, and strike rotation, driven by discrete ball
//! events (runs off the bat, wides, no-balls, byes, leg-byes, wickets).
//!
//! ## Features
//! - Deterministic ball-by-ball state machine (same events = same scoreboard)
//! - Free-hit handling and last-player-standing innings completion
//! - Snapshot-based undo for every applied event
//! - JSON API for easy integration with host UIs

pub mod api;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod session;

// Re-export main API functions
pub use api::{
    record_ball_json, start_match_json, summary_json, undo_json, BallResponse, StartMatchRequest,
};
pub use engine::{Innings, WicketOutcome, BALLS_PER_OVER};
pub use error::{Result, ScoreError};
pub use history::InningsHistory;
pub use models::{
    BallEvent, Batsman, BatsmanCard, BattingStatus, ExtraKind, ExtrasLedger, InningsSummary,
    MatchSetup,
};
pub use session::{BallOutcome, ScoringSession};
