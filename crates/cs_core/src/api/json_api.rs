//! JSON boundary for host UIs.
//!
//! String-in / string-out entry points so a host (GUI, web, terminal) can
//! drive a scoring session without binding to the crate's types. Every
//! function operates on an explicit [`ScoringSession`]; errors come back as
//! plain strings for direct display.

use serde::{Deserialize, Serialize};

use crate::engine::WicketOutcome;
use crate::models::events::BallEvent;
use crate::models::setup::MatchSetup;
use crate::models::summary::InningsSummary;
use crate::session::{BallOutcome, ScoringSession};

#[derive(Debug, Deserialize)]
pub struct StartMatchRequest {
    pub team_name: String,
    /// Batting order, top to bottom (2..=11 unique names).
    pub players: Vec<String>,
    pub max_overs: u32,
}

#[derive(Debug, Serialize)]
pub struct BallResponse {
    /// Present when the event was a wicket attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wicket: Option<WicketOutcome>,
    pub innings_over: bool,
    pub summary: InningsSummary,
}

/// Start a new match. Request: `{"team_name", "players", "max_overs"}`.
/// Returns the opening scoreboard summary.
pub fn start_match_json(session: &mut ScoringSession, request_json: &str) -> Result<String, String> {
    let request: StartMatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let setup = MatchSetup {
        team_name: request.team_name,
        players: request.players,
        max_overs: request.max_overs,
    };
    session.start_match(&setup).map_err(|e| e.to_string())?;

    let summary = session.summary().map_err(|e| e.to_string())?;
    serde_json::to_string(&summary).map_err(|e| format!("Serialization error: {}", e))
}

/// Apply one ball event. Request: a tagged event such as
/// `{"type":"bat_runs","runs":4}` or `{"type":"wicket"}`.
pub fn record_ball_json(session: &mut ScoringSession, request_json: &str) -> Result<String, String> {
    let event: BallEvent =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let outcome = session.apply(event).map_err(|e| e.to_string())?;
    let response = BallResponse {
        wicket: match outcome {
            BallOutcome::Wicket(wicket) => Some(wicket),
            BallOutcome::Scored => None,
        },
        innings_over: session.is_innings_over(),
        summary: session.summary().map_err(|e| e.to_string())?,
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

/// Undo the last applied ball and return the restored summary.
pub fn undo_json(session: &mut ScoringSession) -> Result<String, String> {
    session.undo().map_err(|e| e.to_string())?;
    summary_json(session)
}

/// Current scoreboard summary.
pub fn summary_json(session: &ScoringSession) -> Result<String, String> {
    let summary = session.summary().map_err(|e| e.to_string())?;
    serde_json::to_string(&summary).map_err(|e| format!("Serialization error: {}", e))
}
