//! Explicit scoring session context.
//!
//! A session owns one live innings plus its undo history and serializes
//! every operation: snapshot first, then mutate. Hosts construct a session
//! at match start and thread it through every call; there is no ambient
//! global state.

use crate::engine::{Innings, WicketOutcome};
use crate::error::{Result, ScoreError};
use crate::history::InningsHistory;
use crate::models::events::BallEvent;
use crate::models::setup::MatchSetup;
use crate::models::summary::InningsSummary;

/// Outcome of applying one ball event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallOutcome {
    /// Runs or extras were credited; no dismissal was attempted.
    Scored,
    /// A wicket attempt, counted or reprieved.
    Wicket(WicketOutcome),
}

#[derive(Debug, Default)]
pub struct ScoringSession {
    innings: Option<Innings>,
    history: InningsHistory,
}

impl ScoringSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the setup, install a fresh innings, and drop any undo
    /// history from a previous match.
    pub fn start_match(&mut self, setup: &MatchSetup) -> Result<()> {
        let innings = Innings::new(setup)?;
        log::info!(
            "innings started: {} ({} players, {} overs)",
            innings.team_name,
            innings.players.len(),
            innings.max_overs
        );
        self.innings = Some(innings);
        self.history.clear();
        Ok(())
    }

    pub fn innings(&self) -> Option<&Innings> {
        self.innings.as_ref()
    }

    /// Apply one ball event: snapshot first, then mutate.
    ///
    /// The engine itself never blocks; the session refuses events once the
    /// innings is over, so a rejected event leaves no snapshot behind.
    pub fn apply(&mut self, event: BallEvent) -> Result<BallOutcome> {
        event.validate()?;
        let innings = self.innings.as_mut().ok_or(ScoreError::NoActiveInnings)?;
        if innings.is_innings_over() {
            return Err(ScoreError::InningsOver);
        }

        self.history.push(innings);
        let outcome = match innings.apply(&event) {
            Some(wicket) => BallOutcome::Wicket(wicket),
            None => BallOutcome::Scored,
        };
        log::debug!(
            "applied {:?}: {}/{} after {}",
            event,
            innings.total_runs,
            innings.wickets,
            innings.overs_display()
        );
        Ok(outcome)
    }

    /// Restore the state from before the last applied event.
    pub fn undo(&mut self) -> Result<()> {
        if self.innings.is_none() {
            return Err(ScoreError::NoActiveInnings);
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.innings = Some(snapshot);
                log::debug!("undid last ball, {} snapshots left", self.history.len());
                Ok(())
            }
            None => Err(ScoreError::NothingToUndo),
        }
    }

    pub fn summary(&self) -> Result<InningsSummary> {
        self.innings
            .as_ref()
            .map(Innings::summary)
            .ok_or(ScoreError::NoActiveInnings)
    }

    pub fn is_innings_over(&self) -> bool {
        self.innings.as_ref().is_some_and(Innings::is_innings_over)
    }

    /// Number of balls that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Drop the live innings and its history.
    pub fn reset(&mut self) {
        self.innings = None;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> ScoringSession {
        let mut session = ScoringSession::new();
        session
            .start_match(&MatchSetup {
                team_name: "Lions".to_string(),
                players: vec!["Asha".to_string(), "Bea".to_string(), "Cora".to_string()],
                max_overs: 1,
            })
            .unwrap();
        session
    }

    #[test]
    fn test_requires_active_innings() {
        let mut session = ScoringSession::new();
        assert_eq!(
            session.apply(BallEvent::BatRuns { runs: 4 }),
            Err(ScoreError::NoActiveInnings)
        );
        assert_eq!(session.undo(), Err(ScoreError::NoActiveInnings));
        assert_eq!(session.summary(), Err(ScoreError::NoActiveInnings));
    }

    #[test]
    fn test_invalid_setup_rejected() {
        let mut session = ScoringSession::new();
        let result = session.start_match(&MatchSetup {
            team_name: String::new(),
            players: vec!["Asha".to_string(), "Bea".to_string()],
            max_overs: 1,
        });
        assert_eq!(result, Err(ScoreError::EmptyTeamName));
        assert!(session.innings().is_none());
    }

    #[test]
    fn test_apply_and_undo_round_trip() {
        let mut session = started();

        let before = session.innings().unwrap().clone();
        session.apply(BallEvent::BatRuns { runs: 1 }).unwrap();
        session.apply(BallEvent::Wide { runs: 2 }).unwrap();
        assert_eq!(session.undo_depth(), 2);

        session.undo().unwrap();
        session.undo().unwrap();
        assert_eq!(session.innings().unwrap(), &before);
        assert_eq!(session.undo(), Err(ScoreError::NothingToUndo));
    }

    #[test]
    fn test_invalid_event_leaves_no_snapshot() {
        let mut session = started();
        assert_eq!(
            session.apply(BallEvent::BatRuns { runs: 5 }),
            Err(ScoreError::InvalidBatRuns { runs: 5 })
        );
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_gates_events_after_innings_over() {
        let mut session = started();

        for _ in 0..6 {
            session.apply(BallEvent::BatRuns { runs: 0 }).unwrap();
        }
        assert!(session.is_innings_over());
        assert_eq!(
            session.apply(BallEvent::BatRuns { runs: 4 }),
            Err(ScoreError::InningsOver)
        );
        // Undo past the final ball reopens the innings.
        session.undo().unwrap();
        assert!(!session.is_innings_over());
        assert!(session.apply(BallEvent::BatRuns { runs: 4 }).is_ok());
    }

    #[test]
    fn test_wicket_outcomes_surface() {
        let mut session = started();

        session.apply(BallEvent::NoBall { runs: 1 }).unwrap();
        let outcome = session.apply(BallEvent::Wicket).unwrap();
        assert_eq!(outcome, BallOutcome::Wicket(WicketOutcome::FreeHitReprieve));

        let outcome = session.apply(BallEvent::Wicket).unwrap();
        assert_eq!(
            outcome,
            BallOutcome::Wicket(WicketOutcome::Taken {
                dismissed: "Asha".to_string(),
                incoming: Some("Cora".to_string()),
            })
        );
    }

    #[test]
    fn test_start_match_clears_history() {
        let mut session = started();
        session.apply(BallEvent::BatRuns { runs: 4 }).unwrap();
        assert_eq!(session.undo_depth(), 1);

        session
            .start_match(&MatchSetup {
                team_name: "Tigers".to_string(),
                players: vec!["Mira".to_string(), "Noor".to_string()],
                max_overs: 2,
            })
            .unwrap();
        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.undo(), Err(ScoreError::NothingToUndo));
        assert_eq!(session.summary().unwrap().score, "0/0");
    }

    #[test]
    fn test_reset() {
        let mut session = started();
        session.apply(BallEvent::BatRuns { runs: 4 }).unwrap();

        session.reset();
        assert!(session.innings().is_none());
        assert_eq!(session.undo_depth(), 0);
    }
}
