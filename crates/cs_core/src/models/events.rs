use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Kind of extra delivery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Wides and no-balls do not consume a ball of the over.
    pub fn is_legal_delivery(&self) -> bool {
        matches!(self, ExtraKind::Bye | ExtraKind::LegBye)
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ExtraKind::Wide => "wide",
            ExtraKind::NoBall => "no-ball",
            ExtraKind::Bye => "bye",
            ExtraKind::LegBye => "leg-bye",
        };
        write!(f, "{}", label)
    }
}

/// One user-confirmed ball, as captured by the presentation layer.
///
/// Exactly one event is applied per ball. Events carry the raw operator
/// input; `validate` enforces the per-kind ranges before the engine sees it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BallEvent {
    /// Runs off the bat on a legal delivery (0, 1, 2, 3, 4 or 6).
    BatRuns { runs: u32 },
    /// Wide; `runs` is the full amount conceded (>= 1).
    Wide { runs: u32 },
    /// No-ball; `runs` is the effective total for the delivery,
    /// 1 (automatic) + 0..=6 off the bat.
    NoBall { runs: u32 },
    /// Byes on a legal delivery (>= 1).
    Bye { runs: u32 },
    /// Leg-byes on a legal delivery (>= 1).
    LegBye { runs: u32 },
    /// Wicket attempt on a legal delivery.
    Wicket,
}

impl BallEvent {
    /// Check the per-kind intake constraints before the event reaches the
    /// engine. The engine's mutators assume pre-validated input.
    pub fn validate(&self) -> Result<()> {
        match *self {
            BallEvent::BatRuns { runs } => match runs {
                0 | 1 | 2 | 3 | 4 | 6 => Ok(()),
                _ => Err(ScoreError::InvalidBatRuns { runs }),
            },
            BallEvent::Wide { runs } if runs < 1 => Err(ScoreError::InvalidExtraRuns {
                kind: ExtraKind::Wide,
                runs,
            }),
            BallEvent::NoBall { runs } if !(1..=7).contains(&runs) => {
                Err(ScoreError::InvalidExtraRuns {
                    kind: ExtraKind::NoBall,
                    runs,
                })
            }
            BallEvent::Bye { runs } if runs < 1 => Err(ScoreError::InvalidExtraRuns {
                kind: ExtraKind::Bye,
                runs,
            }),
            BallEvent::LegBye { runs } if runs < 1 => Err(ScoreError::InvalidExtraRuns {
                kind: ExtraKind::LegBye,
                runs,
            }),
            _ => Ok(()),
        }
    }
}
