pub mod batsman;
pub mod events;
pub mod extras;
pub mod setup;
pub mod summary;

pub use batsman::{Batsman, BatsmanCard, BattingStatus};
pub use events::{BallEvent, ExtraKind};
pub use extras::ExtrasLedger;
pub use setup::{MatchSetup, MAX_OVERS_LIMIT, MAX_PLAYERS, MIN_OVERS_LIMIT, MIN_PLAYERS};
pub use summary::InningsSummary;
