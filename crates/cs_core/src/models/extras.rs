use serde::{Deserialize, Serialize};

use super::events::ExtraKind;

/// Extras conceded so far, by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtrasLedger {
    pub wide: u32,
    pub no_ball: u32,
    pub bye: u32,
    pub leg_bye: u32,
}

impl ExtrasLedger {
    pub fn add(&mut self, kind: ExtraKind, runs: u32) {
        match kind {
            ExtraKind::Wide => self.wide += runs,
            ExtraKind::NoBall => self.no_ball += runs,
            ExtraKind::Bye => self.bye += runs,
            ExtraKind::LegBye => self.leg_bye += runs,
        }
    }

    pub fn total(&self) -> u32 {
        self.wide + self.no_ball + self.bye + self.leg_bye
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_total() {
        let mut extras = ExtrasLedger::default();
        extras.add(ExtraKind::Wide, 2);
        extras.add(ExtraKind::NoBall, 1);
        extras.add(ExtraKind::Bye, 4);
        extras.add(ExtraKind::LegBye, 1);

        assert_eq!(extras.wide, 2);
        assert_eq!(extras.no_ball, 1);
        assert_eq!(extras.bye, 4);
        assert_eq!(extras.leg_bye, 1);
        assert_eq!(extras.total(), 8);
    }
}
