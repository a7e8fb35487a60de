use std::fmt;

use serde::{Deserialize, Serialize};

/// Which mechanics problem is being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// One block on a fixed incline.
    Single,
    /// One block on a conveyor belt running at constant velocity.
    Belt,
    /// A block stacked on a free plank that rests on the ground.
    Plank,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [Self::Single, Self::Belt, Self::Plank];

    /// Whether the scenario carries an independent second body.
    pub fn has_secondary_body(self) -> bool {
        matches!(self, Self::Plank)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Belt => "belt",
            Self::Plank => "plank",
        })
    }
}

/// Friction regime of a single contact as decided by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRegime {
    /// Surfaces move relative to each other; kinetic friction opposes the motion.
    Sliding,
    /// Surfaces share velocity and static friction holds them together.
    Locked,
    /// Surfaces share velocity but static friction cannot hold; sliding starts this step.
    SlipOnset,
}

impl ContactRegime {
    /// Slip onset counts as sliding for acceleration purposes.
    pub fn is_sliding(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

/// Scenario-level label derived from the contact regimes of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionStatus {
    Sliding,
    MovingTogether,
    AtRest,
    BeltMatched,
}

impl MotionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sliding => "sliding",
            Self::MovingTogether => "moving-together",
            Self::AtRest => "at-rest",
            Self::BeltMatched => "belt-matched",
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slip_onset_counts_as_sliding() {
        assert!(ContactRegime::Sliding.is_sliding());
        assert!(ContactRegime::SlipOnset.is_sliding());
        assert!(!ContactRegime::Locked.is_sliding());
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(MotionStatus::MovingTogether.to_string(), "moving-together");
        assert_eq!(MotionStatus::BeltMatched.label(), "belt-matched");
        assert_eq!(ScenarioKind::Plank.to_string(), "plank");
    }
}
