//! Additive weight scoring and classification

use serde::{Deserialize, Serialize};

use super::factors::{DecisionFactors, Reversibility, Urgency};

/// Margin one tally must hold over the other before the balanced
/// recommendation tips to a decisive one
const DECISIVE_MARGIN: u32 = 2;

/// Categorical recommendation for a scored decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    ActNow,
    Monitor,
    StrategicPatience,
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::ActNow => "Act Now",
            Recommendation::Monitor => "Monitor & Prepare",
            Recommendation::StrategicPatience => "Strategic Patience",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::ActNow => {
                "This situation calls for decisive action. The factors suggest that \
                 waiting could be costly or reduce your options."
            }
            Recommendation::Monitor => {
                "This is a balanced situation. Prepare for action while gathering more \
                 information. Set specific triggers for when to act."
            }
            Recommendation::StrategicPatience => {
                "The optimal strategy is to wait. More time will provide clarity, \
                 reduce risk, and potentially improve outcomes."
            }
        }
    }
}

/// Scored tallies and the resulting recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionScore {
    pub action_score: u32,
    pub patience_score: u32,
    pub recommendation: Recommendation,

    /// Action tally as a share of the combined total, in percent
    pub action_pct: f64,

    /// Patience tally as a share of the combined total, in percent
    pub patience_pct: f64,
}

impl DecisionFactors {
    /// Score this decision with the fixed weight table
    ///
    /// Deterministic and stateless: identical factors always produce the
    /// identical score and recommendation.
    pub fn score(&self) -> DecisionScore {
        let mut action: u32 = 0;
        let mut patience: u32 = 0;

        match self.urgency {
            Urgency::High => action += 3,
            Urgency::Medium => action += 1,
            Urgency::Low => patience += 2,
        }

        if self.financial_impact > 50_000.0 {
            patience += 2;
        } else if self.financial_impact > 10_000.0 {
            patience += 1;
        }

        if self.time_horizon_months < 3 {
            action += 2;
        } else if self.time_horizon_months > 12 {
            patience += 2;
        }

        match self.reversibility {
            Reversibility::Difficult => patience += 3,
            Reversibility::Moderate => patience += 1,
            Reversibility::Easy => action += 1,
        }

        if self.emotional_pressure > 7 {
            patience += 2;
        } else if self.emotional_pressure < 4 {
            action += 1;
        }

        if self.information_available < 4 {
            patience += 2;
        } else if self.information_available > 7 {
            action += 1;
        }

        let recommendation = if action > patience + DECISIVE_MARGIN {
            Recommendation::ActNow
        } else if patience > action + DECISIVE_MARGIN {
            Recommendation::StrategicPatience
        } else {
            Recommendation::Monitor
        };

        let total = action + patience;
        // The urgency weight makes total >= 1, but guard the split anyway
        let (action_pct, patience_pct) = if total > 0 {
            (
                action as f64 / total as f64 * 100.0,
                patience as f64 / total as f64 * 100.0,
            )
        } else {
            (50.0, 50.0)
        };

        DecisionScore {
            action_score: action,
            patience_score: patience,
            recommendation,
            action_pct,
            patience_pct,
        }
    }
}
