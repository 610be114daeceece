//! Key-factor insights derived from decision factors

use serde::{Deserialize, Serialize};

use super::factors::{DecisionFactors, Reversibility, Urgency};

/// Which side of the trade-off an insight supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightLeaning {
    Action,
    Patience,
}

/// A single qualitative observation about the decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub leaning: InsightLeaning,
    pub text: &'static str,
}

impl DecisionFactors {
    /// Qualitative observations worth surfacing alongside the score
    ///
    /// The trigger thresholds intentionally differ from the scoring weights;
    /// an insight can fire without moving either tally.
    pub fn insights(&self) -> Vec<Insight> {
        let mut insights = Vec::new();

        if self.urgency == Urgency::Low {
            insights.push(Insight {
                leaning: InsightLeaning::Patience,
                text: "Low urgency gives you time to gather information and consider alternatives.",
            });
        }

        if self.financial_impact > 20_000.0 {
            insights.push(Insight {
                leaning: InsightLeaning::Patience,
                text: "High financial impact warrants thorough analysis and possibly professional advice.",
            });
        }

        if self.reversibility == Reversibility::Difficult {
            insights.push(Insight {
                leaning: InsightLeaning::Patience,
                text: "Difficult to reverse decisions require extra caution and consideration.",
            });
        }

        if self.emotional_pressure > 7 {
            insights.push(Insight {
                leaning: InsightLeaning::Patience,
                text: "High emotional pressure can cloud judgment. Consider waiting until emotions settle.",
            });
        }

        if self.information_available < 5 {
            insights.push(Insight {
                leaning: InsightLeaning::Patience,
                text: "Limited information suggests more research is needed before committing.",
            });
        }

        if self.time_horizon_months < 3 && self.urgency == Urgency::High {
            insights.push(Insight {
                leaning: InsightLeaning::Action,
                text: "Short timeline and high urgency indicate action may be necessary.",
            });
        }

        insights
    }
}
