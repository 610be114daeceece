//! Decision factor inputs

use serde::{Deserialize, Serialize};

/// How urgent the decision is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// How easily the decision can be undone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reversibility {
    Easy,
    Moderate,
    Difficult,
}

/// Inputs describing a single decision to evaluate
///
/// The two 1-10 ratings come from sliders in the original product; they are
/// clamped at construction so the scorer stays total over its domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionFactors {
    pub urgency: Urgency,

    /// Dollar amount at stake
    pub financial_impact: f64,

    /// How far out the consequences play out, in months
    pub time_horizon_months: u32,

    pub reversibility: Reversibility,

    /// Felt pressure to decide, 1 (none) to 10 (overwhelming)
    pub emotional_pressure: u8,

    /// How much of the relevant information is in hand, 1 to 10
    pub information_available: u8,
}

impl DecisionFactors {
    pub fn new(
        urgency: Urgency,
        financial_impact: f64,
        time_horizon_months: u32,
        reversibility: Reversibility,
        emotional_pressure: u8,
        information_available: u8,
    ) -> Self {
        Self {
            urgency,
            financial_impact,
            time_horizon_months,
            reversibility,
            emotional_pressure: emotional_pressure.clamp(1, 10),
            information_available: information_available.clamp(1, 10),
        }
    }
}

impl Default for DecisionFactors {
    /// Midpoint defaults matching the original evaluation form
    fn default() -> Self {
        Self {
            urgency: Urgency::Medium,
            financial_impact: 5_000.0,
            time_horizon_months: 12,
            reversibility: Reversibility::Moderate,
            emotional_pressure: 5,
            information_available: 5,
        }
    }
}
