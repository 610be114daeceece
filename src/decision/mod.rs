//! Act-now vs. strategic-patience decision scoring
//!
//! This module provides:
//! - Qualitative decision factors (urgency, reversibility, pressure, ...)
//! - Fixed additive weight scoring into action and patience tallies
//! - Classification into ActNow / Monitor / StrategicPatience
//! - Derived key-factor insights for the evaluated decision

mod factors;
mod insights;
mod scorer;

pub use factors::{DecisionFactors, Reversibility, Urgency};
pub use insights::{Insight, InsightLeaning};
pub use scorer::{DecisionScore, Recommendation};
