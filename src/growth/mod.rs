//! Growth projection engine for compound-interest forecasts
//!
//! Projects a starting balance with fixed monthly contributions at a fixed
//! annual rate, emitting one point per year with the balance split into
//! contributions and earnings.

mod engine;
mod plan;

pub use engine::{GrowthPoint, GrowthProjection, GrowthSummary};
pub use plan::GrowthPlan;
