//! Financial Tools - Calculation engine for personal-finance planning tools
//!
//! This library provides:
//! - Compound-growth projections with yearly contribution/earnings splits
//! - Act-now vs. strategic-patience decision scoring
//! - Net worth aggregation over categorized assets and liabilities
//! - Emergency fund targets with funding-status buckets
//! - Financial goal tracking and a 30-day habit challenge
//! - A money-personality quiz
//! - A typed repository over pluggable blob storage

pub mod challenge;
pub mod decision;
pub mod emergency;
pub mod export;
pub mod goals;
pub mod growth;
pub mod networth;
pub mod quiz;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use decision::{DecisionFactors, DecisionScore, Recommendation};
pub use emergency::{EmergencyFundPlan, EmergencyFundReport};
pub use growth::{GrowthPlan, GrowthPoint, GrowthProjection};
pub use networth::NetWorthSnapshot;
pub use scenario::ScenarioRunner;
pub use store::{JsonFileStore, MemoryStore, Repository, ToolStore};
