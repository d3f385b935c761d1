//! Data models module
//!
//! Contains the value types passed through the evaluator:
//! - Calculator input and its switches
//! - Per-configuration cost breakdowns
//! - Comparison results

pub mod breakdown;
pub mod input;

pub use breakdown::{ComparisonResult, ComputeCost, CostBreakdown};
pub use input::{CostModelInput, EgressMode, Scenario, SensingConfiguration};
