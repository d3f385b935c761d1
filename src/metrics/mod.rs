//! Cost model calculations
//!
//! - Data volume per configuration
//! - Storage, compute, rework and integration costs
//! - Frame vs event comparison and the ROI view on top of it

pub mod comparison;
pub mod cost;
pub mod roi;
pub mod volume;

pub use comparison::{compare, evaluate, Evaluation, Evaluator};
pub use roi::{RoiSummary, SavingsRating};
