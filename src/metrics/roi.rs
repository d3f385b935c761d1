//! Return-on-investment summary
//!
//! Turns the monthly comparison into the figures an investor slide quotes:
//! annual savings, the extra one-time spend, and how long it takes to earn back.

use serde::{Deserialize, Serialize};

use crate::models::{ComparisonResult, CostBreakdown, CostModelInput, SensingConfiguration};
use crate::reference::ReferenceData;

use super::cost::upfront_cost;

/// Savings grade based on percentage savings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsRating {
    /// >= 30%
    Strong,
    /// 10% - 30%
    Moderate,
    /// 0% - 10%
    Marginal,
    /// Event-based costs more
    Negative,
    /// No frame-based baseline to compare against
    Undefined,
}

impl SavingsRating {
    /// Get rating from percentage savings
    pub fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            None => Self::Undefined,
            Some(p) if p >= 30.0 => Self::Strong,
            Some(p) if p >= 10.0 => Self::Moderate,
            Some(p) if p >= 0.0 => Self::Marginal,
            Some(_) => Self::Negative,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Marginal => "Marginal",
            Self::Negative => "Negative",
            Self::Undefined => "Undefined",
        }
    }
}

/// Investment view of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub annual_savings: f64,
    /// Savings over the full amortization period
    pub horizon_savings: f64,
    pub horizon_months: f64,
    /// Event upfront cost minus frame upfront cost. Negative means event is cheaper to buy.
    pub incremental_investment: f64,
    /// Difference in costs that recur every month (storage, energy, cloud, rework)
    pub monthly_operating_savings: f64,
    /// `None` when the extra investment never pays back
    pub payback_months: Option<f64>,
    pub rating: SavingsRating,
}

/// Months until the operating savings cover the incremental investment
pub fn payback_months(incremental_investment: f64, monthly_operating_savings: f64) -> Option<f64> {
    if incremental_investment <= 0.0 {
        return Some(0.0);
    }
    if monthly_operating_savings <= 0.0 {
        return None;
    }
    Some(incremental_investment / monthly_operating_savings)
}

/// Build the ROI summary from an evaluated comparison
pub fn calculate_roi(
    input: &CostModelInput,
    reference: &ReferenceData,
    frame: &CostBreakdown,
    event: &CostBreakdown,
    comparison: &ComparisonResult,
) -> RoiSummary {
    let incremental_investment = upfront_cost(SensingConfiguration::EventBased, input, reference)
        - upfront_cost(SensingConfiguration::FrameBased, input, reference);
    let monthly_operating_savings = frame.recurring_cost() - event.recurring_cost();

    RoiSummary {
        annual_savings: comparison.cost_savings * 12.0,
        horizon_savings: comparison.cost_savings * reference.amortization_months,
        horizon_months: reference.amortization_months,
        incremental_investment,
        monthly_operating_savings,
        payback_months: payback_months(incremental_investment, monthly_operating_savings),
        rating: SavingsRating::from_percentage(comparison.percentage_savings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_from_percentage() {
        assert_eq!(SavingsRating::from_percentage(Some(45.0)), SavingsRating::Strong);
        assert_eq!(SavingsRating::from_percentage(Some(30.0)), SavingsRating::Strong);
        assert_eq!(SavingsRating::from_percentage(Some(12.0)), SavingsRating::Moderate);
        assert_eq!(SavingsRating::from_percentage(Some(0.0)), SavingsRating::Marginal);
        assert_eq!(SavingsRating::from_percentage(Some(-5.0)), SavingsRating::Negative);
        assert_eq!(SavingsRating::from_percentage(None), SavingsRating::Undefined);
        assert_eq!(SavingsRating::Moderate.label(), "Moderate");
    }

    #[test]
    fn test_payback_months() {
        // $30k extra, $5k/month operating savings
        assert_eq!(payback_months(30_000.0, 5_000.0), Some(6.0));

        // Cheaper to buy: paid back immediately
        assert_eq!(payback_months(-1_000.0, 0.0), Some(0.0));

        // Costs more to buy and to run: never pays back
        assert_eq!(payback_months(10_000.0, -50.0), None);
        assert_eq!(payback_months(10_000.0, 0.0), None);
    }
}
