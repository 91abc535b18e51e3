//! Threshold-based savings recommendations.
//!
//! A category is flagged for a month when its spend exceeds a fixed fraction
//! of that month's income. The suggested cut is a run-level parameter, not
//! scaled to the category's overage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::{monthly_category_expenses, monthly_income};
use crate::transaction::{MonthKey, Transaction};

/// Default allowable fraction of monthly income per category
pub const DEFAULT_INCOME_THRESHOLD: f64 = 0.10;

/// Default suggested cut for categories over the threshold
pub const DEFAULT_REDUCTION_PERCENTAGE: f64 = 0.15;

/// Message emitted when no category breaches the threshold
pub const ALL_WITHIN_LIMITS: &str =
    "All expenses are within the desired limits for each category.";

/// One over-threshold finding for a (month, category) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub month: MonthKey,
    pub category: String,
    /// The threshold the category was judged against (fraction of income)
    pub income_threshold: f64,
    /// Percentage points over the threshold, rounded to 2 decimal places
    pub excess_percentage: f64,
    /// Suggested cut in percent, rounded to 2 decimal places
    pub reduction_percentage: f64,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {}, the '{}' expenses were {:.2}% over the {}% threshold of monthly income. \
             It is recommended to reduce '{}' expenses by {:.2}% to better meet savings goals.",
            self.month,
            self.category,
            self.excess_percentage,
            self.income_threshold * 100.0,
            self.category,
            self.reduction_percentage,
        )
    }
}

/// Flag every (month, category) whose expense exceeds `income_threshold` of
/// that month's income.
///
/// Months without positive income are skipped entirely. Output iterates
/// months ascending, and categories within a month in the order they first
/// appear in the ledger.
pub fn savings_recommendations(
    txns: &[Transaction],
    income_threshold: f64,
    reduction_percentage: f64,
) -> Vec<Recommendation> {
    let income = monthly_income(txns);
    let category_expenses = monthly_category_expenses(txns);

    let mut out = Vec::new();
    for (&month, &month_income) in &income {
        if month_income <= 0.0 {
            continue;
        }
        for agg in category_expenses.iter().filter(|a| a.month == month) {
            let expense_ratio = agg.amount / month_income;
            if expense_ratio > income_threshold {
                out.push(Recommendation {
                    month,
                    category: agg.category.clone(),
                    income_threshold,
                    excess_percentage: round2((expense_ratio - income_threshold) * 100.0),
                    reduction_percentage: round2(reduction_percentage * 100.0),
                });
            }
        }
    }

    out
}

/// Render recommendations as the ordered message list consumed by reports.
/// An empty run collapses to a single all-within-limits line.
pub fn recommendation_messages(recommendations: &[Recommendation]) -> Vec<String> {
    if recommendations.is_empty() {
        vec![ALL_WITHIN_LIMITS.to_string()]
    } else {
        recommendations.iter().map(|r| r.to_string()).collect()
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
