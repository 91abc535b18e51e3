//! Per-month income/expense totals and expense-to-income ratio

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::aggregate::{monthly_expenses, monthly_income};
use crate::transaction::{MonthKey, Transaction};

/// Income, expenses, and their ratio for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    /// Sum of positive amounts that month (never negative)
    pub total_income: f64,
    /// Absolute sum of negative amounts that month (never negative)
    pub total_expenses: f64,
    /// total_expenses / total_income; None when the month has no income
    pub expense_to_income_ratio: Option<f64>,
}

/// One summary per month present in the input, ascending by month.
pub fn monthly_summary(txns: &[Transaction]) -> Vec<MonthlySummary> {
    let income = monthly_income(txns);
    let expenses = monthly_expenses(txns);
    let months: BTreeSet<MonthKey> = txns.iter().map(|t| t.month_key()).collect();

    months
        .into_iter()
        .map(|month| {
            let total_income = income.get(&month).copied().unwrap_or(0.0);
            let total_expenses = expenses.get(&month).copied().unwrap_or(0.0);
            let expense_to_income_ratio =
                (total_income > 0.0).then(|| total_expenses / total_income);
            MonthlySummary {
                month,
                total_income,
                total_expenses,
                expense_to_income_ratio,
            }
        })
        .collect()
}
