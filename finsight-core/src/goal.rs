//! Goal-driven expense reduction: how much spending must shrink for a
//! month's savings to reach a target figure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::aggregate::{monthly_expenses, monthly_income};
use crate::transaction::{MonthKey, Transaction};

/// Per-month verdict of the savings-goal calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GoalOutcome {
    /// Expenses must drop by this percentage to leave the goal unspent
    ReductionNeeded(f64),
    /// Expenses already fit within income minus the goal
    WithinGoal,
    /// No positive income this month; no meaningful reduction exists
    NoIncome,
}

impl fmt::Display for GoalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalOutcome::ReductionNeeded(pct) => write!(
                f,
                "A reduction of {pct:.2}% in total expenses is needed to meet the savings goal.",
            ),
            GoalOutcome::WithinGoal => write!(
                f,
                "No reduction needed; expenses are already within the savings goal.",
            ),
            GoalOutcome::NoIncome => write!(
                f,
                "Zero income for this month; unable to calculate expense reduction.",
            ),
        }
    }
}

/// Compute the expense cut required per month for savings to reach
/// `savings_goal`.
///
/// Every month present in the input gets an outcome, ascending by month.
/// Months without positive income report [`GoalOutcome::NoIncome`]. When the
/// goal exceeds income in a month with zero expenses, the shortfall ratio is
/// undefined and the outcome is pinned to a full 100% reduction.
pub fn savings_goal_reductions(
    txns: &[Transaction],
    savings_goal: f64,
) -> Vec<(MonthKey, GoalOutcome)> {
    let income = monthly_income(txns);
    let expenses = monthly_expenses(txns);
    let months: BTreeSet<MonthKey> = txns.iter().map(|t| t.month_key()).collect();

    months
        .into_iter()
        .map(|month| {
            let month_income = income.get(&month).copied().unwrap_or(0.0);
            if month_income <= 0.0 {
                return (month, GoalOutcome::NoIncome);
            }

            let expense_budget = month_income - savings_goal;
            let total_expenses = expenses.get(&month).copied().unwrap_or(0.0);

            let outcome = if total_expenses > expense_budget {
                if total_expenses <= 0.0 {
                    GoalOutcome::ReductionNeeded(100.0)
                } else {
                    GoalOutcome::ReductionNeeded(
                        (total_expenses - expense_budget) / total_expenses * 100.0,
                    )
                }
            } else {
                GoalOutcome::WithinGoal
            };

            (month, outcome)
        })
        .collect()
}
