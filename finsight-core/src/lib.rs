//! finsight-core: pure aggregation and recommendation engine over a ledger
//! of dated, categorized transactions.
//!
//! Everything here is a total, synchronous function over an immutable
//! `&[Transaction]` slice. Loading, rendering, and network lookups live in
//! the sibling crates.

pub mod aggregate;
pub mod goal;
pub mod recommend;
pub mod summary;
pub mod transaction;

pub use aggregate::{
    CategoryMonthAggregate, group_by_month, group_by_month_and_category, monthly_category_expenses,
    monthly_expenses, monthly_income, sort_by_category,
};
pub use goal::{GoalOutcome, savings_goal_reductions};
pub use recommend::{
    ALL_WITHIN_LIMITS, DEFAULT_INCOME_THRESHOLD, DEFAULT_REDUCTION_PERCENTAGE, Recommendation,
    recommendation_messages, savings_recommendations,
};
pub use summary::{MonthlySummary, monthly_summary};
pub use transaction::{MonthKey, Transaction};
