//! Grouping and summation over the transaction store.
//!
//! Two independent groupings: by (month, category) for the category table
//! and recommendations, and by month alone for income/expense totals. All
//! functions return fresh collections; the input slice is never mutated.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::transaction::{MonthKey, Transaction};

/// Summed amount for one (month, category) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMonthAggregate {
    pub month: MonthKey,
    pub category: String,
    /// Raw signed sum over all transactions in the bucket
    pub amount: f64,
}

/// Partition transactions by (month, category), summing amounts within each
/// bucket. Exactly one aggregate is produced per distinct pair in the input.
///
/// Output keeps the order in which each pair first appears; consumers that
/// need a sorted view go through [`sort_by_category`].
pub fn group_by_month_and_category(txns: &[Transaction]) -> Vec<CategoryMonthAggregate> {
    let mut index: HashMap<(MonthKey, String), usize> = HashMap::new();
    let mut out: Vec<CategoryMonthAggregate> = Vec::new();

    for txn in txns {
        let key = (txn.month_key(), txn.category.clone());
        match index.get(&key) {
            Some(&i) => out[i].amount += txn.amount,
            None => {
                index.insert(key, out.len());
                out.push(CategoryMonthAggregate {
                    month: txn.month_key(),
                    category: txn.category.clone(),
                    amount: txn.amount,
                });
            }
        }
    }

    out
}

/// Partition by month alone, summing raw amounts of the transactions that
/// satisfy `predicate`. An empty input yields an empty map, not an error.
pub fn group_by_month<F>(txns: &[Transaction], predicate: F) -> BTreeMap<MonthKey, f64>
where
    F: Fn(&Transaction) -> bool,
{
    let mut out = BTreeMap::new();
    for txn in txns.iter().filter(|t| predicate(t)) {
        *out.entry(txn.month_key()).or_insert(0.0) += txn.amount;
    }
    out
}

/// Total income (sum of positive amounts) per month
pub fn monthly_income(txns: &[Transaction]) -> BTreeMap<MonthKey, f64> {
    group_by_month(txns, Transaction::is_income)
}

/// Total expenses per month, reported as absolute values
pub fn monthly_expenses(txns: &[Transaction]) -> BTreeMap<MonthKey, f64> {
    group_by_month(txns, Transaction::is_expense)
        .into_iter()
        .map(|(month, sum)| (month, sum.abs()))
        .collect()
}

/// Absolute expense total per (month, category) pair, in first-appearance
/// order. Income and zero-amount rows are ignored.
pub fn monthly_category_expenses(txns: &[Transaction]) -> Vec<CategoryMonthAggregate> {
    let expenses: Vec<Transaction> = txns.iter().filter(|t| t.is_expense()).cloned().collect();
    group_by_month_and_category(&expenses)
        .into_iter()
        .map(|mut agg| {
            agg.amount = agg.amount.abs();
            agg
        })
        .collect()
}

/// Order aggregates by month ascending, then summed amount ascending.
///
/// The sort is stable, so categories with equal sums in the same month keep
/// their first-appearance order.
pub fn sort_by_category(mut aggregates: Vec<CategoryMonthAggregate>) -> Vec<CategoryMonthAggregate> {
    aggregates.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then(a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal))
    });
    aggregates
}
