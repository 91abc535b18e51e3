//! Transaction records and month bucketing

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ledger entry loaded from a statement export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date of the transaction (no time component)
    pub date: NaiveDate,
    /// Free-form category label (Groceries, Rent, Salary, ...)
    pub category: String,
    /// Positive = income, negative = expense
    pub amount: f64,
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// The (year, month) bucket this transaction falls in
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from(self.date)
    }
}

/// A (year, month) bucket, the grouping unit for all time-based aggregation.
///
/// Two transactions are in the same month iff their keys are equal. Keys
/// order ascending by year, then month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
