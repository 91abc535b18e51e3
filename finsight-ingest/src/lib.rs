//! finsight-ingest: CSV ledger loader.
//!
//! Expects a header row with Date, Category, Amount columns (extra columns
//! ignored; positions taken from the header). Rows whose date cannot be
//! parsed are dropped from the store and counted instead of failing the
//! load; a missing column or an unparseable amount fails it.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use finsight_core::Transaction;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Result of loading one statement file
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub transactions: Vec<Transaction>,
    /// Rows dropped because their date could not be parsed
    pub skipped_dates: usize,
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

fn parse_amount(s: &str) -> Option<f64> {
    s.trim().replace(',', "").replace('$', "").parse().ok()
}

/// Read transactions from any CSV source.
pub fn read_transactions<R: Read>(reader: R) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .with_context(|| format!("CSV is missing required column '{name}'"))
    };
    let date_col = position("Date")?;
    let category_col = position("Category")?;
    let amount_col = position("Amount")?;

    let mut transactions = Vec::new();
    let mut skipped_dates = 0;

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = i + 2; // header occupies line 1

        let date = match parse_date(record.get(date_col).unwrap_or("")) {
            Some(d) => d,
            None => {
                skipped_dates += 1;
                continue;
            }
        };

        let amount_field = record.get(amount_col).unwrap_or("").trim();
        let amount = match parse_amount(amount_field) {
            Some(a) => a,
            None => bail!("line {line}: unparseable amount '{amount_field}'"),
        };

        let category = record.get(category_col).unwrap_or("").trim().to_string();
        transactions.push(Transaction::new(date, category, amount));
    }

    Ok(LoadReport {
        transactions,
        skipped_dates,
    })
}

/// Load transactions from a CSV file on disk.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<LoadReport> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_transactions(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic_csv() {
        let csv = "\
Date,Category,Amount
2024-01-01,Salary,1000.00
2024-01-02,Groceries,-500.00
";
        let report = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.skipped_dates, 0);

        let first = &report.transactions[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(first.category, "Salary");
        assert_eq!(first.amount, 1000.0);
        assert!(report.transactions[1].is_expense());
    }

    #[test]
    fn test_both_date_layouts() {
        let csv = "\
Date,Category,Amount
2024-01-05,Food,-100
01/15/2024,Entertainment,-50
";
        let report = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(
            report.transactions[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_unparseable_dates_skipped_and_counted() {
        let csv = "\
Date,Category,Amount
2024-01-01,Salary,1000
not-a-date,Groceries,-500
,Rent,-800
2024-01-20,Coffee,-20
";
        let report = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.skipped_dates, 2);
    }

    #[test]
    fn test_amount_symbols_stripped() {
        let csv = "\
Date,Category,Amount
2024-01-01,Salary,\"$1,250.50\"
2024-01-02,Rent,\"-$1,000.00\"
";
        let report = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions[0].amount, 1250.50);
        assert_eq!(report.transactions[1].amount, -1000.0);
    }

    #[test]
    fn test_extra_columns_ignored_and_header_order_free() {
        let csv = "\
Account,Amount,Date,Category,Notes
Checking,-42.00,2024-03-03,Dining,team lunch
";
        let report = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.transactions[0].category, "Dining");
        assert_eq!(report.transactions[0].amount, -42.0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "\
Date,Amount
2024-01-01,1000
";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Category"));
    }

    #[test]
    fn test_bad_amount_is_an_error() {
        let csv = "\
Date,Category,Amount
2024-01-01,Salary,lots
";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
