//! Plain-text rendering of the engine's output tables.

use finsight_core::{
    Transaction, group_by_month_and_category, monthly_summary, recommendation_messages,
    savings_goal_reductions, savings_recommendations, sort_by_category,
};

pub fn print_category_table(txns: &[Transaction]) {
    let rows = sort_by_category(group_by_month_and_category(txns));

    println!("Month    Category              Amount");
    for row in &rows {
        println!(
            "{:<8} {:<20} {:>10.2}",
            row.month.to_string(),
            row.category,
            row.amount
        );
    }
}

pub fn print_monthly_summary(txns: &[Transaction]) {
    let summaries = monthly_summary(txns);

    println!("\nMonth        Income    Expenses  Expense/Income");
    for s in &summaries {
        let ratio = match s.expense_to_income_ratio {
            Some(r) => format!("{r:.2}"),
            None => "n/a".to_string(),
        };
        println!(
            "{:<8} {:>10.2} {:>11.2} {:>15}",
            s.month.to_string(),
            s.total_income,
            s.total_expenses,
            ratio
        );
    }
}

pub fn print_recommendations(txns: &[Transaction], income_threshold: f64, reduction: f64) {
    let recs = savings_recommendations(txns, income_threshold, reduction);

    println!("\nRecommendations:");
    for line in recommendation_messages(&recs) {
        println!("- {line}");
    }
}

pub fn print_goal_reductions(txns: &[Transaction], savings_goal: f64) {
    println!("\nSavings goal: {savings_goal:.2}");
    for (month, outcome) in savings_goal_reductions(txns, savings_goal) {
        println!("{month}: {outcome}");
    }
}
