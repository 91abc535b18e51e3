use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use finsight_core::{DEFAULT_INCOME_THRESHOLD, DEFAULT_REDUCTION_PERCENTAGE, Transaction};
use finsight_ingest::{LoadReport, load_transactions};
use std::path::{Path, PathBuf};

mod report;

#[derive(Parser, Debug)]
#[command(name = "finsight", version, about = "Ledger analysis and savings guidance")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full analysis: category table, monthly summary, recommendations, goal outcomes
    Report {
        /// Path to the transactions CSV (Date,Category,Amount)
        #[arg(long)]
        csv: PathBuf,

        /// Monthly savings goal; enables the goal-reduction section
        #[arg(long)]
        savings_goal: Option<f64>,

        /// Max fraction of monthly income a category may consume
        #[arg(long, default_value_t = DEFAULT_INCOME_THRESHOLD)]
        income_threshold: f64,

        /// Suggested cut for categories over the threshold
        #[arg(long, default_value_t = DEFAULT_REDUCTION_PERCENTAGE)]
        reduction: f64,
    },

    /// Monthly income/expense summary table
    Summary {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Per-category monthly totals, sorted by month then amount
    Categories {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Threshold-based savings recommendations
    Recommend {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long, default_value_t = DEFAULT_INCOME_THRESHOLD)]
        income_threshold: f64,

        #[arg(long, default_value_t = DEFAULT_REDUCTION_PERCENTAGE)]
        reduction: f64,
    },

    /// Expense cut needed per month to hit a savings goal
    Goal {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long)]
        savings_goal: f64,
    },

    /// Look up a currency exchange rate (informational only)
    Rate {
        #[arg(long)]
        from: String,

        #[arg(long, default_value = "USD")]
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            csv,
            savings_goal,
            income_threshold,
            reduction,
        } => {
            let txns = load(&csv)?;
            report::print_category_table(&txns);
            report::print_monthly_summary(&txns);
            report::print_recommendations(&txns, income_threshold, reduction);
            if let Some(goal) = savings_goal {
                report::print_goal_reductions(&txns, goal);
            }
        }

        Command::Summary { csv } => {
            let txns = load(&csv)?;
            report::print_monthly_summary(&txns);
        }

        Command::Categories { csv } => {
            let txns = load(&csv)?;
            report::print_category_table(&txns);
        }

        Command::Recommend {
            csv,
            income_threshold,
            reduction,
        } => {
            let txns = load(&csv)?;
            report::print_recommendations(&txns, income_threshold, reduction);
        }

        Command::Goal { csv, savings_goal } => {
            let txns = load(&csv)?;
            report::print_goal_reductions(&txns, savings_goal);
        }

        Command::Rate { from, to } => {
            match finsight_rates::get_rate(&from, &to).await? {
                Some(rate) => println!("1 {from} = {rate} {to}"),
                None => eprintln!("No rate available for {from} -> {to}"),
            }
        }
    }

    Ok(())
}

fn load(csv: &Path) -> Result<Vec<Transaction>> {
    if !csv.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv.display());
    }

    let LoadReport {
        transactions,
        skipped_dates,
    } = load_transactions(csv).with_context(|| format!("parsing {}", csv.display()))?;

    if skipped_dates > 0 {
        eprintln!("Skipped {skipped_dates} row(s) with unparseable dates");
    }

    Ok(transactions)
}
