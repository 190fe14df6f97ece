use std::fs;
use std::path::PathBuf;

use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_breakdown, validate, Receipt, ReceiptServiceError};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON file
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Print the total only, without the per-rule breakdown
    #[arg(long)]
    pub(crate) total_only: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file)?;
    let receipt: Receipt = serde_json::from_str(&raw)?;
    validate(&receipt).map_err(ReceiptServiceError::from)?;

    let breakdown = score_breakdown(&receipt);
    if !args.total_only {
        println!(
            "Receipt from {} on {} at {}",
            receipt.retailer.trim(),
            receipt.purchase_date,
            receipt.purchase_time
        );
        for contribution in &breakdown.contributions {
            println!("- {}: {}", contribution.rule, contribution.points);
        }
    }
    println!("Total points: {}", breakdown.total);

    Ok(())
}
