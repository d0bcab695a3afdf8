//! CLI command for data export

use clap::Args;
use std::path::PathBuf;

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;
use crate::export::ExportFormat;
use crate::services::ExpenseService;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to expenses.<format> in the data directory)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

pub fn handle_export(
    service: &ExpenseService<'_>,
    paths: &ExpensePaths,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let output = args
        .output
        .unwrap_or_else(|| paths.export_file(args.format.extension()));

    service.export(&output, args.format)?;
    println!(
        "Exported {} expense(s) to {}",
        service.expenses().len(),
        output.display()
    );
    Ok(())
}
