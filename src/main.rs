use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add, handle_category_command, handle_delete, handle_edit, handle_export,
    handle_history, handle_list, handle_summary, AddArgs, CategoryCommands, EditArgs, ExportArgs,
    Menu,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record what you spend, file it under a category, and see where \
                  the money went. Run without a command for the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json, config.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses with their positions
    #[command(alias = "ls")]
    List,

    /// Change one field of an expense
    Edit(EditArgs),

    /// Remove an expense
    #[command(alias = "rm")]
    Delete {
        /// Position of the expense as shown by `list` (starting at 1)
        index: usize,
    },

    /// Show totals per category
    Summary,

    /// Write all expenses to a file
    Export(ExportArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Launch the interactive menu
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EXPENSES_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    let mut service = ExpenseService::load(&storage, &settings)?;

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add(&mut service, &mut settings, &paths, args)?;
        }
        Some(Commands::List) => handle_list(&service, &settings),
        Some(Commands::Edit(args)) => {
            handle_edit(&mut service, &settings, args)?;
        }
        Some(Commands::Delete { index }) => {
            handle_delete(&mut service, index)?;
        }
        Some(Commands::Summary) => handle_summary(&service, &settings),
        Some(Commands::Export(args)) => {
            handle_export(&service, &paths, args)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut service, &mut settings, &paths, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Category policy: {}", settings.category_policy);
            println!("  Categories:      {}", settings.categories.join(", "));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(
                stdin.lock(),
                stdout.lock(),
                &settings,
                paths.default_export_file(),
            )
            .run(&mut service)?;
        }
    }

    Ok(())
}
