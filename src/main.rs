use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_cards::audit::AuditLogger;
use budget_cards::cli::Runner;
use budget_cards::config::{BudgetPaths, Settings};
use budget_cards::display::CurrencyFormat;
use budget_cards::logging::{self, LogTarget};
use budget_cards::store::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budgets",
    version,
    about = "Card-based budgeting in the terminal",
    long_about = "Track spending against budget cards. Each budget is a card with a \
                  limit; expenses roll up into a Total card, and expenses without a \
                  card land in Uncategorized. Use the TUI interactively or feed \
                  commands to `budgets run`."
)]
struct Cli {
    /// Directory holding config.json and the audit log
    #[arg(long, global = true, env = "BUDGET_CARDS_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run commands from a file, one per line
    Run {
        /// Script to read; stdin when absent or "-"
        file: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init(LogTarget::for_tui(settings.log_file.clone()))?;
            let store = open_store(&paths, &settings)?;
            budget_cards::tui::run_tui(store, CurrencyFormat::from_settings(&settings))?;
        }
        Commands::Run { file } => {
            logging::init(LogTarget::Stderr)?;
            let reader = open_script(file)?;
            let store = open_store(&paths, &settings)?;
            let mut runner = Runner::new(store, CurrencyFormat::from_settings(&settings));

            let summary = runner.run_script(reader, &mut io::stdout(), &mut io::stderr())?;
            if !summary.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Config => {
            println!("budget-cards configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            let audit_entries = AuditLogger::new(paths.audit_log()).entry_count()?;
            println!("Audit entries:  {}", audit_entries);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Show cents:      {}", settings.show_cents);
            println!("  Audit log:       {}", settings.audit_log);
            match &settings.log_file {
                Some(path) => println!("  Log file:        {}", path.display()),
                None => println!("  Log file:        (none)"),
            }
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
    }

    Ok(())
}

fn open_store(paths: &BudgetPaths, settings: &Settings) -> Result<BudgetStore> {
    if !settings.audit_log {
        return Ok(BudgetStore::new());
    }
    paths.ensure_directories()?;
    Ok(BudgetStore::with_audit_log(AuditLogger::new(paths.audit_log())))
}

fn open_script(file: Option<PathBuf>) -> Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
