use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use coin_ledger::config::{AppPaths, Settings};
use coin_ledger::logging::init_tracing;
use coin_ledger::storage::LedgerStore;
use coin_ledger::tui::{run_tui, App, Theme};

#[derive(Parser)]
#[command(
    name = "coin",
    author = "Kaylee Beyene",
    version,
    about = "Terminal credit/debit ledger with a running balance",
    long_about = "coin keeps a list of credits and debits in a JSON file and \
                  shows the running balance. Press + to record a transaction, \
                  - to go back to the list and ctrl+c to quit."
)]
struct Cli {
    /// Ledger file (created as an empty ledger if it does not exist)
    #[arg(value_name = "LEDGER")]
    ledger: PathBuf,

    /// Directory holding config.json and the log file
    #[arg(long, env = "COIN_LEDGER_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", e.render());
            process::exit(1);
        }
    };

    // Initialize paths and settings
    let paths = AppPaths::new(cli.config_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    let theme = Theme::from_settings(&settings.theme)?;

    // First run: write the defaults out so there is a file to edit
    if !paths.settings_file().exists() {
        if let Err(e) = settings.save(&paths) {
            eprintln!("Warning: could not write default settings: {}", e);
        }
    }

    // A broken log setup should not keep the ledger from opening
    if let Err(e) = init_tracing(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Load before touching the terminal so errors land on a normal screen
    let store = LedgerStore::new(cli.ledger);
    let ledger = store
        .load()
        .with_context(|| format!("Could not open ledger {}", store.path().display()))?;

    let mut app = App::new(store, ledger, theme);
    run_tui(&mut app, Duration::from_millis(settings.tick_rate_ms))?;

    tracing::info!("exiting");
    Ok(())
}
