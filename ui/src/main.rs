use catalog::Mode;
use clap::Parser;
use folio::app::application_lifecycle::{ApplicationLifecycle, LaunchOptions};
use folio::config;
use std::path::PathBuf;
use std::process;

/// Browse a book catalog in the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Load the catalog from this JSON file instead of the bundled one
    #[arg(short, long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Start in this theme mode (night or day)
    #[arg(short, long, value_name = "MODE")]
    theme: Option<Mode>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    config::init_config(cli.config.as_deref());

    let options = LaunchOptions {
        dataset: cli.dataset,
        theme: cli.theme,
    };
    let model = ApplicationLifecycle::initialize(&options)?;
    ApplicationLifecycle::run(model)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
