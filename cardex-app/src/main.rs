mod cli;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use cli::commands::{open_source, open_store, run_cli};
use cli::opts::{Cli, Command};
use tui::app::TuiApp;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so the TUI screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cardex=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match &args.cmd {
        // Run the TUI on its own thread/runtime (no nested Tokio)
        Command::Browse => {
            let rt = Arc::new(Runtime::new()?);
            let source = open_source(&args.base_url)?;
            let store = rt.block_on(open_store(&args.store, args.db_path.clone()))?;
            let mut app = TuiApp::new(source, store, args.page_size, rt);
            app.run()
        }
        // Everything else uses a single runtime here
        _ => {
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
    }
}
