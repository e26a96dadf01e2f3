use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum StoreKind {
    File,
    Sqlite,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "cardex", version, about = "Cardex card catalog browser")]
pub struct Cli {
    /// Bookmark storage backend
    #[arg(long, value_enum, default_value_t = StoreKind::File)]
    pub store: StoreKind,

    /// SQLite DB path when --store sqlite (defaults to app data dir)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Base URL of the card catalog service
    #[arg(long, default_value = cardex_http::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Catalog page size
    #[arg(long, default_value_t = cardex_core::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Browse the catalog in the terminal UI
    Browse,
    /// Print catalog pages (CLI)
    List {
        /// How many pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show one card's detail and bookmark state
    Show { card_id: String },
    /// Toggle a card's bookmark
    Toggle { card_id: String },
    /// List saved card ids
    Saved,
}
