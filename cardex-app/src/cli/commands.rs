use crate::cli::opts::*;

use anyhow::Result;
use cardex_core::{Bookmarks, CatalogSource, FetchOutcome, KeyValue, Pager};
use cardex_http::CatalogClient;
use cardex_sqlite::SqliteStore;
use cardex_store::paths::data_root;
use cardex_store::FileStore;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let source = open_source(&args.base_url)?;
    let store = open_store(&args.store, args.db_path.clone()).await?;
    match args.cmd.clone() {
        Command::List { pages } => list_cmd(source, args.page_size, pages).await,
        Command::Show { card_id } => show_cmd(source, store, &card_id).await,
        Command::Toggle { card_id } => toggle_cmd(store, &card_id).await,
        Command::Saved => saved_cmd(store).await,
        // main routes the TUI before reaching here
        Command::Browse => unreachable!(),
    }
}

pub fn open_source(base_url: &str) -> Result<Arc<dyn CatalogSource>> {
    Ok(Arc::new(CatalogClient::with_base_url(base_url)?))
}

pub async fn open_store(
    store: &StoreKind,
    db_path: Option<PathBuf>,
) -> Result<Arc<dyn KeyValue>> {
    match store {
        StoreKind::File => {
            let s = FileStore::open_default().await?;
            Ok(Arc::new(s))
        }
        StoreKind::Sqlite => {
            let p = db_path.unwrap_or_else(|| data_root().join("cardex.sqlite3"));
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            let s = SqliteStore::open_file(&p).await?;
            Ok(Arc::new(s))
        }
    }
}

async fn list_cmd(source: Arc<dyn CatalogSource>, page_size: u32, pages: u32) -> Result<()> {
    let pager = Pager::with_page_size(source, page_size);
    for _ in 0..pages {
        match pager.fetch_next_page().await {
            Ok(FetchOutcome::Appended(0)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "stopping page walk");
                break;
            }
        }
    }
    for card in pager.snapshot().items {
        println!("{}\t{}", card.id, card.name);
    }
    Ok(())
}

async fn show_cmd(
    source: Arc<dyn CatalogSource>,
    store: Arc<dyn KeyValue>,
    card_id: &str,
) -> Result<()> {
    let card = source.detail(card_id).await?;
    let bookmarks = Bookmarks::new(store);
    let saved = bookmarks.is_saved(&card.id).await;

    println!("{}\t{}", card.id, card.name);
    if !card.types.is_empty() {
        println!("types: {}", card.types.join(", "));
    }
    if !card.hp.is_empty() {
        println!("hp: {}", card.hp);
    }
    for a in &card.abilities {
        println!("ability: {}: {}", a.name, a.text);
    }
    println!("image: {}", card.image_url);
    println!("saved: {}", saved);
    Ok(())
}

async fn toggle_cmd(store: Arc<dyn KeyValue>, card_id: &str) -> Result<()> {
    let bookmarks = Bookmarks::new(store);
    let now_saved = bookmarks.toggle(card_id).await?;
    println!("{}", if now_saved { "saved" } else { "removed" });
    Ok(())
}

async fn saved_cmd(store: Arc<dyn KeyValue>) -> Result<()> {
    let bookmarks = Bookmarks::new(store);
    for id in bookmarks.all().await? {
        println!("{id}");
    }
    Ok(())
}
