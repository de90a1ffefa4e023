//! Demo binary: wire a backend, load the catalog, print the visible
//! projection.
//!
//! Usage: `idbazaar [budget]` — an optional budget argument filters the
//! listing view. Backend selection comes from the environment (see
//! `BackendConfig`).

use anyhow::{Context, Result};

use idbazaar_catalog::CatalogStore;
use idbazaar_storage::BackendConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    idbazaar_observability::init();

    let budget = match std::env::args().nth(1) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .with_context(|| format!("invalid budget argument {raw:?}"))?,
        ),
        None => None,
    };

    let backend = BackendConfig::from_env()
        .connect()
        .context("failed to set up the catalog backend")?;

    let mut store = CatalogStore::new(backend);
    if let Err(err) = store.load().await {
        // Fail-open: the store already reset itself to an empty catalog.
        tracing::warn!(error = %err, "initial catalog load failed; starting empty");
    }

    if let Some(budget) = budget {
        store.set_filter_budget(budget);
    }

    let visible = store.visible_items();
    if visible.is_empty() {
        println!("no listings match (budget: {})", store.filter_budget());
        return Ok(());
    }

    for item in &visible {
        println!(
            "{}  {:10}  ₹{:<8}  level {:3}  {} ({} matches, {:.1} K/D)",
            item.id, item.rank, item.price, item.level, item.title, item.matches, item.kd
        );
    }
    println!("{} listing(s) visible of {}", visible.len(), store.items().len());

    Ok(())
}
