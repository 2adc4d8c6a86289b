use cinebuz_catalog::CatalogApi;
use cinebuz_core::MAX_PAGES;
use cinebuz_models::MediaKind;
use color_eyre::eyre::eyre;
use tracing::info;

use crate::commands::config::{catalog_client, load_config};
use crate::output::Output;

/// Fetch and print one discover page for the given kind.
pub async fn run_discover(kind: MediaKind, page: u32, output: &Output) -> color_eyre::Result<()> {
    let (config, _paths) = load_config()?;
    let client = catalog_client(&config);

    let requested = page.clamp(1, MAX_PAGES);
    if requested != page {
        output.info(format!("Page {page} is out of range, using {requested}"));
    }
    info!(kind = kind.path_segment(), page = requested, "discover");
    let listing = client
        .discover(kind, requested)
        .await
        .map_err(|e| eyre!("{e}"))?;

    let last_page = listing.total_pages.max(1).min(MAX_PAGES);
    output.listing(&listing, requested.min(last_page), last_page);
    Ok(())
}

/// Fetch and print today's trending movies and series.
pub async fn run_trending(output: &Output) -> color_eyre::Result<()> {
    let (config, _paths) = load_config()?;
    let client = catalog_client(&config);

    info!("trending");
    let listing = client.trending().await.map_err(|e| eyre!("{e}"))?;
    output.listing(&listing, 1, 1);
    Ok(())
}
