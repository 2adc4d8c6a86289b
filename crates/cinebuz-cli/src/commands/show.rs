use std::sync::Arc;

use cinebuz_core::{MediaResolver, ResolveError};
use color_eyre::eyre::eyre;
use tracing::info;

use crate::commands::config::{catalog_client, load_config};
use crate::output::Output;

/// Resolve a catalog id (movie or series) and print the full detail.
pub async fn run_show(id: u64, output: &Output) -> color_eyre::Result<()> {
    let (config, _paths) = load_config()?;
    let resolver = MediaResolver::new(Arc::new(catalog_client(&config)));

    info!(id, "resolving");
    match resolver.resolve(id).await {
        Ok(Some(detail)) => {
            output.detail(&detail);
            Ok(())
        }
        // A single resolve on a fresh resolver cannot be superseded.
        Ok(None) => Ok(()),
        Err(ResolveError::NotFound) => {
            output.error(format!("No movie or series with id {id}"));
            std::process::exit(1);
        }
        Err(err) => Err(eyre!("{err}")),
    }
}
