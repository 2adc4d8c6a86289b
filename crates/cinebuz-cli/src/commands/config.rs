use cinebuz_catalog::TmdbClient;
use cinebuz_config::{Config, PathManager};
use color_eyre::eyre::{eyre, Context};

use crate::output::Output;

/// Load and validate the config, or explain how to create one.
pub fn load_config() -> color_eyre::Result<(Config, PathManager)> {
    let paths = PathManager::new().map_err(|e| eyre!("{e}"))?;
    let config_file = paths.config_file();
    if !config_file.exists() {
        return Err(eyre!(
            "No config file at {}; run `cinebuz config init` first",
            config_file.display()
        ));
    }
    let config = Config::load_from_file(&config_file)
        .map_err(|e| eyre!("{e}"))
        .wrap_err_with(|| format!("Failed to read {}", config_file.display()))?;
    config.validate().map_err(|e| eyre!("{e}"))?;
    Ok((config, paths))
}

pub fn catalog_client(config: &Config) -> TmdbClient {
    TmdbClient::new(config.catalog.api_key.clone())
        .with_base_url(config.catalog.base_url.clone())
        .with_language(config.catalog.language.clone())
}

pub fn run_init(output: &Output) -> color_eyre::Result<()> {
    let paths = PathManager::new().map_err(|e| eyre!("{e}"))?;
    paths.ensure_directories().map_err(|e| eyre!("{e}"))?;
    let config_file = paths.config_file();
    if config_file.exists() {
        output.info(format!("Config already exists at {}", config_file.display()));
        return Ok(());
    }
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("{e}"))?;
    output.success(format!("Wrote {}", config_file.display()));
    output.info("Edit it and set catalog.api_key before browsing");
    Ok(())
}

pub fn run_show(output: &Output, full: bool) -> color_eyre::Result<()> {
    let (mut config, paths) = load_config()?;
    if !full {
        config.catalog.api_key = "********".to_string();
    }
    output.info(format!("Config file: {}", paths.config_file().display()));
    let rendered = toml::to_string_pretty(&config).map_err(|e| eyre!("{e}"))?;
    output.info(rendered);
    Ok(())
}
