use cinebuz_models::MediaKind;
use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, show};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinebuz")]
#[command(about = "Cinebuz - browse movies and series from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the discover listing
    #[command(long_about = "Browse the popularity-ordered discover listing. Movies by default; pass --series for TV. Pages run from 1 to 500 at most, regardless of how many pages the catalog reports.")]
    Discover {
        /// List series instead of movies
        #[arg(long, action = ArgAction::SetTrue)]
        series: bool,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show today's trending movies and series
    Trending,
    /// Show full detail for one catalog id
    #[command(long_about = "Resolve a catalog id into its full detail: overview, genres, top cast, trailer, and similar titles. The id is probed as a movie first and as a series when the catalog does not know it as one.")]
    Show {
        /// Catalog id
        id: u64,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a fresh config file with placeholder values
    Init,
    /// Show current configuration (masks the API key)
    Show {
        /// Show full configuration including the API key
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = cinebuz_config::PathManager::new()
        .ok()
        .and_then(|paths| {
            let config_file = paths.config_file();
            cinebuz_config::Config::load_from_file(&config_file).ok()
        })
        .and_then(|config| config.logging.file);
    logging::init_logging(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Discover { series, page } => {
            let kind = if series {
                MediaKind::Series
            } else {
                MediaKind::Movie
            };
            browse::run_discover(kind, page, &output).await
        }
        Commands::Trending => browse::run_trending(&output).await,
        Commands::Show { id } => show::run_show(id, &output).await,
        Commands::Config { cmd } => match cmd.unwrap_or(ConfigCommands::Init) {
            ConfigCommands::Init => config::run_init(&output),
            ConfigCommands::Show { full } => config::run_show(&output, full),
        },
    }
}
