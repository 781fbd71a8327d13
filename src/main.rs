use anyhow::Result;
use clap::Parser;
use std::{io, path::PathBuf, sync::Arc};

use dampick::{
    api::{AssetSource, DeliveryClient},
    app::DialogController,
    config::{Config, DialogConfig},
    host::{DialogHost, StdoutHost},
    logic::pagination::{PaginationStrategy, DEFAULT_SINGLE_PAGE_LIMIT},
    services, terminal,
};

/// Pick assets from a CMS space; the selection is printed to stdout as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/dampick-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Space to browse
    #[arg(long, env = "DAMPICK_SPACE_ID")]
    space_id: Option<String>,

    /// Delivery API access token
    #[arg(long, env = "DAMPICK_DELIVERY_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Locale to start in
    #[arg(long, env = "DAMPICK_DEFAULT_LOCALE")]
    locale: Option<String>,

    /// Fetch a single bounded page instead of the whole collection
    #[arg(long)]
    single_page: bool,
}

const LOG_FILE_NAME: &str = "dampick-debug.log";

/// Log to a file in the temp dir; stderr carries the UI and stdout the result
fn setup_logging(debug: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    if !debug {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dampick=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(guard)
}

/// Find the config file; a missing default file just means "use flags and env"
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/dampick/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dampick").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Merge the config file with command-line flags (flags win)
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match get_config_path(args.config.clone())? {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            Config::load(&path)?
        }
        None => {
            tracing::info!("No config file found, using flags and environment");
            Config::default()
        }
    };

    if let Some(space_id) = &args.space_id {
        config.space_id = space_id.clone();
    }
    if let Some(token) = &args.token {
        config.delivery_api_token = token.clone();
    }
    if let Some(locale) = &args.locale {
        config.default_locale = locale.clone();
    }
    if args.single_page {
        config.pagination = PaginationStrategy::SinglePage {
            limit: DEFAULT_SINGLE_PAGE_LIMIT,
        };
    }
    if args.vim {
        config.vim_mode = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = setup_logging(args.debug);
    tracing::debug!("Debug mode enabled");

    let config = Arc::new(DialogConfig::from_config(load_config(&args)?));

    let client = DeliveryClient::new(
        config.base_url.clone(),
        config.params.space_id.clone(),
        config.environment.clone(),
        config.params.delivery_api_token.clone(),
    );
    let source: Arc<dyn AssetSource> = Arc::new(client);
    let (fetch_tx, mut fetch_rx) = services::spawn_fetch_service(source, config.pagination);

    let mut host = StdoutHost::new(io::stdout());
    let mut controller = DialogController::new(config, fetch_tx);
    controller.mount();

    let session = terminal::run_terminal(&mut controller, &mut fetch_rx, !host.is_disabled()).await;

    // The host gets a list even when the session failed
    controller.finish(&mut host, session)
}
