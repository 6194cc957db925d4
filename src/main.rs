use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use puckstats::cache::CachedProvider;
use puckstats::data_provider::StatsProvider;
use puckstats::stats::DEFAULT_BIN_COUNT;
use puckstats::types::{PlayerKind, SharedData, SharedDataHandle};
use puckstats::{api, background, commands, config, tui};

#[cfg(feature = "development")]
use puckstats::dev;

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "puckstats")]
#[command(
    about = "Hockey player stats CLI",
    long_about = "Hockey player stats CLI\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Player shown in interactive mode (falls back to the configured default)
    #[arg(short, long)]
    player: Option<i64>,

    /// Show the goalie table in interactive mode
    #[arg(long)]
    goalie: bool,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Goals,
    Assists,
    Points,
    Shots,
    #[value(name = "xg")]
    ExpectedGoals,
    #[value(name = "p60")]
    PointsPer60,
}

impl MetricArg {
    fn to_metric(self) -> commands::distribution::Metric {
        match self {
            MetricArg::Goals => commands::distribution::Metric::Goals,
            MetricArg::Assists => commands::distribution::Metric::Assists,
            MetricArg::Points => commands::distribution::Metric::Points,
            MetricArg::Shots => commands::distribution::Metric::Shots,
            MetricArg::ExpectedGoals => commands::distribution::Metric::ExpectedGoals,
            MetricArg::PointsPer60 => commands::distribution::Metric::PointsPer60,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display a skater's season-by-season stats
    Skater {
        /// Player ID (e.g., 8478402)
        player_id: i64,

        /// Situation filter: all, 5on5, 5on4 (pp), 4on5 (pk), other
        #[arg(short, long)]
        situation: Option<String>,
    },
    /// Display a goalie's season-by-season stats
    Goalie {
        /// Player ID (e.g., 8475883)
        player_id: i64,

        /// Situation filter: all, 5on5, 5on4 (pp), 4on5 (pk), other
        #[arg(short, long)]
        situation: Option<String>,
    },
    /// Display a league-wide distribution of one skater metric
    Distribution {
        /// Season start year (e.g., 2023)
        season: i32,

        /// Metric to bucket
        #[arg(short, long, default_value = "points")]
        metric: MetricArg,

        /// Number of histogram bins
        #[arg(short, long, default_value_t = DEFAULT_BIN_COUNT)]
        bins: usize,
    },
    /// Display current configuration
    Config,
}

#[cfg_attr(not(feature = "development"), allow(unused_variables))]
fn create_provider(cli: &Cli, config: &config::Config) -> Arc<dyn StatsProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(dev::MockClient::new());
    }

    match api::Client::new(&config.api_base_url) {
        Ok(client) => Arc::new(CachedProvider::new(client)),
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("api_base_url: {}", cfg.api_base_url);
    println!(
        "default_player: {}",
        cfg.default_player
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("default_situation: {}", cfg.default_situation);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("header_fg: {:?}", cfg.theme.header_fg);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background data fetching
async fn run_tui_mode(
    provider: Arc<dyn StatsProvider>,
    config: config::Config,
    player_id: i64,
    kind: PlayerKind,
) -> Result<(), std::io::Error> {
    let shared_data: SharedDataHandle = Arc::new(RwLock::new(SharedData {
        config: config.clone(),
        ..Default::default()
    }));

    // Create channel for manual refresh triggers
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Spawn background task to fetch data
    let shared_data_clone = Arc::clone(&shared_data);
    let refresh_interval = config.refresh_interval as u64;
    tokio::spawn(async move {
        background::fetch_data_loop(
            provider,
            player_id,
            kind,
            shared_data_clone,
            refresh_interval,
            refresh_rx,
        )
        .await;
    });

    tui::run(shared_data, refresh_tx, kind).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn StatsProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Skater {
            player_id,
            situation,
        } => {
            let situation = commands::parse_situation(situation)?;
            commands::skater::run(provider, player_id, situation, &config.display).await
        }
        Commands::Goalie {
            player_id,
            situation,
        } => {
            let situation = commands::parse_situation(situation)?;
            commands::goalie::run(provider, player_id, situation, &config.display).await
        }
        Commands::Distribution {
            season,
            metric,
            bins,
        } => {
            commands::distribution::run(provider, season, metric.to_metric(), bins, &config.display)
                .await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        let player_id = match cli.player.or(config.default_player) {
            Some(id) => id,
            None => {
                eprintln!("No player specified; pass --player or set default_player in the config");
                std::process::exit(1);
            }
        };
        let kind = if cli.goalie {
            PlayerKind::Goalie
        } else {
            PlayerKind::Skater
        };
        let provider = create_provider(&cli, &config);
        if let Err(e) = run_tui_mode(provider, config, player_id, kind).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.take().unwrap();

    // Handle Config command separately (doesn't need a provider)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    let provider = create_provider(&cli, &config);
    if let Err(e) = execute_command(provider.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
