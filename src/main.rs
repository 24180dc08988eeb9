use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lcu_history::{
    service::config::{DEFAULT_DATA_DIR, DEFAULT_MATCH_COUNT, DEFAULT_TIMEOUT},
    ui, Config, DataManager,
};

/// Recent match history of the summoner logged into the League client
#[derive(Parser, Debug)]
#[command(name = "lcu-history")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the client lockfile, platform default if omitted
    #[arg(short = 'f', long = "lockfile", env = "LCU_LOCKFILE")]
    lockfile: Option<PathBuf>,

    /// Number of most recent games to fetch
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_MATCH_COUNT)]
    count: u32,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Load the match history from a local JSON file instead of fetching from the game client
    #[arg(short = 'l', long = "load-local")]
    load_local_json_files: bool,

    /// Store API responses to JSON files for debugging/testing
    #[arg(short = 's', long = "store-responses")]
    store_responses: bool,

    /// Directory used by --load-local and --store-responses
    #[arg(long = "data-dir", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Print the games as JSON instead of a table
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            lockfile_path: args.lockfile.clone(),
            count: args.count,
            timeout: Duration::from_secs(args.timeout_secs),
            load_local: args.load_local_json_files,
            store_responses: args.store_responses,
            data_dir: args.data_dir.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("lcu_history={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    let config = Config::from(&args);

    let manager = match DataManager::new(&config) {
        Ok(manager) => manager,
        Err(error) => {
            eprintln!("Error occurred while initializing ({}):\n{}\n", error.kind(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut history = manager.get_match_history_async(config.count);
    history.wait();

    if let Some(games) = history.get_data() {
        if args.json {
            println!("{}", ui::match_history_json(games).pretty(2));
        } else {
            ui::print_match_history(games);
        }
        return ExitCode::SUCCESS;
    }

    let kind = history.error_kind().map(|kind| kind.to_string()).unwrap_or_else(|| "Unknown".into());
    eprintln!(
        "Error occurred while fetching match history ({}):\n{}\n",
        kind,
        history.error().unwrap_or_default()
    );
    ExitCode::FAILURE
}
