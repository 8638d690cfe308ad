use app_bootstrap::config::{AppConfig, CmdArgs, ConfigPaths};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    // RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    init_tracing(Level::INFO);

    let args = CmdArgs::parse();
    let paths = ConfigPaths::default();
    let path = paths.path_for(args.environment);

    let config = match AppConfig::load(&paths, args.environment) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    info!(
        env = %args.environment,
        config = %path.display(),
        port = config.port,
        db_client = %config.db.client,
        db_host = %config.db.host,
        db_port = config.db.port,
        db_name = %config.db.db_name,
        ssl_mode = %config.db.ssl_mode,
        "Configuration loaded"
    );

    ExitCode::SUCCESS
}
