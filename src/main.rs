use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clinicore::config::Config;
use clinicore::db::Database;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/config.yaml"));
    let config = Config::load(&config_path)?;

    info!(env = %config.env, description = %config.description, "starting clinicore");
    info!(host = %config.http_server.host, "http server configured");

    let _database = Database::open(&config.database.path)?;
    info!(path = %config.database.path.display(), "database connection established");

    Ok(())
}
