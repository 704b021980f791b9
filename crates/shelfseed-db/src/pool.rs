use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use shelfseed_core::{DbConfig, Error, Result};

/// Open a connection pool against the configured database.
///
/// One pool per run; released when the run's scope ends, on every exit path.
pub async fn connect(config: &DbConfig) -> Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname);

    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
        .map_err(|err| Error::Db(err.to_string()))
}
