use sqlx::PgConnection;
use tracing::info;

use shelfseed_core::{Error, Result, TRUNCATE_ORDER};
use shelfseed_db::{execute_fixture, truncate_cascade};

/// Truncate every seeded table in foreign-key-safe order, then repopulate
/// the lookup tables (membership types and staff) from the SQL fixture.
///
/// Destructive: all seeded tables are emptied unconditionally before reload.
pub async fn reset_schema(conn: &mut PgConnection, fixture_sql: &str) -> Result<()> {
    truncate_cascade(conn, TRUNCATE_ORDER).await?;

    execute_fixture(conn, fixture_sql)
        .await
        .map_err(|err| Error::Seed {
            table: "membership_types".to_string(),
            reason: err.reason(),
        })?;

    info!("lookup fixture applied");
    Ok(())
}
