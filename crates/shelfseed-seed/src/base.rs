use std::path::Path;

use sqlx::PgConnection;
use tracing::info;

use shelfseed_core::tables::MEMBERS;
use shelfseed_core::{Error, Result};
use shelfseed_db::bulk_load;

/// Bulk-load members from a CSV source.
///
/// The file must carry a header row naming the member interchange columns;
/// ids are database-generated during the copy.
pub async fn load_members(conn: &mut PgConnection, csv_path: &Path) -> Result<u64> {
    let data = std::fs::read(csv_path)?;

    let rows = bulk_load(conn, MEMBERS.name, MEMBERS.columns, &data)
        .await
        .map_err(|err| Error::Seed {
            table: MEMBERS.name.to_string(),
            reason: err.reason(),
        })?;

    info!(rows, path = %csv_path.display(), "members loaded");
    Ok(rows)
}
