use futures::TryStreamExt;
use sqlx::PgConnection;

use shelfseed_core::{Error, Result};

/// Export up to `limit` rows of a table as CSV bytes.
///
/// Uses `COPY ... TO STDOUT` so the server renders every column as text;
/// no per-type decoding happens on this side.
pub async fn copy_table_csv(conn: &mut PgConnection, table: &str, limit: i64) -> Result<Vec<u8>> {
    let statement = format!(
        "copy (select * from {table} limit {limit}) to stdout with (format csv, header true)"
    );

    let mut stream = conn
        .copy_out_raw(&statement)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;

    let mut out = Vec::new();
    while let Some(chunk) = stream
        .try_next()
        .await
        .map_err(|err| Error::Db(err.to_string()))?
    {
        out.extend_from_slice(&chunk);
    }
    Ok(out)
}
