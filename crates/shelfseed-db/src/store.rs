use chrono::NaiveDate;
use sqlx::PgConnection;
use tracing::info;

use shelfseed_core::{Error, Result};

/// Empty the given tables, dependents included, in the order given.
///
/// Identity sequences restart so database-generated ids begin at 1 again;
/// the transaction generator relies on ids covering exactly `[1, count]`.
/// Table names come from the static registry, never from user input.
pub async fn truncate_cascade(conn: &mut PgConnection, tables: &[&str]) -> Result<()> {
    for table in tables {
        sqlx::query(&format!("truncate {table} restart identity cascade"))
            .execute(&mut *conn)
            .await
            .map_err(|err| Error::Seed {
                table: (*table).to_string(),
                reason: err.to_string(),
            })?;
        info!(table = %table, "truncated");
    }
    Ok(())
}

/// Run a fixed batch of statements, e.g. the lookup-row fixture.
pub async fn execute_fixture(conn: &mut PgConnection, sql_text: &str) -> Result<()> {
    sqlx::raw_sql(sql_text)
        .execute(&mut *conn)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;
    Ok(())
}

/// Append CSV records to a table via `COPY ... FROM STDIN`.
///
/// `data` must be UTF-8 CSV with a header row matching `columns`; the load
/// fails on any column or type mismatch. Returns the number of rows copied.
pub async fn bulk_load(
    conn: &mut PgConnection,
    table: &str,
    columns: &[&str],
    data: &[u8],
) -> Result<u64> {
    let statement = format!(
        "copy {} ({}) from stdin with (format csv, header true)",
        table,
        columns.join(", "),
    );

    let mut sink = conn
        .copy_in_raw(&statement)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;
    sink.send(data)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;
    let rows = sink
        .finish()
        .await
        .map_err(|err| Error::Db(err.to_string()))?;

    info!(table = %table, rows, "bulk loaded");
    Ok(rows)
}

/// Insert one `library_items` row and return its generated id.
///
/// The id must be known before the matching subtype row can be inserted;
/// this is deliberately a single-row round trip, not a batch.
pub async fn insert_item_returning_id(
    conn: &mut PgConnection,
    title: &str,
    item_type: &str,
) -> Result<i32> {
    sqlx::query_scalar(
        "insert into library_items (title, item_type, availability_status) \
         values ($1, $2, 'Available') returning item_id",
    )
    .bind(title)
    .bind(item_type)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}

/// Insert the book subtype row keyed by its parent item id.
pub async fn insert_book(
    conn: &mut PgConnection,
    book_id: i32,
    isbn: &str,
    author: &str,
    genre: &str,
    publication_year: i32,
) -> Result<()> {
    sqlx::query(
        "insert into books (book_id, isbn, author, genre, publication_year) \
         values ($1, $2, $3, $4, $5)",
    )
    .bind(book_id)
    .bind(isbn)
    .bind(author)
    .bind(genre)
    .bind(publication_year)
    .execute(&mut *conn)
    .await
    .map_err(|err| Error::Db(err.to_string()))?;
    Ok(())
}

/// Insert the digital media subtype row keyed by its parent item id.
pub async fn insert_digital_media(
    conn: &mut PgConnection,
    media_id: i32,
    creator: &str,
    format: &str,
) -> Result<()> {
    sqlx::query("insert into digital_media (media_id, creator, format) values ($1, $2, $3)")
        .bind(media_id)
        .bind(creator)
        .bind(format)
        .execute(&mut *conn)
        .await
        .map_err(|err| Error::Db(err.to_string()))?;
    Ok(())
}

/// Insert the magazine subtype row keyed by its parent item id.
pub async fn insert_magazine(
    conn: &mut PgConnection,
    magazine_id: i32,
    issue_number: i32,
    publication_date: NaiveDate,
) -> Result<()> {
    sqlx::query(
        "insert into magazines (magazine_id, issue_number, publication_date) \
         values ($1, $2, $3)",
    )
    .bind(magazine_id)
    .bind(issue_number)
    .bind(publication_date)
    .execute(&mut *conn)
    .await
    .map_err(|err| Error::Db(err.to_string()))?;
    Ok(())
}

/// Count the rows currently in a table.
pub async fn count_rows(conn: &mut PgConnection, table: &str) -> Result<i64> {
    sqlx::query_scalar(&format!("select count(*) from {table}"))
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| Error::Db(err.to_string()))
}
