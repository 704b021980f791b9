//! Round-trip test against a live Postgres. Skipped unless
//! `TEST_DATABASE_URL` (or `DATABASE_URL`) points at a scratch database.
//!
//! One test function, sequential stages: the stages share tables, so they
//! must not run concurrently.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use shelfseed_core::TRUNCATE_ORDER;
use shelfseed_db::{
    bulk_load, copy_table_csv, count_rows, execute_fixture, insert_book,
    insert_item_returning_id, truncate_cascade,
};

const SCHEMA_FIXTURE: &str = include_str!("fixtures/schema.sql");

const LOOKUP_FIXTURE: &str = "\
insert into membership_types (type_name, duration_months, fee) values \
  ('Standard', 12, 25.00), ('Student', 12, 10.00); \
insert into staff (name, role, contact_info) values \
  ('Alice Navarro', 'Librarian', 'alice@library.example'), \
  ('Marcus Webb', 'Assistant Librarian', 'marcus@library.example');";

const MEMBERS_CSV: &[u8] = b"name,contact_info,membership_type_id,account_status\n\
Joan Petrel,joan@example.net,1,Active\n\
Omar Haddad,omar@example.net,2,Active\n\
Lena Fischer,lena@example.net,1,Active\n\
Tomas Ruiz,tomas@example.net,2,Active\n\
Grace Okafor,grace@example.net,1,Suspended\n";

async fn scratch_pool() -> Result<Option<PgPool>> {
    let Ok(url) = env::var("TEST_DATABASE_URL").or_else(|_| env::var("DATABASE_URL")) else {
        eprintln!("skipping: set TEST_DATABASE_URL for database round-trip tests");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&url)
        .await
        .context("connecting to Postgres")?;

    let mut conn = pool.acquire().await?;
    execute_fixture(&mut conn, SCHEMA_FIXTURE)
        .await
        .context("applying schema fixture")?;

    Ok(Some(pool))
}

#[tokio::test]
async fn store_round_trip() -> Result<()> {
    let Some(pool) = scratch_pool().await? else {
        return Ok(());
    };
    let mut conn = pool.acquire().await?;

    // Base load: truncate, fixture, COPY members.
    truncate_cascade(&mut conn, TRUNCATE_ORDER).await?;
    execute_fixture(&mut conn, LOOKUP_FIXTURE).await?;

    let loaded = bulk_load(
        &mut conn,
        "members",
        &["name", "contact_info", "membership_type_id", "account_status"],
        MEMBERS_CSV,
    )
    .await?;

    assert_eq!(loaded, 5);
    assert_eq!(count_rows(&mut conn, "members").await?, 5);
    assert_eq!(count_rows(&mut conn, "membership_types").await?, 2);
    assert_eq!(count_rows(&mut conn, "staff").await?, 2);

    // Parent insert returns the id the subtype row is keyed by.
    let item_id = insert_item_returning_id(&mut conn, "Book Title 9136", "Book").await?;
    assert_eq!(item_id, 1, "ids start at 1 after a reset");

    insert_book(&mut conn, item_id, "9780140449136", "Homer", "Epic", 1996).await?;

    let matched: i64 = sqlx::query_scalar(
        "select count(*) from books b \
         join library_items i on i.item_id = b.book_id and i.item_type = 'Book'",
    )
    .fetch_one(&mut *conn)
    .await?;
    assert_eq!(matched, 1);

    // Truncating again restarts the generated ids.
    truncate_cascade(&mut conn, TRUNCATE_ORDER).await?;
    let item_id = insert_item_returning_id(&mut conn, "Book Title 9136", "Book").await?;
    assert_eq!(item_id, 1, "ids must start at 1 again after a reset");

    // Preview export renders server-side CSV with a header row.
    truncate_cascade(&mut conn, TRUNCATE_ORDER).await?;
    execute_fixture(&mut conn, LOOKUP_FIXTURE).await?;

    let csv = copy_table_csv(&mut conn, "staff", 10).await?;
    let text = String::from_utf8(csv).context("preview is UTF-8")?;

    assert_eq!(
        text.lines().next(),
        Some("staff_id,name,role,contact_info"),
        "header row names the table's columns",
    );
    assert_eq!(text.lines().count(), 3);

    Ok(())
}
