use std::fs;
use std::path::Path;

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use shelfseed_core::tables::{
    BORROWING_TRANSACTIONS, DISPLAY_ORDER, NOTIFICATIONS, PAYMENTS, RESERVATIONS,
};
use shelfseed_core::Error;
use shelfseed_db::{bulk_load, copy_table_csv, count_rows};
use shelfseed_generate::{write_batch_csvs, EntityCounts, GeneratorConfig, TransactionGenerator};
use shelfseed_seed::{load_catalog, load_members, reset_schema};

use crate::CliError;

/// Reset the schema, apply the lookup fixture, and load member and catalog
/// rows, all inside one transaction. A failure at any step leaves the
/// database in its pre-run state.
pub async fn run_seed(pool: &PgPool, input_dir: &Path) -> Result<(), CliError> {
    let fixture = fs::read_to_string(input_dir.join("01_sample_data.sql"))?;

    let mut tx = pool.begin().await?;

    reset_schema(&mut tx, &fixture).await?;
    let members = load_members(&mut tx, &input_dir.join("members.csv")).await?;
    let catalog = load_catalog(&mut tx, input_dir).await?;

    tx.commit().await?;

    info!(members, items = catalog.total(), "sample data populated");
    Ok(())
}

/// Generate the four transactional sets, persist them as CSVs, and bulk-load
/// them in one transaction so a failed set never leaves partial data behind.
pub async fn run_transactions(
    pool: &PgPool,
    out_dir: &Path,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let counts = entity_counts(pool).await?;
    let config = GeneratorConfig {
        counts,
        today: Utc::now().date_naive(),
        seed,
    };

    let generator = TransactionGenerator::new(config);
    let seed = generator.seed();
    let batch = generator.generate()?;
    write_batch_csvs(out_dir, &batch, seed)?;

    let mut tx = pool.begin().await?;

    for table in [&BORROWING_TRANSACTIONS, &RESERVATIONS, &PAYMENTS, &NOTIFICATIONS] {
        let data = fs::read(out_dir.join(format!("{}.csv", table.name)))?;
        bulk_load(&mut tx, table.name, table.columns, &data)
            .await
            .map_err(|err| Error::Load {
                entity: table.name.to_string(),
                reason: err.reason(),
            })?;
    }

    tx.commit().await?;

    info!(seed, "transactions seeded");
    Ok(())
}

/// Export up to `limit` rows of every table plus a row-count summary.
pub async fn run_preview(pool: &PgPool, out_dir: &Path, limit: i64) -> Result<(), CliError> {
    fs::create_dir_all(out_dir)?;
    let mut conn = pool.acquire().await?;

    let mut counts = csv::Writer::from_path(out_dir.join("row_counts.csv"))?;
    counts.write_record(["table", "rows"])?;

    for table in DISPLAY_ORDER {
        let preview = copy_table_csv(&mut conn, table, limit).await?;
        fs::write(out_dir.join(format!("{table}_preview.csv")), preview)?;

        let rows = count_rows(&mut conn, table).await?;
        counts.write_record([table.to_string(), rows.to_string()])?;
    }
    counts.flush()?;

    info!(path = %out_dir.display(), "previews and row counts written");
    Ok(())
}

async fn entity_counts(pool: &PgPool) -> Result<EntityCounts, CliError> {
    let mut conn = pool.acquire().await?;

    Ok(EntityCounts {
        members: count_rows(&mut conn, "members").await?,
        items: count_rows(&mut conn, "library_items").await?,
        staff: count_rows(&mut conn, "staff").await?,
    })
}
