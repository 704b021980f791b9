use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use shelfseed_core::tables::{BORROWING_TRANSACTIONS, NOTIFICATIONS, PAYMENTS, RESERVATIONS};

use crate::errors::GenerateError;
use crate::model::{GeneratedBatch, GenerationSummary, SetSummary};

/// Persist the four generated sets as CSVs under `dir`, plus a JSON run
/// summary. Files are named `<table>.csv` so the loader maps them straight
/// onto their target tables.
pub fn write_batch_csvs(
    dir: &Path,
    batch: &GeneratedBatch,
    seed: u64,
) -> Result<GenerationSummary, GenerateError> {
    std::fs::create_dir_all(dir)?;

    let sets = vec![
        write_set(
            dir,
            BORROWING_TRANSACTIONS.name,
            BORROWING_TRANSACTIONS.columns,
            batch.borrowings.iter().map(|row| row.record()),
        )?,
        write_set(
            dir,
            RESERVATIONS.name,
            RESERVATIONS.columns,
            batch.reservations.iter().map(|row| row.record()),
        )?,
        write_set(
            dir,
            PAYMENTS.name,
            PAYMENTS.columns,
            batch.payments.iter().map(|row| row.record()),
        )?,
        write_set(
            dir,
            NOTIFICATIONS.name,
            NOTIFICATIONS.columns,
            batch.notifications.iter().map(|row| row.record()),
        )?,
    ];

    let summary = GenerationSummary {
        run_id: uuid::Uuid::new_v4().to_string(),
        seed,
        sets,
    };
    std::fs::write(
        dir.join("generation_summary.json"),
        serde_json::to_vec_pretty(&summary)?,
    )?;

    Ok(summary)
}

fn write_set(
    dir: &Path,
    table: &str,
    columns: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<SetSummary, GenerateError> {
    let path = dir.join(format!("{table}.csv"));
    let writer = BufWriter::new(File::create(&path)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(columns)?;

    let mut rows_written = 0_u64;
    for record in rows {
        writer.write_record(&record)?;
        rows_written += 1;
    }
    writer.flush()?;

    info!(table = %table, rows = rows_written, path = %path.display(), "set written");
    Ok(SetSummary {
        entity: table.to_string(),
        rows: rows_written,
        path: path.display().to_string(),
    })
}
