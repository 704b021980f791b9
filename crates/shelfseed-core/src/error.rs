use thiserror::Error;

/// Shared error type for the seeding workflow.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed connection parameter. Fatal at startup, no retry.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Driver-level failure not covered by a more specific variant.
    #[error("database error: {0}")]
    Db(String),
    /// Truncate, fixture, or base-load failure. The surrounding transaction
    /// is rolled back in full.
    #[error("seeding failed on '{table}': {reason}")]
    Seed { table: String, reason: String },
    /// Subtype insert failed after its parent row was already inserted. The
    /// enclosing transaction must roll back to avoid an orphan parent.
    #[error("subtype insert into '{table}' failed for item {item_id}: {reason}")]
    ReferentialInsert {
        table: String,
        item_id: i32,
        reason: String,
    },
    /// Bulk-load of a generated entity set failed. The run aborts; later
    /// sets are not loaded.
    #[error("bulk load of '{entity}' failed: {reason}")]
    Load { entity: String, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Inner driver message, for wrapping a port failure into a more
    /// specific variant without nesting display prefixes.
    pub fn reason(&self) -> String {
        match self {
            Error::Db(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience alias for results returned by Shelfseed crates.
pub type Result<T> = std::result::Result<T, Error>;
