//! Random transactional data for Shelfseed.
//!
//! Synthesizes borrowing, reservation, payment, and notification rows bounded
//! by the entity counts already in the database, and persists each set as CSV
//! ready for bulk loading. Generation is pure: no database access happens in
//! this crate.

pub mod errors;
pub mod generator;
pub mod model;
pub mod output;

pub use errors::GenerateError;
pub use generator::{
    TransactionGenerator, BORROWING_ROWS, NOTIFICATION_ROWS, PAYMENT_ROWS, RESERVATION_ROWS,
};
pub use model::{EntityCounts, GeneratedBatch, GenerationSummary, GeneratorConfig};
pub use output::write_batch_csvs;
