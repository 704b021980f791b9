//! Database ports for Shelfseed.
//!
//! Thin async wrappers over sqlx/Postgres. Every operation takes a
//! `&mut PgConnection` so callers decide the transaction boundary: the
//! loaders run whole workflows inside one transaction and commit only on
//! full success.

pub mod pool;
pub mod preview;
pub mod store;

pub use pool::connect;
pub use preview::copy_table_csv;
pub use store::{
    bulk_load, count_rows, execute_fixture, insert_book, insert_digital_media,
    insert_item_returning_id, insert_magazine, truncate_cascade,
};
