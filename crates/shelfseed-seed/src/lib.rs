//! Seeding workflows for Shelfseed.
//!
//! Two of the three operator-run procedures live here: the schema reset with
//! base loading, and the catalog subtype inserter. Both take a
//! `&mut PgConnection` and expect the caller to hold one transaction around
//! the whole workflow, so a failed run leaves the database in its pre-run
//! state.

pub mod base;
pub mod items;
pub mod reset;

pub use base::load_members;
pub use items::{load_catalog, CatalogCounts};
pub use reset::reset_schema;
