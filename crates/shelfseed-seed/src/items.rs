//! Catalog subtype inserter.
//!
//! For every catalog CSV row, a generic `library_items` parent is inserted
//! first and its generated id captured; only then is the subtype row written
//! with that id as its primary key. The parent insert must fully complete
//! before the subtype insert begins; inserts are row-at-a-time, never batched.

use std::path::Path;

use serde::Deserialize;
use sqlx::PgConnection;
use tracing::info;

use shelfseed_core::{Error, Result};
use shelfseed_db::{insert_book, insert_digital_media, insert_item_returning_id, insert_magazine};

/// One parsed row of `books.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub isbn: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
}

/// One parsed row of `digital_media.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaRecord {
    pub creator: String,
    pub format: String,
}

/// One parsed row of `magazines.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct MagazineRecord {
    pub issue_number: i32,
    pub publication_date: chrono::NaiveDate,
}

/// Items inserted per catalog source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub books: u64,
    pub digital_media: u64,
    pub magazines: u64,
}

impl CatalogCounts {
    pub fn total(&self) -> u64 {
        self.books + self.digital_media + self.magazines
    }
}

/// Display title for a book row: the last four characters of its ISBN.
pub fn book_title(isbn: &str) -> String {
    let start = isbn
        .char_indices()
        .rev()
        .nth(3)
        .map(|(index, _)| index)
        .unwrap_or(0);
    format!("Book Title {}", &isbn[start..])
}

/// Display title for a digital media row.
pub fn media_title(creator: &str) -> String {
    format!("{creator} Production")
}

/// Display title for a magazine row.
pub fn magazine_title(issue_number: i32) -> String {
    format!("Magazine Issue {issue_number}")
}

fn read_records<T>(path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut reader = csv::Reader::from_path(path).map_err(|err| Error::Seed {
        table: path.display().to_string(),
        reason: err.to_string(),
    })?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record = record.map_err(|err| Error::Seed {
            table: path.display().to_string(),
            reason: err.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Insert all three catalog sources from `input_dir`.
///
/// The caller holds the transaction: either every parent and subtype row
/// commits, or none do.
pub async fn load_catalog(conn: &mut PgConnection, input_dir: &Path) -> Result<CatalogCounts> {
    let books: Vec<BookRecord> = read_records(&input_dir.join("books.csv"))?;
    let media: Vec<MediaRecord> = read_records(&input_dir.join("digital_media.csv"))?;
    let magazines: Vec<MagazineRecord> = read_records(&input_dir.join("magazines.csv"))?;

    let counts = CatalogCounts {
        books: insert_books(conn, &books).await?,
        digital_media: insert_media(conn, &media).await?,
        magazines: insert_magazines(conn, &magazines).await?,
    };

    info!(
        books = counts.books,
        digital_media = counts.digital_media,
        magazines = counts.magazines,
        "catalog loaded"
    );
    Ok(counts)
}

/// Insert book rows, one `library_items` parent per record.
pub async fn insert_books(conn: &mut PgConnection, records: &[BookRecord]) -> Result<u64> {
    for record in records {
        let title = book_title(&record.isbn);
        let item_id = new_item(conn, &title, "Book").await?;

        insert_book(
            conn,
            item_id,
            &record.isbn,
            &record.author,
            &record.genre,
            record.publication_year,
        )
        .await
        .map_err(|err| referential_failure("books", item_id, err))?;
    }
    Ok(records.len() as u64)
}

/// Insert digital media rows, one `library_items` parent per record.
pub async fn insert_media(conn: &mut PgConnection, records: &[MediaRecord]) -> Result<u64> {
    for record in records {
        let title = media_title(&record.creator);
        let item_id = new_item(conn, &title, "Digital Media").await?;

        insert_digital_media(conn, item_id, &record.creator, &record.format)
            .await
            .map_err(|err| referential_failure("digital_media", item_id, err))?;
    }
    Ok(records.len() as u64)
}

/// Insert magazine rows, one `library_items` parent per record.
pub async fn insert_magazines(conn: &mut PgConnection, records: &[MagazineRecord]) -> Result<u64> {
    for record in records {
        let title = magazine_title(record.issue_number);
        let item_id = new_item(conn, &title, "Magazine").await?;

        insert_magazine(conn, item_id, record.issue_number, record.publication_date)
            .await
            .map_err(|err| referential_failure("magazines", item_id, err))?;
    }
    Ok(records.len() as u64)
}

async fn new_item(conn: &mut PgConnection, title: &str, item_type: &str) -> Result<i32> {
    insert_item_returning_id(conn, title, item_type)
        .await
        .map_err(|err| Error::Seed {
            table: "library_items".to_string(),
            reason: err.reason(),
        })
}

fn referential_failure(table: &str, item_id: i32, err: Error) -> Error {
    Error::ReferentialInsert {
        table: table.to_string(),
        item_id,
        reason: err.reason(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_title_uses_last_four_isbn_chars() {
        assert_eq!(book_title("9780140449136"), "Book Title 9136");
        assert_eq!(book_title("123"), "Book Title 123");
    }

    #[test]
    fn media_title_appends_production() {
        assert_eq!(media_title("Studio Orla"), "Studio Orla Production");
    }

    #[test]
    fn magazine_title_embeds_issue_number() {
        assert_eq!(magazine_title(42), "Magazine Issue 42");
    }

    #[test]
    fn reads_book_records_from_csv() {
        let dir = std::env::temp_dir().join(format!("shelfseed_items_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("books.csv");
        std::fs::write(
            &path,
            "isbn,author,genre,publication_year\n\
             9780140449136,Homer,Epic,1996\n\
             9780553382563,Isaac Asimov,Science Fiction,2004\n",
        )
        .expect("write books.csv");

        let records: Vec<BookRecord> = read_records(&path).expect("parse books.csv");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author, "Homer");
        assert_eq!(records[1].publication_year, 2004);
    }

    #[test]
    fn malformed_csv_is_a_seed_failure() {
        let dir = std::env::temp_dir().join(format!("shelfseed_items_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("books.csv");
        std::fs::write(
            &path,
            "isbn,author,genre,publication_year\n9780140449136,Homer,Epic,not-a-year\n",
        )
        .expect("write books.csv");

        let err = read_records::<BookRecord>(&path).expect_err("invalid year");
        assert!(matches!(err, Error::Seed { .. }));
    }
}
