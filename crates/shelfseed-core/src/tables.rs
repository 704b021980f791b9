//! Registry of seeded tables.
//!
//! Single source of truth for table names, CSV interchange columns, foreign
//! key edges, and the truncate order. The loaders and the generator never
//! spell a table or column name outside this module.

/// Static description of one seeded table.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Table name as it exists in the database.
    pub name: &'static str,
    /// Columns used for CSV interchange, in COPY order. Empty for tables
    /// populated by the SQL fixture or by row-at-a-time inserts.
    pub columns: &'static [&'static str],
    /// Tables this one references through foreign keys.
    pub depends_on: &'static [&'static str],
}

pub const MEMBERSHIP_TYPES: TableSpec = TableSpec {
    name: "membership_types",
    columns: &[],
    depends_on: &[],
};

pub const STAFF: TableSpec = TableSpec {
    name: "staff",
    columns: &[],
    depends_on: &[],
};

pub const MEMBERS: TableSpec = TableSpec {
    name: "members",
    columns: &["name", "contact_info", "membership_type_id", "account_status"],
    depends_on: &["membership_types"],
};

pub const LIBRARY_ITEMS: TableSpec = TableSpec {
    name: "library_items",
    columns: &[],
    depends_on: &[],
};

pub const BOOKS: TableSpec = TableSpec {
    name: "books",
    columns: &["isbn", "author", "genre", "publication_year"],
    depends_on: &["library_items"],
};

pub const DIGITAL_MEDIA: TableSpec = TableSpec {
    name: "digital_media",
    columns: &["creator", "format"],
    depends_on: &["library_items"],
};

pub const MAGAZINES: TableSpec = TableSpec {
    name: "magazines",
    columns: &["issue_number", "publication_date"],
    depends_on: &["library_items"],
};

pub const BORROWING_TRANSACTIONS: TableSpec = TableSpec {
    name: "borrowing_transactions",
    columns: &["member_id", "item_id", "staff_id", "borrow_date", "due_date", "return_date"],
    depends_on: &["members", "library_items", "staff"],
};

pub const RESERVATIONS: TableSpec = TableSpec {
    name: "reservations",
    columns: &["member_id", "item_id", "reservation_date", "expiry_date"],
    depends_on: &["members", "library_items"],
};

pub const PAYMENTS: TableSpec = TableSpec {
    name: "payments",
    columns: &["member_id", "amount_paid", "payment_date"],
    depends_on: &["members"],
};

pub const NOTIFICATIONS: TableSpec = TableSpec {
    name: "notifications",
    columns: &["member_id", "notification_date", "notification_type"],
    depends_on: &["members"],
};

/// Every seeded table, parents before dependents.
pub const TABLES: &[TableSpec] = &[
    MEMBERSHIP_TYPES,
    STAFF,
    MEMBERS,
    LIBRARY_ITEMS,
    BOOKS,
    DIGITAL_MEDIA,
    MAGAZINES,
    BORROWING_TRANSACTIONS,
    RESERVATIONS,
    PAYMENTS,
    NOTIFICATIONS,
];

/// Foreign-key-safe truncate order: dependents strictly before the tables
/// they reference.
pub const TRUNCATE_ORDER: &[&str] = &[
    "notifications",
    "payments",
    "reservations",
    "borrowing_transactions",
    "books",
    "digital_media",
    "magazines",
    "library_items",
    "members",
    "staff",
    "membership_types",
];

/// Order used when previewing table contents.
pub const DISPLAY_ORDER: &[&str] = &[
    "membership_types",
    "staff",
    "members",
    "library_items",
    "books",
    "digital_media",
    "magazines",
    "borrowing_transactions",
    "reservations",
    "payments",
    "notifications",
];

/// Look up a table by name.
pub fn spec(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|table| table.name == name)
}
