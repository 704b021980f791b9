use chrono::NaiveDate;
use serde::Serialize;

/// Row counts of the entities generated rows may reference.
///
/// Foreign keys are drawn uniformly from `[1, count]`, so these must reflect
/// the tables as they exist at generation time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntityCounts {
    pub members: i64,
    pub items: i64,
    pub staff: i64,
}

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub counts: EntityCounts,
    /// Reference date that generated dates are drawn relative to.
    pub today: NaiveDate,
    /// Fixed RNG seed. With `None` the seed is drawn from the platform RNG
    /// and runs are deliberately non-reproducible; the drawn seed is still
    /// recorded in the run summary.
    pub seed: Option<u64>,
}

/// One generated borrowing transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowingRow {
    pub member_id: i64,
    pub item_id: i64,
    pub staff_id: i64,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRow {
    pub fn record(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.item_id.to_string(),
            self.staff_id.to_string(),
            self.borrow_date.to_string(),
            self.due_date.to_string(),
            self.return_date.map(|date| date.to_string()).unwrap_or_default(),
        ]
    }
}

/// One generated reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub member_id: i64,
    pub item_id: i64,
    pub reservation_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl ReservationRow {
    pub fn record(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.item_id.to_string(),
            self.reservation_date.to_string(),
            self.expiry_date.to_string(),
        ]
    }
}

/// One generated payment. Amounts are whole cents; rendering to currency
/// happens only at the CSV boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRow {
    pub member_id: i64,
    pub amount_cents: i64,
    pub payment_date: NaiveDate,
}

impl PaymentRow {
    pub fn amount(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    pub fn record(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            format!("{:.2}", self.amount()),
            self.payment_date.to_string(),
        ]
    }
}

/// Notification categories the database schema accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    DueDateAlert,
    OverdueAlert,
    Reservation,
}

impl NotificationType {
    pub const ALL: [NotificationType; 3] = [
        NotificationType::DueDateAlert,
        NotificationType::OverdueAlert,
        NotificationType::Reservation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::DueDateAlert => "Due Date Alert",
            NotificationType::OverdueAlert => "Overdue Alert",
            NotificationType::Reservation => "Reservation",
        }
    }
}

/// One generated notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub member_id: i64,
    pub notification_date: NaiveDate,
    pub notification_type: NotificationType,
}

impl NotificationRow {
    pub fn record(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.notification_date.to_string(),
            self.notification_type.as_str().to_string(),
        ]
    }
}

/// All four generated sets of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBatch {
    pub borrowings: Vec<BorrowingRow>,
    pub reservations: Vec<ReservationRow>,
    pub payments: Vec<PaymentRow>,
    pub notifications: Vec<NotificationRow>,
}

/// Summary of one generated entity set.
#[derive(Debug, Clone, Serialize)]
pub struct SetSummary {
    pub entity: String,
    pub rows: u64,
    pub path: String,
}

/// Run summary written next to the generated CSVs.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub run_id: String,
    pub seed: u64,
    pub sets: Vec<SetSummary>,
}
