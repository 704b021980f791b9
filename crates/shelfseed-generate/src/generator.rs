use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::errors::GenerateError;
use crate::model::{
    BorrowingRow, EntityCounts, GeneratedBatch, GeneratorConfig, NotificationRow,
    NotificationType, PaymentRow, ReservationRow,
};

pub const BORROWING_ROWS: usize = 40;
pub const RESERVATION_ROWS: usize = 15;
pub const PAYMENT_ROWS: usize = 10;
pub const NOTIFICATION_ROWS: usize = 25;

/// Synthesizes the four transactional row sets for one run.
#[derive(Debug)]
pub struct TransactionGenerator {
    counts: EntityCounts,
    today: NaiveDate,
    seed: u64,
    rng: ChaCha8Rng,
}

impl TransactionGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            counts: config.counts,
            today: config.today,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this run draws from, fixed or platform-drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate all four sets.
    ///
    /// Every foreign key is drawn uniformly from `[1, count]` of its
    /// referenced entity; an empty parent table aborts the run before any
    /// rows are produced.
    pub fn generate(mut self) -> Result<GeneratedBatch, GenerateError> {
        ensure_populated(&self.counts)?;

        let batch = GeneratedBatch {
            borrowings: self.borrowings(),
            reservations: self.reservations(),
            payments: self.payments(),
            notifications: self.notifications(),
        };

        info!(
            seed = self.seed,
            borrowings = batch.borrowings.len(),
            reservations = batch.reservations.len(),
            payments = batch.payments.len(),
            notifications = batch.notifications.len(),
            "transactions generated"
        );
        Ok(batch)
    }

    fn borrowings(&mut self) -> Vec<BorrowingRow> {
        (0..BORROWING_ROWS)
            .map(|_| {
                let borrow_date = self.date_back(1, 60);
                let return_date = self
                    .rng
                    .random_bool(0.4)
                    .then(|| borrow_date + Duration::days(self.rng.random_range(1..=30)));
                BorrowingRow {
                    member_id: self.member_id(),
                    item_id: self.item_id(),
                    staff_id: self.staff_id(),
                    borrow_date,
                    due_date: borrow_date + Duration::days(14),
                    return_date,
                }
            })
            .collect()
    }

    fn reservations(&mut self) -> Vec<ReservationRow> {
        (0..RESERVATION_ROWS)
            .map(|_| {
                let reservation_date = self.date_back(1, 15);
                ReservationRow {
                    member_id: self.member_id(),
                    item_id: self.item_id(),
                    reservation_date,
                    expiry_date: reservation_date + Duration::days(7),
                }
            })
            .collect()
    }

    fn payments(&mut self) -> Vec<PaymentRow> {
        (0..PAYMENT_ROWS)
            .map(|_| PaymentRow {
                member_id: self.member_id(),
                // uniform in [1.00, 10.00], already at two decimals
                amount_cents: self.rng.random_range(100..=1000),
                payment_date: self.date_back(0, 10),
            })
            .collect()
    }

    fn notifications(&mut self) -> Vec<NotificationRow> {
        (0..NOTIFICATION_ROWS)
            .map(|_| NotificationRow {
                member_id: self.member_id(),
                notification_date: self.date_back(0, 7),
                notification_type: NotificationType::ALL
                    [self.rng.random_range(0..NotificationType::ALL.len())],
            })
            .collect()
    }

    /// A date between `newest` and `oldest` days before today, inclusive.
    fn date_back(&mut self, newest: i64, oldest: i64) -> NaiveDate {
        self.today - Duration::days(self.rng.random_range(newest..=oldest))
    }

    fn member_id(&mut self) -> i64 {
        self.rng.random_range(1..=self.counts.members)
    }

    fn item_id(&mut self) -> i64 {
        self.rng.random_range(1..=self.counts.items)
    }

    fn staff_id(&mut self) -> i64 {
        self.rng.random_range(1..=self.counts.staff)
    }
}

fn ensure_populated(counts: &EntityCounts) -> Result<(), GenerateError> {
    let referenced = [
        ("members", counts.members),
        ("library_items", counts.items),
        ("staff", counts.staff),
    ];
    for (table, count) in referenced {
        if count < 1 {
            return Err(GenerateError::EmptyParent(table));
        }
    }
    Ok(())
}
