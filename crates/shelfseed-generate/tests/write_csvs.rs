use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use shelfseed_generate::{
    write_batch_csvs, EntityCounts, GeneratorConfig, TransactionGenerator,
};

fn config() -> GeneratorConfig {
    GeneratorConfig {
        counts: EntityCounts {
            members: 5,
            items: 3,
            staff: 2,
        },
        today: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
        seed: Some(42),
    }
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shelfseed_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

#[test]
fn writes_all_sets_with_expected_headers() {
    let generator = TransactionGenerator::new(config());
    let seed = generator.seed();
    let batch = generator.generate().expect("generate");

    let out_dir = temp_out_dir("headers");
    let summary = write_batch_csvs(&out_dir, &batch, seed).expect("write csvs");

    let expected = [
        (
            "borrowing_transactions",
            "member_id,item_id,staff_id,borrow_date,due_date,return_date",
            41,
        ),
        ("reservations", "member_id,item_id,reservation_date,expiry_date", 16),
        ("payments", "member_id,amount_paid,payment_date", 11),
        ("notifications", "member_id,notification_date,notification_type", 26),
    ];

    for (table, header, lines) in expected {
        let contents =
            fs::read_to_string(out_dir.join(format!("{table}.csv"))).expect("read set csv");
        assert_eq!(contents.lines().next(), Some(header), "{table} header");
        assert_eq!(contents.lines().count(), lines, "{table} line count");
    }

    assert_eq!(summary.sets.len(), 4);
    assert_eq!(summary.seed, 42);
}

#[test]
fn same_seed_writes_identical_bytes() {
    let out_dir_a = temp_out_dir("run_a");
    let out_dir_b = temp_out_dir("run_b");

    let generator = TransactionGenerator::new(config());
    let seed = generator.seed();
    let batch = generator.generate().expect("generate A");
    write_batch_csvs(&out_dir_a, &batch, seed).expect("write A");

    let generator = TransactionGenerator::new(config());
    let seed = generator.seed();
    let batch = generator.generate().expect("generate B");
    write_batch_csvs(&out_dir_b, &batch, seed).expect("write B");

    for table in ["borrowing_transactions", "reservations", "payments", "notifications"] {
        let first = fs::read(out_dir_a.join(format!("{table}.csv"))).expect("read A");
        let second = fs::read(out_dir_b.join(format!("{table}.csv"))).expect("read B");
        assert_eq!(first, second, "{table}.csv should be deterministic");
    }
}

#[test]
fn summary_json_lands_next_to_the_csvs() {
    let generator = TransactionGenerator::new(config());
    let seed = generator.seed();
    let batch = generator.generate().expect("generate");

    let out_dir = temp_out_dir("summary");
    write_batch_csvs(&out_dir, &batch, seed).expect("write csvs");

    let summary: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out_dir.join("generation_summary.json")).expect("read summary"),
    )
    .expect("parse summary");

    let sets = summary
        .get("sets")
        .and_then(|value| value.as_array())
        .expect("sets array");
    assert_eq!(sets.len(), 4);

    let rows: Vec<u64> = sets
        .iter()
        .map(|set| set.get("rows").and_then(|value| value.as_u64()).expect("rows"))
        .collect();
    assert_eq!(rows, vec![40, 15, 10, 25]);
}
