#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn seed_sample_data(db: &Database) {
    db.add_expense("2024-01-05", "groceries", dec!(42.50), "weekly shop")
        .unwrap();
    db.add_expense("2024-01-20", "transport", dec!(10.00), "")
        .unwrap();
    db.add_expense("2024-02-01", "groceries", dec!(15.00), "")
        .unwrap();
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_add_rejects_malformed_date() {
    let db = Database::open_in_memory().unwrap();
    let err = db
        .add_expense("01/05/2024", "groceries", dec!(1), "")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = db
        .add_expense("2024-13-40", "groceries", dec!(1), "")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_add_rejects_negative_amount() {
    let db = Database::open_in_memory().unwrap();
    let err = db
        .add_expense("2024-01-05", "groceries", dec!(-0.01), "")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_add_accepts_zero_amount() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .add_expense("2024-01-05", "groceries", dec!(0), "")
        .unwrap();
    assert!(id > 0);
}

#[test]
fn test_add_rejects_empty_category() {
    let db = Database::open_in_memory().unwrap();
    let err = db.add_expense("2024-01-05", "   ", dec!(1), "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_add_trims_category_and_notes() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .add_expense("2024-01-05", "  groceries ", dec!(1), " note ")
        .unwrap();
    let e = db.get_expense_by_id(id).unwrap().unwrap();
    assert_eq!(e.category, "groceries");
    assert_eq!(e.notes, "note");
}

// ── Add / list ────────────────────────────────────────────────

#[test]
fn test_add_then_list_contains_record() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .add_expense("2024-01-05", "groceries", dec!(42.50), "weekly shop")
        .unwrap();

    let all = db.get_expenses(&ExpenseFilter::default()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(id));
    assert_eq!(all[0].date, "2024-01-05");
    assert_eq!(all[0].category, "groceries");
    assert_eq!(all[0].amount, dec!(42.50));
    assert_eq!(all[0].notes, "weekly shop");
}

#[test]
fn test_list_ordered_by_date_then_id() {
    let db = Database::open_in_memory().unwrap();
    let id_later = db.add_expense("2024-02-01", "a", dec!(1), "").unwrap();
    let id_first = db.add_expense("2024-01-05", "b", dec!(2), "").unwrap();
    let id_same_day = db.add_expense("2024-01-05", "c", dec!(3), "").unwrap();

    let all = db.get_expenses(&ExpenseFilter::default()).unwrap();
    let ids: Vec<Option<i64>> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![Some(id_first), Some(id_same_day), Some(id_later)]);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let db = Database::open_in_memory().unwrap();
    let id1 = db.add_expense("2024-01-05", "a", dec!(1), "").unwrap();
    db.delete_expense(id1).unwrap();
    let id2 = db.add_expense("2024-01-06", "b", dec!(2), "").unwrap();
    assert!(id2 > id1);
}

// ── Filtering ─────────────────────────────────────────────────

#[test]
fn test_filter_by_date_range_inclusive() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        from: Some("2024-01-05".into()),
        to: Some("2024-01-20".into()),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].date, "2024-01-05");
    assert_eq!(matched[1].date, "2024-01-20");
}

#[test]
fn test_filter_by_category_case_insensitive() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        category: Some("GROCERIES".into()),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|e| e.category == "groceries"));
}

#[test]
fn test_filter_by_amount_range_inclusive() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        min_amount: Some(dec!(10.00)),
        max_amount: Some(dec!(42.50)),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    assert_eq!(matched.len(), 2);

    let filter = ExpenseFilter {
        min_amount: Some(dec!(10.01)),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    assert_eq!(matched.len(), 2);
}

#[test]
fn test_filter_fields_combine_with_and() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        category: Some("groceries".into()),
        from: Some("2024-02-01".into()),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].amount, dec!(15.00));
}

#[test]
fn test_filter_with_no_matches_is_empty() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        category: Some("utilities".into()),
        ..Default::default()
    };
    assert!(db.get_expenses(&filter).unwrap().is_empty());
}

// ── Lookup / delete / count ───────────────────────────────────

#[test]
fn test_get_by_id() {
    let db = Database::open_in_memory().unwrap();
    let id = db.add_expense("2024-01-05", "a", dec!(1), "").unwrap();
    let e = db.get_expense_by_id(id).unwrap();
    assert!(e.is_some());
    assert_eq!(e.unwrap().category, "a");
}

#[test]
fn test_get_by_id_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_expense_by_id(99999).unwrap().is_none());
}

#[test]
fn test_delete_removes_record() {
    let db = Database::open_in_memory().unwrap();
    let id = db.add_expense("2024-01-05", "a", dec!(1), "").unwrap();
    db.delete_expense(id).unwrap();
    assert!(db.get_expense_by_id(id).unwrap().is_none());
    assert_eq!(db.get_expense_count().unwrap(), 0);
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let db = Database::open_in_memory().unwrap();
    let err = db.delete_expense(99999).unwrap_err();
    assert!(matches!(err, Error::NotFound(99999)));
}

#[test]
fn test_expense_count() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_expense_count().unwrap(), 0);
    seed_sample_data(&db);
    assert_eq!(db.get_expense_count().unwrap(), 3);
}

// ── Reports over stored data ──────────────────────────────────

#[test]
fn test_reports_over_stored_expenses() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let all = db.get_expenses(&ExpenseFilter::default()).unwrap();
    assert_eq!(crate::report::total(&all), dec!(67.50));
    assert_eq!(
        crate::report::by_category(&all),
        vec![
            ("groceries".into(), dec!(57.50)),
            ("transport".into(), dec!(10.00)),
        ]
    );
    assert_eq!(
        crate::report::monthly_trend(&all),
        vec![
            ("2024-01".into(), dec!(52.50)),
            ("2024-02".into(), dec!(15.00)),
        ]
    );
}

#[test]
fn test_total_matches_list_under_filter() {
    let db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);

    let filter = ExpenseFilter {
        category: Some("groceries".into()),
        ..Default::default()
    };
    let matched = db.get_expenses(&filter).unwrap();
    let sum: rust_decimal::Decimal = matched.iter().map(|e| e.amount).sum();
    assert_eq!(crate::report::total(&matched), sum);
    assert_eq!(sum, dec!(57.50));
}

// ── Migration ─────────────────────────────────────────────────

#[test]
fn test_migrate_is_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    seed_sample_data(&db);
    db.migrate().unwrap();
    assert_eq!(db.get_expense_count().unwrap(), 3);
}

#[test]
fn test_open_on_disk_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendlog.db");
    {
        let db = Database::open(&path).unwrap();
        db.add_expense("2024-01-05", "groceries", dec!(42.50), "")
            .unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_expense_count().unwrap(), 1);
}
