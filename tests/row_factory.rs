//! # Row Factory Integration Tests
//!
//! Exercises the public row API the way index code uses it.
//!
//! ## Test Coverage
//!
//! 1. Arity dispatch
//!    - `create_row` agrees with `create` / `create_pair` for 1 and 2 values
//!    - 0 and 3+ values produce slice-backed rows
//! 2. Read contract
//!    - Positional reads, fail-fast out-of-range access
//!    - `value_list` on every variant
//!    - `set_value` refused on every variant
//! 3. Concurrency
//!    - Rows read from many threads through `Arc`
//!
//! ## Usage
//!
//! ```sh
//! RUST_LOG=turdb_rows=trace cargo test --test row_factory -- --nocapture
//! ```

mod common;

use std::sync::Arc;
use std::thread;

use turdb_rows::rows::{Row, RowBuilder, RowError, RowFactory, RowKind};
use turdb_rows::types::Value;
use turdb_rows::IndexRow;

fn a() -> Value {
    Value::from("A")
}

fn b() -> Value {
    Value::from("B")
}

fn c() -> Value {
    Value::from("C")
}

/// Compares everything the read contract exposes.
fn assert_same_contract(left: &IndexRow, right: &IndexRow) {
    assert_eq!(left.column_count(), right.column_count());
    for idx in 0..left.column_count() {
        assert_eq!(left.value(idx), right.value(idx));
    }
    assert_eq!(left.value_list(), right.value_list());
}

// ============================================================================
// Arity Dispatch
// ============================================================================

#[test]
fn test_create_row_single_value_scenario() {
    common::init_tracing();
    let row = RowFactory::new().create_row(vec![a()], 0);

    assert_eq!(row.column_count(), 1);
    assert_eq!(row.value(0), &a());
    assert_eq!(
        row.value_list().unwrap_err(),
        RowError::MaterializationNotSupported {
            kind: RowKind::Key
        }
    );
}

#[test]
fn test_create_row_pair_scenario() {
    common::init_tracing();
    let row = RowFactory::new().create_row(vec![a(), b()], 0);

    assert_eq!(row.column_count(), 2);
    assert_eq!(row.value(0), &a());
    assert_eq!(row.value(1), &b());
    assert_eq!(
        row.value_list().unwrap_err(),
        RowError::MaterializationNotSupported {
            kind: RowKind::Pair
        }
    );
}

#[test]
fn test_create_row_triple_scenario() {
    common::init_tracing();
    let row = RowFactory::new().create_row(vec![a(), b(), c()], 0);

    assert_eq!(row.column_count(), 3);
    assert_eq!(row.value_list().unwrap(), &[a(), b(), c()][..]);
}

#[test]
fn test_create_row_empty_scenario() {
    common::init_tracing();
    let row: IndexRow = RowFactory::new().create_row(vec![], 0);

    assert_eq!(row.column_count(), 0);
    assert_eq!(row.value_list().unwrap(), &[] as &[Value]);
}

#[test]
fn test_generic_path_matches_explicit_constructors() {
    let factory = RowFactory::new();

    assert_same_contract(&factory.create_row(vec![a()], 64), &factory.create(a()));
    assert_same_contract(
        &factory.create_row(vec![a(), b()], 64),
        &factory.create_pair(a(), b()),
    );
}

#[test]
fn test_wide_rows_keep_every_position() {
    let factory = RowFactory::new();

    for width in 3..40 {
        let values: Vec<Value> = (0..width).map(|i| Value::Int(i as i64)).collect();
        let row = factory.create_row(values.clone(), 0);

        assert_eq!(row.kind(), RowKind::Simple);
        assert_eq!(row.column_count(), width);
        for (idx, expected) in values.iter().enumerate() {
            assert_eq!(row.value(idx), expected);
        }
        assert_eq!(row.value_list().unwrap(), values.as_slice());
    }
}

#[test]
fn test_builder_agrees_with_factory() {
    let factory = RowFactory::new();
    let mut builder = RowBuilder::new();

    for width in 0..6 {
        let values: Vec<Value> = (0..width).map(|i| Value::Int(i as i64)).collect();

        builder.extend(values.iter().cloned());
        let built = builder.build();
        let created = factory.create_row(values, 0);

        assert_eq!(built.kind(), created.kind());
        assert_same_contract(&built, &created);
    }
}

// ============================================================================
// Read Contract
// ============================================================================

#[test]
fn test_set_value_refused_everywhere() {
    let factory = RowFactory::new();
    let rows: Vec<IndexRow> = vec![
        factory.create(a()),
        factory.create_pair(a(), b()),
        factory.create_row(vec![a(), b(), c()], 0),
        factory.create_row(vec![], 0),
        Row::simple(vec![a()]),
    ];

    for row in &rows {
        for idx in 0..4 {
            let err = row.set_value(idx, Value::Null).unwrap_err();
            assert_eq!(err, RowError::MutationNotSupported { column: idx });
        }
    }
}

#[test]
fn test_rows_are_unchanged_after_refused_mutation() {
    let row = RowFactory::new().create_pair(a(), b());

    let _ = row.set_value(0, c());
    let _ = row.set_value(1, c());

    assert_eq!(row.value(0), &a());
    assert_eq!(row.value(1), &b());
}

#[test]
#[should_panic(expected = "column index 3 out of range")]
fn test_out_of_range_read_fails_fast() {
    let row = RowFactory::new().create_row(vec![a(), b(), c()], 0);
    row.value(3);
}

#[test]
fn test_iteration_is_variant_agnostic() {
    let factory = RowFactory::new();
    let rows: Vec<IndexRow> = vec![
        factory.create(a()),
        factory.create_pair(a(), b()),
        factory.create_row(vec![a(), b(), c()], 0),
    ];

    for row in &rows {
        let collected: Vec<&Value> = row.iter().collect();
        assert_eq!(collected.len(), row.column_count());
        assert_eq!(collected[0], &a());
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_readers_share_rows() {
    common::init_tracing();
    let factory = RowFactory::new();

    let rows: Arc<Vec<IndexRow>> = Arc::new(
        (0..64)
            .map(|i| match i % 3 {
                0 => factory.create(Value::Int(i)),
                1 => factory.create_pair(Value::Int(i), Value::Int(i + 1)),
                _ => factory.create_row(vec![Value::Int(i), Value::Int(i + 1), Value::Int(i + 2)], 0),
            })
            .collect(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rows = Arc::clone(&rows);
            thread::spawn(move || {
                let mut total = 0i64;
                for row in rows.iter() {
                    for value in row {
                        if let Value::Int(i) = value {
                            total += i;
                        }
                    }
                }
                total
            })
        })
        .collect();

    let expected: i64 = rows
        .iter()
        .flat_map(|row| row.iter())
        .map(|v| match v {
            Value::Int(i) => *i,
            _ => 0,
        })
        .sum();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_factory_copies_across_threads() {
    let factory = RowFactory::new();

    let handles: Vec<_> = (0..4i64)
        .map(|t| {
            thread::spawn(move || {
                (0..100i64)
                    .map(|i| factory.create_pair(t, i))
                    .filter(|row| row.kind() == RowKind::Pair)
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 100);
    }
}
