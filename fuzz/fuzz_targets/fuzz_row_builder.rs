//! Fuzz testing for the row builder and factory dispatch.
//!
//! This fuzz target drives RowBuilder with arbitrary push/set sequences and
//! checks the built row against the values that went in.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use turdb_rows::rows::{RowBuilder, RowFactory, RowKind};
use turdb_rows::types::Value;

#[derive(Debug, Arbitrary)]
struct RowBuilderInput {
    operations: Vec<BuilderOperation>,
}

#[derive(Debug, Arbitrary, Clone)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    Uuid([u8; 16]),
    Timestamp(i64),
}

#[derive(Debug, Arbitrary)]
enum BuilderOperation {
    Push(FuzzValue),
    Set(u8, FuzzValue),
    Build,
    Reset,
}

impl From<FuzzValue> for Value {
    fn from(fv: FuzzValue) -> Self {
        match fv {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(i) => Value::Int(i),
            // NaN never compares equal, which would break the shadow checks.
            FuzzValue::Float(f) if f.is_nan() => Value::Null,
            FuzzValue::Float(f) => Value::Float(f),
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::Blob(b) => Value::Blob(b),
            FuzzValue::Uuid(u) => Value::Uuid(u),
            FuzzValue::Timestamp(t) => Value::Timestamp(t),
        }
    }
}

fuzz_target!(|input: RowBuilderInput| {
    if input.operations.len() > 256 {
        return;
    }

    let factory = RowFactory::new();
    let mut builder = RowBuilder::new();
    let mut shadow: Vec<Value> = Vec::new();

    for op in input.operations {
        match op {
            BuilderOperation::Push(val) => {
                let value = Value::from(val);
                shadow.push(value.clone());
                builder.push(value);
            }
            BuilderOperation::Set(idx, val) => {
                let idx = idx as usize;
                let value = Value::from(val);
                match builder.set(idx, value.clone()) {
                    Ok(()) => shadow[idx] = value,
                    Err(_) => assert!(idx >= shadow.len()),
                }
            }
            BuilderOperation::Build => {
                let values = std::mem::take(&mut shadow);
                let row = builder.build();
                let created = factory.create_row(values.clone(), 0);

                assert_eq!(row.column_count(), values.len());
                assert_eq!(row.kind(), created.kind());
                for (idx, value) in row.iter().enumerate() {
                    assert_eq!(value, &values[idx]);
                }
                assert!(row.set_value(0, Value::Null).is_err());
                match row.kind() {
                    RowKind::Simple => assert_eq!(row.value_list().ok(), Some(values.as_slice())),
                    _ => assert!(row.value_list().is_err()),
                }
            }
            BuilderOperation::Reset => {
                shadow.clear();
                builder.reset();
            }
        }
    }
});
