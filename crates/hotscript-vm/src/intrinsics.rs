//! Runtime routines behind `CALL_INTRINSIC`.
//!
//! The `force_*` routines take an object operand: references or boxed value
//! types. A raw value type reaching one of them means the stream skipped a
//! `BOX`, which is reported rather than silently converted.

use hotscript_compiler::Intrinsic;
use hotscript_core::{RuntimeError, Value, convert};

use crate::DynamicStore;

/// Apply a `force_*` routine to an object operand.
///
/// Returns `None` for intrinsics that are not conversions.
pub fn force(intrinsic: Intrinsic, operand: Value, offset: usize) -> Option<Result<Value, RuntimeError>> {
    let routine: fn(&Value) -> Value = match intrinsic {
        Intrinsic::ForceString => |v| Value::String(convert::force_string(v)),
        Intrinsic::ForceDecimal => |v| Value::Decimal(convert::force_decimal(v)),
        Intrinsic::ForceLong => |v| Value::Long(convert::force_long(v)),
        Intrinsic::ForceInt => |v| Value::Int(convert::force_int(v)),
        Intrinsic::ForceBool => |v| Value::Bool(convert::force_bool(v)),
        Intrinsic::StoreGet | Intrinsic::StoreSet => return None,
    };

    if operand.is_value_type() {
        return Some(Err(RuntimeError::TypeMismatch {
            expected: "object".to_string(),
            actual: operand.type_name(),
            offset,
        }));
    }
    Some(Ok(routine(&operand)))
}

/// `store_get`: read a variable from the store.
pub fn store_get(store: &DynamicStore, target: &Value, key: &Value, offset: usize) -> Result<Value, RuntimeError> {
    expect_store(target, offset)?;
    Ok(store.get(expect_key(key, offset)?))
}

/// `store_set`: write a variable, returning the stored value.
pub fn store_set(
    store: &mut DynamicStore,
    target: &Value,
    key: &Value,
    value: Value,
    offset: usize,
) -> Result<Value, RuntimeError> {
    expect_store(target, offset)?;
    if value.is_value_type() {
        return Err(RuntimeError::TypeMismatch {
            expected: "object".to_string(),
            actual: value.type_name(),
            offset,
        });
    }
    store.set(expect_key(key, offset)?, value.clone());
    Ok(value)
}

fn expect_store(target: &Value, offset: usize) -> Result<(), RuntimeError> {
    match target {
        Value::Store => Ok(()),
        other => Err(RuntimeError::TypeMismatch {
            expected: "store".to_string(),
            actual: other.type_name(),
            offset,
        }),
    }
}

fn expect_key(key: &Value, offset: usize) -> Result<&str, RuntimeError> {
    match key {
        Value::String(s) => Ok(s),
        other => Err(RuntimeError::TypeMismatch {
            expected: "string".to_string(),
            actual: other.type_name(),
            offset,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn force_converts_boxed_values() {
        let result = force(Intrinsic::ForceString, Value::Int(5).boxed(), 0).unwrap();
        assert_eq!(result, Ok(Value::from("5")));

        let result = force(Intrinsic::ForceInt, Value::from(" 42 "), 0).unwrap();
        assert_eq!(result, Ok(Value::Int(42)));

        let result = force(Intrinsic::ForceDecimal, Value::from("2.50"), 0).unwrap();
        assert_eq!(result, Ok(Value::Decimal(Decimal::new(25, 1))));

        let result = force(Intrinsic::ForceBool, Value::Null, 0).unwrap();
        assert_eq!(result, Ok(Value::Bool(false)));
    }

    #[test]
    fn force_rejects_raw_value_types() {
        let result = force(Intrinsic::ForceLong, Value::Int(5), 7).unwrap();
        assert_eq!(
            result,
            Err(RuntimeError::TypeMismatch {
                expected: "object".to_string(),
                actual: "int",
                offset: 7,
            })
        );
    }

    #[test]
    fn store_routines_are_not_conversions() {
        assert!(force(Intrinsic::StoreGet, Value::Null, 0).is_none());
    }

    #[test]
    fn store_round_trip() {
        let mut store = DynamicStore::new();
        let stored = store_set(&mut store, &Value::Store, &Value::from("k"), Value::from("v"), 0).unwrap();
        assert_eq!(stored, Value::from("v"));
        assert_eq!(
            store_get(&store, &Value::Store, &Value::from("K"), 1),
            Ok(Value::from("v"))
        );
    }

    #[test]
    fn store_checks_operands() {
        let mut store = DynamicStore::new();
        assert!(store_get(&store, &Value::Null, &Value::from("k"), 0).is_err());
        assert!(store_get(&store, &Value::Store, &Value::Int(1).boxed(), 0).is_err());
        assert!(store_set(&mut store, &Value::Store, &Value::from("k"), Value::Int(1), 0).is_err());
        assert!(store.is_empty());
    }
}
