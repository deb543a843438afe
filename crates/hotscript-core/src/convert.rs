//! Canonical conversions between runtime values.
//!
//! These are the routines behind the interpreter's `force_*` intrinsics. They
//! accept any value (boxes are looked through) and always produce a result:
//! scripts are dynamically typed, so a conversion that cannot succeed falls
//! back to the target type's zero value rather than failing.
//!
//! - numbers to string use the minimal decimal representation (`2.50` → `"2.5"`)
//! - strings to numbers accept integers, `0x` hexadecimal and decimals (`" 5 "` → 5)
//! - anything to bool follows script truthiness (`0`, `""`, `"0"` and null are false)

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::Value;

/// A number parsed out of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Integer(i64),
    Fraction(Decimal),
}

impl Number {
    fn to_i64(self) -> i64 {
        match self {
            Number::Integer(v) => v,
            Number::Fraction(d) => d.trunc().to_i64().unwrap_or(if d.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }),
        }
    }

    fn to_decimal(self) -> Decimal {
        match self {
            Number::Integer(v) => Decimal::from(v),
            Number::Fraction(d) => d,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Integer(v) => v == 0,
            Number::Fraction(d) => d.is_zero(),
        }
    }
}

/// Parse script text as a number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty or
/// non-numeric text.
pub fn parse_number(text: &str) -> Option<Decimal> {
    parse_text(text).map(Number::to_decimal)
}

fn parse_text(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let magnitude = i64::from_str_radix(hex, 16).ok()?;
        return Some(Number::Integer(if negative { -magnitude } else { magnitude }));
    }

    if let Ok(v) = text.parse::<i64>() {
        return Some(Number::Integer(v));
    }

    // Decimal::from_str skips digit separators; script text has none.
    if text.contains('_') {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .map(Number::Fraction)
}

fn number_of(value: &Value) -> Option<Number> {
    match value.unboxed() {
        Value::Int(v) => Some(Number::Integer(i64::from(*v))),
        Value::Long(v) => Some(Number::Integer(*v)),
        Value::Decimal(d) => Some(Number::Fraction(*d)),
        Value::Bool(b) => Some(Number::Integer(i64::from(*b))),
        Value::String(s) => parse_text(s),
        _ => None,
    }
}

/// `force_string`: render a value as script text.
pub fn force_string(value: &Value) -> String {
    match value.unboxed() {
        Value::Null => String::new(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Decimal(d) => d.normalize().to_string(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Store | Value::Boxed(_) => String::new(),
    }
}

/// `force_decimal`: numeric value as a decimal, 0 when not numeric.
pub fn force_decimal(value: &Value) -> Decimal {
    number_of(value).map(Number::to_decimal).unwrap_or_default()
}

/// `force_long`: numeric value truncated toward zero, 0 when not numeric.
pub fn force_long(value: &Value) -> i64 {
    number_of(value).map(Number::to_i64).unwrap_or(0)
}

/// `force_int`: like [`force_long`], wrapped to 32 bits.
pub fn force_int(value: &Value) -> i32 {
    force_long(value) as i32
}

/// `force_bool`: script truthiness.
pub fn force_bool(value: &Value) -> bool {
    match value.unboxed() {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) if s.is_empty() => false,
        Value::String(s) => parse_text(s).map(|n| !n.is_zero()).unwrap_or(true),
        Value::Array(_) | Value::Store | Value::Boxed(_) => true,
        other => number_of(other).map(|n| !n.is_zero()).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn numbers_to_string() {
        assert_eq!(force_string(&Value::Int(5).boxed()), "5");
        assert_eq!(force_string(&Value::Long(-12)), "-12");
        assert_eq!(force_string(&Value::Decimal(dec("2.50"))), "2.5");
        assert_eq!(force_string(&Value::Decimal(dec("3.000"))), "3");
        assert_eq!(force_string(&Value::Bool(true)), "1");
        assert_eq!(force_string(&Value::Null), "");
    }

    #[test]
    fn strings_to_numbers() {
        assert_eq!(force_int(&Value::from("5")), 5);
        assert_eq!(force_int(&Value::from("  42 ")), 42);
        assert_eq!(force_int(&Value::from("0x1F")), 31);
        assert_eq!(force_int(&Value::from("-0x10")), -16);
        assert_eq!(force_int(&Value::from("5.9")), 5);
        assert_eq!(force_int(&Value::from("abc")), 0);
        assert_eq!(force_int(&Value::from("")), 0);
        assert_eq!(force_long(&Value::from("1e3")), 1000);
        assert_eq!(force_decimal(&Value::from("1.25")), dec("1.25"));
    }

    #[test]
    fn integer_narrowing_wraps() {
        assert_eq!(force_int(&Value::Long(i64::from(i32::MAX) + 1)), i32::MIN);
        assert_eq!(force_long(&Value::Decimal(dec("-7.8"))), -7);
    }

    #[test]
    fn truthiness() {
        assert!(!force_bool(&Value::Int(0).boxed()));
        assert!(force_bool(&Value::Int(3).boxed()));
        assert!(force_bool(&Value::Int(-1)));
        assert!(!force_bool(&Value::Decimal(dec("0.0"))));
        assert!(!force_bool(&Value::from("")));
        assert!(!force_bool(&Value::from("0")));
        assert!(!force_bool(&Value::from("0.00")));
        assert!(force_bool(&Value::from("false")));
        assert!(force_bool(&Value::from("1")));
        assert!(!force_bool(&Value::Null));
    }

    #[test]
    fn parse_number_rejects_text() {
        assert_eq!(parse_number("12"), Some(Decimal::from(12)));
        assert_eq!(parse_number("twelve"), None);
    }

    #[test]
    fn signs_and_separators_inside_numbers_are_rejected() {
        assert_eq!(parse_number("0x-5"), None);
        assert_eq!(parse_number("-0x-5"), None);
        assert_eq!(parse_number("0x+5"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("1_000.5"), None);
        assert_eq!(parse_number("1_000"), None);
        assert_eq!(force_int(&Value::from("0x-5")), 0);
        assert_eq!(force_long(&Value::from("1_000.5")), 0);

        assert_eq!(parse_number("-0x1F"), Some(Decimal::from(-31)));
        assert_eq!(parse_number("1000.5"), Some(dec("1000.5")));
    }
}
