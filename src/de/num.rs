/*!
Number classification.

A numeric span is converted into the narrowest representation that's exact for it.

Integers are tried as `i32`, then `i64`, then fall back to an arbitrary precision integer.
Anything with a fraction or exponent is a `f64` as long as the float writes back out
as the same number as the literal. Otherwise it's kept as an
arbitrary precision decimal, so `1.7976931348623157e309` or `0.1000000000000000000001`
don't silently lose their value.
*/

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::Value;

/**
Classify a number literal.

Returns `None` if the literal isn't a valid integer or decimal.
*/
pub(crate) fn classify(literal: &str) -> Option<Value> {
    if literal.contains(['.', 'e', 'E']) {
        classify_decimal(literal)
    } else {
        classify_integer(literal)
    }
}

fn classify_integer(literal: &str) -> Option<Value> {
    let n = BigInt::from_str(literal).ok()?;

    if let Some(n) = n.to_i32() {
        return Some(Value::Int(n));
    }

    if let Some(n) = n.to_i64() {
        return Some(Value::Long(n));
    }

    Some(Value::BigInt(n))
}

fn classify_decimal(literal: &str) -> Option<Value> {
    let exact = BigDecimal::from_str(literal).ok()?;

    match f64::from_str(literal) {
        Ok(n) if is_exact(n, &exact) => Some(Value::Double(n)),
        _ => Some(Value::BigDecimal(exact)),
    }
}

/**
Whether the float is the same number as the exact decimal.

The float is compared through its shortest representation, which is the one that
would be written back out for it. Subnormals near the bottom of the range also
compare through their two digit form, so `4.9e-324` reads as the smallest `f64`.
*/
fn is_exact(n: f64, exact: &BigDecimal) -> bool {
    if !n.is_finite() {
        return false;
    }

    [format!("{:e}", n), format!("{:.1e}", n)]
        .iter()
        .any(|written| matches!(BigDecimal::from_str(written), Ok(parsed) if parsed == *exact))
}
