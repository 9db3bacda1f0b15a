//! `Fn::And`, `Fn::Or`, `Fn::Not`, and `Fn::Equals` (`spec.md` §4.2).

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::value::{Number, Value};

use super::helpers::{expect_bool, expect_list};

/// `{Fn::And: [cond, ...]}` — at least two operands, all must be `true`.
pub fn and(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::And")?;
    let mut result = true;
    for item in items {
        result &= expect_bool(item, "Fn::And")?;
    }
    Ok(Value::Bool(result))
}

/// `{Fn::Or: [cond, ...]}` — at least two operands, any must be `true`.
pub fn or(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Or")?;
    let mut result = false;
    for item in items {
        result |= expect_bool(item, "Fn::Or")?;
    }
    Ok(Value::Bool(result))
}

/// `{Fn::Not: [cond]}`.
pub fn not(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Not")?;
    super::helpers::expect_arity(items, "Fn::Not", 1, "1")?;
    Ok(Value::Bool(!expect_bool(&items[0], "Fn::Not")?))
}

/// `{Fn::Equals: [a, b]}`, with a fixed coercion precedence (`spec.md` §4.2):
/// 1. both booleans compare directly;
/// 2. if either side is (or parses as) an ISO date, compare as dates;
/// 3. else if both sides parse as numbers, compare numerically;
/// 4. else fall back to comparing their string forms.
pub fn equals(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Equals")?;
    super::helpers::expect_arity(items, "Fn::Equals", 2, "2")?;
    Ok(Value::Bool(values_equal(&items[0], &items[1])))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    if let (Value::Bool(x), Value::Bool(y)) = (a, b) {
        return x == y;
    }
    if let (Some(da), Some(db)) = (as_date(a), as_date(b)) {
        return da == db;
    }
    if let (Some(na), Some(nb)) = (as_number(a), as_number(b)) {
        return na.as_f64() == nb.as_f64();
    }
    a.stringify() == b.stringify()
}

fn as_date(v: &Value) -> Option<chrono::NaiveDate> {
    match v {
        Value::Date(d) => Some(*d),
        Value::Str(s) => Value::parse_iso_date(s),
        _ => None,
    }
}

fn as_number(v: &Value) -> Option<Number> {
    match v {
        Value::Num(n) => Some(*n),
        Value::Str(s) => Value::parse_number(s),
        _ => None,
    }
}
