//! `Fn::FindInMap` and `Fn::Select` (`spec.md` §4.2).

use crate::environment::Environment;
use crate::error::{ResolveError, ResolveResult};
use crate::value::Value;

use super::helpers::{expect_arity, expect_list, expect_str};

/// `{Fn::FindInMap: [map, key1, key2]}` → the looked-up value, or
/// `UNDEFINED_MAPPING_<map>_<key1>_<key2>` when any of the three levels
/// is missing.
pub fn find_in_map(args: &Value, env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::FindInMap")?;
    expect_arity(items, "Fn::FindInMap", 3, "3")?;
    let map_name = expect_str(&items[0], "Fn::FindInMap")?;
    let key1 = expect_str(&items[1], "Fn::FindInMap")?;
    let key2 = expect_str(&items[2], "Fn::FindInMap")?;

    Ok(env.find_in_map(map_name, key1, key2).cloned().unwrap_or_else(|| {
        Value::string(format!("UNDEFINED_MAPPING_{map_name}_{key1}_{key2}"))
    }))
}

/// `{Fn::Select: [index, list]}` — `index` must parse as a non-negative
/// integer and must be in range; both failures are fatal per `spec.md` §7
/// (an out-of-range selection is a template bug, not an absent reference).
pub fn select(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Select")?;
    expect_arity(items, "Fn::Select", 2, "2")?;
    let index = parse_index(&items[0])?;
    let list = expect_list(&items[1], "Fn::Select")?;

    usize::try_from(index)
        .ok()
        .and_then(|i| list.get(i))
        .cloned()
        .ok_or_else(|| ResolveError::IndexOutOfRange {
            intrinsic: "Fn::Select",
            index,
            len: list.len(),
        })
}

/// A non-numeric `Fn::Select` index is a type mismatch, not its own error
/// kind (`spec.md` §7 classifies it as "index into `Fn::Select` not
/// coercible to integer").
fn parse_index(v: &Value) -> ResolveResult<i64> {
    let raw = match v {
        Value::Num(crate::value::Number::Int(n)) => return Ok(*n),
        Value::Num(crate::value::Number::Float(f)) => return Ok(*f as i64),
        Value::Str(s) => s.clone(),
        other => {
            return Err(ResolveError::type_mismatch(
                "Fn::Select",
                "String or Number",
                other.type_name(),
            ))
        }
    };
    raw.parse::<i64>()
        .map_err(|_| ResolveError::type_mismatch("Fn::Select", "an integer-valued String", "String"))
}
