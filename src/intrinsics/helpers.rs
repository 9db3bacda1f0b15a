//! Shared argument-shape validation for intrinsic handlers.
//!
//! Every handler in `crate::intrinsics` receives already-resolved arguments
//! (except `Fn::If`, see `special_forms`) and must reject malformed shapes
//! per `spec.md` §7 rather than guess at intent. Centralizing the checks
//! here keeps each handler's happy path readable, following
//! `cpond8-sutra`'s `atoms/helpers.rs` convention of one small validator per
//! shape.

use im::HashMap;

use crate::error::{ResolveError, ResolveResult};
use crate::value::Value;

pub fn expect_str<'a>(v: &'a Value, intrinsic: &'static str) -> ResolveResult<&'a str> {
    v.as_str()
        .ok_or_else(|| ResolveError::type_mismatch(intrinsic, "String", v.type_name()))
}

pub fn expect_list<'a>(v: &'a Value, intrinsic: &'static str) -> ResolveResult<&'a [Value]> {
    v.as_list()
        .ok_or_else(|| ResolveError::type_mismatch(intrinsic, "List", v.type_name()))
}

pub fn expect_map<'a>(
    v: &'a Value,
    intrinsic: &'static str,
) -> ResolveResult<&'a HashMap<String, Value>> {
    v.as_map()
        .ok_or_else(|| ResolveError::type_mismatch(intrinsic, "Map", v.type_name()))
}

pub fn expect_bool(v: &Value, intrinsic: &'static str) -> ResolveResult<bool> {
    match v {
        Value::Bool(b) => Ok(*b),
        _ => Err(ResolveError::type_mismatch(intrinsic, "Bool", v.type_name())),
    }
}

pub fn expect_arity(
    items: &[Value],
    intrinsic: &'static str,
    expected_len: usize,
    expected_label: &'static str,
) -> ResolveResult<()> {
    if items.len() != expected_len {
        return Err(ResolveError::wrong_arity(
            intrinsic,
            expected_label,
            items.len(),
        ));
    }
    Ok(())
}
