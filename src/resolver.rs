//! The pure tree-walking core (`spec.md` §4.1).
//!
//! `resolve` never fails on an absent `Ref`/`Condition`/`Fn::FindInMap`
//! target — those fold into sentinel strings inside the individual
//! handlers in `crate::intrinsics`. It only fails on a malformed
//! intrinsic invocation: wrong arity, wrong argument type, an
//! out-of-range `Fn::Select`, or an unsupported `Fn::Sub` placeholder.

use im::HashMap;

use crate::environment::Environment;
use crate::error::{ResolveError, ResolveResult};
use crate::intrinsics::{Intrinsic, REGISTRY};
use crate::value::Value;

/// A `Map` node is an intrinsic call, not data, exactly when it has a
/// single key and that key names one of the 16 recognised intrinsics.
pub fn is_intrinsic_key(key: &str) -> bool {
    REGISTRY.get(key).is_some()
}

/// Resolves a single template node against `env`.
///
/// Maps and lists recurse structurally unless a map is a one-key
/// intrinsic call, in which case the matching handler takes over: an
/// eager handler gets its argument already resolved, a lazy handler
/// gets the raw node and resolves what it needs itself.
pub fn resolve(node: &Value, env: &Environment) -> ResolveResult<Value> {
    match node {
        Value::Map(map) if map.len() == 1 => {
            let (key, args) = map.iter().next().expect("len == 1");
            match REGISTRY.get(key) {
                Some(Intrinsic::Eager(f)) => {
                    let resolved_args = resolve(args, env)?;
                    f(&resolved_args, env)
                }
                Some(Intrinsic::Lazy(f)) => f(args, env),
                None if looks_like_intrinsic(key) => Err(reject_unknown_intrinsic(key)),
                None => resolve_map(map, env),
            }
        }
        Value::Map(map) => resolve_map(map, env),
        Value::List(items) => {
            let resolved = items
                .iter()
                .map(|item| resolve(item, env))
                .collect::<ResolveResult<Vec<_>>>()?;
            Ok(Value::List(resolved))
        }
        scalar => Ok(scalar.clone()),
    }
}

fn resolve_map(map: &HashMap<String, Value>, env: &Environment) -> ResolveResult<Value> {
    let mut resolved = HashMap::new();
    for (k, v) in map.iter() {
        resolved.insert(k.clone(), resolve(v, env)?);
    }
    Ok(Value::Map(resolved))
}

/// A single map key has intrinsic *shape* — `Ref`, `Condition`, or any
/// `Fn::*` name — even when it isn't one of the 16 this resolver knows.
/// Such a key is always a function call, never a coincidentally-named
/// resource property, so an unrecognised one is a template bug rather
/// than plain data to pass through.
fn looks_like_intrinsic(key: &str) -> bool {
    key == "Ref" || key == "Condition" || key.starts_with("Fn::")
}

fn reject_unknown_intrinsic(key: &str) -> ResolveError {
    ResolveError::UnknownIntrinsic {
        key: key.to_string(),
    }
}
