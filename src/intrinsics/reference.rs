//! `Ref`, `Condition`, and `Fn::ImportValue` (`spec.md` §4.2).
//!
//! All three are lookups against a single namespace: the parameter
//! environment for `Ref`/`Fn::ImportValue`, the condition environment for
//! `Condition`. None of them can fail on a missing name — they fall back to
//! the sentinel strings that keep resolution total.

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::value::Value;

use super::helpers::expect_str;

/// `{Ref: name}` → `parameters[name]`, or `UNDEFINED_PARAM_<name>`.
pub fn ref_(args: &Value, env: &Environment) -> ResolveResult<Value> {
    let name = expect_str(args, "Ref")?;
    Ok(env
        .parameters
        .get(name)
        .cloned()
        .unwrap_or_else(|| Value::string(format!("UNDEFINED_PARAM_{name}"))))
}

/// `{Condition: name}` → `conditions[name]`, or `UNDEFINED_CONDITION_<name>`.
pub fn condition(args: &Value, env: &Environment) -> ResolveResult<Value> {
    let name = expect_str(args, "Condition")?;
    match env.conditions.get(name) {
        Some(b) => Ok(Value::Bool(*b)),
        None => Ok(Value::string(format!("UNDEFINED_CONDITION_{name}"))),
    }
}

/// `{Fn::ImportValue: name}`. Shares the `Ref` namespace in this design —
/// real CloudFormation keeps cross-stack exports separate; see the open
/// question in `spec.md` §9, preserved here rather than silently "fixed".
pub fn import_value(args: &Value, env: &Environment) -> ResolveResult<Value> {
    ref_(args, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::HashMap as ImMap;

    fn env_with(params: &[(&str, &str)]) -> Environment {
        let mut map = ImMap::new();
        for (k, v) in params {
            map.insert(k.to_string(), Value::string(*v));
        }
        Environment::with_parameters(map)
    }

    #[test]
    fn ref_returns_bound_parameter() {
        let env = env_with(&[("abc", "ABC")]);
        assert_eq!(ref_(&Value::string("abc"), &env).unwrap(), Value::string("ABC"));
    }

    #[test]
    fn ref_returns_sentinel_when_undefined() {
        let env = env_with(&[("abc", "ABC")]);
        assert_eq!(
            ref_(&Value::string("potato"), &env).unwrap(),
            Value::string("UNDEFINED_PARAM_potato")
        );
    }

    #[test]
    fn import_value_shares_parameter_namespace() {
        let env = env_with(&[("abc", "ABC")]);
        assert_eq!(
            import_value(&Value::string("abc"), &env).unwrap(),
            Value::string("ABC")
        );
        assert_eq!(
            import_value(&Value::string("potato"), &env).unwrap(),
            Value::string("UNDEFINED_PARAM_potato")
        );
    }

    #[test]
    fn condition_sentinel_when_undefined() {
        let env = Environment::new();
        assert_eq!(
            condition(&Value::string("SomeOtherCondition"), &env).unwrap(),
            Value::string("UNDEFINED_CONDITION_SomeOtherCondition")
        );
    }
}
