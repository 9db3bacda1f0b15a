//! Lazy intrinsics — forms whose operands must not all be resolved eagerly.
//!
//! `Fn::If` is the sole lazy form in this language (`spec.md` §4.2): only
//! the condition and the chosen branch are walked; the branch not taken is
//! returned to the caller untouched, exactly as `cpond8-sutra`'s
//! `ATOM_IF` special form only evaluates the arm it selects.

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::resolver::resolve;
use crate::value::Value;

use super::helpers::{expect_arity, expect_list};

/// `{Fn::If: [condition_name, true_branch, false_branch]}`.
///
/// `condition_name` is resolved through `Condition` lookup rules: an
/// undefined condition behaves as `false` rather than erroring, matching
/// how every other reference in this language degrades to a sentinel
/// instead of aborting resolution.
pub fn if_(args: &Value, env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::If")?;
    expect_arity(items, "Fn::If", 3, "3")?;

    let condition = resolve_condition(&items[0], env)?;
    let branch = if condition { &items[1] } else { &items[2] };
    resolve(branch, env)
}

fn resolve_condition(node: &Value, env: &Environment) -> ResolveResult<bool> {
    match node {
        Value::Str(name) => Ok(env.conditions.get(name.as_str()).copied().unwrap_or(false)),
        Value::Bool(b) => Ok(*b),
        other => resolve(other, env).map(|resolved| match resolved {
            Value::Bool(b) => b,
            _ => false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::HashMap as ImMap;

    fn env_with_condition(name: &str, value: bool) -> Environment {
        let mut conditions = ImMap::new();
        conditions.insert(name.to_string(), value);
        Environment {
            conditions,
            ..Environment::new()
        }
    }

    #[test]
    fn if_true_picks_the_first_branch() {
        let env = env_with_condition("UseProd", true);
        let args = Value::List(vec![
            Value::string("UseProd"),
            Value::string("prod"),
            Value::string("dev"),
        ]);
        assert_eq!(if_(&args, &env).unwrap(), Value::string("prod"));
    }

    #[test]
    fn if_false_picks_the_second_branch() {
        let env = env_with_condition("UseProd", false);
        let args = Value::List(vec![
            Value::string("UseProd"),
            Value::string("prod"),
            Value::string("dev"),
        ]);
        assert_eq!(if_(&args, &env).unwrap(), Value::string("dev"));
    }

    #[test]
    fn if_does_not_resolve_the_branch_not_taken() {
        let env = env_with_condition("UseProd", true);
        // The untaken branch is a malformed `Fn::Select` that would error if
        // it were ever walked; `Fn::If`'s laziness must leave it untouched.
        let bad_branch = Value::Map({
            let mut m = ImMap::new();
            m.insert(
                "Fn::Select".to_string(),
                Value::List(vec![Value::string("not-a-number"), Value::List(vec![])]),
            );
            m
        });
        let args = Value::List(vec![Value::string("UseProd"), Value::string("prod"), bad_branch]);
        assert_eq!(if_(&args, &env).unwrap(), Value::string("prod"));
    }

    #[test]
    fn if_with_undefined_condition_defaults_to_false() {
        let env = Environment::new();
        let args = Value::List(vec![
            Value::string("Nope"),
            Value::string("prod"),
            Value::string("dev"),
        ]);
        assert_eq!(if_(&args, &env).unwrap(), Value::string("dev"));
    }
}
