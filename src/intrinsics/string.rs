//! `Fn::Join`, `Fn::Split`, `Fn::Sub`, and `Fn::Base64` (`spec.md` §4.2).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use im::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::environment::Environment;
use crate::error::{ResolveError, ResolveResult};
use crate::value::Value;

use super::helpers::{expect_arity, expect_list, expect_map, expect_str};

/// `{Fn::Join: [sep, items]}` — concatenate, stringifying each item first.
pub fn join(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Join")?;
    expect_arity(items, "Fn::Join", 2, "2")?;
    let sep = expect_str(&items[0], "Fn::Join")?;
    let elements = expect_list(&items[1], "Fn::Join")?;
    let joined = elements
        .iter()
        .map(Value::stringify)
        .collect::<Vec<_>>()
        .join(sep);
    Ok(Value::Str(joined))
}

/// `{Fn::Split: [sep, s]}` — a plain string split; trailing empty fragments
/// are preserved, matching `str::split`.
pub fn split(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let items = expect_list(args, "Fn::Split")?;
    expect_arity(items, "Fn::Split", 2, "2")?;
    let sep = expect_str(&items[0], "Fn::Split")?;
    let s = expect_str(&items[1], "Fn::Split")?;
    Ok(Value::List(s.split(sep).map(Value::string).collect()))
}

/// `{Fn::Base64: s}` — base-64 of the UTF-8 bytes of `s`.
pub fn base64(args: &Value, _env: &Environment) -> ResolveResult<Value> {
    let s = expect_str(args, "Fn::Base64")?;
    Ok(Value::Str(STANDARD.encode(s.as_bytes())))
}

/// `{Fn::Sub: template}` or `{Fn::Sub: [template, locals]}`.
///
/// `locals` has already been resolved by the walker before this handler
/// runs (`Fn::Sub` is eager), so a nested `{Ref: ...}` inside `locals`
/// arrives here as a plain value (`spec.md` §4.2's point (a)).
pub fn sub(args: &Value, env: &Environment) -> ResolveResult<Value> {
    let (template, locals) = match args {
        Value::Str(s) => (s.as_str(), None),
        Value::List(items) => {
            expect_arity(items, "Fn::Sub", 2, "2")?;
            let template = expect_str(&items[0], "Fn::Sub")?;
            let locals = expect_map(&items[1], "Fn::Sub")?;
            (template, Some(locals))
        }
        other => {
            return Err(ResolveError::type_mismatch(
                "Fn::Sub",
                "String or [String, Map]",
                other.type_name(),
            ))
        }
    };
    substitute(template, locals, env)
}

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]*)\}").unwrap());

fn substitute(
    template: &str,
    locals: Option<&HashMap<String, Value>>,
    env: &Environment,
) -> ResolveResult<Value> {
    let mut result = String::with_capacity(template.len());
    let mut cursor = 0;

    for m in PLACEHOLDER.captures_iter(template) {
        let whole = m.get(0).expect("group 0 always matches");
        let name = m.get(1).expect("capture group 1 is mandatory").as_str();

        result.push_str(&template[cursor..whole.start()]);

        // Dotted attribute references (`${Resource.Attr}`) are not yet
        // implemented; see the open question in `spec.md` §9.
        if name.contains('.') {
            return Err(ResolveError::UnsupportedPlaceholder {
                placeholder: name.to_string(),
            });
        }

        let resolved = locals
            .and_then(|l| l.get(name))
            .cloned()
            .or_else(|| env.parameters.get(name).cloned())
            .unwrap_or_else(|| Value::string(format!("UNDEFINED_PARAM_{name}")));
        result.push_str(&resolved.stringify());

        cursor = whole.end();
    }
    result.push_str(&template[cursor..]);

    Ok(Value::Str(result))
}
