//! The template driver (`spec.md` §4.3).
//!
//! Turns a whole CloudFormation-shaped document into a resolved one:
//! merge caller-supplied parameter overrides over declared defaults,
//! pre-evaluate `Conditions` in source order (a later condition may
//! reference an earlier one, never the reverse), then resolve
//! `Resources` against the finished environment.

use im::HashMap;

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::resolver::resolve;
use crate::value::Value;

/// A parsed-but-unresolved template, still holding its `Conditions` in
/// source declaration order.
#[derive(Debug, Clone)]
pub struct Template {
    parameters: HashMap<String, Value>,
    mappings: crate::environment::Mappings,
    conditions: Vec<(String, Value)>,
    resources: Value,
}

/// The result of resolving a [`Template`]: the finished environment (so
/// a caller can inspect which conditions landed where a resource
/// references them) and the resolved `Resources` tree.
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub environment: Environment,
    pub resources: Value,
}

impl Template {
    /// Parses a raw JSON document into a [`Template`].
    ///
    /// `Parameters` entries use their `Default` key (when present) to
    /// seed the parameter table; a parameter with neither a caller
    /// override nor a `Default` is simply absent, and any `Ref` against
    /// it later falls back to the usual `UNDEFINED_PARAM_` sentinel.
    pub fn parse(doc: serde_json::Value) -> Template {
        let root = doc.as_object();

        let parameters = root
            .and_then(|r| r.get("Parameters"))
            .and_then(|v| v.as_object())
            .map(parameter_defaults)
            .unwrap_or_default();

        let mappings = root
            .and_then(|r| r.get("Mappings"))
            .cloned()
            .map(Value::from_json)
            .and_then(|v| match v {
                Value::Map(m) => Some(parse_mappings(&m)),
                _ => None,
            })
            .unwrap_or_default();

        let conditions = root
            .and_then(|r| r.get("Conditions"))
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v.clone())))
                    .collect()
            })
            .unwrap_or_default();

        let resources = root
            .and_then(|r| r.get("Resources"))
            .cloned()
            .map(Value::from_json)
            .unwrap_or_else(|| Value::Map(HashMap::new()));

        Template {
            parameters,
            mappings,
            conditions,
            resources,
        }
    }

    /// Resolves this template, layering `extra_params` over the
    /// declared `Parameters` defaults before anything else runs
    /// (`spec.md` §4.3 step 1).
    pub fn resolve(&self, extra_params: &HashMap<String, Value>) -> ResolveResult<ResolvedTemplate> {
        let mut parameters = self.parameters.clone();
        for (k, v) in extra_params.iter() {
            parameters.insert(k.clone(), v.clone());
        }

        let env = Environment {
            parameters,
            mappings: self.mappings.clone(),
            conditions: HashMap::new(),
        };

        let env = resolve_conditions(&self.conditions, env)?;
        let resources = resolve(&self.resources, &env)?;

        Ok(ResolvedTemplate {
            environment: env,
            resources,
        })
    }
}

/// Evaluates `Conditions` one at a time, in the order they appeared in
/// the source document, feeding each result back into the environment
/// before the next one runs. This is what lets a condition reference an
/// earlier sibling condition: only prior entries are ever visible.
fn resolve_conditions(
    conditions: &[(String, Value)],
    mut env: Environment,
) -> ResolveResult<Environment> {
    for (name, expr) in conditions {
        let resolved = resolve(expr, &env)?;
        let value = normalize_condition_bool(&resolved);
        let mut next_conditions = env.conditions.clone();
        next_conditions.insert(name.clone(), value);
        env = env.with_conditions(next_conditions);
    }
    Ok(env)
}

/// A declared condition's body is usually a boolean-producing intrinsic,
/// but it may also be a bare literal (`true`, `"True"`) taken straight
/// from the source JSON. Anything that isn't recognizably truthy
/// collapses to `false`, keeping every entry in a resolved template's
/// `Conditions` a plain bool.
fn normalize_condition_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Str(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn parameter_defaults(params: &serde_json::Map<String, serde_json::Value>) -> HashMap<String, Value> {
    let mut out = HashMap::new();
    for (name, spec) in params {
        if let Some(default) = spec.get("Default") {
            out.insert(name.clone(), Value::from_json(default.clone()));
        }
    }
    out
}

fn parse_mappings(map: &HashMap<String, Value>) -> crate::environment::Mappings {
    let mut mappings = HashMap::new();
    for (map_name, top) in map.iter() {
        if let Value::Map(top) = top {
            let mut inner = HashMap::new();
            for (key1, leaf) in top.iter() {
                if let Value::Map(leaf) = leaf {
                    inner.insert(key1.clone(), leaf.clone());
                }
            }
            mappings.insert(map_name.clone(), inner);
        }
    }
    mappings
}

/// Builds an `extra_params` map from `KEY=VALUE` CLI pairs, used by
/// [`crate::cli`]. Every value is treated as a plain string; templates
/// that expect a number or bool for a parameter coerce it themselves
/// via `Fn::Equals`'s numeric/bool rules.
pub fn params_from_pairs<'a, I: IntoIterator<Item = &'a str>>(pairs: I) -> HashMap<String, Value> {
    let mut out = HashMap::new();
    for pair in pairs {
        if let Some((k, v)) = pair.split_once('=') {
            out.insert(k.to_string(), Value::string(v));
        }
    }
    out
}
