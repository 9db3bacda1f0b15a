//! The recursive value model (`spec.md` §3).
//!
//! A template node is either plain data or an intrinsic-function call; either
//! way it is represented by [`Value`] once parsed out of JSON. The resolver
//! never mutates a `Value` in place — every handler in `crate::intrinsics`
//! builds a new one — so `Map` is backed by `im::HashMap`, which gives each
//! rebuild structural sharing instead of a deep clone.

use chrono::NaiveDate;
use im::HashMap;
use std::fmt;

/// A number as it appeared in the source template.
///
/// CloudFormation templates are JSON, and JSON numbers don't distinguish
/// `123` from `123.0` the way this crate's `Fn::Equals` and `Fn::Join`
/// stringification need to: `{"Fn::Equals": ["1123456789", 1123456789]}`
/// must compare as integers, and re-stringifying an integer must not grow a
/// trailing `.0`. Keeping the two cases distinct from parse time on avoids
/// reconstructing that distinction later from a single `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// The value tree the resolver reads and produces.
///
/// `Map` entries whose sole key names an intrinsic (`Ref`, `Fn::Join`, ...)
/// are function calls, not data; see [`crate::resolver::is_intrinsic_key`].
/// Everything else is inert.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Num(Number),
    Bool(bool),
    Date(NaiveDate),
    Null,
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "String",
            Value::Num(_) => "Number",
            Value::Bool(_) => "Bool",
            Value::Date(_) => "Date",
            Value::Null => "Null",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    pub fn string<S: Into<String>>(s: S) -> Value {
        Value::Str(s.into())
    }

    pub fn int(n: i64) -> Value {
        Value::Num(Number::Int(n))
    }

    pub fn float(n: f64) -> Value {
        Value::Num(Number::Float(n))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Stringifies a value for use inside `Fn::Join`/`Fn::Sub` interpolation.
    /// Only scalars make sense to interpolate; the caller is responsible for
    /// rejecting `List`/`Map` where the intrinsic's contract forbids them.
    pub fn stringify(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Null => String::new(),
            Value::List(_) | Value::Map(_) => String::new(),
        }
    }

    /// Parses a string as an ISO `YYYY-MM-DD` date, used by `Fn::Equals`'s
    /// date-coercion rule (`spec.md` §4.2).
    pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    /// Parses a string as an integer or float, used by `Fn::Equals`'s
    /// numeric-coercion rule.
    pub fn parse_number(s: &str) -> Option<Number> {
        if let Ok(i) = s.parse::<i64>() {
            return Some(Number::Int(i));
        }
        s.parse::<f64>().ok().map(Number::Float)
    }

    /// Converts a parsed JSON document into the crate's value model.
    ///
    /// Mirrors `canmi21-serde_resolve`'s `json.rs` bridge: a recursive,
    /// structural conversion with no validation beyond what `serde_json`
    /// already performed during deserialization.
    pub fn from_json(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Num(Number::Int(i))
                } else {
                    Value::Num(Number::Float(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut map = HashMap::new();
                for (k, v) in obj {
                    map.insert(k, Value::from_json(v));
                }
                Value::Map(map)
            }
        }
    }

    /// The inverse of [`Value::from_json`], used for CLI output and tests.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Num(Number::Int(i)) => serde_json::Value::Number((*i).into()),
            Value::Num(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            Value::Null => serde_json::Value::Null,
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => {
                let mut obj = serde_json::Map::new();
                for (k, v) in map.iter() {
                    obj.insert(k.clone(), v.to_json());
                }
                serde_json::Value::Object(obj)
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
