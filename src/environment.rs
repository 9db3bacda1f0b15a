//! The resolver's read-only input (`spec.md` §3, "Environment").
//!
//! All three mappings are immutable for the lifetime of a `resolve` call;
//! `im::HashMap` makes `Environment::clone()` (needed whenever a driver
//! layers `extra_params` over template defaults) a cheap structural share
//! rather than a deep copy, the same trade-off `cpond8-sutra`'s `World`
//! makes for its own state tree.

use im::HashMap;

use crate::value::Value;

/// A three-level lookup table: map name → top-level key → second-level key.
pub type Mappings = HashMap<String, HashMap<String, HashMap<String, Value>>>;

#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub parameters: HashMap<String, Value>,
    pub mappings: Mappings,
    pub conditions: HashMap<String, bool>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: HashMap<String, Value>) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Returns a copy of this environment with `conditions` replaced.
    /// Used by the template driver once it finishes pre-evaluating the
    /// `Conditions` section (`spec.md` §4.3 step 2).
    pub fn with_conditions(&self, conditions: HashMap<String, bool>) -> Self {
        Self {
            parameters: self.parameters.clone(),
            mappings: self.mappings.clone(),
            conditions,
        }
    }

    pub fn find_in_map(&self, map_name: &str, key1: &str, key2: &str) -> Option<&Value> {
        self.mappings.get(map_name)?.get(key1)?.get(key2)
    }
}
