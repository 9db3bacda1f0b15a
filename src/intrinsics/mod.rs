//! The intrinsic-function registry.
//!
//! Every intrinsic key the resolver recognises (`spec.md` §4.1's closed
//! set of 16) is registered here as either eager or lazy, following
//! `cpond8-sutra`'s `atoms/mod.rs` split between `Atom::Pure` and
//! `Atom::SpecialForm`: an eager entry receives its arguments already
//! resolved, a lazy entry receives the raw, unresolved argument node and
//! decides for itself what to walk.

mod collections;
mod helpers;
mod logic;
mod opaque;
mod reference;
mod special_forms;
mod string;

use once_cell::sync::Lazy;
use std::collections::HashMap as StdHashMap;

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::value::Value;

pub type EagerFn = fn(&Value, &Environment) -> ResolveResult<Value>;
pub type LazyFn = fn(&Value, &Environment) -> ResolveResult<Value>;

#[derive(Clone, Copy)]
pub enum Intrinsic {
    Eager(EagerFn),
    Lazy(LazyFn),
}

pub struct Registry {
    entries: StdHashMap<&'static str, Intrinsic>,
}

impl Registry {
    fn new() -> Self {
        Self {
            entries: StdHashMap::new(),
        }
    }

    fn register_eager(&mut self, key: &'static str, f: EagerFn) {
        self.entries.insert(key, Intrinsic::Eager(f));
    }

    fn register_lazy(&mut self, key: &'static str, f: LazyFn) {
        self.entries.insert(key, Intrinsic::Lazy(f));
    }

    pub fn get(&self, key: &str) -> Option<Intrinsic> {
        self.entries.get(key).copied()
    }
}

pub static REGISTRY: Lazy<Registry> = Lazy::new(build_registry);

fn build_registry() -> Registry {
    let mut r = Registry::new();

    r.register_eager("Ref", reference::ref_);
    r.register_eager("Condition", reference::condition);
    r.register_eager("Fn::ImportValue", reference::import_value);

    r.register_eager("Fn::Join", string::join);
    r.register_eager("Fn::Split", string::split);
    r.register_eager("Fn::Sub", string::sub);
    r.register_eager("Fn::Base64", string::base64);

    r.register_eager("Fn::FindInMap", collections::find_in_map);
    r.register_eager("Fn::Select", collections::select);

    r.register_eager("Fn::And", logic::and);
    r.register_eager("Fn::Or", logic::or);
    r.register_eager("Fn::Not", logic::not);
    r.register_eager("Fn::Equals", logic::equals);

    r.register_eager("Fn::GetAtt", opaque::get_att);
    r.register_eager("Fn::GetAZs", opaque::get_azs);

    r.register_lazy("Fn::If", special_forms::if_);

    r
}
