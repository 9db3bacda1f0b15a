//! `Fn::GetAtt` and `Fn::GetAZs` (`spec.md` §4.2).
//!
//! Neither intrinsic has a meaningful value outside a real deployment —
//! there is no resource graph or region to consult here. Both collapse to
//! a fixed sentinel, shaped like every other unresolvable reference in this
//! language rather than treated as an error.

use crate::environment::Environment;
use crate::error::ResolveResult;
use crate::value::Value;

pub fn get_att(_args: &Value, _env: &Environment) -> ResolveResult<Value> {
    Ok(Value::string("GETATT"))
}

pub fn get_azs(_args: &Value, _env: &Environment) -> ResolveResult<Value> {
    Ok(Value::string("GETAZS"))
}
