//! The resolver's single error surface (`spec.md` §7).
//!
//! Undefined references are never errors — they fold into sentinel strings
//! in `crate::intrinsics`. Only malformed intrinsic *shapes* reach here, and
//! they are always fatal: no partial tree is returned to the caller of
//! [`crate::resolver::resolve`].

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum ResolveError {
    #[error("{intrinsic}: expected {expected} argument(s), found {found}")]
    #[diagnostic(code(cfn_resolve::wrong_arity))]
    WrongArity {
        intrinsic: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("{intrinsic}: expected {expected}, found {found}")]
    #[diagnostic(code(cfn_resolve::type_mismatch))]
    TypeMismatch {
        intrinsic: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{intrinsic}: index {index} out of range for list of length {len}")]
    #[diagnostic(code(cfn_resolve::index_out_of_range))]
    IndexOutOfRange {
        intrinsic: &'static str,
        index: i64,
        len: usize,
    },

    #[error("Fn::Sub: unsupported placeholder `${{{placeholder}}}`")]
    #[diagnostic(
        code(cfn_resolve::unsupported_placeholder),
        help("only bare `${NAME}` placeholders are currently supported")
    )]
    UnsupportedPlaceholder { placeholder: String },

    #[error("unrecognised intrinsic key `{key}`")]
    #[diagnostic(code(cfn_resolve::unknown_intrinsic))]
    UnknownIntrinsic { key: String },
}

impl ResolveError {
    pub fn wrong_arity(intrinsic: &'static str, expected: &'static str, found: usize) -> Self {
        ResolveError::WrongArity {
            intrinsic,
            expected,
            found,
        }
    }

    pub fn type_mismatch(
        intrinsic: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ResolveError::TypeMismatch {
            intrinsic,
            expected,
            found,
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
