//! Rejections produced by the solver.
//!
//! A [`ShapeError`] means an operand does not have the structural shape an
//! operator requires. It is the engine's equivalent of the type checker
//! rejecting an `@ts-expect-error` fixture, so it is always propagated to
//! the caller and recorded by the verifier rather than absorbed.
//!
//! Errors carry `TypeId`s and `Atom`s rather than rendered strings;
//! rendering happens lazily through [`ShapeError::render`] when a report is
//! displayed.

use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::TypeId;
use std::fmt;
use tyx_common::interner::Atom;

/// The structural requirement an operand failed to meet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Expected a tuple (or array where arrays are accepted).
    NotATuple { found: TypeId },
    NotAFunction { found: TypeId },
    NotARecord { found: TypeId },
    NotAPromise { found: TypeId },
    /// Conditional selector is not assignable to `boolean`.
    NotABoolean { found: TypeId },
    /// A key argument is not a key of the record.
    UnknownKey { key: TypeId, object: TypeId },
    /// A value cannot be used as a property key.
    InvalidPropertyKey { found: TypeId },
    IndexOutOfRange { index: usize, length: usize },
    /// A builder redefined a key with a value of the same type.
    DuplicateKey { key: Atom },
    /// A variadic element would not be in tail position.
    VariadicPosition { found: TypeId },
    /// A recursive walk went deeper than the configured limit.
    DepthExceeded { limit: u32 },
}

impl ShapeError {
    /// Short machine-friendly name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeError::NotATuple { .. } => "not-a-tuple",
            ShapeError::NotAFunction { .. } => "not-a-function",
            ShapeError::NotARecord { .. } => "not-a-record",
            ShapeError::NotAPromise { .. } => "not-a-promise",
            ShapeError::NotABoolean { .. } => "not-a-boolean",
            ShapeError::UnknownKey { .. } => "unknown-key",
            ShapeError::InvalidPropertyKey { .. } => "invalid-property-key",
            ShapeError::IndexOutOfRange { .. } => "index-out-of-range",
            ShapeError::DuplicateKey { .. } => "duplicate-key",
            ShapeError::VariadicPosition { .. } => "variadic-position",
            ShapeError::DepthExceeded { .. } => "depth-exceeded",
        }
    }

    /// Render with descriptor and key names resolved.
    pub fn render(&self, interner: &TypeInterner) -> String {
        let fmt = TypeFormatter::new(interner);
        match self {
            ShapeError::NotATuple { found } => {
                format!("expected a tuple, found `{}`", fmt.format(*found))
            }
            ShapeError::NotAFunction { found } => {
                format!("expected a function, found `{}`", fmt.format(*found))
            }
            ShapeError::NotARecord { found } => {
                format!("expected a record, found `{}`", fmt.format(*found))
            }
            ShapeError::NotAPromise { found } => {
                format!("expected a Promise, found `{}`", fmt.format(*found))
            }
            ShapeError::NotABoolean { found } => {
                format!("`{}` does not satisfy `boolean`", fmt.format(*found))
            }
            ShapeError::UnknownKey { key, object } => format!(
                "`{}` does not satisfy `keyof {}`",
                fmt.format(*key),
                fmt.format(*object)
            ),
            ShapeError::InvalidPropertyKey { found } => {
                format!("`{}` cannot be used as a property key", fmt.format(*found))
            }
            ShapeError::IndexOutOfRange { index, length } => {
                format!("index {index} is out of range for a tuple of length {length}")
            }
            ShapeError::DuplicateKey { key } => {
                format!("key `{}` is already defined", interner.resolve_atom(*key))
            }
            ShapeError::VariadicPosition { found } => format!(
                "variadic element `{}` must be the last element",
                fmt.format(*found)
            ),
            ShapeError::DepthExceeded { limit } => {
                format!("type instantiation exceeded depth {limit}")
            }
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotATuple { found }
            | ShapeError::NotAFunction { found }
            | ShapeError::NotARecord { found }
            | ShapeError::NotAPromise { found }
            | ShapeError::NotABoolean { found }
            | ShapeError::InvalidPropertyKey { found }
            | ShapeError::VariadicPosition { found } => {
                write!(f, "{} (type #{})", self.kind(), found.0)
            }
            ShapeError::UnknownKey { key, object } => {
                write!(f, "unknown-key (key #{} of #{})", key.0, object.0)
            }
            ShapeError::IndexOutOfRange { index, length } => {
                write!(f, "index-out-of-range ({index} >= {length})")
            }
            ShapeError::DuplicateKey { key } => write!(f, "duplicate-key (atom #{})", key.0),
            ShapeError::DepthExceeded { limit } => write!(f, "depth-exceeded (limit {limit})"),
        }
    }
}

impl std::error::Error for ShapeError {}
