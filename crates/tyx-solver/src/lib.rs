//! Structural Type-Computation Engine
//!
//! Evaluates type-level functions (conditional, mapped and recursive types,
//! variadic tuples, literal inference) over interned type descriptors.
//!
//! Components, bottom-up:
//!
//! - **Matcher** (`subtype`): structural identity and assignability
//! - **Decomposer** (`decompose`): head/rest splits, parameter lists, `T[number]`, `keyof T`
//! - **Transformer** (`transform`): mapped-type field rules, tuple rules, conditional types
//! - **Inferencer** (`infer`): `infer X` pattern matching, substitution, `Awaited`
//! - **Operators** (`operators`): the exercise operators built from the above
//! - **Verifier** (`verify`): batch evaluation of assertions into a `Report`
//!
//! Key properties:
//! - O(1) structural equality via interning (`TypeId` comparison)
//! - Rejections are values (`ShapeError`), never panics
//! - Every recursive walk is depth-bounded through `recursion`
pub mod decompose;
pub mod diagnostics;
pub mod format;
pub mod infer;
mod intern;
pub mod operators;
pub mod recursion;
pub mod subtype;
pub mod transform;
pub mod types;
pub mod verify;

pub use diagnostics::ShapeError;
pub use format::TypeFormatter;
pub use infer::{Binding, awaited, infer, substitute};
pub use intern::TypeInterner;
pub use operators::{ChainOption, TypeOperator, evaluate_operator};
pub use subtype::{SubtypeChecker, are_types_structurally_identical, is_subtype_of};
pub use transform::{ConditionalType, FieldRule, Transformer, TupleRule};
pub use types::*;
pub use verify::{
    Assertion, Expectation, Mismatch, Report, Suite, SuiteReport, SuiteSummary, Verifier, verify,
};
