//! Built-in exercise suites.
//!
//! Each suite is one exercise: a batch of assertions over a single
//! [`TypeOperator`](tyx_solver::TypeOperator), including the cases that must
//! be rejected. Fixtures are interned into the caller's [`TypeInterner`] so
//! the resulting [`Suite`]s can be handed straight to a
//! [`Verifier`](tyx_solver::Verifier) on the same interner.

mod builder;
pub mod easy;
pub mod medium;

pub use builder::{Field, Fixtures};

use tyx_solver::{Suite, TypeInterner};

/// Every built-in suite, easy ones first.
pub fn all_suites(interner: &TypeInterner) -> Vec<Suite> {
    let fx = Fixtures::new(interner);
    let mut suites = easy::suites(&fx);
    suites.extend(medium::suites(&fx));
    suites
}

pub fn suite_names(interner: &TypeInterner) -> Vec<String> {
    all_suites(interner)
        .into_iter()
        .map(|suite| suite.name)
        .collect()
}

pub fn find_suite(interner: &TypeInterner, name: &str) -> Option<Suite> {
    all_suites(interner)
        .into_iter()
        .find(|suite| suite.name == name)
}

#[cfg(test)]
#[path = "../tests/suites_tests.rs"]
mod tests;
