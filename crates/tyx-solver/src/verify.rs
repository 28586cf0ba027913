//! Batch verification of operator assertions.
//!
//! An [`Assertion`] pairs an operator expression with what it must produce:
//! an exact descriptor, anything but a descriptor, or a rejection (the
//! `@ts-expect-error` cases). The [`Verifier`] evaluates every assertion,
//! never stopping at the first failure, and collects mismatches into a
//! [`Report`].

use crate::diagnostics::ShapeError;
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::operators::{TypeOperator, evaluate_operator};
use crate::types::TypeId;
use serde::Serialize;
use tracing::{debug, warn};

/// What an assertion requires of its expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Evaluates to exactly this descriptor.
    Equal(TypeId),
    /// Evaluates to some descriptor other than this one.
    NotEqual(TypeId),
    /// Is rejected with a [`ShapeError`].
    Rejected,
}

impl Expectation {
    pub fn is_met_by(&self, actual: &Result<TypeId, ShapeError>) -> bool {
        match (self, actual) {
            (Expectation::Equal(expected), Ok(actual)) => expected == actual,
            (Expectation::NotEqual(expected), Ok(actual)) => expected != actual,
            (Expectation::Rejected, Err(_)) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    pub expr: TypeOperator,
    pub expectation: Expectation,
}

impl Assertion {
    pub fn equal(expr: TypeOperator, expected: TypeId) -> Self {
        Assertion {
            expr,
            expectation: Expectation::Equal(expected),
        }
    }

    pub fn not_equal(expr: TypeOperator, unexpected: TypeId) -> Self {
        Assertion {
            expr,
            expectation: Expectation::NotEqual(unexpected),
        }
    }

    pub fn rejected(expr: TypeOperator) -> Self {
        Assertion {
            expr,
            expectation: Expectation::Rejected,
        }
    }
}

/// A failed assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Position of the assertion in its batch.
    pub index: usize,
    pub operator: &'static str,
    pub expected: Expectation,
    pub actual: Result<TypeId, ShapeError>,
}

impl Mismatch {
    /// `expected` / `actual` as display strings.
    pub fn describe(&self, interner: &TypeInterner) -> (String, String) {
        let fmt = TypeFormatter::new(interner);
        let expected = match self.expected {
            Expectation::Equal(type_id) => fmt.format(type_id),
            Expectation::NotEqual(type_id) => format!("not {}", fmt.format(type_id)),
            Expectation::Rejected => "a rejection".to_string(),
        };
        let actual = match &self.actual {
            Ok(type_id) => fmt.format(*type_id),
            Err(err) => format!("rejected: {}", err.render(interner)),
        };
        (expected, actual)
    }

    /// One-line diff: `#2 Pick: expected { .. }, got { .. }`.
    pub fn render(&self, interner: &TypeInterner) -> String {
        let (expected, actual) = self.describe(interner);
        format!(
            "#{} {}: expected {}, got {}",
            self.index, self.operator, expected, actual
        )
    }
}

/// Outcome of a batch of assertions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: Vec<Mismatch>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed.len()
    }
}

/// A named group of assertions (one exercise set).
#[derive(Clone, Debug)]
pub struct Suite {
    pub name: String,
    pub assertions: Vec<Assertion>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Suite {
            name: name.into(),
            assertions: Vec::new(),
        }
    }

    pub fn push(&mut self, assertion: Assertion) -> &mut Self {
        self.assertions.push(assertion);
        self
    }

    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub report: Report,
}

/// Serializable, fully rendered form of a [`SuiteReport`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteSummary {
    pub suite: String,
    pub passed: usize,
    pub total: usize,
    pub failed: Vec<MismatchSummary>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchSummary {
    pub index: usize,
    pub operator: &'static str,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
}

impl SuiteReport {
    pub fn summarize(&self, interner: &TypeInterner) -> SuiteSummary {
        let failed = self
            .report
            .failed
            .iter()
            .map(|mismatch| {
                let (expected, actual) = mismatch.describe(interner);
                MismatchSummary {
                    index: mismatch.index,
                    operator: mismatch.operator,
                    expected,
                    actual,
                    error_kind: mismatch.actual.as_ref().err().map(ShapeError::kind),
                }
            })
            .collect();
        SuiteSummary {
            suite: self.name.clone(),
            passed: self.report.passed,
            total: self.report.total(),
            failed,
        }
    }
}

/// Evaluates assertions against one interner.
pub struct Verifier<'a> {
    interner: &'a TypeInterner,
}

impl<'a> Verifier<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Verifier { interner }
    }

    /// Evaluate every assertion; failures never stop the batch.
    pub fn run(&self, assertions: &[Assertion]) -> Report {
        let mut report = Report::default();
        for (index, assertion) in assertions.iter().enumerate() {
            let actual = evaluate_operator(self.interner, &assertion.expr);
            if assertion.expectation.is_met_by(&actual) {
                report.passed += 1;
                continue;
            }
            let mismatch = Mismatch {
                index,
                operator: assertion.expr.name(),
                expected: assertion.expectation,
                actual,
            };
            warn!(
                index,
                operator = mismatch.operator,
                "{}",
                mismatch.render(self.interner)
            );
            report.failed.push(mismatch);
        }
        debug!(
            passed = report.passed,
            failed = report.failed.len(),
            "verification finished"
        );
        report
    }

    pub fn run_suite(&self, suite: &Suite) -> SuiteReport {
        let _span = tracing::debug_span!("suite", name = %suite.name).entered();
        SuiteReport {
            name: suite.name.clone(),
            report: self.run(&suite.assertions),
        }
    }
}

/// Evaluate `assertions` and report which ones failed.
pub fn verify(interner: &TypeInterner, assertions: &[Assertion]) -> Report {
    Verifier::new(interner).run(assertions)
}

#[cfg(test)]
#[path = "../tests/verify_tests.rs"]
mod tests;
