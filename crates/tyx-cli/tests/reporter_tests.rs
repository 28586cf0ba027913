use crate::reporter::Reporter;
use tyx_solver::{Assertion, Suite, SuiteReport, TypeId, TypeInterner, TypeOperator, Verifier};

fn length_reports(interner: &TypeInterner) -> Vec<SuiteReport> {
    let pair = interner.tuple(vec![TypeId::STRING, TypeId::NUMBER]);

    let mut passing = Suite::new("length");
    passing.push(Assertion::equal(
        TypeOperator::Length(pair),
        interner.literal_number(2.0),
    ));

    let mut failing = Suite::new("first");
    failing
        .push(Assertion::equal(TypeOperator::First(pair), TypeId::STRING))
        .push(Assertion::equal(TypeOperator::First(pair), TypeId::NUMBER))
        .push(Assertion::rejected(TypeOperator::First(pair)));

    let verifier = Verifier::new(interner);
    vec![verifier.run_suite(&passing), verifier.run_suite(&failing)]
}

#[test]
fn test_render_text_without_color() {
    let interner = TypeInterner::new();
    let reports = length_reports(&interner);
    let text = Reporter::new(&interner, false).render_text(&reports);
    assert_eq!(
        text,
        "PASS length (1/1)\n\
         FAIL first (1/3)\n\
         \x20 #1 First: expected number, got string\n\
         \x20 #2 First: expected a rejection, got string\n\
         suites: 1 passed, 1 failed; assertions: 2/4 passed\n"
    );
}

#[test]
fn test_render_json_summary() {
    let interner = TypeInterner::new();
    let reports = length_reports(&interner);
    let json = Reporter::new(&interner, false).render_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["passed"], 2);
    assert_eq!(value["total"], 4);
    assert_eq!(value["suites"][0]["suite"], "length");
    assert_eq!(value["suites"][0]["failed"].as_array().unwrap().len(), 0);

    let failed = &value["suites"][1]["failed"];
    assert_eq!(failed[0]["index"], 1);
    assert_eq!(failed[0]["operator"], "First");
    assert_eq!(failed[0]["expected"], "number");
    assert_eq!(failed[0]["actual"], "string");
    assert!(failed[0].get("errorKind").is_none());
}

#[test]
fn test_json_carries_error_kind_for_rejections() {
    let interner = TypeInterner::new();
    let mut suite = Suite::new("length");
    suite.push(Assertion::equal(
        TypeOperator::Length(TypeId::STRING),
        TypeId::NUMBER,
    ));
    let reports = vec![Verifier::new(&interner).run_suite(&suite)];
    let json = Reporter::new(&interner, false).render_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["suites"][0]["failed"][0]["errorKind"], "not-a-tuple");
}
