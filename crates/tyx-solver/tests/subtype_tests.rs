use super::*;

#[test]
fn test_identity_is_strict() {
    let interner = TypeInterner::new();
    let a = interner.intern_string("a");
    let lit = interner.literal_string("A");
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);

    assert!(!are_types_structurally_identical(TypeId::BOOLEAN_FALSE, TypeId::BOOLEAN));
    assert!(!are_types_structurally_identical(TypeId::NULL, TypeId::UNDEFINED));
    assert!(!are_types_structurally_identical(one, interner.union2(one, two)));
    assert!(!are_types_structurally_identical(
        interner.object(vec![PropertyInfo::new(a, lit)]),
        interner.object(vec![PropertyInfo::readonly(a, lit)]),
    ));
    assert!(!are_types_structurally_identical(
        interner.object(vec![]),
        interner.object(vec![PropertyInfo::new(a, lit)]),
    ));
    assert!(are_types_structurally_identical(
        interner.union2(one, two),
        interner.union2(two, one),
    ));
}

#[test]
fn test_literal_widening_and_top_bottom() {
    let interner = TypeInterner::new();
    let hello = interner.literal_string("hello");
    assert!(is_subtype_of(&interner, hello, TypeId::STRING));
    assert!(!is_subtype_of(&interner, TypeId::STRING, hello));
    assert!(!is_subtype_of(&interner, hello, TypeId::NUMBER));
    assert!(is_subtype_of(&interner, TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN));
    assert!(is_subtype_of(&interner, TypeId::NEVER, hello));
    assert!(is_subtype_of(&interner, hello, TypeId::UNKNOWN));
    assert!(is_subtype_of(&interner, TypeId::ANY, hello));
    assert!(is_subtype_of(&interner, hello, TypeId::ANY));
    assert!(is_subtype_of(&interner, TypeId::UNDEFINED, TypeId::VOID));
    assert!(!is_subtype_of(&interner, TypeId::NULL, TypeId::UNDEFINED));
}

#[test]
fn test_union_source_and_target() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");
    let c = interner.literal_string("c");
    let ab = interner.union2(a, b);
    let abc = interner.union(vec![a, b, c]);

    assert!(is_subtype_of(&interner, ab, abc));
    assert!(!is_subtype_of(&interner, abc, ab));
    assert!(is_subtype_of(&interner, a, ab));
    assert!(is_subtype_of(&interner, ab, TypeId::STRING));
    assert!(is_subtype_of(&interner, TypeId::BOOLEAN, TypeId::BOOLEAN));
    assert!(!is_subtype_of(&interner, TypeId::BOOLEAN, TypeId::BOOLEAN_TRUE));
}

#[test]
fn test_record_width_and_optional_fields() {
    let interner = TypeInterner::new();
    let title = interner.intern_string("title");
    let done = interner.intern_string("done");

    let wide = interner.object(vec![
        PropertyInfo::new(title, TypeId::STRING),
        PropertyInfo::new(done, TypeId::BOOLEAN),
    ]);
    let narrow = interner.object(vec![PropertyInfo::new(title, TypeId::STRING)]);
    let optional_title = interner.object(vec![PropertyInfo::opt(title, TypeId::STRING)]);
    let readonly_title = interner.object(vec![PropertyInfo::readonly(title, TypeId::STRING)]);

    assert!(is_subtype_of(&interner, wide, narrow));
    assert!(!is_subtype_of(&interner, narrow, wide));
    assert!(is_subtype_of(&interner, narrow, optional_title));
    assert!(!is_subtype_of(&interner, optional_title, narrow));
    assert!(is_subtype_of(&interner, readonly_title, narrow));
    assert!(is_subtype_of(&interner, wide, TypeId::OBJECT));
    assert!(is_subtype_of(&interner, TypeId::STRING, interner.object(vec![])));
    assert!(!is_subtype_of(&interner, TypeId::NULL, interner.object(vec![])));
}

#[test]
fn test_tuples_and_arrays() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let any_array = interner.array(TypeId::ANY);
    let num_array = interner.array(TypeId::NUMBER);

    let pair = interner.tuple(vec![one, two]);
    assert!(is_subtype_of(&interner, pair, num_array));
    assert!(is_subtype_of(&interner, pair, any_array));
    assert!(is_subtype_of(&interner, interner.tuple(vec![]), any_array));
    assert!(!is_subtype_of(&interner, interner.tuple(vec![TypeId::STRING]), num_array));
    assert!(!is_subtype_of(&interner, pair, interner.tuple(vec![one])));
    assert!(is_subtype_of(&interner, pair, interner.tuple(vec![TypeId::NUMBER, TypeId::NUMBER])));

    let head_then_rest = interner.tuple_with_rest(vec![TypeId::NUMBER], num_array);
    assert!(is_subtype_of(&interner, pair, head_then_rest));
    assert!(!is_subtype_of(&interner, interner.tuple(vec![]), head_then_rest));
    assert!(is_subtype_of(&interner, num_array, interner.tuple_with_rest(vec![], num_array)));
    assert!(!is_subtype_of(&interner, num_array, pair));
}

#[test]
fn test_functions() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let unary = interner.function(vec![ParamInfo::required(TypeId::NUMBER)], one);
    let nullary = interner.function(vec![], one);
    let returns_number = interner.function(vec![ParamInfo::required(TypeId::NUMBER)], TypeId::NUMBER);
    let any_args = interner.function(vec![ParamInfo::rest(interner.array(TypeId::ANY))], TypeId::ANY);
    let void_fn = interner.function(vec![], TypeId::VOID);

    assert!(is_subtype_of(&interner, unary, TypeId::FUNCTION));
    assert!(is_subtype_of(&interner, nullary, unary));
    assert!(!is_subtype_of(&interner, unary, nullary));
    assert!(is_subtype_of(&interner, unary, returns_number));
    assert!(!is_subtype_of(&interner, returns_number, unary));
    assert!(is_subtype_of(&interner, unary, any_args));
    assert!(is_subtype_of(&interner, nullary, void_fn));
    assert!(!is_subtype_of(&interner, TypeId::FUNCTION, unary));
    assert!(!is_subtype_of(&interner, TypeId::STRING, TypeId::FUNCTION));
}

#[test]
fn test_promise_applications() {
    let interner = TypeInterner::new();
    let hello = interner.literal_string("hello");
    assert!(is_subtype_of(&interner, interner.promise(hello), interner.promise(TypeId::STRING)));
    assert!(!is_subtype_of(&interner, interner.promise(TypeId::STRING), interner.promise(hello)));
    assert!(!is_subtype_of(&interner, interner.promise(hello), hello));
}

#[test]
fn test_checker_reports_depth_exceeded_as_false() {
    let interner = TypeInterner::new();
    let mut nested = TypeId::STRING;
    let mut target = TypeId::STRING;
    for _ in 0..(tyx_common::limits::MAX_SUBTYPE_DEPTH + 5) {
        nested = interner.array(nested);
        target = interner.array(target);
    }
    // Identical ids short-circuit before the guard is consulted.
    assert!(is_subtype_of(&interner, nested, target));

    let mut literal_nested = interner.literal_string("x");
    for _ in 0..(tyx_common::limits::MAX_SUBTYPE_DEPTH + 5) {
        literal_nested = interner.array(literal_nested);
    }
    let mut checker = SubtypeChecker::new(&interner);
    assert_eq!(
        checker.check_subtype(literal_nested, target),
        SubtypeResult::DepthExceeded
    );
}
