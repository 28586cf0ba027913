use super::*;

fn head_tail_pattern(interner: &TypeInterner) -> TypeId {
    let head = interner.hole("H");
    let tail = interner.hole("T");
    interner.tuple_with_rest(vec![head], tail)
}

#[test]
fn test_head_tail_on_empty_tuple_is_no_match() {
    let interner = TypeInterner::new();
    let pattern = head_tail_pattern(&interner);
    assert!(infer(&interner, pattern, interner.tuple(vec![])).is_none());
}

#[test]
fn test_head_tail_binds_first_and_rest() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let three = interner.literal_number(3.0);
    let pattern = head_tail_pattern(&interner);

    let binding = infer(&interner, pattern, interner.tuple(vec![three, two, one]))
        .expect("[3, 2, 1] matches [infer H, ...infer T]");
    assert_eq!(binding[&interner.intern_string("H")], three);
    assert_eq!(binding[&interner.intern_string("T")], interner.tuple(vec![two, one]));

    let binding = infer(&interner, pattern, interner.tuple(vec![TypeId::UNDEFINED])).unwrap();
    assert_eq!(binding[&interner.intern_string("H")], TypeId::UNDEFINED);
    assert_eq!(binding[&interner.intern_string("T")], interner.tuple(vec![]));
}

#[test]
fn test_repeated_hole_must_bind_identically() {
    let interner = TypeInterner::new();
    let x = interner.hole("X");
    let pattern = interner.tuple(vec![x, x]);
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");

    assert!(infer(&interner, pattern, interner.tuple(vec![a, a])).is_some());
    assert!(infer(&interner, pattern, interner.tuple(vec![a, b])).is_none());
}

#[test]
fn test_hole_free_subpattern_uses_subtyping() {
    let interner = TypeInterner::new();
    let hello = interner.literal_string("hello");
    let rest = interner.hole("R");
    let pattern = interner.tuple_with_rest(vec![TypeId::STRING], rest);

    let binding = infer(&interner, pattern, interner.tuple(vec![hello, TypeId::NUMBER])).unwrap();
    assert_eq!(
        binding[&interner.intern_string("R")],
        interner.tuple(vec![TypeId::NUMBER])
    );
    assert!(infer(&interner, pattern, interner.tuple(vec![TypeId::NUMBER])).is_none());

    assert!(infer(&interner, TypeId::STRING, hello).is_some());
    assert!(infer(&interner, hello, TypeId::STRING).is_none());
}

#[test]
fn test_function_patterns() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let foo = interner.function(
        vec![ParamInfo::required(TypeId::STRING), ParamInfo::required(TypeId::NUMBER)],
        TypeId::VOID,
    );

    // (...args: infer P) => any
    let params_pattern = interner.function(vec![ParamInfo::rest(interner.hole("P"))], TypeId::ANY);
    let binding = infer(&interner, params_pattern, foo).unwrap();
    assert_eq!(
        binding[&interner.intern_string("P")],
        interner.tuple(vec![TypeId::STRING, TypeId::NUMBER])
    );

    // (...args: any) => infer R
    let return_pattern = interner.function(vec![ParamInfo::rest(TypeId::ANY)], interner.hole("R"));
    let fn1 = interner.function(
        vec![ParamInfo::required(TypeId::BOOLEAN), ParamInfo::required(TypeId::ANY)],
        interner.union2(one, two),
    );
    let binding = infer(&interner, return_pattern, fn1).unwrap();
    assert_eq!(binding[&interner.intern_string("R")], interner.union2(one, two));

    assert!(infer(&interner, return_pattern, TypeId::STRING).is_none());
}

#[test]
fn test_promise_pattern_and_substitute() {
    let interner = TypeInterner::new();
    let p = interner.hole("P");
    let pattern = interner.promise(p);
    let binding = infer(&interner, pattern, interner.promise(TypeId::STRING)).unwrap();
    assert_eq!(binding[&interner.intern_string("P")], TypeId::STRING);

    let template = interner.tuple(vec![p, interner.array(p)]);
    assert_eq!(
        substitute(&interner, template, &binding),
        interner.tuple(vec![TypeId::STRING, interner.array(TypeId::STRING)])
    );
    assert!(contains_holes(&interner, template));
    assert!(!contains_holes(&interner, substitute(&interner, template, &binding)));
}

#[test]
fn test_substitute_splices_variadic_tuple() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let r = interner.hole("R");
    let template = interner.tuple_with_rest(vec![one], r);

    let mut binding = Binding::default();
    binding.insert(interner.intern_string("R"), interner.tuple(vec![two]));
    assert_eq!(substitute(&interner, template, &binding), interner.tuple(vec![one, two]));
}

#[test]
fn test_optional_union_pattern() {
    let interner = TypeInterner::new();
    let x = interner.hole("X");
    let pattern = interner.union2(x, TypeId::UNDEFINED);
    let value = interner.union2(TypeId::STRING, TypeId::UNDEFINED);
    let binding = infer(&interner, pattern, value).unwrap();
    assert_eq!(binding[&interner.intern_string("X")], TypeId::STRING);
}

#[test]
fn test_awaited_unwraps_nested_promises() {
    let interner = TypeInterner::new();
    let inner = interner.union2(TypeId::STRING, TypeId::BOOLEAN);
    let z1 = interner.promise(interner.promise(interner.promise(inner)));
    assert_eq!(awaited(&interner, z1), Ok(inner));

    let field = interner.intern_string("field");
    let record = interner.object(vec![PropertyInfo::new(field, TypeId::NUMBER)]);
    assert_eq!(awaited(&interner, interner.promise(record)), Ok(record));

    let mixed = interner.promise(interner.union2(TypeId::STRING, interner.promise(TypeId::NUMBER)));
    assert_eq!(
        awaited(&interner, mixed),
        Ok(interner.union2(TypeId::STRING, TypeId::NUMBER))
    );
}

#[test]
fn test_awaited_rejects_non_promise() {
    let interner = TypeInterner::new();
    assert_eq!(
        awaited(&interner, TypeId::NUMBER),
        Err(ShapeError::NotAPromise {
            found: TypeId::NUMBER
        })
    );
}

#[test]
fn test_awaited_depth_is_bounded() {
    let interner = TypeInterner::new();
    let mut nested = TypeId::STRING;
    for _ in 0..(tyx_common::limits::MAX_UNWRAP_DEPTH + 1) {
        nested = interner.promise(nested);
    }
    assert!(matches!(
        awaited(&interner, nested),
        Err(ShapeError::DepthExceeded { .. })
    ));
}
