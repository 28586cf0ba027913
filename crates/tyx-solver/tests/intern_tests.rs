use super::*;

#[test]
fn test_intrinsics_are_pre_registered() {
    let interner = TypeInterner::new();
    assert_eq!(
        interner.lookup(TypeId::STRING),
        Some(TypeData::Intrinsic(IntrinsicKind::String))
    );
    assert_eq!(
        interner.lookup(TypeId::FUNCTION),
        Some(TypeData::Intrinsic(IntrinsicKind::Function))
    );
    assert_eq!(interner.literal_boolean(true), TypeId::BOOLEAN_TRUE);
    assert_eq!(interner.literal_boolean(false), TypeId::BOOLEAN_FALSE);
    assert_eq!(interner.len() as u32, TypeId::FIRST_USER);
}

#[test]
fn test_literals_are_deduplicated() {
    let interner = TypeInterner::new();
    assert_eq!(interner.literal_string("a"), interner.literal_string("a"));
    assert_ne!(interner.literal_string("1"), interner.literal_number(1.0));
    assert_eq!(interner.literal_number(0.0), interner.literal_number(-0.0));
    assert_eq!(interner.literal_number(42.0), interner.literal_number(42.0));
}

#[test]
fn test_object_field_order_is_irrelevant() {
    let interner = TypeInterner::new();
    let a = interner.intern_string("a");
    let b = interner.intern_string("b");

    let ab = interner.object(vec![
        PropertyInfo::new(a, TypeId::STRING),
        PropertyInfo::new(b, TypeId::NUMBER),
    ]);
    let ba = interner.object(vec![
        PropertyInfo::new(b, TypeId::NUMBER),
        PropertyInfo::new(a, TypeId::STRING),
    ]);
    assert_eq!(ab, ba);
}

#[test]
fn test_object_flags_are_part_of_identity() {
    let interner = TypeInterner::new();
    let a = interner.intern_string("a");
    let lit = interner.literal_string("A");

    let plain = interner.object(vec![PropertyInfo::new(a, lit)]);
    let readonly = interner.object(vec![PropertyInfo::readonly(a, lit)]);
    let optional = interner.object(vec![PropertyInfo::opt(a, lit)]);
    assert_ne!(plain, readonly);
    assert_ne!(plain, optional);
    assert_ne!(readonly, optional);
}

#[test]
fn test_object_later_duplicate_wins() {
    let interner = TypeInterner::new();
    let name = interner.intern_string("name");
    let obj = interner.object(vec![
        PropertyInfo::new(name, TypeId::STRING),
        PropertyInfo::new(name, TypeId::NUMBER),
    ]);
    let expected = interner.object(vec![PropertyInfo::new(name, TypeId::NUMBER)]);
    assert_eq!(obj, expected);
}

#[test]
fn test_union_flattens_and_deduplicates() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");
    let c = interner.literal_string("c");

    let ab = interner.union(vec![a, b]);
    let nested = interner.union(vec![ab, c, a]);
    let flat = interner.union(vec![c, b, a]);
    assert_eq!(nested, flat);

    let Some(TypeData::Union(list_id)) = interner.lookup(flat) else {
        panic!("expected union");
    };
    assert_eq!(interner.type_list(list_id).len(), 3);
}

#[test]
fn test_union_degenerate_cases() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    assert_eq!(interner.union(vec![]), TypeId::NEVER);
    assert_eq!(interner.union(vec![a]), a);
    assert_eq!(interner.union(vec![a, a]), a);
    assert_eq!(interner.union(vec![a, TypeId::NEVER]), a);
    assert_eq!(interner.union(vec![a, TypeId::ANY]), TypeId::ANY);
    assert_eq!(interner.union(vec![a, TypeId::UNKNOWN]), TypeId::UNKNOWN);
}

#[test]
fn test_union_of_boolean_literals_is_boolean() {
    let interner = TypeInterner::new();
    assert_eq!(
        interner.union(vec![TypeId::BOOLEAN_TRUE, TypeId::BOOLEAN_FALSE]),
        TypeId::BOOLEAN
    );
    let one = interner.literal_number(1.0);
    let with_literal = interner.union(vec![TypeId::BOOLEAN, TypeId::BOOLEAN_TRUE, one]);
    assert_eq!(with_literal, interner.union(vec![TypeId::BOOLEAN, one]));
}

#[test]
fn test_tuple_spread_of_tuple_is_spliced() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let inner = interner.tuple(vec![two]);
    let spread = interner.tuple_with_rest(vec![one], inner);
    assert_eq!(spread, interner.tuple(vec![one, two]));
}

#[test]
fn test_tuple_readonly_is_part_of_identity() {
    let interner = TypeInterner::new();
    let hi = interner.literal_string("hi");
    assert_ne!(interner.tuple(vec![hi]), interner.readonly_tuple(vec![hi]));
    assert_ne!(
        interner.tuple(vec![]),
        interner.tuple_with_rest(vec![], interner.array(TypeId::ANY))
    );
}

#[test]
fn test_promise_application() {
    let interner = TypeInterner::new();
    let p = interner.promise(TypeId::STRING);
    assert_eq!(p, interner.promise(TypeId::STRING));
    assert_ne!(p, interner.promise(TypeId::NUMBER));
    let Some(TypeData::Application(app_id)) = interner.lookup(p) else {
        panic!("expected application");
    };
    let app = interner.type_application(app_id);
    assert_eq!(interner.resolve_atom(app.name), "Promise");
    assert_eq!(app.args, vec![TypeId::STRING]);
}
