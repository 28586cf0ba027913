use super::*;

fn lit_tuple(interner: &TypeInterner, values: &[&str]) -> TypeId {
    interner.readonly_tuple(values.iter().map(|v| interner.literal_string(v)).collect())
}

#[test]
fn test_identity_and_first() {
    let interner = TypeInterner::new();
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Identity(TypeId::STRING)),
        Ok(TypeId::STRING)
    );

    let three = interner.literal_number(3.0);
    let tuple = interner.tuple(vec![three, interner.literal_number(2.0)]);
    assert_eq!(evaluate_operator(&interner, &TypeOperator::First(tuple)), Ok(three));
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::First(interner.tuple(vec![]))),
        Ok(TypeId::NEVER)
    );
    let not_array = interner.literal_string("notArray");
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::First(not_array)),
        Err(ShapeError::NotATuple { found: not_array })
    );

    let zero = interner.intern_string("0");
    let array_like = interner.object(vec![PropertyInfo::new(zero, interner.literal_string("arrayLike"))]);
    assert!(evaluate_operator(&interner, &TypeOperator::First(array_like)).is_err());
}

#[test]
fn test_last() {
    let interner = TypeInterner::new();
    let tuple = lit_tuple(&interner, &["a", "b", "c"]);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Last(tuple)),
        Ok(interner.literal_string("c"))
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Last(interner.tuple(vec![]))),
        Ok(TypeId::NEVER)
    );
}

#[test]
fn test_tuple_to_object() {
    let interner = TypeInterner::new();
    let mixed = interner.readonly_tuple(vec![
        interner.literal_number(1.0),
        interner.literal_string("2"),
    ]);
    let expected = interner.object(vec![
        PropertyInfo::new(interner.intern_string("1"), interner.literal_number(1.0)),
        PropertyInfo::new(interner.intern_string("2"), interner.literal_string("2")),
    ]);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::TupleToObject(mixed)),
        Ok(expected)
    );

    let nested = interner.tuple(vec![
        interner.tuple(vec![interner.literal_number(1.0), interner.literal_number(2.0)]),
        interner.object(vec![]),
    ]);
    assert!(matches!(
        evaluate_operator(&interner, &TypeOperator::TupleToObject(nested)),
        Err(ShapeError::InvalidPropertyKey { .. })
    ));
}

#[test]
fn test_if_requires_boolean() {
    let interner = TypeInterner::new();
    let a = interner.literal_string("a");
    let b = interner.literal_string("b");
    let op = |condition| TypeOperator::If {
        condition,
        then_type: a,
        else_type: b,
    };
    assert_eq!(evaluate_operator(&interner, &op(TypeId::BOOLEAN_TRUE)), Ok(a));
    assert_eq!(evaluate_operator(&interner, &op(TypeId::BOOLEAN_FALSE)), Ok(b));
    assert_eq!(
        evaluate_operator(&interner, &op(TypeId::BOOLEAN)),
        Ok(interner.union2(a, b))
    );
    assert_eq!(
        evaluate_operator(&interner, &op(TypeId::NULL)),
        Err(ShapeError::NotABoolean {
            found: TypeId::NULL
        })
    );
}

#[test]
fn test_includes_uses_strict_identity() {
    let interner = TypeInterner::new();
    let a = interner.intern_string("a");
    let lit_a = interner.literal_string("A");
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let includes = |tuple, item| {
        evaluate_operator(&interner, &TypeOperator::Includes { tuple, item })
    };

    let kars = lit_tuple(&interner, &["Kars", "Esidisi", "Wamuu", "Santana"]);
    assert_eq!(includes(kars, interner.literal_string("Kars")), Ok(TypeId::BOOLEAN_TRUE));
    assert_eq!(includes(kars, interner.literal_string("Dio")), Ok(TypeId::BOOLEAN_FALSE));

    let boolean_first = interner.tuple(vec![TypeId::BOOLEAN, two]);
    assert_eq!(includes(boolean_first, TypeId::BOOLEAN_FALSE), Ok(TypeId::BOOLEAN_FALSE));
    let true_first = interner.tuple(vec![TypeId::BOOLEAN_TRUE, two]);
    assert_eq!(includes(true_first, TypeId::BOOLEAN), Ok(TypeId::BOOLEAN_FALSE));

    let mutable = interner.object(vec![PropertyInfo::new(a, lit_a)]);
    let readonly = interner.object(vec![PropertyInfo::readonly(a, lit_a)]);
    assert_eq!(
        includes(interner.tuple(vec![mutable]), readonly),
        Ok(TypeId::BOOLEAN_FALSE)
    );
    assert_eq!(
        includes(interner.tuple(vec![interner.object(vec![])]), mutable),
        Ok(TypeId::BOOLEAN_FALSE)
    );
    assert_eq!(
        includes(interner.tuple(vec![one]), interner.union2(one, two)),
        Ok(TypeId::BOOLEAN_FALSE)
    );
    assert_eq!(
        includes(interner.tuple(vec![TypeId::NULL]), TypeId::UNDEFINED),
        Ok(TypeId::BOOLEAN_FALSE)
    );
    assert!(includes(TypeId::STRING, one).is_err());
}

#[test]
fn test_parameters_and_return_type() {
    let interner = TypeInterner::new();
    let baz = interner.function(vec![], TypeId::VOID);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Parameters(baz)),
        Ok(interner.tuple(vec![]))
    );
    assert!(evaluate_operator(&interner, &TypeOperator::Parameters(TypeId::STRING)).is_err());

    let foo = interner.literal_string("foo");
    let inner = interner.function(vec![], foo);
    let outer = interner.function(vec![], inner);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::ReturnType(outer)),
        Ok(inner)
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::ReturnType(TypeId::STRING)),
        Ok(TypeId::NEVER)
    );
}

#[test]
fn test_element_at() {
    let interner = TypeInterner::new();
    let tuple = lit_tuple(&interner, &["x", "y"]);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::TupleElementAt { tuple, index: 1 }),
        Ok(interner.literal_string("y"))
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::TupleElementAt { tuple, index: 2 }),
        Err(ShapeError::IndexOutOfRange { index: 2, length: 2 })
    );
}

#[test]
fn test_chain_rejects_every_redefinition() {
    let interner = TypeInterner::new();
    let name = interner.intern_string("name");
    let foo = interner.intern_string("foo");
    let option = |key, value| ChainOption { key, value };

    let result = evaluate_operator(
        &interner,
        &TypeOperator::Chain(vec![
            option(foo, interner.literal_number(123.0)),
            option(name, interner.literal_string("type-challenges")),
        ]),
    );
    assert_eq!(
        result,
        Ok(interner.object(vec![
            PropertyInfo::new(foo, TypeId::NUMBER),
            PropertyInfo::new(name, TypeId::STRING),
        ]))
    );

    let same_type = vec![
        option(name, interner.literal_string("another name")),
        option(name, interner.literal_string("last name")),
    ];
    let other_type = vec![
        option(name, interner.literal_string("another name")),
        option(name, interner.literal_number(123.0)),
    ];
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Chain(same_type.clone())),
        Err(ShapeError::DuplicateKey { key: name })
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Chain(other_type.clone())),
        Err(ShapeError::DuplicateKey { key: name })
    );

    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::ChainResult(same_type)),
        Ok(interner.object(vec![PropertyInfo::new(name, TypeId::STRING)]))
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::ChainResult(other_type)),
        Ok(interner.object(vec![PropertyInfo::new(name, TypeId::NUMBER)]))
    );
}

#[test]
fn test_first_last_and_includes_distribute_over_tuple_unions() {
    let interner = TypeInterner::new();
    let one = interner.literal_number(1.0);
    let two = interner.literal_number(2.0);
    let tuples = interner.union2(interner.tuple(vec![one]), interner.tuple(vec![two]));

    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::First(tuples)),
        Ok(interner.union2(one, two))
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Last(tuples)),
        Ok(interner.union2(one, two))
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::Includes { tuple: tuples, item: one }),
        Ok(TypeId::BOOLEAN)
    );
    assert_eq!(
        evaluate_operator(
            &interner,
            &TypeOperator::Includes {
                tuple: tuples,
                item: interner.literal_number(3.0),
            }
        ),
        Ok(TypeId::BOOLEAN_FALSE)
    );
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::First(TypeId::NEVER)),
        Ok(TypeId::NEVER)
    );

    let mixed = interner.union2(interner.tuple(vec![one]), TypeId::STRING);
    assert_eq!(
        evaluate_operator(&interner, &TypeOperator::First(mixed)),
        Err(ShapeError::NotATuple {
            found: TypeId::STRING
        })
    );
}

#[test]
fn test_tuple_to_object_keeps_large_integer_keys() {
    let interner = TypeInterner::new();
    let big = interner.literal_number(1e19);
    let key = interner.intern_string("10000000000000000000");
    assert_eq!(
        evaluate_operator(
            &interner,
            &TypeOperator::TupleToObject(interner.readonly_tuple(vec![big]))
        ),
        Ok(interner.object(vec![PropertyInfo::new(key, big)]))
    );
}

#[test]
fn test_exclude_rule_shape() {
    let interner = TypeInterner::new();
    let rule = exclude_rule(&interner, TypeId::STRING);
    assert!(rule.is_distributive);
    assert_eq!(rule.true_type, TypeId::NEVER);
    assert_eq!(rule.false_type, interner.hole("T"));
}
