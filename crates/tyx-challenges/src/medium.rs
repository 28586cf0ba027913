//! Medium challenges.

use crate::builder::{Field, Fixtures};
use crate::easy::todo;
use tyx_solver::{Assertion, ChainOption, Suite, TypeId, TypeOperator};

pub fn suites(fx: &Fixtures<'_>) -> Vec<Suite> {
    vec![
        return_type(fx),
        omit(fx),
        readonly2(fx),
        deep_readonly(fx),
        tuple_to_union(fx),
        chainable_options(fx),
        last(fx),
        tuple_element_at(fx),
    ]
}

fn return_type(fx: &Fixtures<'_>) -> Suite {
    let complex = fx.obj(&[
        ("a", fx.tuple(&[fx.num(12.0), fx.str("foo")])),
        ("bar", fx.str("hello")),
        ("prev", fx.func(&[], TypeId::NUMBER)),
    ]);
    let returns_foo = fx.func(&[], fx.str("foo"));
    let one_or_two = fx.union(&[fx.num(1.0), fx.num(2.0)]);
    let promised = fx.promise(TypeId::BOOLEAN);

    let cases = [
        (fx.func(&[], TypeId::STRING), TypeId::STRING),
        (fx.func(&[], fx.num(123.0)), fx.num(123.0)),
        (fx.func(&[], complex), complex),
        (fx.func(&[], promised), promised),
        (fx.func(&[], returns_foo), returns_foo),
        (fx.func(&[TypeId::BOOLEAN], one_or_two), one_or_two),
        (fx.func(&[TypeId::BOOLEAN, TypeId::ANY], one_or_two), one_or_two),
    ];

    let mut suite = Suite::new("return-type");
    for (function, expected) in cases {
        suite.push(Assertion::equal(TypeOperator::ReturnType(function), expected));
    }
    suite
}

fn omit(fx: &Fixtures<'_>) -> Suite {
    let todo = todo(fx);
    let mut suite = Suite::new("omit");
    suite
        .push(Assertion::equal(
            TypeOperator::Omit {
                object: todo,
                keys: fx.str("description"),
            },
            fx.obj(&[("title", TypeId::STRING), ("completed", TypeId::BOOLEAN)]),
        ))
        .push(Assertion::equal(
            TypeOperator::Omit {
                object: todo,
                keys: fx.keys(&["description", "completed"]),
            },
            fx.obj(&[("title", TypeId::STRING)]),
        ))
        .push(Assertion::rejected(TypeOperator::Omit {
            object: todo,
            keys: fx.keys(&["description", "invalid"]),
        }));
    suite
}

fn readonly2(fx: &Fixtures<'_>) -> Suite {
    let todo1 = fx.record(&[
        ("title", TypeId::STRING, Field::Plain),
        ("description", TypeId::STRING, Field::Optional),
        ("completed", TypeId::BOOLEAN, Field::Plain),
    ]);
    let todo2 = fx.record(&[
        ("title", TypeId::STRING, Field::Readonly),
        ("description", TypeId::STRING, Field::Optional),
        ("completed", TypeId::BOOLEAN, Field::Plain),
    ]);
    let readonly_todo1 = fx.record(&[
        ("title", TypeId::STRING, Field::Readonly),
        ("description", TypeId::STRING, Field::ReadonlyOptional),
        ("completed", TypeId::BOOLEAN, Field::Readonly),
    ]);
    let expected = fx.record(&[
        ("title", TypeId::STRING, Field::Readonly),
        ("description", TypeId::STRING, Field::ReadonlyOptional),
        ("completed", TypeId::BOOLEAN, Field::Plain),
    ]);
    let title_and_description = fx.keys(&["title", "description"]);

    let mut suite = Suite::new("readonly2");
    suite
        .push(Assertion::equal(
            TypeOperator::ReadonlyKeys {
                object: todo1,
                keys: None,
            },
            readonly_todo1,
        ))
        .push(Assertion::equal(
            TypeOperator::ReadonlyKeys {
                object: todo1,
                keys: Some(title_and_description),
            },
            expected,
        ))
        .push(Assertion::equal(
            TypeOperator::ReadonlyKeys {
                object: todo2,
                keys: Some(title_and_description),
            },
            expected,
        ))
        .push(Assertion::rejected(TypeOperator::ReadonlyKeys {
            object: todo1,
            keys: Some(fx.keys(&["title", "invalid"])),
        }));
    suite
}

fn deep_readonly(fx: &Fixtures<'_>) -> Suite {
    let returns_22 = fx.func(&[], fx.num(22.0));
    let (i, j, k) = (TypeId::BOOLEAN_TRUE, fx.str("string"), fx.str("hello"));
    let hi = fx.str("hi");
    let hey = fx.str("hey");

    let x = fx.obj(&[
        ("a", returns_22),
        ("b", TypeId::STRING),
        (
            "c",
            fx.obj(&[
                ("d", TypeId::BOOLEAN),
                (
                    "e",
                    fx.obj(&[
                        (
                            "g",
                            fx.obj(&[("h", fx.obj(&[("i", i), ("j", j)])), ("k", k)]),
                        ),
                        (
                            "l",
                            fx.tuple(&[hi, fx.obj(&[("m", fx.tuple(&[hey]))])]),
                        ),
                    ]),
                ),
            ]),
        ),
    ]);

    let expected = fx.readonly_obj(&[
        ("a", returns_22),
        ("b", TypeId::STRING),
        (
            "c",
            fx.readonly_obj(&[
                ("d", TypeId::BOOLEAN),
                (
                    "e",
                    fx.readonly_obj(&[
                        (
                            "g",
                            fx.readonly_obj(&[
                                ("h", fx.readonly_obj(&[("i", i), ("j", j)])),
                                ("k", k),
                            ]),
                        ),
                        (
                            "l",
                            fx.const_tuple(&[
                                hi,
                                fx.readonly_obj(&[("m", fx.const_tuple(&[hey]))]),
                            ]),
                        ),
                    ]),
                ),
            ]),
        ),
    ]);

    let mut suite = Suite::new("deep-readonly");
    suite.push(Assertion::equal(TypeOperator::DeepReadonly(x), expected));
    suite
}

fn tuple_to_union(fx: &Fixtures<'_>) -> Suite {
    let n123 = fx.num(123.0);
    let s456 = fx.str("456");
    let mut suite = Suite::new("tuple-to-union");
    suite
        .push(Assertion::equal(
            TypeOperator::TupleToUnion(fx.tuple(&[n123, s456, TypeId::BOOLEAN_TRUE])),
            fx.union(&[n123, s456, TypeId::BOOLEAN_TRUE]),
        ))
        .push(Assertion::equal(
            TypeOperator::TupleToUnion(fx.tuple(&[n123])),
            n123,
        ));
    suite
}

fn chainable_options(fx: &Fixtures<'_>) -> Suite {
    let option = |key: &str, value: TypeId| ChainOption {
        key: fx.interner.intern_string(key),
        value,
    };
    let result1 = vec![
        option("foo", fx.num(123.0)),
        option("bar", fx.obj(&[("value", fx.str("Hello World"))])),
        option("name", fx.str("type-challenges")),
    ];
    let expected1 = fx.obj(&[
        ("foo", TypeId::NUMBER),
        ("bar", fx.obj(&[("value", TypeId::STRING)])),
        ("name", TypeId::STRING),
    ]);

    // Both redefinitions are errors; `.get()` still yields the replaced key.
    let result2 = vec![
        option("name", fx.str("another name")),
        option("name", fx.str("last name")),
    ];
    let result3 = vec![
        option("name", fx.str("another name")),
        option("name", fx.num(123.0)),
    ];

    let mut suite = Suite::new("chainable-options");
    suite
        .push(Assertion::equal(TypeOperator::Chain(result1), expected1))
        .push(Assertion::rejected(TypeOperator::Chain(result2.clone())))
        .push(Assertion::equal(
            TypeOperator::ChainResult(result2),
            fx.obj(&[("name", TypeId::STRING)]),
        ))
        .push(Assertion::rejected(TypeOperator::Chain(result3.clone())))
        .push(Assertion::equal(
            TypeOperator::ChainResult(result3),
            fx.obj(&[("name", TypeId::NUMBER)]),
        ));
    suite
}

fn last(fx: &Fixtures<'_>) -> Suite {
    let a_record = fx.obj(&[("a", TypeId::STRING)]);
    let mut suite = Suite::new("last");
    suite
        .push(Assertion::equal(
            TypeOperator::Last(fx.tuple(&[fx.num(3.0), fx.num(2.0), fx.num(1.0)])),
            fx.num(1.0),
        ))
        .push(Assertion::equal(
            TypeOperator::Last(fx.tuple(&[fx.func(&[], fx.num(123.0)), a_record])),
            a_record,
        ))
        .push(Assertion::equal(TypeOperator::Last(fx.tuple(&[])), TypeId::NEVER))
        .push(Assertion::rejected(TypeOperator::Last(TypeId::STRING)));
    suite
}

fn tuple_element_at(fx: &Fixtures<'_>) -> Suite {
    let a = fx.str("a");
    let tuple = fx.tuple(&[fx.num(1.0), a, TypeId::BOOLEAN_TRUE]);
    let mut suite = Suite::new("tuple-element-at");
    suite
        .push(Assertion::equal(
            TypeOperator::TupleElementAt { tuple, index: 1 },
            a,
        ))
        .push(Assertion::equal(
            TypeOperator::TupleElementAt {
                tuple: fx.interner.array(TypeId::STRING),
                index: 5,
            },
            TypeId::STRING,
        ))
        .push(Assertion::rejected(TypeOperator::TupleElementAt {
            tuple,
            index: 3,
        }));
    suite
}
