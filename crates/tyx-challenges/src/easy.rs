//! Warm-up and easy challenges.

use crate::builder::Fixtures;
use tyx_solver::{Assertion, Suite, TypeId, TypeOperator};

pub fn suites(fx: &Fixtures<'_>) -> Vec<Suite> {
    vec![
        hello_world(),
        pick(fx),
        readonly(fx),
        tuple_to_object(fx),
        first(fx),
        length(fx),
        exclude(fx),
        awaited(fx),
        if_(fx),
        concat(fx),
        includes(fx),
        push(fx),
        unshift(fx),
        parameters(fx),
    ]
}

/// `interface Todo { title: string; description: string; completed: boolean }`
pub fn todo(fx: &Fixtures<'_>) -> TypeId {
    fx.obj(&[
        ("title", TypeId::STRING),
        ("description", TypeId::STRING),
        ("completed", TypeId::BOOLEAN),
    ])
}

fn hello_world() -> Suite {
    let mut suite = Suite::new("hello-world");
    suite
        .push(Assertion::not_equal(TypeOperator::Identity(TypeId::STRING), TypeId::ANY))
        .push(Assertion::equal(TypeOperator::Identity(TypeId::STRING), TypeId::STRING));
    suite
}

fn pick(fx: &Fixtures<'_>) -> Suite {
    let todo = todo(fx);
    let mut suite = Suite::new("pick");
    suite
        .push(Assertion::equal(
            TypeOperator::Pick {
                object: todo,
                keys: fx.keys(&["title"]),
            },
            fx.obj(&[("title", TypeId::STRING)]),
        ))
        .push(Assertion::equal(
            TypeOperator::Pick {
                object: todo,
                keys: fx.keys(&["title", "completed"]),
            },
            fx.obj(&[("title", TypeId::STRING), ("completed", TypeId::BOOLEAN)]),
        ))
        .push(Assertion::rejected(TypeOperator::Pick {
            object: todo,
            keys: fx.keys(&["title", "completed", "invalid"]),
        }));
    suite
}

fn readonly(fx: &Fixtures<'_>) -> Suite {
    let meta = fx.obj(&[("author", TypeId::STRING)]);
    let todo1 = fx.obj(&[
        ("title", TypeId::STRING),
        ("description", TypeId::STRING),
        ("completed", TypeId::BOOLEAN),
        ("meta", meta),
    ]);
    let expected = fx.readonly_obj(&[
        ("title", TypeId::STRING),
        ("description", TypeId::STRING),
        ("completed", TypeId::BOOLEAN),
        ("meta", meta),
    ]);
    let mut suite = Suite::new("readonly");
    suite.push(Assertion::equal(TypeOperator::Readonly(todo1), expected));
    suite
}

fn tuple_to_object(fx: &Fixtures<'_>) -> Suite {
    let tesla = fx.strs(&["tesla", "model 3", "model X", "model Y"]);
    let numbers: Vec<TypeId> = (1..=4).map(|n| fx.num(n as f64)).collect();
    let mix = vec![fx.num(1.0), fx.str("2"), fx.num(3.0), fx.str("4")];

    let mut suite = Suite::new("tuple-to-object");
    suite
        .push(Assertion::equal(
            TypeOperator::TupleToObject(fx.const_tuple(&tesla)),
            fx.obj(&[
                ("tesla", tesla[0]),
                ("model 3", tesla[1]),
                ("model X", tesla[2]),
                ("model Y", tesla[3]),
            ]),
        ))
        .push(Assertion::equal(
            TypeOperator::TupleToObject(fx.const_tuple(&numbers)),
            fx.obj(&[
                ("1", numbers[0]),
                ("2", numbers[1]),
                ("3", numbers[2]),
                ("4", numbers[3]),
            ]),
        ))
        .push(Assertion::equal(
            TypeOperator::TupleToObject(fx.const_tuple(&mix)),
            fx.obj(&[("1", mix[0]), ("2", mix[1]), ("3", mix[2]), ("4", mix[3])]),
        ))
        .push(Assertion::rejected(TypeOperator::TupleToObject(fx.tuple(&[
            fx.tuple(&[fx.num(1.0), fx.num(2.0)]),
            fx.obj(&[]),
        ]))));
    suite
}

fn first(fx: &Fixtures<'_>) -> Suite {
    let returns_123 = fx.func(&[], fx.num(123.0));
    let mut suite = Suite::new("first");
    suite
        .push(Assertion::equal(
            TypeOperator::First(fx.tuple(&[fx.num(3.0), fx.num(2.0), fx.num(1.0)])),
            fx.num(3.0),
        ))
        .push(Assertion::equal(
            TypeOperator::First(fx.tuple(&[returns_123, fx.obj(&[("a", TypeId::STRING)])])),
            returns_123,
        ))
        .push(Assertion::equal(TypeOperator::First(fx.tuple(&[])), TypeId::NEVER))
        .push(Assertion::equal(
            TypeOperator::First(fx.tuple(&[TypeId::UNDEFINED])),
            TypeId::UNDEFINED,
        ))
        .push(Assertion::rejected(TypeOperator::First(fx.str("notArray"))))
        .push(Assertion::rejected(TypeOperator::First(
            fx.obj(&[("0", fx.str("arrayLike"))]),
        )));
    suite
}

fn length(fx: &Fixtures<'_>) -> Suite {
    let tesla = fx.const_tuple(&fx.strs(&["tesla", "model 3", "model X", "model Y"]));
    let space_x = fx.const_tuple(&fx.strs(&[
        "FALCON 9",
        "FALCON HEAVY",
        "DRAGON",
        "STARSHIP",
        "HUMAN SPACEFLIGHT",
    ]));
    let mut suite = Suite::new("length");
    suite
        .push(Assertion::equal(TypeOperator::Length(tesla), fx.num(4.0)))
        .push(Assertion::equal(TypeOperator::Length(space_x), fx.num(5.0)))
        .push(Assertion::rejected(TypeOperator::Length(fx.num(5.0))))
        .push(Assertion::rejected(TypeOperator::Length(fx.str("hello world"))));
    suite
}

fn exclude(fx: &Fixtures<'_>) -> Suite {
    let abc = fx.keys(&["a", "b", "c"]);
    let void_fn = fx.func(&[], TypeId::VOID);
    let mut suite = Suite::new("exclude");
    suite
        .push(Assertion::equal(
            TypeOperator::Exclude {
                union: abc,
                excluded: fx.str("a"),
            },
            fx.keys(&["b", "c"]),
        ))
        .push(Assertion::equal(
            TypeOperator::Exclude {
                union: abc,
                excluded: fx.keys(&["a", "b"]),
            },
            fx.str("c"),
        ))
        .push(Assertion::equal(
            TypeOperator::Exclude {
                union: fx.union(&[TypeId::STRING, TypeId::NUMBER, void_fn]),
                excluded: TypeId::FUNCTION,
            },
            fx.union(&[TypeId::STRING, TypeId::NUMBER]),
        ));
    suite
}

fn awaited(fx: &Fixtures<'_>) -> Suite {
    let field = fx.obj(&[("field", TypeId::NUMBER)]);
    let string_or_number = fx.union(&[TypeId::STRING, TypeId::NUMBER]);
    let string_or_boolean = fx.union(&[TypeId::STRING, TypeId::BOOLEAN]);

    let x = fx.promise(TypeId::STRING);
    let y = fx.promise(field);
    let z = fx.promise(fx.promise(string_or_number));
    let z1 = fx.promise(fx.promise(fx.promise(string_or_boolean)));

    let mut suite = Suite::new("awaited");
    suite
        .push(Assertion::equal(TypeOperator::Awaited(x), TypeId::STRING))
        .push(Assertion::equal(TypeOperator::Awaited(y), field))
        .push(Assertion::equal(TypeOperator::Awaited(z), string_or_number))
        .push(Assertion::equal(TypeOperator::Awaited(z1), string_or_boolean))
        .push(Assertion::rejected(TypeOperator::Awaited(TypeId::NUMBER)));
    suite
}

fn if_(fx: &Fixtures<'_>) -> Suite {
    let a = fx.str("a");
    let mut suite = Suite::new("if");
    suite
        .push(Assertion::equal(
            TypeOperator::If {
                condition: TypeId::BOOLEAN_TRUE,
                then_type: a,
                else_type: fx.str("b"),
            },
            a,
        ))
        .push(Assertion::equal(
            TypeOperator::If {
                condition: TypeId::BOOLEAN_FALSE,
                then_type: a,
                else_type: fx.num(2.0),
            },
            fx.num(2.0),
        ))
        .push(Assertion::rejected(TypeOperator::If {
            condition: TypeId::NULL,
            then_type: a,
            else_type: fx.str("b"),
        }));
    suite
}

fn concat(fx: &Fixtures<'_>) -> Suite {
    let n: Vec<TypeId> = (0..=4).map(|n| fx.num(n as f64)).collect();
    let empty = fx.tuple(&[]);
    let left = [fx.str("1"), n[2], fx.str("3")];
    let right = [TypeId::BOOLEAN_FALSE, TypeId::BOOLEAN, fx.str("4")];

    let mut suite = Suite::new("concat");
    suite
        .push(Assertion::equal(TypeOperator::Concat(empty, empty), empty))
        .push(Assertion::equal(
            TypeOperator::Concat(empty, fx.tuple(&[n[1]])),
            fx.tuple(&[n[1]]),
        ))
        .push(Assertion::equal(
            TypeOperator::Concat(fx.tuple(&[n[1], n[2]]), fx.tuple(&[n[3], n[4]])),
            fx.tuple(&[n[1], n[2], n[3], n[4]]),
        ))
        .push(Assertion::equal(
            TypeOperator::Concat(fx.tuple(&left), fx.tuple(&right)),
            fx.tuple(&[left[0], left[1], left[2], right[0], right[1], right[2]]),
        ));
    suite
}

fn includes(fx: &Fixtures<'_>) -> Suite {
    let n = |value: f64| fx.num(value);
    let kars = fx.tuple(&fx.strs(&["Kars", "Esidisi", "Wamuu", "Santana"]));
    let digits = fx.tuple(&[n(1.0), n(2.0), n(3.0), n(5.0), n(6.0), n(7.0)]);
    let one_two_three = fx.tuple(&[n(1.0), n(2.0), n(3.0)]);
    let with_head = |head: TypeId| fx.tuple(&[head, n(2.0), n(3.0), n(5.0), n(6.0), n(7.0)]);
    let a_record = fx.obj(&[("a", fx.str("A"))]);
    let readonly_a_record = fx.readonly_obj(&[("a", fx.str("A"))]);
    let one_or_two = fx.union(&[n(1.0), n(2.0)]);

    let cases: [(TypeId, TypeId, bool); 16] = [
        (kars, fx.str("Kars"), true),
        (kars, fx.str("Dio"), false),
        (digits, n(7.0), true),
        (digits, n(4.0), false),
        (one_two_three, n(2.0), true),
        (one_two_three, n(1.0), true),
        (fx.tuple(&[fx.obj(&[])]), a_record, false),
        (with_head(TypeId::BOOLEAN), TypeId::BOOLEAN_FALSE, false),
        (with_head(TypeId::BOOLEAN_TRUE), TypeId::BOOLEAN, false),
        (with_head(TypeId::BOOLEAN_FALSE), TypeId::BOOLEAN_FALSE, true),
        (fx.tuple(&[a_record]), readonly_a_record, false),
        (fx.tuple(&[readonly_a_record]), a_record, false),
        (fx.tuple(&[n(1.0)]), one_or_two, false),
        (fx.tuple(&[one_or_two]), n(1.0), false),
        (fx.tuple(&[TypeId::NULL]), TypeId::UNDEFINED, false),
        (fx.tuple(&[TypeId::UNDEFINED]), TypeId::NULL, false),
    ];

    let mut suite = Suite::new("includes");
    for (tuple, item, expected) in cases {
        let expected = fx.interner.literal_boolean(expected);
        suite.push(Assertion::equal(TypeOperator::Includes { tuple, item }, expected));
    }
    suite
}

fn push(fx: &Fixtures<'_>) -> Suite {
    let one = fx.num(1.0);
    let two = fx.num(2.0);
    let mixed = [fx.str("1"), two, fx.str("3")];
    let mut suite = Suite::new("push");
    suite
        .push(Assertion::equal(
            TypeOperator::Push {
                tuple: fx.tuple(&[]),
                item: one,
            },
            fx.tuple(&[one]),
        ))
        .push(Assertion::equal(
            TypeOperator::Push {
                tuple: fx.tuple(&[one, two]),
                item: fx.str("3"),
            },
            fx.tuple(&[one, two, fx.str("3")]),
        ))
        .push(Assertion::equal(
            TypeOperator::Push {
                tuple: fx.tuple(&mixed),
                item: TypeId::BOOLEAN,
            },
            fx.tuple(&[mixed[0], mixed[1], mixed[2], TypeId::BOOLEAN]),
        ));
    suite
}

fn unshift(fx: &Fixtures<'_>) -> Suite {
    let zero = fx.num(0.0);
    let one = fx.num(1.0);
    let two = fx.num(2.0);
    let mixed = [fx.str("1"), two, fx.str("3")];
    let mut suite = Suite::new("unshift");
    suite
        .push(Assertion::equal(
            TypeOperator::Unshift {
                tuple: fx.tuple(&[]),
                item: one,
            },
            fx.tuple(&[one]),
        ))
        .push(Assertion::equal(
            TypeOperator::Unshift {
                tuple: fx.tuple(&[one, two]),
                item: zero,
            },
            fx.tuple(&[zero, one, two]),
        ))
        .push(Assertion::equal(
            TypeOperator::Unshift {
                tuple: fx.tuple(&mixed),
                item: TypeId::BOOLEAN,
            },
            fx.tuple(&[TypeId::BOOLEAN, mixed[0], mixed[1], mixed[2]]),
        ));
    suite
}

fn parameters(fx: &Fixtures<'_>) -> Suite {
    let a_record = fx.obj(&[("a", fx.str("A"))]);
    let foo = fx.func(&[TypeId::STRING, TypeId::NUMBER], TypeId::VOID);
    let bar = fx.func(&[TypeId::BOOLEAN, a_record], TypeId::VOID);
    let baz = fx.func(&[], TypeId::VOID);

    let mut suite = Suite::new("parameters");
    suite
        .push(Assertion::equal(
            TypeOperator::Parameters(foo),
            fx.tuple(&[TypeId::STRING, TypeId::NUMBER]),
        ))
        .push(Assertion::equal(
            TypeOperator::Parameters(bar),
            fx.tuple(&[TypeId::BOOLEAN, a_record]),
        ))
        .push(Assertion::equal(TypeOperator::Parameters(baz), fx.tuple(&[])));
    suite
}
