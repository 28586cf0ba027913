use super::*;

#[test]
fn test_intern_deduplicates() {
    let interner = Interner::new();
    let a = interner.intern("title");
    let b = interner.intern("title");
    let c = interner.intern("completed");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(&*interner.resolve(a), "title");
    assert_eq!(&*interner.resolve(c), "completed");
}

#[test]
fn test_empty_string_is_none_atom() {
    let interner = Interner::new();
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(interner.intern("").is_none());
    assert!(interner.is_empty());
}

#[test]
fn test_resolve_out_of_bounds() {
    let interner = Interner::new();
    assert!(interner.try_resolve(Atom(999)).is_none());
    assert_eq!(&*interner.resolve(Atom(999)), "");
}

#[test]
fn test_intern_common_is_idempotent() {
    let interner = Interner::new();
    interner.intern_common();
    let len = interner.len();
    interner.intern_common();
    assert_eq!(interner.len(), len);
    assert_eq!(&*interner.resolve(interner.intern("Promise")), "Promise");
}

#[test]
fn test_atoms_order_by_interning_sequence() {
    let interner = Interner::new();
    let first = interner.intern("zeta");
    let second = interner.intern("alpha");
    assert!(first < second);

    let mut by_atom = FxHashMap::default();
    by_atom.insert(second, "alpha");
    by_atom.insert(first, "zeta");
    assert_eq!(by_atom[&interner.intern("zeta")], "zeta");
    assert_eq!(Atom::default(), Atom::NONE);
}
