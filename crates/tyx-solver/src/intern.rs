//! Type interning for structural deduplication.
//!
//! This module implements the interning engine that converts `TypeData`
//! structures into lightweight `TypeId` handles.
//!
//! Benefits:
//! - O(1) structural equality (just compare `TypeId` values)
//! - Memory efficient (each unique structure stored once)
//! - Descriptors are immutable once interned, so they can be shared freely
//!
//! Every constructor canonicalizes before interning: record fields are
//! sorted by name, unions are flattened, deduplicated and sorted, and
//! variadic tuple spreads of tuples are spliced in place.

use crate::types::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use tyx_common::interner::{Atom, Interner};
use tyx_common::limits::TYPE_LIST_INLINE;

type TypeListBuffer = SmallVec<[TypeId; TYPE_LIST_INLINE]>;

struct TypeTable {
    key_to_id: FxHashMap<TypeData, TypeId>,
    id_to_key: Vec<TypeData>,
}

struct SliceInterner<T> {
    items: Vec<Arc<[T]>>,
    map: FxHashMap<Arc<[T]>, u32>,
}

impl<T> SliceInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        let empty: Arc<[T]> = Arc::from(Vec::new());
        let mut map = FxHashMap::default();
        map.insert(empty.clone(), 0);
        SliceInterner {
            items: vec![empty],
            map,
        }
    }

    fn intern(&mut self, items: Vec<T>) -> u32 {
        if items.is_empty() {
            return 0;
        }
        if let Some(&id) = self.map.get(items.as_slice()) {
            return id;
        }
        let arc: Arc<[T]> = items.into();
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<[T]>> {
        self.items.get(id as usize).cloned()
    }

    fn empty(&self) -> Arc<[T]> {
        self.items[0].clone()
    }
}

struct ValueInterner<T> {
    items: Vec<Arc<T>>,
    map: FxHashMap<Arc<T>, u32>,
}

impl<T> ValueInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        ValueInterner {
            items: Vec::new(),
            map: FxHashMap::default(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }
        let arc = Arc::new(value);
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<T>> {
        self.items.get(id as usize).cloned()
    }
}

/// Type interning table.
///
/// All constructors take `&self`; tables sit behind `RwLock`s so one
/// interner can be shared by every component of an evaluation.
pub struct TypeInterner {
    /// String interner for property names, hole names and string literals.
    pub string_interner: Interner,
    types: RwLock<TypeTable>,
    type_lists: RwLock<SliceInterner<TypeId>>,
    object_shapes: RwLock<ValueInterner<ObjectShape>>,
    tuple_shapes: RwLock<ValueInterner<TupleShape>>,
    function_shapes: RwLock<ValueInterner<FunctionShape>>,
    applications: RwLock<ValueInterner<TypeApplication>>,
}

impl TypeInterner {
    /// Create a new type interner with pre-registered intrinsics.
    pub fn new() -> Self {
        let mut table = TypeTable {
            key_to_id: FxHashMap::default(),
            id_to_key: Vec::with_capacity(256),
        };
        let builtins = IntrinsicKind::ALL
            .iter()
            .map(|&kind| TypeData::Intrinsic(kind))
            .chain([
                TypeData::Literal(LiteralValue::Boolean(true)),
                TypeData::Literal(LiteralValue::Boolean(false)),
            ]);
        for data in builtins {
            let id = TypeId(table.id_to_key.len() as u32);
            table.id_to_key.push(data);
            table.key_to_id.insert(data, id);
        }
        debug_assert_eq!(table.id_to_key.len() as u32, TypeId::FIRST_USER);

        let string_interner = Interner::new();
        string_interner.intern_common();

        TypeInterner {
            string_interner,
            types: RwLock::new(table),
            type_lists: RwLock::new(SliceInterner::new()),
            object_shapes: RwLock::new(ValueInterner::new()),
            tuple_shapes: RwLock::new(ValueInterner::new()),
            function_shapes: RwLock::new(ValueInterner::new()),
            applications: RwLock::new(ValueInterner::new()),
        }
    }

    /// Intern a string into an Atom.
    pub fn intern_string(&self, s: &str) -> Atom {
        self.string_interner.intern(s)
    }

    /// Resolve an Atom back to its string value.
    pub fn resolve_atom(&self, atom: Atom) -> String {
        self.string_interner.resolve(atom).to_string()
    }

    /// Resolve an Atom without allocating a new String.
    pub fn resolve_atom_ref(&self, atom: Atom) -> Arc<str> {
        self.string_interner.resolve(atom)
    }

    /// Look up the structure behind a `TypeId`.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        let table = self.types.read().ok()?;
        table.id_to_key.get(id.0 as usize).copied()
    }

    /// Number of interned descriptors, including intrinsics.
    pub fn len(&self) -> usize {
        self.types
            .read()
            .map(|table| table.id_to_key.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn intern(&self, data: TypeData) -> TypeId {
        if let Ok(table) = self.types.read()
            && let Some(&id) = table.key_to_id.get(&data)
        {
            return id;
        }
        let Ok(mut table) = self.types.write() else {
            return TypeId::ERROR;
        };
        if let Some(&id) = table.key_to_id.get(&data) {
            return id;
        }
        let id = TypeId(table.id_to_key.len() as u32);
        table.id_to_key.push(data);
        table.key_to_id.insert(data, id);
        id
    }

    // =========================================================================
    // Shape accessors
    // =========================================================================

    pub fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        let lists = self.type_lists.read().expect("type_lists lock poisoned");
        lists.get(id.0).unwrap_or_else(|| lists.empty())
    }

    pub fn object_shape(&self, id: ObjectShapeId) -> Arc<ObjectShape> {
        self.object_shapes
            .read()
            .expect("object_shapes lock poisoned")
            .get(id.0)
            .unwrap_or_else(|| {
                Arc::new(ObjectShape {
                    properties: Vec::new(),
                })
            })
    }

    pub fn tuple_shape(&self, id: TupleShapeId) -> Arc<TupleShape> {
        self.tuple_shapes
            .read()
            .expect("tuple_shapes lock poisoned")
            .get(id.0)
            .unwrap_or_else(|| {
                Arc::new(TupleShape {
                    elements: Vec::new(),
                    has_rest_tail: false,
                    readonly: false,
                })
            })
    }

    pub fn function_shape(&self, id: FunctionShapeId) -> Arc<FunctionShape> {
        self.function_shapes
            .read()
            .expect("function_shapes lock poisoned")
            .get(id.0)
            .unwrap_or_else(|| {
                Arc::new(FunctionShape {
                    params: Vec::new(),
                    return_type: TypeId::ERROR,
                })
            })
    }

    pub fn type_application(&self, id: TypeApplicationId) -> Arc<TypeApplication> {
        self.applications
            .read()
            .expect("applications lock poisoned")
            .get(id.0)
            .unwrap_or_else(|| {
                Arc::new(TypeApplication {
                    name: Atom::NONE,
                    args: Vec::new(),
                })
            })
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn intrinsic(&self, kind: IntrinsicKind) -> TypeId {
        kind.to_type_id()
    }

    pub fn literal(&self, value: LiteralValue) -> TypeId {
        match value {
            LiteralValue::Boolean(true) => TypeId::BOOLEAN_TRUE,
            LiteralValue::Boolean(false) => TypeId::BOOLEAN_FALSE,
            other => self.intern(TypeData::Literal(other)),
        }
    }

    pub fn literal_string(&self, value: &str) -> TypeId {
        let atom = self.intern_string(value);
        self.literal(LiteralValue::String(atom))
    }

    pub fn literal_number(&self, value: f64) -> TypeId {
        self.literal(LiteralValue::Number(OrderedFloat(value)))
    }

    pub fn literal_boolean(&self, value: bool) -> TypeId {
        self.literal(LiteralValue::Boolean(value))
    }

    pub fn literal_bigint(&self, digits: &str) -> TypeId {
        let atom = self.intern_string(digits);
        self.literal(LiteralValue::BigInt(atom))
    }

    /// Intern a record. A later property with the same name replaces an
    /// earlier one; fields are stored sorted by name.
    pub fn object(&self, properties: Vec<PropertyInfo>) -> TypeId {
        let mut by_name: FxHashMap<Atom, PropertyInfo> = FxHashMap::default();
        for prop in properties {
            by_name.insert(prop.name, prop);
        }
        let mut properties: Vec<PropertyInfo> = by_name.into_values().collect();
        properties.sort_by_cached_key(|prop| self.resolve_atom_ref(prop.name));

        let shape_id = {
            let mut shapes = self
                .object_shapes
                .write()
                .expect("object_shapes lock poisoned");
            ObjectShapeId(shapes.intern(ObjectShape { properties }))
        };
        self.intern(TypeData::Object(shape_id))
    }

    /// A mutable tuple of fixed elements.
    pub fn tuple(&self, elements: Vec<TypeId>) -> TypeId {
        self.tuple_with(TupleShape {
            elements,
            has_rest_tail: false,
            readonly: false,
        })
    }

    /// A mutable tuple ending in a variadic `...rest` element.
    pub fn tuple_with_rest(&self, mut elements: Vec<TypeId>, rest: TypeId) -> TypeId {
        elements.push(rest);
        self.tuple_with(TupleShape {
            elements,
            has_rest_tail: true,
            readonly: false,
        })
    }

    pub fn readonly_tuple(&self, elements: Vec<TypeId>) -> TypeId {
        self.tuple_with(TupleShape {
            elements,
            has_rest_tail: false,
            readonly: true,
        })
    }

    /// Intern a tuple shape, splicing a variadic tail that spreads another
    /// tuple (`[1, ...[2, 3]]` is `[1, 2, 3]`).
    pub fn tuple_with(&self, mut shape: TupleShape) -> TypeId {
        if shape.has_rest_tail && shape.elements.is_empty() {
            shape.has_rest_tail = false;
        }
        if let Some(rest) = shape.rest()
            && let Some(TypeData::Tuple(inner_id)) = self.lookup(rest)
        {
            let inner = self.tuple_shape(inner_id);
            shape.elements.pop();
            shape.elements.extend_from_slice(&inner.elements);
            shape.has_rest_tail = inner.has_rest_tail;
        }

        let shape_id = {
            let mut shapes = self
                .tuple_shapes
                .write()
                .expect("tuple_shapes lock poisoned");
            TupleShapeId(shapes.intern(shape))
        };
        self.intern(TypeData::Tuple(shape_id))
    }

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn function(&self, params: Vec<ParamInfo>, return_type: TypeId) -> TypeId {
        let shape_id = {
            let mut shapes = self
                .function_shapes
                .write()
                .expect("function_shapes lock poisoned");
            FunctionShapeId(shapes.intern(FunctionShape {
                params,
                return_type,
            }))
        };
        self.intern(TypeData::Function(shape_id))
    }

    /// Named generic application.
    pub fn application(&self, name: &str, args: Vec<TypeId>) -> TypeId {
        let name = self.intern_string(name);
        let app_id = {
            let mut apps = self
                .applications
                .write()
                .expect("applications lock poisoned");
            TypeApplicationId(apps.intern(TypeApplication { name, args }))
        };
        self.intern(TypeData::Application(app_id))
    }

    /// `Promise<inner>`.
    pub fn promise(&self, inner: TypeId) -> TypeId {
        self.application("Promise", vec![inner])
    }

    /// Pattern placeholder `infer name`.
    pub fn hole(&self, name: &str) -> TypeId {
        let atom = self.intern_string(name);
        self.intern(TypeData::Hole(atom))
    }

    /// Intern a union.
    ///
    /// Normalization:
    /// - nested unions are flattened, `never` members dropped, duplicates removed
    /// - `any` absorbs the union, then `unknown` does
    /// - `true | false` becomes `boolean`, and `boolean` absorbs either literal
    /// - zero members is `never`, one member is that member
    /// - members are sorted by id so member order is irrelevant
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: TypeListBuffer = SmallVec::new();
        for member in members {
            self.push_union_member(&mut flat, member);
        }

        if flat.contains(&TypeId::ANY) {
            return TypeId::ANY;
        }
        if flat.contains(&TypeId::UNKNOWN) {
            return TypeId::UNKNOWN;
        }
        if flat.contains(&TypeId::BOOLEAN_TRUE) && flat.contains(&TypeId::BOOLEAN_FALSE) {
            flat.push(TypeId::BOOLEAN);
        }
        if flat.contains(&TypeId::BOOLEAN) {
            flat.retain(|id| *id != TypeId::BOOLEAN_TRUE && *id != TypeId::BOOLEAN_FALSE);
        }

        flat.sort_unstable();
        flat.dedup();

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                let list_id = {
                    let mut lists = self.type_lists.write().expect("type_lists lock poisoned");
                    TypeListId(lists.intern(flat.into_vec()))
                };
                self.intern(TypeData::Union(list_id))
            }
        }
    }

    pub fn union2(&self, left: TypeId, right: TypeId) -> TypeId {
        self.union(vec![left, right])
    }

    fn push_union_member(&self, flat: &mut TypeListBuffer, member: TypeId) {
        if member == TypeId::NEVER {
            return;
        }
        if let Some(TypeData::Union(list_id)) = self.lookup(member) {
            for &inner in self.type_list(list_id).iter() {
                self.push_union_member(flat, inner);
            }
            return;
        }
        flat.push(member);
    }

    /// Members of a union, or the type itself.
    pub fn union_members(&self, type_id: TypeId) -> Vec<TypeId> {
        match self.lookup(type_id) {
            Some(TypeData::Union(list_id)) => self.type_list(list_id).to_vec(),
            _ => vec![type_id],
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
