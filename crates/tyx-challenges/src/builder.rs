//! Shorthand constructors for writing fixtures.

use tyx_solver::{ParamInfo, PropertyInfo, TypeId, TypeInterner};

/// Descriptor builder bound to one interner.
pub struct Fixtures<'a> {
    pub interner: &'a TypeInterner,
}

/// Field modifiers for [`Fixtures::record`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Plain,
    Optional,
    Readonly,
    ReadonlyOptional,
}

impl<'a> Fixtures<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Fixtures { interner }
    }

    /// `'value'`
    pub fn str(&self, value: &str) -> TypeId {
        self.interner.literal_string(value)
    }

    pub fn num(&self, value: f64) -> TypeId {
        self.interner.literal_number(value)
    }

    pub fn strs(&self, values: &[&str]) -> Vec<TypeId> {
        values.iter().map(|value| self.str(value)).collect()
    }

    /// Union of string-literal keys: `'a' | 'b'`.
    pub fn keys(&self, names: &[&str]) -> TypeId {
        self.interner.union(self.strs(names))
    }

    pub fn union(&self, members: &[TypeId]) -> TypeId {
        self.interner.union(members.to_vec())
    }

    /// `{ a: A; b: B }`
    pub fn obj(&self, fields: &[(&str, TypeId)]) -> TypeId {
        self.record(
            &fields
                .iter()
                .map(|&(name, type_id)| (name, type_id, Field::Plain))
                .collect::<Vec<_>>(),
        )
    }

    /// `{ readonly a: A; readonly b: B }`
    pub fn readonly_obj(&self, fields: &[(&str, TypeId)]) -> TypeId {
        self.record(
            &fields
                .iter()
                .map(|&(name, type_id)| (name, type_id, Field::Readonly))
                .collect::<Vec<_>>(),
        )
    }

    pub fn record(&self, fields: &[(&str, TypeId, Field)]) -> TypeId {
        let properties = fields
            .iter()
            .map(|&(name, type_id, field)| PropertyInfo {
                name: self.interner.intern_string(name),
                type_id,
                optional: matches!(field, Field::Optional | Field::ReadonlyOptional),
                readonly: matches!(field, Field::Readonly | Field::ReadonlyOptional),
            })
            .collect();
        self.interner.object(properties)
    }

    /// `[A, B]`
    pub fn tuple(&self, elements: &[TypeId]) -> TypeId {
        self.interner.tuple(elements.to_vec())
    }

    /// `readonly [A, B]`, the type of an `as const` array literal.
    pub fn const_tuple(&self, elements: &[TypeId]) -> TypeId {
        self.interner.readonly_tuple(elements.to_vec())
    }

    /// `(arg0: A, arg1: B) => R`
    pub fn func(&self, params: &[TypeId], ret: TypeId) -> TypeId {
        let params = params.iter().map(|&type_id| ParamInfo::required(type_id)).collect();
        self.interner.function(params, ret)
    }

    pub fn promise(&self, inner: TypeId) -> TypeId {
        self.interner.promise(inner)
    }
}
