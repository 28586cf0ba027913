//! Type descriptor representation.
//!
//! Descriptors are interned: a [`TypeId`] is a small handle into a
//! [`TypeInterner`](crate::TypeInterner) table holding the [`TypeData`].
//! The interner canonicalizes every structure it stores (sorted record
//! fields, flattened and sorted unions), so two descriptors are structurally
//! equivalent exactly when their `TypeId`s are equal.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use tyx_common::interner::Atom;

/// Handle to an interned type descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Internal sentinel for failed computations. Never produced by a
    /// successful operator.
    pub const ERROR: TypeId = TypeId(0);
    pub const NEVER: TypeId = TypeId(1);
    pub const UNKNOWN: TypeId = TypeId(2);
    pub const ANY: TypeId = TypeId(3);
    pub const VOID: TypeId = TypeId(4);
    pub const UNDEFINED: TypeId = TypeId(5);
    pub const NULL: TypeId = TypeId(6);
    pub const BOOLEAN: TypeId = TypeId(7);
    pub const NUMBER: TypeId = TypeId(8);
    pub const STRING: TypeId = TypeId(9);
    pub const BIGINT: TypeId = TypeId(10);
    pub const SYMBOL: TypeId = TypeId(11);
    pub const OBJECT: TypeId = TypeId(12);
    pub const FUNCTION: TypeId = TypeId(13);
    pub const BOOLEAN_TRUE: TypeId = TypeId(14);
    pub const BOOLEAN_FALSE: TypeId = TypeId(15);

    /// First id handed out for user-constructed descriptors.
    pub const FIRST_USER: u32 = 16;

    /// Returns `true` for the pre-registered intrinsic and boolean literal ids.
    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    /// `any`, `unknown` and `never` absorb or vanish in unions.
    #[inline]
    pub fn is_any_unknown_never(self) -> bool {
        matches!(self, Self::ANY | Self::UNKNOWN | Self::NEVER)
    }
}

/// Built-in leaf types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Error,
    Never,
    Unknown,
    Any,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Bigint,
    Symbol,
    Object,
    Function,
}

impl IntrinsicKind {
    /// Intrinsics in `TypeId` order. The interner registers them in exactly
    /// this order so that the `TypeId` constants line up.
    pub const ALL: [IntrinsicKind; 14] = [
        IntrinsicKind::Error,
        IntrinsicKind::Never,
        IntrinsicKind::Unknown,
        IntrinsicKind::Any,
        IntrinsicKind::Void,
        IntrinsicKind::Undefined,
        IntrinsicKind::Null,
        IntrinsicKind::Boolean,
        IntrinsicKind::Number,
        IntrinsicKind::String,
        IntrinsicKind::Bigint,
        IntrinsicKind::Symbol,
        IntrinsicKind::Object,
        IntrinsicKind::Function,
    ];

    pub fn to_type_id(self) -> TypeId {
        TypeId(self as u32)
    }

    pub fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Error => "error",
            IntrinsicKind::Never => "never",
            IntrinsicKind::Unknown => "unknown",
            IntrinsicKind::Any => "any",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Undefined => "undefined",
            IntrinsicKind::Null => "null",
            IntrinsicKind::Boolean => "boolean",
            IntrinsicKind::Number => "number",
            IntrinsicKind::String => "string",
            IntrinsicKind::Bigint => "bigint",
            IntrinsicKind::Symbol => "symbol",
            IntrinsicKind::Object => "object",
            IntrinsicKind::Function => "Function",
        }
    }

    /// Look up an intrinsic by its source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// `f64` wrapper with total equality, hashing and ordering so number
/// literals can be interned. `-0.0` and `0.0` compare equal.
#[derive(Clone, Copy, Debug)]
pub struct OrderedFloat(pub f64);

impl OrderedFloat {
    fn normalized_bits(self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_bits() == other.normalized_bits()
    }
}

impl Eq for OrderedFloat {}

impl Hash for OrderedFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_bits().hash(state);
    }
}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Literal type values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(Atom),
    Number(OrderedFloat),
    Boolean(bool),
    BigInt(Atom),
}

impl LiteralValue {
    /// The primitive a literal widens to.
    pub fn primitive(self) -> TypeId {
        match self {
            LiteralValue::String(_) => TypeId::STRING,
            LiteralValue::Number(_) => TypeId::NUMBER,
            LiteralValue::Boolean(_) => TypeId::BOOLEAN,
            LiteralValue::BigInt(_) => TypeId::BIGINT,
        }
    }
}

/// A record field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub type_id: TypeId,
    pub optional: bool,
    pub readonly: bool,
}

impl PropertyInfo {
    /// A required, mutable field.
    pub fn new(name: Atom, type_id: TypeId) -> Self {
        PropertyInfo {
            name,
            type_id,
            optional: false,
            readonly: false,
        }
    }

    pub fn opt(name: Atom, type_id: TypeId) -> Self {
        PropertyInfo {
            optional: true,
            ..Self::new(name, type_id)
        }
    }

    pub fn readonly(name: Atom, type_id: TypeId) -> Self {
        PropertyInfo {
            readonly: true,
            ..Self::new(name, type_id)
        }
    }
}

/// Record shape. Properties are kept sorted by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShape {
    pub properties: Vec<PropertyInfo>,
}

impl ObjectShape {
    pub fn find(&self, name: Atom) -> Option<&PropertyInfo> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}

/// Tuple shape.
///
/// When `has_rest_tail` is set, the last element is a variadic `...T`
/// element and stores the spread type itself (usually `T[]`, or a hole in
/// patterns such as `[infer H, ...infer R]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleShape {
    pub elements: Vec<TypeId>,
    pub has_rest_tail: bool,
    pub readonly: bool,
}

impl TupleShape {
    /// Elements before the variadic tail.
    pub fn fixed(&self) -> &[TypeId] {
        if self.has_rest_tail {
            &self.elements[..self.elements.len().saturating_sub(1)]
        } else {
            &self.elements
        }
    }

    /// The variadic tail's spread type, if any.
    pub fn rest(&self) -> Option<TypeId> {
        if self.has_rest_tail {
            self.elements.last().copied()
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Function parameter. Names are not part of a signature's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    pub type_id: TypeId,
    pub optional: bool,
    pub rest: bool,
}

impl ParamInfo {
    pub fn required(type_id: TypeId) -> Self {
        ParamInfo {
            type_id,
            optional: false,
            rest: false,
        }
    }

    pub fn optional(type_id: TypeId) -> Self {
        ParamInfo {
            type_id,
            optional: true,
            rest: false,
        }
    }

    pub fn rest(type_id: TypeId) -> Self {
        ParamInfo {
            type_id,
            optional: false,
            rest: true,
        }
    }
}

/// Function signature shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<ParamInfo>,
    pub return_type: TypeId,
}

/// Named generic application, e.g. `Promise<string>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeApplication {
    pub name: Atom,
    pub args: Vec<TypeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShapeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TupleShapeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeApplicationId(pub u32);

/// The structural content behind a [`TypeId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    Object(ObjectShapeId),
    Tuple(TupleShapeId),
    Array(TypeId),
    Function(FunctionShapeId),
    /// Flattened, deduplicated, sorted by id. Never fewer than two members.
    Union(TypeListId),
    Application(TypeApplicationId),
    /// Pattern placeholder (`infer X`).
    Hole(Atom),
}

impl TypeData {
    /// Descriptors with no enumerable structural members. Deep transforms
    /// stop at these.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeData::Intrinsic(_) | TypeData::Literal(_) | TypeData::Function(_) | TypeData::Hole(_)
        )
    }
}
