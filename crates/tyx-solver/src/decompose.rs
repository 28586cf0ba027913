//! Structural projections of tuples, functions and records.
//!
//! These are the building blocks the transforms and operators use instead
//! of matching on `TypeData` directly: head/rest splits, parameter lists,
//! lengths, `T[number]` and `keyof T`.

use crate::diagnostics::ShapeError;
use crate::format::format_number;
use crate::intern::TypeInterner;
use crate::types::*;
use std::sync::Arc;
use tyx_common::interner::Atom;

/// The tuple shape behind `type_id`, if it is a tuple.
pub fn tuple_shape_of(interner: &TypeInterner, type_id: TypeId) -> Option<Arc<TupleShape>> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => Some(interner.tuple_shape(shape_id)),
        _ => None,
    }
}

/// The record shape behind `type_id`, if it is a record.
pub fn object_shape_of(interner: &TypeInterner, type_id: TypeId) -> Option<Arc<ObjectShape>> {
    match interner.lookup(type_id) {
        Some(TypeData::Object(shape_id)) => Some(interner.object_shape(shape_id)),
        _ => None,
    }
}

pub fn function_shape_of(interner: &TypeInterner, type_id: TypeId) -> Option<Arc<FunctionShape>> {
    match interner.lookup(type_id) {
        Some(TypeData::Function(shape_id)) => Some(interner.function_shape(shape_id)),
        _ => None,
    }
}

/// Tuples and arrays.
pub fn is_array_like(interner: &TypeInterner, type_id: TypeId) -> bool {
    matches!(
        interner.lookup(type_id),
        Some(TypeData::Tuple(_) | TypeData::Array(_))
    )
}

/// Element type of a variadic spread: `...T[]` spreads `T`.
pub fn rest_element(interner: &TypeInterner, rest: TypeId) -> TypeId {
    match interner.lookup(rest) {
        Some(TypeData::Array(element)) => element,
        _ => rest,
    }
}

/// `[H, ...R]` split of a tuple.
///
/// Returns `Ok(None)` when there is no fixed head element: the empty tuple,
/// a pure variadic tuple `[...T[]]`, or a plain array. Anything that is not
/// a tuple or array is rejected.
pub fn split_head(
    interner: &TypeInterner,
    type_id: TypeId,
) -> Result<Option<(TypeId, TypeId)>, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            let Some(&head) = shape.fixed().first() else {
                return Ok(None);
            };
            let rest = interner.tuple_with(TupleShape {
                elements: shape.elements[1..].to_vec(),
                has_rest_tail: shape.has_rest_tail,
                readonly: shape.readonly,
            });
            Ok(Some((head, rest)))
        }
        Some(TypeData::Array(_)) => Ok(None),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

/// `[...I, L]` split of a tuple. A variadic tail has no known last element.
pub fn split_last(
    interner: &TypeInterner,
    type_id: TypeId,
) -> Result<Option<(TypeId, TypeId)>, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            if shape.has_rest_tail {
                return Ok(None);
            }
            let Some((&last, init)) = shape.elements.split_last() else {
                return Ok(None);
            };
            let init = interner.tuple_with(TupleShape {
                elements: init.to_vec(),
                has_rest_tail: false,
                readonly: shape.readonly,
            });
            Ok(Some((init, last)))
        }
        Some(TypeData::Array(_)) => Ok(None),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

pub fn params_of(interner: &TypeInterner, type_id: TypeId) -> Result<Vec<ParamInfo>, ShapeError> {
    function_shape_of(interner, type_id)
        .map(|shape| shape.params.clone())
        .ok_or(ShapeError::NotAFunction { found: type_id })
}

/// Parameter list as a tuple; a rest parameter becomes the variadic tail.
/// Optional parameters are kept as plain elements.
pub fn params_tuple(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    let params = params_of(interner, type_id)?;
    let has_rest_tail = params.last().is_some_and(|param| param.rest);
    let elements = params.iter().map(|param| param.type_id).collect();
    Ok(interner.tuple_with(TupleShape {
        elements,
        has_rest_tail,
        readonly: false,
    }))
}

pub fn return_of(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    function_shape_of(interner, type_id)
        .map(|shape| shape.return_type)
        .ok_or(ShapeError::NotAFunction { found: type_id })
}

/// `T['length']`: a number literal for fixed tuples, `number` for arrays and
/// variadic tuples.
pub fn tuple_length(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            if shape.has_rest_tail {
                Ok(TypeId::NUMBER)
            } else {
                Ok(interner.literal_number(shape.elements.len() as f64))
            }
        }
        Some(TypeData::Array(_)) => Ok(TypeId::NUMBER),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

/// `T[number]`: the union of all element types.
pub fn element_union(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            let mut members: Vec<TypeId> = shape.fixed().to_vec();
            if let Some(rest) = shape.rest() {
                members.push(rest_element(interner, rest));
            }
            Ok(interner.union(members))
        }
        Some(TypeData::Array(element)) => Ok(element),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

/// `T[I]` for a numeric index.
pub fn element_at(interner: &TypeInterner, type_id: TypeId, index: usize) -> Result<TypeId, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            let fixed = shape.fixed();
            if let Some(&element) = fixed.get(index) {
                return Ok(element);
            }
            match shape.rest() {
                Some(rest) => Ok(rest_element(interner, rest)),
                None => Err(ShapeError::IndexOutOfRange {
                    index,
                    length: fixed.len(),
                }),
            }
        }
        Some(TypeData::Array(element)) => Ok(element),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

/// `keyof T` for a record: the union of its string-literal keys.
pub fn keys_of(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    let shape = object_shape_of(interner, type_id).ok_or(ShapeError::NotARecord { found: type_id })?;
    let keys = shape
        .properties
        .iter()
        .map(|prop| interner.literal(LiteralValue::String(prop.name)))
        .collect();
    Ok(interner.union(keys))
}

/// The property name a literal denotes when used as a key (`PropertyKey`).
/// Number keys are stored under their canonical decimal spelling.
pub fn property_key(interner: &TypeInterner, type_id: TypeId) -> Result<Atom, ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Literal(LiteralValue::String(atom))) => Ok(atom),
        Some(TypeData::Literal(LiteralValue::Number(OrderedFloat(value)))) => {
            Ok(interner.intern_string(&format_number(value)))
        }
        _ => Err(ShapeError::InvalidPropertyKey { found: type_id }),
    }
}

/// Property names selected by a key argument (a key literal or a union of
/// them). Every name must be a key of `shape`.
pub fn selected_keys(
    interner: &TypeInterner,
    object: TypeId,
    shape: &ObjectShape,
    keys: TypeId,
) -> Result<Vec<Atom>, ShapeError> {
    let mut names = Vec::new();
    if keys == TypeId::NEVER {
        return Ok(names);
    }
    for key in interner.union_members(keys) {
        let name = match interner.lookup(key) {
            Some(TypeData::Literal(LiteralValue::String(atom))) => atom,
            _ => return Err(ShapeError::UnknownKey { key, object }),
        };
        if shape.find(name).is_none() {
            return Err(ShapeError::UnknownKey { key, object });
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
#[path = "../tests/decompose_tests.rs"]
mod tests;
