//! Type-level operators.
//!
//! Each [`TypeOperator`] is a type-level function applied to concrete
//! descriptors, written in terms of the decomposer, transformer and
//! inferencer. Operators whose generic constraints the arguments violate
//! (`Pick<Todo, 'invalid'>`, `Length<5>`) evaluate to a [`ShapeError`].
//!
//! ```typescript
//! type MyExclude<T, U> = T extends U ? never : T;
//! type First<T extends any[]> = T extends [infer L, ...infer R] ? L : never;
//! type Includes<T extends readonly any[], U> = T extends [infer L, ...infer R]
//!   ? Equal<L, U> extends true ? true : Includes<R, U>
//!   : false;
//! ```

use crate::decompose::{
    element_at, element_union, function_shape_of, property_key, split_head, split_last,
    tuple_length, tuple_shape_of,
};
use crate::diagnostics::ShapeError;
use crate::infer::awaited;
use crate::intern::TypeInterner;
use crate::recursion::{DepthCounter, RecursionProfile};
use crate::subtype::{SubtypeChecker, is_subtype_of};
use crate::transform::{
    ConditionalType, DeepReadonly, Pick, ReadonlyAll, ReadonlyKeys, Transformer, TupleRule,
    distribute, exclude_rule, widen_literals,
};
use crate::types::*;
use rustc_hash::FxHashMap;
use tracing::debug;
use tyx_common::interner::Atom;

/// One `.option(key, value)` call of a chainable-options builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainOption {
    pub key: Atom,
    pub value: TypeId,
}

/// A type-level function applied to concrete arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeOperator {
    /// The argument itself (`type HelloWorld = string`).
    Identity(TypeId),
    Pick { object: TypeId, keys: TypeId },
    Omit { object: TypeId, keys: TypeId },
    Readonly(TypeId),
    /// `MyReadonly2<T, K extends keyof T = keyof T>`.
    ReadonlyKeys { object: TypeId, keys: Option<TypeId> },
    DeepReadonly(TypeId),
    /// `{ [V in T[number]]: V }`
    TupleToObject(TypeId),
    TupleToUnion(TypeId),
    First(TypeId),
    Last(TypeId),
    Length(TypeId),
    Exclude { union: TypeId, excluded: TypeId },
    Awaited(TypeId),
    If {
        condition: TypeId,
        then_type: TypeId,
        else_type: TypeId,
    },
    Concat(TypeId, TypeId),
    Includes { tuple: TypeId, item: TypeId },
    Push { tuple: TypeId, item: TypeId },
    Unshift { tuple: TypeId, item: TypeId },
    Parameters(TypeId),
    ReturnType(TypeId),
    TupleElementAt { tuple: TypeId, index: usize },
    /// `a.option(k1, v1).option(k2, v2)....get()`, rejecting any call that
    /// sets a key an earlier call already set.
    Chain(Vec<ChainOption>),
    /// The type `.get()` yields for the same calls when redefinitions are
    /// let through: each later call replaces its key
    /// (`Omit<T, K> & Record<K, V>`).
    ChainResult(Vec<ChainOption>),
}

impl TypeOperator {
    /// Operator name as written in reports.
    pub fn name(&self) -> &'static str {
        match self {
            TypeOperator::Identity(_) => "Identity",
            TypeOperator::Pick { .. } => "Pick",
            TypeOperator::Omit { .. } => "Omit",
            TypeOperator::Readonly(_) => "Readonly",
            TypeOperator::ReadonlyKeys { .. } => "Readonly2",
            TypeOperator::DeepReadonly(_) => "DeepReadonly",
            TypeOperator::TupleToObject(_) => "TupleToObject",
            TypeOperator::TupleToUnion(_) => "TupleToUnion",
            TypeOperator::First(_) => "First",
            TypeOperator::Last(_) => "Last",
            TypeOperator::Length(_) => "Length",
            TypeOperator::Exclude { .. } => "Exclude",
            TypeOperator::Awaited(_) => "Awaited",
            TypeOperator::If { .. } => "If",
            TypeOperator::Concat(..) => "Concat",
            TypeOperator::Includes { .. } => "Includes",
            TypeOperator::Push { .. } => "Push",
            TypeOperator::Unshift { .. } => "Unshift",
            TypeOperator::Parameters(_) => "Parameters",
            TypeOperator::ReturnType(_) => "ReturnType",
            TypeOperator::TupleElementAt { .. } => "TupleElementAt",
            TypeOperator::Chain(_) => "Chain",
            TypeOperator::ChainResult(_) => "ChainResult",
        }
    }
}

/// Evaluate an operator to a descriptor, or reject it.
#[tracing::instrument(level = "debug", skip(interner, op), fields(operator = op.name()))]
pub fn evaluate_operator(interner: &TypeInterner, op: &TypeOperator) -> Result<TypeId, ShapeError> {
    let result = evaluate(interner, op);
    match &result {
        Ok(type_id) => debug!(result = type_id.0, "evaluated"),
        Err(err) => debug!(error = %err, "rejected"),
    }
    result
}

fn evaluate(interner: &TypeInterner, op: &TypeOperator) -> Result<TypeId, ShapeError> {
    let mut tx = Transformer::new(interner);
    match *op {
        TypeOperator::Identity(type_id) => Ok(type_id),
        TypeOperator::Pick { object, keys } => tx.map_fields(object, &Pick { keys }),
        TypeOperator::Omit { object, keys } => tx.omit(object, keys),
        TypeOperator::Readonly(object) => tx.map_fields(object, &ReadonlyAll),
        TypeOperator::ReadonlyKeys { object, keys } => {
            tx.map_fields(object, &ReadonlyKeys { keys })
        }
        TypeOperator::DeepReadonly(object) => tx.map_fields(object, &DeepReadonly),
        TypeOperator::TupleToObject(tuple) => tuple_to_object(interner, tuple),
        TypeOperator::TupleToUnion(tuple) => element_union(interner, tuple),
        // `T extends [infer H, ...infer _]` with a naked `T`: distributes.
        TypeOperator::First(tuple) => distribute(interner, tuple, true, |member| {
            Ok(split_head(interner, member)?.map_or(TypeId::NEVER, |(head, _)| head))
        }),
        // `T extends [...infer _, infer L]`: distributes.
        TypeOperator::Last(tuple) => distribute(interner, tuple, true, |member| {
            Ok(split_last(interner, member)?.map_or(TypeId::NEVER, |(_, last)| last))
        }),
        TypeOperator::Length(tuple) => tuple_length(interner, tuple),
        TypeOperator::Exclude { union, excluded } => {
            tx.evaluate_conditional(union, &exclude_rule(interner, excluded))
        }
        TypeOperator::Awaited(type_id) => awaited(interner, type_id),
        TypeOperator::If {
            condition,
            then_type,
            else_type,
        } => {
            if !is_subtype_of(interner, condition, TypeId::BOOLEAN) {
                return Err(ShapeError::NotABoolean { found: condition });
            }
            let rule = ConditionalType {
                check_param: None,
                extends_type: TypeId::BOOLEAN_TRUE,
                true_type: then_type,
                false_type: else_type,
                is_distributive: true,
            };
            tx.evaluate_conditional(condition, &rule)
        }
        TypeOperator::Concat(left, right) => tx.map_tuple(left, TupleRule::Concat(right)),
        // Distributes over a union of tuples; mixed answers give `boolean`.
        TypeOperator::Includes { tuple, item } => {
            distribute(interner, tuple, true, |member| includes(interner, member, item))
        }
        TypeOperator::Push { tuple, item } => tx.map_tuple(tuple, TupleRule::Push(item)),
        TypeOperator::Unshift { tuple, item } => tx.map_tuple(tuple, TupleRule::Unshift(item)),
        TypeOperator::Parameters(function) => {
            if function_shape_of(interner, function).is_none() {
                return Err(ShapeError::NotAFunction { found: function });
            }
            let params = interner.hole("P");
            let rule = ConditionalType {
                check_param: None,
                extends_type: interner.function(vec![ParamInfo::rest(params)], TypeId::ANY),
                true_type: params,
                false_type: TypeId::NEVER,
                is_distributive: true,
            };
            tx.evaluate_conditional(function, &rule)
        }
        TypeOperator::ReturnType(function) => {
            let ret = interner.hole("R");
            let rule = ConditionalType {
                check_param: None,
                extends_type: interner.function(vec![ParamInfo::rest(TypeId::ANY)], ret),
                true_type: ret,
                false_type: TypeId::NEVER,
                is_distributive: true,
            };
            tx.evaluate_conditional(function, &rule)
        }
        TypeOperator::TupleElementAt { tuple, index } => element_at(interner, tuple, index),
        TypeOperator::Chain(ref options) => chain(interner, options, true),
        TypeOperator::ChainResult(ref options) => chain(interner, options, false),
    }
}

/// Each element must be usable as a property key; it becomes both the key
/// and the value type.
fn tuple_to_object(interner: &TypeInterner, tuple: TypeId) -> Result<TypeId, ShapeError> {
    let shape = tuple_shape_of(interner, tuple).ok_or(ShapeError::NotATuple { found: tuple })?;
    if let Some(rest) = shape.rest() {
        return Err(ShapeError::VariadicPosition { found: rest });
    }
    let mut properties = Vec::with_capacity(shape.elements.len());
    for &element in &shape.elements {
        let name = property_key(interner, element)?;
        properties.push(PropertyInfo::new(name, element));
    }
    Ok(interner.object(properties))
}

/// Head/tail walk comparing each element to `item` by strict identity.
fn includes(interner: &TypeInterner, tuple: TypeId, item: TypeId) -> Result<TypeId, ShapeError> {
    let checker = SubtypeChecker::new(interner);
    let mut steps = DepthCounter::with_profile(RecursionProfile::TupleWalk);
    let mut current = tuple;
    while let Some((head, rest)) = split_head(interner, current)? {
        if !steps.enter() {
            return Err(ShapeError::DepthExceeded {
                limit: steps.max_depth(),
            });
        }
        if checker.is_identical(head, item) {
            return Ok(TypeId::BOOLEAN_TRUE);
        }
        current = rest;
    }
    Ok(TypeId::BOOLEAN_FALSE)
}

/// Accumulate `.option(key, value)` calls into a record.
///
/// Values are widened as a non-`const` generic argument would be. With
/// `reject_redefinition`, setting a key twice is a [`ShapeError::DuplicateKey`]
/// whatever the new value; otherwise the later value replaces the field.
fn chain(
    interner: &TypeInterner,
    options: &[ChainOption],
    reject_redefinition: bool,
) -> Result<TypeId, ShapeError> {
    let mut fields: FxHashMap<Atom, TypeId> = FxHashMap::default();
    for option in options {
        let value = widen_literals(interner, option.value);
        if fields.insert(option.key, value).is_some() && reject_redefinition {
            return Err(ShapeError::DuplicateKey { key: option.key });
        }
    }
    let properties = fields
        .into_iter()
        .map(|(name, type_id)| PropertyInfo::new(name, type_id))
        .collect();
    Ok(interner.object(properties))
}

#[cfg(test)]
#[path = "../tests/operators_tests.rs"]
mod tests;
