//! Descriptor transforms: mapped-type field rules, variadic tuple rules and
//! conditional types.
//!
//! Field rules are the equivalent of homomorphic mapped types
//! (`{ readonly [P in keyof T]: T[P] }`): a [`FieldRule`] decides per
//! property whether it is kept and with which modifiers. Tuple rules are
//! the variadic spreads `[...T, U]`, `[U, ...T]` and `[...A, ...B]`.
//!
//! Conditional types distribute over a union check type only when
//! `is_distributive` is set, which mirrors a naked type parameter in
//! `T extends U ? X : Y`. Field rules never distribute.

use crate::decompose::{keys_of, object_shape_of, selected_keys};
use crate::diagnostics::ShapeError;
use crate::infer::{Binding, infer_into, substitute};
use crate::intern::TypeInterner;
use crate::recursion::{DepthCounter, RecursionProfile};
use crate::types::*;
use tracing::{debug, trace};
use tyx_common::interner::Atom;
use tyx_common::limits::MAX_DISTRIBUTION_MEMBERS;

// =============================================================================
// Field rules
// =============================================================================

/// Per-property rule applied by [`Transformer::map_fields`].
pub trait FieldRule {
    /// Check the rule's key arguments against the record before mapping.
    fn validate(
        &self,
        _interner: &TypeInterner,
        _object: TypeId,
        _shape: &ObjectShape,
    ) -> Result<(), ShapeError> {
        Ok(())
    }

    /// Map one property. `None` drops it from the output.
    fn apply(
        &self,
        transformer: &mut Transformer<'_>,
        prop: &PropertyInfo,
    ) -> Result<Option<PropertyInfo>, ShapeError>;
}

/// Whether the string key `name` is a member of the key union `keys`.
fn key_in(interner: &TypeInterner, name: Atom, keys: TypeId) -> bool {
    let literal = interner.literal(LiteralValue::String(name));
    literal == keys || interner.union_members(keys).contains(&literal)
}

/// `{ [P in K]: T[P] }` with `K extends keyof T`.
pub struct Pick {
    pub keys: TypeId,
}

impl FieldRule for Pick {
    fn validate(
        &self,
        interner: &TypeInterner,
        object: TypeId,
        shape: &ObjectShape,
    ) -> Result<(), ShapeError> {
        selected_keys(interner, object, shape, self.keys).map(|_| ())
    }

    fn apply(
        &self,
        transformer: &mut Transformer<'_>,
        prop: &PropertyInfo,
    ) -> Result<Option<PropertyInfo>, ShapeError> {
        Ok(key_in(transformer.interner, prop.name, self.keys).then(|| prop.clone()))
    }
}

/// Every field becomes readonly; optionality is preserved.
pub struct ReadonlyAll;

impl FieldRule for ReadonlyAll {
    fn apply(
        &self,
        _transformer: &mut Transformer<'_>,
        prop: &PropertyInfo,
    ) -> Result<Option<PropertyInfo>, ShapeError> {
        Ok(Some(PropertyInfo {
            readonly: true,
            ..prop.clone()
        }))
    }
}

/// Readonly for the fields named in `keys` (all fields when `None`); other
/// fields are copied unchanged.
pub struct ReadonlyKeys {
    pub keys: Option<TypeId>,
}

impl FieldRule for ReadonlyKeys {
    fn validate(
        &self,
        interner: &TypeInterner,
        object: TypeId,
        shape: &ObjectShape,
    ) -> Result<(), ShapeError> {
        match self.keys {
            Some(keys) => selected_keys(interner, object, shape, keys).map(|_| ()),
            None => Ok(()),
        }
    }

    fn apply(
        &self,
        transformer: &mut Transformer<'_>,
        prop: &PropertyInfo,
    ) -> Result<Option<PropertyInfo>, ShapeError> {
        let selected = match self.keys {
            Some(keys) => key_in(transformer.interner, prop.name, keys),
            None => true,
        };
        Ok(Some(PropertyInfo {
            readonly: prop.readonly || selected,
            ..prop.clone()
        }))
    }
}

/// Readonly all the way down. See [`Transformer::deep_readonly`].
pub struct DeepReadonly;

impl FieldRule for DeepReadonly {
    fn apply(
        &self,
        transformer: &mut Transformer<'_>,
        prop: &PropertyInfo,
    ) -> Result<Option<PropertyInfo>, ShapeError> {
        let type_id = transformer.deep_readonly(prop.type_id)?;
        Ok(Some(PropertyInfo {
            type_id,
            readonly: true,
            ..prop.clone()
        }))
    }
}

// =============================================================================
// Tuple rules
// =============================================================================

/// Variadic tuple constructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TupleRule {
    /// `[...T, U]`
    Push(TypeId),
    /// `[U, ...T]`
    Unshift(TypeId),
    /// `[...T, ...U]`
    Concat(TypeId),
}

/// Elements of an array-like operand, as `(fixed, variadic tail)`.
fn spread_parts(
    interner: &TypeInterner,
    type_id: TypeId,
) -> Result<(Vec<TypeId>, Option<TypeId>), ShapeError> {
    match interner.lookup(type_id) {
        Some(TypeData::Tuple(shape_id)) => {
            let shape = interner.tuple_shape(shape_id);
            Ok((shape.fixed().to_vec(), shape.rest()))
        }
        Some(TypeData::Array(_)) => Ok((Vec::new(), Some(type_id))),
        _ => Err(ShapeError::NotATuple { found: type_id }),
    }
}

// =============================================================================
// Conditional types
// =============================================================================

/// `check extends extends_type ? true_type : false_type`.
///
/// When `check_param` is set, the branches may refer to the check type as
/// the hole of that name (`T extends U ? never : T`). Holes inside
/// `extends_type` are `infer` positions and are visible in `true_type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalType {
    pub check_param: Option<Atom>,
    pub extends_type: TypeId,
    pub true_type: TypeId,
    pub false_type: TypeId,
    pub is_distributive: bool,
}

/// Eager branch selection.
#[inline]
pub fn branch(condition: bool, if_true: TypeId, if_false: TypeId) -> TypeId {
    if condition { if_true } else { if_false }
}

/// Members a distributive rule iterates: union members, with `boolean`
/// expanded to `true | false`.
pub fn distribution_members(interner: &TypeInterner, type_id: TypeId) -> Vec<TypeId> {
    let mut members = Vec::new();
    for member in interner.union_members(type_id) {
        if member == TypeId::BOOLEAN {
            members.push(TypeId::BOOLEAN_TRUE);
            members.push(TypeId::BOOLEAN_FALSE);
        } else {
            members.push(member);
        }
    }
    members
}

/// `T extends U ? never : T`, distributive over `T`.
pub fn exclude_rule(interner: &TypeInterner, excluded: TypeId) -> ConditionalType {
    ConditionalType {
        check_param: Some(interner.intern_string("T")),
        extends_type: excluded,
        true_type: TypeId::NEVER,
        false_type: interner.hole("T"),
        is_distributive: true,
    }
}

/// Apply `f` to `type_id`, or to each of its members (re-unioned) when
/// `distributive` is set. A distributive application over `never` is `never`.
pub fn distribute<F>(
    interner: &TypeInterner,
    type_id: TypeId,
    distributive: bool,
    mut f: F,
) -> Result<TypeId, ShapeError>
where
    F: FnMut(TypeId) -> Result<TypeId, ShapeError>,
{
    if !distributive {
        return f(type_id);
    }
    if type_id == TypeId::NEVER {
        return Ok(TypeId::NEVER);
    }
    let members = distribution_members(interner, type_id);
    if members.len() > MAX_DISTRIBUTION_MEMBERS {
        return Err(ShapeError::DepthExceeded {
            limit: MAX_DISTRIBUTION_MEMBERS as u32,
        });
    }
    trace!(members = members.len(), "distributing over union");
    let mut results = Vec::with_capacity(members.len());
    for member in members {
        results.push(f(member)?);
    }
    Ok(interner.union(results))
}

// =============================================================================
// Transformer
// =============================================================================

/// Applies field, tuple and conditional rules.
pub struct Transformer<'a> {
    interner: &'a TypeInterner,
    depth: DepthCounter,
}

impl<'a> Transformer<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Transformer {
            interner,
            depth: DepthCounter::with_profile(RecursionProfile::Transform),
        }
    }

    pub fn interner(&self) -> &'a TypeInterner {
        self.interner
    }

    /// `Pick<T, Exclude<keyof T, K>>` with `K extends keyof T`. The key
    /// filter is the distributive [`exclude_rule`] over `keyof T`.
    pub fn omit(&mut self, object: TypeId, keys: TypeId) -> Result<TypeId, ShapeError> {
        let shape = object_shape_of(self.interner, object)
            .ok_or(ShapeError::NotARecord { found: object })?;
        selected_keys(self.interner, object, &shape, keys)?;
        let remaining =
            self.evaluate_conditional(keys_of(self.interner, object)?, &exclude_rule(self.interner, keys))?;
        self.map_fields(object, &Pick { keys: remaining })
    }

    /// Map every field of a record through `rule`.
    pub fn map_fields<R: FieldRule + ?Sized>(
        &mut self,
        object: TypeId,
        rule: &R,
    ) -> Result<TypeId, ShapeError> {
        let shape = object_shape_of(self.interner, object)
            .ok_or(ShapeError::NotARecord { found: object })?;
        rule.validate(self.interner, object, &shape)?;

        if !self.depth.enter() {
            return Err(ShapeError::DepthExceeded {
                limit: self.depth.max_depth(),
            });
        }
        let mapped = self.map_properties(&shape.properties, rule);
        self.depth.leave();

        Ok(self.interner.object(mapped?))
    }

    fn map_properties<R: FieldRule + ?Sized>(
        &mut self,
        properties: &[PropertyInfo],
        rule: &R,
    ) -> Result<Vec<PropertyInfo>, ShapeError> {
        let mut mapped = Vec::with_capacity(properties.len());
        for prop in properties {
            if let Some(out) = rule.apply(self, prop)? {
                mapped.push(out);
            }
        }
        Ok(mapped)
    }

    /// Recursive readonly.
    ///
    /// Records and non-empty tuples are rebuilt with every member readonly
    /// (tuples become `readonly [...]`). Unions are mapped member-wise.
    /// Everything else, functions included, is returned untouched.
    pub fn deep_readonly(&mut self, type_id: TypeId) -> Result<TypeId, ShapeError> {
        match self.interner.lookup(type_id) {
            Some(TypeData::Object(shape_id)) => {
                if self.interner.object_shape(shape_id).properties.is_empty() {
                    return Ok(type_id);
                }
                self.map_fields(type_id, &DeepReadonly)
            }
            Some(TypeData::Tuple(shape_id)) => {
                let shape = self.interner.tuple_shape(shape_id);
                if shape.is_empty() {
                    return Ok(type_id);
                }
                if !self.depth.enter() {
                    return Err(ShapeError::DepthExceeded {
                        limit: self.depth.max_depth(),
                    });
                }
                let elements = self.deep_readonly_all(&shape.elements);
                self.depth.leave();
                Ok(self.interner.tuple_with(TupleShape {
                    elements: elements?,
                    has_rest_tail: shape.has_rest_tail,
                    readonly: true,
                }))
            }
            Some(TypeData::Union(list_id)) => {
                let members = self.interner.type_list(list_id);
                let mapped = self.deep_readonly_all(&members)?;
                Ok(self.interner.union(mapped))
            }
            _ => Ok(type_id),
        }
    }

    fn deep_readonly_all(&mut self, types: &[TypeId]) -> Result<Vec<TypeId>, ShapeError> {
        types.iter().map(|&ty| self.deep_readonly(ty)).collect()
    }

    /// Apply a variadic tuple rule.
    ///
    /// A spread may only contribute a variadic tail in last position, so
    /// `Push` onto an open-ended tuple and `Concat` of an open-ended tuple
    /// with a non-empty one are rejected.
    pub fn map_tuple(&mut self, tuple: TypeId, rule: TupleRule) -> Result<TypeId, ShapeError> {
        let (mut fixed, rest) = spread_parts(self.interner, tuple)?;
        let (elements, rest) = match rule {
            TupleRule::Push(element) => {
                if let Some(rest) = rest {
                    return Err(ShapeError::VariadicPosition { found: rest });
                }
                fixed.push(element);
                (fixed, None)
            }
            TupleRule::Unshift(element) => {
                fixed.insert(0, element);
                (fixed, rest)
            }
            TupleRule::Concat(other) => {
                let (other_fixed, other_rest) = spread_parts(self.interner, other)?;
                if let Some(rest) = rest {
                    if !other_fixed.is_empty() || other_rest.is_some() {
                        return Err(ShapeError::VariadicPosition { found: rest });
                    }
                    (fixed, Some(rest))
                } else {
                    fixed.extend(other_fixed);
                    (fixed, other_rest)
                }
            }
        };
        trace!(?rule, elements = elements.len(), "tuple rule applied");
        Ok(match rest {
            Some(rest) => self.interner.tuple_with_rest(elements, rest),
            None => self.interner.tuple(elements),
        })
    }

    /// Evaluate a conditional type for `check`.
    pub fn evaluate_conditional(
        &mut self,
        check: TypeId,
        cond: &ConditionalType,
    ) -> Result<TypeId, ShapeError> {
        let interner = self.interner;
        distribute(interner, check, cond.is_distributive, |member| {
            Ok(evaluate_conditional_member(interner, member, cond))
        })
    }
}

/// Widen literals to their primitives, as for a value passed to a
/// non-`const` generic parameter: `123` becomes `number`, and
/// `{ value: 'Hello World' }` becomes `{ value: string }`.
pub fn widen_literals(interner: &TypeInterner, type_id: TypeId) -> TypeId {
    match interner.lookup(type_id) {
        Some(TypeData::Literal(value)) => value.primitive(),
        Some(TypeData::Object(shape_id)) => {
            let properties = interner
                .object_shape(shape_id)
                .properties
                .iter()
                .map(|prop| PropertyInfo {
                    type_id: widen_literals(interner, prop.type_id),
                    ..prop.clone()
                })
                .collect();
            interner.object(properties)
        }
        Some(TypeData::Union(list_id)) => {
            let members = interner
                .type_list(list_id)
                .iter()
                .map(|&member| widen_literals(interner, member))
                .collect();
            interner.union(members)
        }
        _ => type_id,
    }
}

fn evaluate_conditional_member(
    interner: &TypeInterner,
    check: TypeId,
    cond: &ConditionalType,
) -> TypeId {
    let mut binding = Binding::default();
    if let Some(param) = cond.check_param {
        binding.insert(param, check);
    }
    let false_branch = substitute(interner, cond.false_type, &binding);

    // `any extends X` takes both branches unless X is a top type.
    if check == TypeId::ANY
        && !matches!(cond.extends_type, TypeId::ANY | TypeId::UNKNOWN)
    {
        let mut true_binding = binding.clone();
        let matched = infer_into(interner, cond.extends_type, check, &mut true_binding);
        let true_branch = substitute(interner, cond.true_type, &true_binding);
        debug!(matched, "conditional on `any` takes both branches");
        return interner.union2(true_branch, false_branch);
    }

    if infer_into(interner, cond.extends_type, check, &mut binding) {
        substitute(interner, cond.true_type, &binding)
    } else {
        false_branch
    }
}

#[cfg(test)]
#[path = "../tests/transform_tests.rs"]
mod tests;
