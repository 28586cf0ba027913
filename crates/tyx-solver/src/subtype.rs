//! Structural equivalence and subtype checking.
//!
//! Equivalence is handle identity: the interner canonicalizes every
//! descriptor, so two descriptors are structurally identical exactly when
//! their `TypeId`s are equal. This is deliberately strict: `false` is not
//! `boolean`, `{ a: 1 }` is not `{ readonly a: 1 }`, and `1` is not `1 | 2`.
//!
//! Subtyping implements the assignability used by conditional types
//! (`S extends T ? .. : ..`):
//! - literal widening (`"a"` is a subtype of `string`)
//! - `any` compatible in both directions, `never` below and `unknown` above everything
//! - union source needs every member, union target needs some member
//! - record width subtyping with optional/required rules
//! - tuples element-wise with variadic tails, tuples below arrays
//! - functions with contravariant parameters and covariant return
//! - every function below the `Function` intrinsic

use crate::intern::TypeInterner;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::*;
use tracing::trace;

/// Result of a subtype check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubtypeResult {
    True,
    False,
    /// The pair is already being compared further up the stack. Treated as
    /// success (coinductive).
    CycleDetected,
    /// The comparison went deeper than `MAX_SUBTYPE_DEPTH`. Treated as failure.
    DepthExceeded,
}

impl SubtypeResult {
    #[inline]
    pub fn is_true(self) -> bool {
        matches!(self, SubtypeResult::True | SubtypeResult::CycleDetected)
    }

    #[inline]
    pub fn is_false(self) -> bool {
        !self.is_true()
    }

    fn from_bool(value: bool) -> Self {
        if value {
            SubtypeResult::True
        } else {
            SubtypeResult::False
        }
    }
}

/// Structural subtype checker.
pub struct SubtypeChecker<'a> {
    interner: &'a TypeInterner,
    guard: RecursionGuard<(TypeId, TypeId)>,
}

impl<'a> SubtypeChecker<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        SubtypeChecker {
            interner,
            guard: RecursionGuard::with_profile(RecursionProfile::SubtypeCheck),
        }
    }

    /// Structural identity. See the module docs.
    #[inline]
    pub fn is_identical(&self, a: TypeId, b: TypeId) -> bool {
        a == b
    }

    pub fn is_subtype_of(&mut self, source: TypeId, target: TypeId) -> bool {
        self.check_subtype(source, target).is_true()
    }

    /// Check whether `source` is assignable to `target`.
    pub fn check_subtype(&mut self, source: TypeId, target: TypeId) -> SubtypeResult {
        if source == target {
            return SubtypeResult::True;
        }
        if source == TypeId::ERROR || target == TypeId::ERROR {
            return SubtypeResult::False;
        }
        if source == TypeId::ANY || target == TypeId::ANY || target == TypeId::UNKNOWN {
            return SubtypeResult::True;
        }
        if source == TypeId::NEVER {
            return SubtypeResult::True;
        }

        let key = (source, target);
        match self.guard.enter(key) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => return SubtypeResult::CycleDetected,
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                trace!(source = source.0, target = target.0, "subtype depth exceeded");
                return SubtypeResult::DepthExceeded;
            }
        }
        let result = self.check_subtype_inner(source, target);
        self.guard.leave(key);
        result
    }

    fn check_subtype_inner(&mut self, source: TypeId, target: TypeId) -> SubtypeResult {
        let (Some(s_data), Some(t_data)) =
            (self.interner.lookup(source), self.interner.lookup(target))
        else {
            return SubtypeResult::False;
        };

        // Union source: every member must be assignable.
        if let TypeData::Union(list_id) = s_data {
            let members = self.interner.type_list(list_id);
            for &member in members.iter() {
                if self.check_subtype(member, target).is_false() {
                    return SubtypeResult::False;
                }
            }
            return SubtypeResult::True;
        }

        // Union target: some member must accept the source.
        if let TypeData::Union(list_id) = t_data {
            let members = self.interner.type_list(list_id);
            for &member in members.iter() {
                if self.check_subtype(source, member).is_true() {
                    return SubtypeResult::True;
                }
            }
            return SubtypeResult::False;
        }

        match (s_data, t_data) {
            (TypeData::Literal(value), TypeData::Intrinsic(_)) => {
                SubtypeResult::from_bool(value.primitive() == target)
            }
            (TypeData::Intrinsic(_), TypeData::Intrinsic(_)) => SubtypeResult::from_bool(
                (source == TypeId::UNDEFINED && target == TypeId::VOID)
                    || (source == TypeId::FUNCTION && target == TypeId::OBJECT),
            ),
            (
                TypeData::Object(_)
                | TypeData::Tuple(_)
                | TypeData::Array(_)
                | TypeData::Application(_),
                TypeData::Intrinsic(_),
            ) => SubtypeResult::from_bool(target == TypeId::OBJECT),
            (TypeData::Function(_), TypeData::Intrinsic(_)) => {
                SubtypeResult::from_bool(target == TypeId::FUNCTION || target == TypeId::OBJECT)
            }
            (_, TypeData::Object(t_shape)) if self.interner.object_shape(t_shape).properties.is_empty() => {
                // `{}` accepts every non-nullish value.
                SubtypeResult::from_bool(!matches!(
                    source,
                    TypeId::NULL | TypeId::UNDEFINED | TypeId::VOID | TypeId::UNKNOWN
                ))
            }
            (TypeData::Object(s_shape), TypeData::Object(t_shape)) => {
                self.check_object_subtype(s_shape, t_shape)
            }
            (TypeData::Tuple(s_shape), TypeData::Tuple(t_shape)) => {
                self.check_tuple_subtype(s_shape, t_shape)
            }
            (TypeData::Tuple(s_shape), TypeData::Array(t_elem)) => {
                self.check_tuple_to_array(s_shape, target, t_elem)
            }
            (TypeData::Array(s_elem), TypeData::Array(t_elem)) => self.check_subtype(s_elem, t_elem),
            (TypeData::Array(_), TypeData::Tuple(t_shape)) => {
                // Only a pure variadic tuple `[...T[]]` accepts an array.
                let shape = self.interner.tuple_shape(t_shape);
                match shape.rest() {
                    Some(rest) if shape.fixed().is_empty() => self.check_subtype(source, rest),
                    _ => SubtypeResult::False,
                }
            }
            (TypeData::Function(s_shape), TypeData::Function(t_shape)) => {
                self.check_function_subtype(s_shape, t_shape)
            }
            (TypeData::Application(s_app), TypeData::Application(t_app)) => {
                let s_app = self.interner.type_application(s_app);
                let t_app = self.interner.type_application(t_app);
                if s_app.name != t_app.name || s_app.args.len() != t_app.args.len() {
                    return SubtypeResult::False;
                }
                for (&s_arg, &t_arg) in s_app.args.iter().zip(t_app.args.iter()) {
                    if self.check_subtype(s_arg, t_arg).is_false() {
                        return SubtypeResult::False;
                    }
                }
                SubtypeResult::True
            }
            _ => SubtypeResult::False,
        }
    }

    /// Width subtyping: every target field must be present (unless optional)
    /// with an assignable type. Extra source fields are allowed; readonly
    /// modifiers do not affect assignability.
    fn check_object_subtype(&mut self, source: ObjectShapeId, target: ObjectShapeId) -> SubtypeResult {
        let s_shape = self.interner.object_shape(source);
        let t_shape = self.interner.object_shape(target);

        for t_prop in &t_shape.properties {
            let Some(s_prop) = s_shape.find(t_prop.name) else {
                if t_prop.optional {
                    continue;
                }
                return SubtypeResult::False;
            };
            if s_prop.optional && !t_prop.optional {
                return SubtypeResult::False;
            }
            if self.check_subtype(s_prop.type_id, t_prop.type_id).is_false() {
                return SubtypeResult::False;
            }
        }
        SubtypeResult::True
    }

    fn check_tuple_subtype(&mut self, source: TupleShapeId, target: TupleShapeId) -> SubtypeResult {
        let s_shape = self.interner.tuple_shape(source);
        let t_shape = self.interner.tuple_shape(target);
        let s_fixed = s_shape.fixed();
        let t_fixed = t_shape.fixed();

        let Some(t_rest) = t_shape.rest() else {
            if s_shape.has_rest_tail || s_fixed.len() != t_fixed.len() {
                return SubtypeResult::False;
            }
            for (&s_elem, &t_elem) in s_fixed.iter().zip(t_fixed.iter()) {
                if self.check_subtype(s_elem, t_elem).is_false() {
                    return SubtypeResult::False;
                }
            }
            return SubtypeResult::True;
        };

        if s_fixed.len() < t_fixed.len() {
            return SubtypeResult::False;
        }
        for (&s_elem, &t_elem) in s_fixed.iter().zip(t_fixed.iter()) {
            if self.check_subtype(s_elem, t_elem).is_false() {
                return SubtypeResult::False;
            }
        }
        let t_rest_elem = self.rest_element(t_rest);
        for &s_elem in &s_fixed[t_fixed.len()..] {
            if self.check_subtype(s_elem, t_rest_elem).is_false() {
                return SubtypeResult::False;
            }
        }
        match s_shape.rest() {
            Some(s_rest) => self.check_subtype(s_rest, t_rest),
            None => SubtypeResult::True,
        }
    }

    fn check_tuple_to_array(
        &mut self,
        source: TupleShapeId,
        target: TypeId,
        t_elem: TypeId,
    ) -> SubtypeResult {
        let s_shape = self.interner.tuple_shape(source);
        for &s_elem in s_shape.fixed() {
            if self.check_subtype(s_elem, t_elem).is_false() {
                return SubtypeResult::False;
            }
        }
        match s_shape.rest() {
            Some(s_rest) => self.check_subtype(s_rest, target),
            None => SubtypeResult::True,
        }
    }

    /// Parameters are contravariant; a source may declare fewer parameters
    /// than the target. A `void` target return accepts any source return.
    fn check_function_subtype(
        &mut self,
        source: FunctionShapeId,
        target: FunctionShapeId,
    ) -> SubtypeResult {
        let s_shape = self.interner.function_shape(source);
        let t_shape = self.interner.function_shape(target);

        for (index, s_param) in s_shape.params.iter().enumerate() {
            if s_param.rest {
                let s_rest_elem = self.rest_element(s_param.type_id);
                for t_index in index..t_shape.params.len() {
                    let t_param = t_shape.params[t_index];
                    let t_ty = if t_param.rest {
                        self.rest_element(t_param.type_id)
                    } else {
                        t_param.type_id
                    };
                    if self.check_subtype(t_ty, s_rest_elem).is_false() {
                        return SubtypeResult::False;
                    }
                }
                break;
            }
            match self.param_type_at(&t_shape.params, index) {
                Some(t_ty) => {
                    if self.check_subtype(t_ty, s_param.type_id).is_false() {
                        return SubtypeResult::False;
                    }
                }
                None if s_param.optional => {}
                None => return SubtypeResult::False,
            }
        }

        if t_shape.return_type == TypeId::VOID {
            return SubtypeResult::True;
        }
        self.check_subtype(s_shape.return_type, t_shape.return_type)
    }

    fn param_type_at(&self, params: &[ParamInfo], index: usize) -> Option<TypeId> {
        match params.get(index) {
            Some(param) if param.rest => Some(self.rest_element(param.type_id)),
            Some(param) => Some(param.type_id),
            None => match params.last() {
                Some(last) if last.rest => Some(self.rest_element(last.type_id)),
                _ => None,
            },
        }
    }

    /// Element type of a variadic spread (`...T[]` spreads `T`).
    fn rest_element(&self, rest: TypeId) -> TypeId {
        match self.interner.lookup(rest) {
            Some(TypeData::Array(element)) => element,
            _ => rest,
        }
    }
}

/// Structural identity of two descriptors.
#[inline]
pub fn are_types_structurally_identical(a: TypeId, b: TypeId) -> bool {
    a == b
}

/// Convenience wrapper: one-off subtype check with a fresh checker.
pub fn is_subtype_of(interner: &TypeInterner, source: TypeId, target: TypeId) -> bool {
    SubtypeChecker::new(interner).is_subtype_of(source, target)
}

#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod tests;
