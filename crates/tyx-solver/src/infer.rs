//! Pattern inference (`infer X` positions).
//!
//! A pattern is a descriptor containing [`TypeData::Hole`] nodes. Matching
//! walks the pattern and the value in lock-step:
//! - at a hole, bind the value (or, if the hole is already bound, require the
//!   same descriptor)
//! - at a sub-pattern without holes, require `value extends pattern`
//! - otherwise require the same structural kind and recurse
//!
//! A failed match is `None`, not an error: it selects the false branch of a
//! conditional type.

use crate::decompose::{element_union, params_tuple};
use crate::diagnostics::ShapeError;
use crate::intern::TypeInterner;
use crate::recursion::{DepthCounter, RecursionProfile};
use crate::subtype::SubtypeChecker;
use crate::transform::distribute;
use crate::types::*;
use rustc_hash::FxHashMap;
use tracing::trace;
use tyx_common::interner::Atom;

/// Hole name to inferred descriptor.
pub type Binding = FxHashMap<Atom, TypeId>;

/// Match `value` against `pattern`. `None` means no match.
pub fn infer(interner: &TypeInterner, pattern: TypeId, value: TypeId) -> Option<Binding> {
    let mut binding = Binding::default();
    infer_into(interner, pattern, value, &mut binding).then_some(binding)
}

/// Match into an existing binding. Holes already bound in `binding` must
/// match the same descriptor again. On failure `binding` may hold partial
/// results and should be discarded.
pub fn infer_into(
    interner: &TypeInterner,
    pattern: TypeId,
    value: TypeId,
    binding: &mut Binding,
) -> bool {
    let mut ctx = InferenceContext {
        interner,
        checker: SubtypeChecker::new(interner),
        depth: DepthCounter::with_profile(RecursionProfile::Inference),
    };
    let matched = ctx.infer(pattern, value, binding);
    if !matched {
        trace!(pattern = pattern.0, value = value.0, "pattern did not match");
    }
    matched
}

struct InferenceContext<'a> {
    interner: &'a TypeInterner,
    checker: SubtypeChecker<'a>,
    depth: DepthCounter,
}

impl<'a> InferenceContext<'a> {
    fn infer(&mut self, pattern: TypeId, value: TypeId, binding: &mut Binding) -> bool {
        if !contains_holes(self.interner, pattern) {
            return self.checker.is_subtype_of(value, pattern);
        }
        if value == TypeId::ANY {
            bind_all_holes(self.interner, pattern, TypeId::ANY, binding);
            return true;
        }
        if !self.depth.enter() {
            return false;
        }
        let matched = self.infer_structural(pattern, value, binding);
        self.depth.leave();
        matched
    }

    fn infer_structural(&mut self, pattern: TypeId, value: TypeId, binding: &mut Binding) -> bool {
        let Some(p_data) = self.interner.lookup(pattern) else {
            return false;
        };
        let v_data = self.interner.lookup(value);

        match p_data {
            TypeData::Hole(name) => match binding.get(&name) {
                Some(&bound) => bound == value,
                None => {
                    binding.insert(name, value);
                    true
                }
            },
            TypeData::Tuple(p_shape) => match v_data {
                Some(TypeData::Tuple(v_shape)) => self.infer_tuple(p_shape, v_shape, binding),
                _ => false,
            },
            TypeData::Array(p_elem) => match v_data {
                Some(TypeData::Array(v_elem)) => self.infer(p_elem, v_elem, binding),
                Some(TypeData::Tuple(_)) => match element_union(self.interner, value) {
                    Ok(elements) => self.infer(p_elem, elements, binding),
                    Err(_) => false,
                },
                _ => false,
            },
            TypeData::Function(p_shape) => match v_data {
                Some(TypeData::Function(v_shape)) => {
                    self.infer_function(p_shape, v_shape, value, binding)
                }
                _ => false,
            },
            TypeData::Object(p_shape) => match v_data {
                Some(TypeData::Object(v_shape)) => {
                    let p_shape = self.interner.object_shape(p_shape);
                    let v_shape = self.interner.object_shape(v_shape);
                    for p_prop in &p_shape.properties {
                        match v_shape.find(p_prop.name) {
                            Some(v_prop) => {
                                if !self.infer(p_prop.type_id, v_prop.type_id, binding) {
                                    return false;
                                }
                            }
                            None if p_prop.optional => {
                                bind_all_holes(self.interner, p_prop.type_id, TypeId::UNKNOWN, binding);
                            }
                            None => return false,
                        }
                    }
                    true
                }
                _ => false,
            },
            TypeData::Application(p_app) => match v_data {
                Some(TypeData::Application(v_app)) => {
                    let p_app = self.interner.type_application(p_app);
                    let v_app = self.interner.type_application(v_app);
                    if p_app.name != v_app.name || p_app.args.len() != v_app.args.len() {
                        return false;
                    }
                    p_app
                        .args
                        .iter()
                        .zip(v_app.args.iter())
                        .all(|(&p_arg, &v_arg)| self.infer(p_arg, v_arg, binding))
                }
                _ => false,
            },
            TypeData::Union(p_list) => self.infer_union(p_list, value, binding),
            TypeData::Intrinsic(_) | TypeData::Literal(_) => false,
        }
    }

    fn infer_tuple(
        &mut self,
        pattern: TupleShapeId,
        value: TupleShapeId,
        binding: &mut Binding,
    ) -> bool {
        let p_shape = self.interner.tuple_shape(pattern);
        let v_shape = self.interner.tuple_shape(value);
        let p_fixed = p_shape.fixed();
        let v_fixed = v_shape.fixed();

        let Some(p_rest) = p_shape.rest() else {
            if v_shape.has_rest_tail || p_fixed.len() != v_fixed.len() {
                return false;
            }
            return p_fixed
                .iter()
                .zip(v_fixed.iter())
                .all(|(&p, &v)| self.infer(p, v, binding));
        };

        if v_fixed.len() < p_fixed.len() {
            return false;
        }
        for (&p, &v) in p_fixed.iter().zip(v_fixed.iter()) {
            if !self.infer(p, v, binding) {
                return false;
            }
        }
        let remaining = self.interner.tuple_with(TupleShape {
            elements: v_shape.elements[p_fixed.len()..].to_vec(),
            has_rest_tail: v_shape.has_rest_tail,
            readonly: v_shape.readonly,
        });
        self.infer(p_rest, remaining, binding)
    }

    /// Parameters are only inspected when the pattern does not accept any
    /// argument list (`(...args: any) => R` or `(...args: any[]) => R`).
    fn infer_function(
        &mut self,
        pattern: FunctionShapeId,
        value_shape: FunctionShapeId,
        value: TypeId,
        binding: &mut Binding,
    ) -> bool {
        let p_shape = self.interner.function_shape(pattern);
        let v_shape = self.interner.function_shape(value_shape);

        match p_shape.params.as_slice() {
            [only] if only.rest => {
                let rest_ty = only.type_id;
                let accepts_anything = rest_ty == TypeId::ANY
                    || matches!(self.interner.lookup(rest_ty), Some(TypeData::Array(TypeId::ANY)));
                if !accepts_anything {
                    let Ok(params) = params_tuple(self.interner, value) else {
                        return false;
                    };
                    if !self.infer(rest_ty, params, binding) {
                        return false;
                    }
                }
            }
            p_params => {
                let required = v_shape
                    .params
                    .iter()
                    .filter(|param| !param.optional && !param.rest)
                    .count();
                if required > p_params.len() {
                    return false;
                }
                for (p_param, v_param) in p_params.iter().zip(v_shape.params.iter()) {
                    if !self.infer(p_param.type_id, v_param.type_id, binding) {
                        return false;
                    }
                }
            }
        }

        self.infer(p_shape.return_type, v_shape.return_type, binding)
    }

    /// A union pattern with exactly one hole-carrying member: value members
    /// covered by the concrete members are removed, the rest must match the
    /// hole-carrying member (`infer X | undefined`).
    fn infer_union(&mut self, pattern: TypeListId, value: TypeId, binding: &mut Binding) -> bool {
        let members = self.interner.type_list(pattern);
        let (open, closed): (Vec<TypeId>, Vec<TypeId>) = members
            .iter()
            .copied()
            .partition(|&member| contains_holes(self.interner, member));
        let [open] = open.as_slice() else {
            return false;
        };
        let mut leftover = Vec::new();
        for member in self.interner.union_members(value) {
            let covered = closed
                .iter()
                .any(|&concrete| self.checker.is_subtype_of(member, concrete));
            if !covered {
                leftover.push(member);
            }
        }
        let leftover = self.interner.union(leftover);
        self.infer(*open, leftover, binding)
    }
}

/// Whether a descriptor contains any hole.
pub fn contains_holes(interner: &TypeInterner, type_id: TypeId) -> bool {
    let Some(data) = interner.lookup(type_id) else {
        return false;
    };
    match data {
        TypeData::Hole(_) => true,
        TypeData::Intrinsic(_) | TypeData::Literal(_) => false,
        TypeData::Array(element) => contains_holes(interner, element),
        TypeData::Object(shape_id) => interner
            .object_shape(shape_id)
            .properties
            .iter()
            .any(|prop| contains_holes(interner, prop.type_id)),
        TypeData::Tuple(shape_id) => interner
            .tuple_shape(shape_id)
            .elements
            .iter()
            .any(|&element| contains_holes(interner, element)),
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            contains_holes(interner, shape.return_type)
                || shape
                    .params
                    .iter()
                    .any(|param| contains_holes(interner, param.type_id))
        }
        TypeData::Union(list_id) => interner
            .type_list(list_id)
            .iter()
            .any(|&member| contains_holes(interner, member)),
        TypeData::Application(app_id) => interner
            .type_application(app_id)
            .args
            .iter()
            .any(|&arg| contains_holes(interner, arg)),
    }
}

fn bind_all_holes(interner: &TypeInterner, pattern: TypeId, value: TypeId, binding: &mut Binding) {
    let Some(data) = interner.lookup(pattern) else {
        return;
    };
    if let TypeData::Hole(name) = data {
        binding.entry(name).or_insert(value);
        return;
    }
    let mut visit = |child: TypeId| bind_all_holes(interner, child, value, binding);
    match data {
        TypeData::Hole(_) | TypeData::Intrinsic(_) | TypeData::Literal(_) => {}
        TypeData::Array(element) => visit(element),
        TypeData::Object(shape_id) => {
            for prop in &interner.object_shape(shape_id).properties {
                visit(prop.type_id);
            }
        }
        TypeData::Tuple(shape_id) => {
            for &element in &interner.tuple_shape(shape_id).elements {
                visit(element);
            }
        }
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            for param in &shape.params {
                visit(param.type_id);
            }
            visit(shape.return_type);
        }
        TypeData::Union(list_id) => {
            for &member in interner.type_list(list_id).iter() {
                visit(member);
            }
        }
        TypeData::Application(app_id) => {
            for &arg in &interner.type_application(app_id).args {
                visit(arg);
            }
        }
    }
}

/// Instantiate the holes of `type_id` from `binding`. Unbound holes are
/// left in place. A hole bound to a tuple in a variadic tail is spliced.
pub fn substitute(interner: &TypeInterner, type_id: TypeId, binding: &Binding) -> TypeId {
    if binding.is_empty() || !contains_holes(interner, type_id) {
        return type_id;
    }
    let Some(data) = interner.lookup(type_id) else {
        return type_id;
    };
    let sub = |child: TypeId| substitute(interner, child, binding);
    match data {
        TypeData::Hole(name) => binding.get(&name).copied().unwrap_or(type_id),
        TypeData::Intrinsic(_) | TypeData::Literal(_) => type_id,
        TypeData::Array(element) => interner.array(sub(element)),
        TypeData::Object(shape_id) => {
            let properties = interner
                .object_shape(shape_id)
                .properties
                .iter()
                .map(|prop| PropertyInfo {
                    type_id: sub(prop.type_id),
                    ..prop.clone()
                })
                .collect();
            interner.object(properties)
        }
        TypeData::Tuple(shape_id) => {
            let shape = interner.tuple_shape(shape_id);
            interner.tuple_with(TupleShape {
                elements: shape.elements.iter().map(|&element| sub(element)).collect(),
                has_rest_tail: shape.has_rest_tail,
                readonly: shape.readonly,
            })
        }
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            let params = shape
                .params
                .iter()
                .map(|param| ParamInfo {
                    type_id: sub(param.type_id),
                    ..*param
                })
                .collect();
            interner.function(params, sub(shape.return_type))
        }
        TypeData::Union(list_id) => {
            let members = interner.type_list(list_id).iter().map(|&m| sub(m)).collect();
            interner.union(members)
        }
        TypeData::Application(app_id) => {
            let app = interner.type_application(app_id);
            let args = app.args.iter().map(|&arg| sub(arg)).collect();
            interner.application(&interner.resolve_atom_ref(app.name), args)
        }
    }
}

/// Recursive `Promise` unwrapping:
///
/// ```typescript
/// type MyAwaited<T extends Promise<any>> = T extends Promise<infer P>
///   ? P extends Promise<any> ? MyAwaited<P> : P
///   : never;
/// ```
///
/// Both conditionals are distributive, so `Promise<string | Promise<number>>`
/// unwraps to `string | number`. A non-Promise operand is rejected.
pub fn awaited(interner: &TypeInterner, type_id: TypeId) -> Result<TypeId, ShapeError> {
    let mut depth = DepthCounter::with_profile(RecursionProfile::Unwrap);
    awaited_inner(interner, type_id, &mut depth)
}

fn awaited_inner(
    interner: &TypeInterner,
    type_id: TypeId,
    depth: &mut DepthCounter,
) -> Result<TypeId, ShapeError> {
    if !depth.enter() {
        return Err(ShapeError::DepthExceeded {
            limit: depth.max_depth(),
        });
    }
    let result = distribute(interner, type_id, true, |member| {
        let inner = promise_argument(interner, member).ok_or(ShapeError::NotAPromise { found: member })?;
        distribute(interner, inner, true, |candidate| {
            if candidate != TypeId::ANY && promise_argument(interner, candidate).is_some() {
                awaited_inner(interner, candidate, depth)
            } else {
                Ok(candidate)
            }
        })
    });
    depth.leave();
    result
}

/// `P` for `Promise<P>`.
fn promise_argument(interner: &TypeInterner, type_id: TypeId) -> Option<TypeId> {
    let hole = interner.hole("P");
    let pattern = interner.promise(hole);
    let binding = infer(interner, pattern, type_id)?;
    let name = interner.intern_string("P");
    binding.get(&name).copied()
}

#[cfg(test)]
#[path = "../tests/infer_tests.rs"]
mod tests;
