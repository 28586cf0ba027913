//! Descriptor formatting for reports and diagnostics.
//!
//! Renders descriptors in TypeScript surface syntax, e.g.
//! `{ readonly a: () => 22; b: string }` or `readonly ["hi", { m: ["hey"] }]`.

use crate::intern::TypeInterner;
use crate::types::*;

pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter { interner }
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId) {
        let Some(data) = self.interner.lookup(type_id) else {
            out.push_str("<unknown type>");
            return;
        };
        match data {
            TypeData::Intrinsic(kind) => out.push_str(kind.name()),
            TypeData::Literal(value) => self.write_literal(out, value),
            TypeData::Object(shape_id) => {
                let shape = self.interner.object_shape(shape_id);
                if shape.properties.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{ ");
                for (i, prop) in shape.properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    if prop.readonly {
                        out.push_str("readonly ");
                    }
                    out.push_str(&self.interner.resolve_atom_ref(prop.name));
                    if prop.optional {
                        out.push('?');
                    }
                    out.push_str(": ");
                    self.write_type(out, prop.type_id);
                }
                out.push_str(" }");
            }
            TypeData::Tuple(shape_id) => {
                let shape = self.interner.tuple_shape(shape_id);
                if shape.readonly {
                    out.push_str("readonly ");
                }
                out.push('[');
                let last = shape.elements.len().saturating_sub(1);
                for (i, &element) in shape.elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if shape.has_rest_tail && i == last {
                        out.push_str("...");
                    }
                    self.write_type(out, element);
                }
                out.push(']');
            }
            TypeData::Array(element) => {
                let needs_parens = matches!(
                    self.interner.lookup(element),
                    Some(TypeData::Union(_) | TypeData::Function(_))
                );
                if needs_parens {
                    out.push('(');
                }
                self.write_type(out, element);
                if needs_parens {
                    out.push(')');
                }
                out.push_str("[]");
            }
            TypeData::Function(shape_id) => {
                let shape = self.interner.function_shape(shape_id);
                out.push('(');
                for (i, param) in shape.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if param.rest {
                        out.push_str("...");
                    }
                    out.push_str(&format!("arg{i}"));
                    if param.optional {
                        out.push('?');
                    }
                    out.push_str(": ");
                    self.write_type(out, param.type_id);
                }
                out.push_str(") => ");
                self.write_type(out, shape.return_type);
            }
            TypeData::Union(list_id) => {
                let members = self.interner.type_list(list_id);
                for (i, &member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    let is_function = matches!(
                        self.interner.lookup(member),
                        Some(TypeData::Function(_))
                    );
                    if is_function {
                        out.push('(');
                        self.write_type(out, member);
                        out.push(')');
                    } else {
                        self.write_type(out, member);
                    }
                }
            }
            TypeData::Application(app_id) => {
                let app = self.interner.type_application(app_id);
                out.push_str(&self.interner.resolve_atom_ref(app.name));
                out.push('<');
                for (i, &arg) in app.args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(out, arg);
                }
                out.push('>');
            }
            TypeData::Hole(name) => {
                out.push_str("infer ");
                out.push_str(&self.interner.resolve_atom_ref(name));
            }
        }
    }

    fn write_literal(&self, out: &mut String, value: LiteralValue) {
        match value {
            LiteralValue::String(atom) => {
                out.push('"');
                out.push_str(&self.interner.resolve_atom_ref(atom));
                out.push('"');
            }
            LiteralValue::Number(OrderedFloat(n)) => out.push_str(&format_number(n)),
            LiteralValue::Boolean(b) => out.push_str(if b { "true" } else { "false" }),
            LiteralValue::BigInt(atom) => {
                out.push_str(&self.interner.resolve_atom_ref(atom));
                out.push('n');
            }
        }
    }
}

/// Format a number literal the way it is written in source: integral
/// values without a fractional part, `-0` as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
