//! Canonical type rendering.
//!
//! Output is compared textually by consumers, so the shape of every branch
//! is part of the contract. Rules are checked in a fixed order:
//!
//! ```text
//! [@Ann] [@Other] <body>[?]
//!
//! class          Name<out A, *, B>
//! alias          [typealias Name]        (outside function types)
//!                <expansion>             (inside function-type arguments)
//! error          <ERROR TYPE>
//! captured       CapturedType(out A)
//! def. not null  A & Any
//! dynamic        <dynamic type>
//! flexible       (A..A?)
//! int literal    ILT: 42
//! intersection   (A & B)
//! type param     T
//! ```

use super::annotation::render_annotation;
use super::options::RenderOptions;
use crate::host::{CapturedType, ClassType, HostType, TypeKind, TypeProjection, Variance};

pub const ERROR_TYPE_MARKER: &str = "<ERROR TYPE>";
pub const DYNAMIC_TYPE_MARKER: &str = "<dynamic type>";

/// Render a type.
///
/// `in_function_type` is true while rendering the arguments of a function
/// type; alias references are then written as their expansion.
pub fn render_type(ty: &HostType, in_function_type: bool, options: &RenderOptions) -> String {
    let mut out = String::new();
    for annotation in &ty.annotations {
        out.push('[');
        out.push_str(&render_annotation(annotation));
        out.push_str("] ");
    }

    match &ty.kind {
        TypeKind::UsualClass(class) | TypeKind::Functional(class) => {
            render_class_type(&mut out, ty, class, in_function_type, options)
        }
        TypeKind::ClassError { .. } | TypeKind::TypeError { .. } => out.push_str(ERROR_TYPE_MARKER),
        TypeKind::Captured(captured) => out.push_str(&captured_debug_string(captured, options)),
        TypeKind::DefinitelyNotNull(original) => {
            out.push_str(&render_type(original, in_function_type, options));
            out.push_str(" & Any");
        }
        TypeKind::Dynamic => out.push_str(DYNAMIC_TYPE_MARKER),
        TypeKind::Flexible { lower, upper } => {
            out.push('(');
            out.push_str(&render_type(lower, in_function_type, options));
            out.push_str("..");
            out.push_str(&render_type(upper, in_function_type, options));
            out.push(')');
        }
        TypeKind::IntegerLiteral { value } => {
            out.push_str("ILT: ");
            out.push_str(&value.to_string());
        }
        TypeKind::Intersection(conjuncts) => {
            let rendered: Vec<String> = conjuncts
                .iter()
                .map(|c| render_type(c, in_function_type, options))
                .collect();
            out.push('(');
            out.push_str(&rendered.join(" & "));
            out.push(')');
        }
        TypeKind::TypeParameter { name, .. } => out.push_str(name),
    }

    if ty.is_nullable() && options.nullability.applies_to(&ty.kind) {
        out.push('?');
    }
    out
}

fn render_class_type(
    out: &mut String,
    ty: &HostType,
    class: &ClassType,
    in_function_type: bool,
    options: &RenderOptions,
) {
    if class.is_alias() {
        match (&class.expansion, in_function_type) {
            (Some(expansion), true) => out.push_str(&render_type(expansion, true, options)),
            _ => {
                out.push_str("[typealias ");
                out.push_str(class.name());
                out.push(']');
            }
        }
        return;
    }

    out.push_str(class.name());
    let arguments = type_arguments(ty);
    if arguments.is_empty() {
        return;
    }
    let nested_in_function = matches!(ty.kind, TypeKind::Functional(_));
    let rendered: Vec<String> = arguments
        .iter()
        .map(|arg| render_projection(arg, nested_in_function, options))
        .collect();
    out.push('<');
    out.push_str(&rendered.join(", "));
    out.push('>');
}

fn render_projection(projection: &TypeProjection, in_function_type: bool, options: &RenderOptions) -> String {
    match projection {
        TypeProjection::Star => "*".to_string(),
        TypeProjection::WithVariance { variance, ty } => {
            let rendered = render_type(ty, in_function_type, options);
            if *variance == Variance::Invariant {
                rendered
            } else {
                format!("{variance} {rendered}")
            }
        }
    }
}

// Debug text only; captured types are never expanded.
fn captured_debug_string(captured: &CapturedType, options: &RenderOptions) -> String {
    format!(
        "CapturedType({})",
        render_projection(&captured.projection, false, options)
    )
}

/// Type arguments of a class type, innermost qualifier first.
///
/// For `Outer<A>.Inner<B>` this is `[B, A]`. Error types and non-class
/// types have no arguments.
pub fn type_arguments(ty: &HostType) -> Vec<&TypeProjection> {
    match ty.as_class_type() {
        Some(class) => class
            .qualifiers
            .iter()
            .rev()
            .flat_map(|q| q.arguments.iter())
            .collect(),
        None => Vec::new(),
    }
}
