//! Annotation and annotation-argument text.
//!
//! Argument rendering is plain string formatting: arrays as `{a,b,c}`,
//! constants in source-literal form, enum entries by callable id and
//! class literals as `Name::class`.

use std::fmt;

use crate::host::{AnnotationApplication, AnnotationValue, ConstantValue};

/// Render an annotation application as `@target:Name(arg, arg)`.
///
/// The argument list is omitted when there are no arguments.
pub fn render_annotation(annotation: &AnnotationApplication) -> String {
    let mut out = String::from("@");
    if let Some(target) = annotation.use_site_target {
        out.push_str(target.render_name());
        out.push(':');
    }
    out.push_str(annotation.class_id.short_name());
    if !annotation.arguments.is_empty() {
        let arguments: Vec<String> = annotation
            .arguments
            .iter()
            .map(|(_, value)| render_annotation_value(value))
            .collect();
        out.push('(');
        out.push_str(&arguments.join(", "));
        out.push(')');
    }
    out
}

/// Render one annotation argument value.
///
/// # Panics
///
/// On [`AnnotationValue::Unsupported`]: the host produced a value shape this
/// layer does not know, which is a version mismatch, not bad input.
pub fn render_annotation_value(value: &AnnotationValue) -> String {
    match value {
        AnnotationValue::Annotation(nested) => render_annotation(nested),
        AnnotationValue::Array(values) => {
            let rendered: Vec<String> = values.iter().map(render_annotation_value).collect();
            format!("{{{}}}", rendered.join(","))
        }
        AnnotationValue::Constant(constant) => render_constant(constant),
        AnnotationValue::EnumEntry(callable) => callable.to_string(),
        AnnotationValue::ErrorClass => "<Error class>".to_string(),
        AnnotationValue::LocalClass { name } => format!("{name}::class"),
        AnnotationValue::NonLocalClass(class_id) => format!("{class_id}::class"),
        AnnotationValue::Unsupported(what) => {
            panic!("Unsupported annotation value: {what}")
        }
    }
}

/// Render a constant the way it would be written as a literal.
pub fn render_constant(constant: &ConstantValue) -> String {
    match constant {
        ConstantValue::Boolean(v) => v.to_string(),
        ConstantValue::Char(c) => format!("'{}'", escape(&c.to_string(), '\'')),
        ConstantValue::Byte(v) => format!("{v}.toByte()"),
        ConstantValue::Short(v) => format!("{v}.toShort()"),
        ConstantValue::Int(v) => v.to_string(),
        ConstantValue::Long(v) => format!("{v}L"),
        ConstantValue::UByte(v) => format!("{v}.toUByte()"),
        ConstantValue::UShort(v) => format!("{v}.toUShort()"),
        ConstantValue::UInt(v) => format!("{v}u"),
        ConstantValue::ULong(v) => format!("{v}uL"),
        ConstantValue::Float(v) => format!("{}f", float_literal(*v)),
        ConstantValue::Double(v) => float_literal(*v),
        ConstantValue::String(s) => format!("\"{}\"", escape(s, '"')),
        ConstantValue::Null => "null".to_string(),
    }
}

/// JVM `toString` form: `NaN`, `Infinity`, plain decimals in
/// `[1e-3, 1e7)`, `1.0E20` style outside it.
fn float_literal<T>(v: T) -> String
where
    T: Copy + Into<f64> + fmt::Debug + fmt::LowerExp,
{
    let wide: f64 = v.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = wide.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{v:?}");
    }
    let scientific = format!("{v:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

fn escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '$' => out.push_str("\\$"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
