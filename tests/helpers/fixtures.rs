//! A small Kotlin-shaped project built in a `MemoryHost`.
//!
//! ```kotlin
//! // src/com/example/Shapes.kt
//! package com.example
//!
//! open class Shape {
//!     private val secret = 0
//!     open fun area(): Double = 0.0
//! }
//!
//! /** A circle. */
//! class Circle(val radius: Double) : Shape() {
//!     @get:JvmName("r") var label: String? = null
//!     override fun area(): Double = 3.14 * radius * radius
//!     companion object { const val UNIT = 1 }
//! }
//! ```

#![allow(dead_code)]

use symbridge::host::{
    AnnotationApplication, AnnotationValue, ConstantValue, FileKind, HostOrigin, HostType,
    MemoryHost, Modality, SymbolKind, UseSiteTarget, Visibility,
};
use symbridge::{ClassId, FileId, SymbolId};

pub const SHAPES_PATH: &str = "src/com/example/Shapes.kt";

pub const SHAPES_SOURCE: &str = "package com.example

open class Shape {
    private val secret = 0
    open fun area(): Double = 0.0
}

/** A circle. */
class Circle(val radius: Double) : Shape() {
    @get:JvmName(\"r\") var label: String? = null
    override fun area(): Double = 3.14 * radius * radius
    companion object { const val UNIT = 1 }
}
";

/// Ids of every interesting symbol in the fixture.
pub struct Shapes {
    pub host: MemoryHost,
    pub file: FileId,
    pub file_symbol: SymbolId,
    pub shape: SymbolId,
    pub secret: SymbolId,
    pub shape_area: SymbolId,
    pub circle: SymbolId,
    pub constructor: SymbolId,
    pub radius: SymbolId,
    pub label: SymbolId,
    pub label_getter: SymbolId,
    pub label_setter: SymbolId,
    pub label_value: SymbolId,
    pub circle_area: SymbolId,
    pub unit: SymbolId,
    pub library_class: SymbolId,
    pub java_binary: SymbolId,
}

pub fn double() -> HostType {
    HostType::class(ClassId::top_level("kotlin", "Double"), vec![])
}

pub fn string() -> HostType {
    HostType::class(ClassId::top_level("kotlin", "String"), vec![])
}

fn offset_of(needle: &str) -> u32 {
    SHAPES_SOURCE.find(needle).unwrap_or(0) as u32
}

pub fn shapes() -> Shapes {
    let mut host = MemoryHost::new();
    let file = host.add_file(SHAPES_PATH, SHAPES_SOURCE, FileKind::Kotlin);
    let file_symbol = host.file_symbol(file).unwrap();

    let shape = host
        .symbol(SymbolKind::NamedClass, "Shape")
        .class_id(ClassId::top_level("com.example", "Shape"))
        .contained_by(file_symbol)
        .at(file, offset_of("open class Shape"))
        .modality(Modality::Open)
        .finish();
    let secret = host
        .symbol(SymbolKind::Property, "secret")
        .member_of(shape)
        .at(file, offset_of("private val secret"))
        .visibility(Visibility::Private)
        .finish();
    let shape_area = host
        .symbol(SymbolKind::FunctionLike, "area")
        .member_of(shape)
        .at(file, offset_of("open fun area"))
        .declared_type(double())
        .modality(Modality::Open)
        .finish();

    let circle = host
        .symbol(SymbolKind::NamedClass, "Circle")
        .class_id(ClassId::top_level("com.example", "Circle"))
        .contained_by(file_symbol)
        .at(file, offset_of("class Circle"))
        .modality(Modality::Final)
        .doc("/** A circle. */")
        .finish();
    let constructor = host
        .anonymous(SymbolKind::FunctionLike)
        .constructor_of(circle)
        .at(file, offset_of("(val radius"))
        .finish();
    let radius = host
        .symbol(SymbolKind::Property, "radius")
        .member_of(circle)
        .at(file, offset_of("val radius"))
        .declared_type(double())
        .finish();
    let label = host
        .symbol(SymbolKind::Property, "label")
        .member_of(circle)
        .at(file, offset_of("@get:JvmName"))
        .declared_type(string().nullable())
        .annotated(
            AnnotationApplication::new(ClassId::top_level("kotlin.jvm", "JvmName"))
                .with_target(UseSiteTarget::Get)
                .with_argument("name", AnnotationValue::Constant(ConstantValue::String("r".into()))),
        )
        .finish();
    let label_getter = host
        .anonymous(SymbolKind::PropertyGetter)
        .contained_by(label)
        .origin(HostOrigin::SourceMemberGenerated)
        .finish();
    let label_setter = host
        .anonymous(SymbolKind::PropertySetter)
        .contained_by(label)
        .origin(HostOrigin::SourceMemberGenerated)
        .finish();
    let label_value = host
        .symbol(SymbolKind::ValueParameter, "value")
        .contained_by(label_setter)
        .declared_type(string().nullable())
        .finish();
    let circle_area = host
        .symbol(SymbolKind::FunctionLike, "area")
        .member_of(circle)
        .at(file, offset_of("override fun area"))
        .declared_type(double())
        .finish();
    let unit = host
        .symbol(SymbolKind::Property, "UNIT")
        .static_member_of(circle)
        .at(file, offset_of("const val UNIT"))
        .declared_type(HostType::class(ClassId::top_level("kotlin", "Int"), vec![]))
        .finish();
    host.inherit(circle, secret);
    host.inherit(circle, shape_area);

    let library_class = host
        .symbol(SymbolKind::NamedClass, "Any")
        .class_id(ClassId::top_level("kotlin", "Any"))
        .origin(HostOrigin::Library)
        .finish();

    let binary = host.add_untracked_file("lib/java/util/Objects.class", FileKind::Binary);
    let java_binary = host
        .symbol(SymbolKind::NamedClass, "Objects")
        .class_id(ClassId::top_level("java.util", "Objects"))
        .origin(HostOrigin::Java)
        .at(binary, 0)
        .finish();

    Shapes {
        host,
        file,
        file_symbol,
        shape,
        secret,
        shape_area,
        circle,
        constructor,
        radius,
        label,
        label_getter,
        label_setter,
        label_value,
        circle_area,
        unit,
        library_class,
        java_binary,
    }
}
