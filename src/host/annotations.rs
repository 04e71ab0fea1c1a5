//! Annotation application data as recorded by the host.

use std::fmt;

use crate::base::{CallableId, ClassId, Name};

/// Annotation placement qualifier (`@get:Foo`, `@field:Foo`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseSiteTarget {
    Field,
    File,
    Property,
    Get,
    Set,
    Receiver,
    Param,
    SetParam,
    Delegate,
}

impl UseSiteTarget {
    /// The name written before the colon in source.
    pub fn render_name(&self) -> &'static str {
        match self {
            UseSiteTarget::Field => "field",
            UseSiteTarget::File => "file",
            UseSiteTarget::Property => "property",
            UseSiteTarget::Get => "get",
            UseSiteTarget::Set => "set",
            UseSiteTarget::Receiver => "receiver",
            UseSiteTarget::Param => "param",
            UseSiteTarget::SetParam => "setparam",
            UseSiteTarget::Delegate => "delegate",
        }
    }
}

impl fmt::Display for UseSiteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render_name())
    }
}

/// A compile-time constant annotation argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Boolean(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    UByte(u8),
    UShort(u16),
    UInt(u32),
    ULong(u64),
    Float(f32),
    Double(f64),
    String(String),
    Null,
}

/// An annotation argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValue {
    /// A nested annotation
    Annotation(Box<AnnotationApplication>),
    Array(Vec<AnnotationValue>),
    Constant(ConstantValue),
    EnumEntry(CallableId),
    /// A class literal whose class could not be resolved
    ErrorClass,
    /// A class literal of a local class
    LocalClass { name: Name },
    NonLocalClass(ClassId),
    /// A value shape the host could not express; never present in well-formed input
    Unsupported(String),
}

/// One annotation as applied to a declaration or type.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationApplication {
    pub class_id: ClassId,
    pub use_site_target: Option<UseSiteTarget>,
    /// Named arguments in source order
    pub arguments: Vec<(Name, AnnotationValue)>,
}

impl AnnotationApplication {
    pub fn new(class_id: ClassId) -> Self {
        Self {
            class_id,
            use_site_target: None,
            arguments: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: UseSiteTarget) -> Self {
        self.use_site_target = Some(target);
        self
    }

    pub fn with_argument(mut self, name: &str, value: AnnotationValue) -> Self {
        self.arguments.push((Name::new(name), value));
        self
    }
}
