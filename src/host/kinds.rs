//! Host symbol kinds, provenance tags and file metadata.

use std::sync::Arc;

use crate::base::{FileId, LineIndex, TextSize};

/// The dynamic kind of a host symbol.
///
/// This set is closed: a new host kind must be added here and handled at
/// every dispatch site, which the compiler enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Property,
    NamedClass,
    FunctionLike,
    TypeAlias,
    JavaField,
    File,
    EnumEntry,
    TypeParameter,
    LocalVariable,
    PropertyGetter,
    PropertySetter,
    ValueParameter,
}

impl SymbolKind {
    /// Get a display label for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Property => "property",
            SymbolKind::NamedClass => "class",
            SymbolKind::FunctionLike => "function",
            SymbolKind::TypeAlias => "type alias",
            SymbolKind::JavaField => "java field",
            SymbolKind::File => "file",
            SymbolKind::EnumEntry => "enum entry",
            SymbolKind::TypeParameter => "type parameter",
            SymbolKind::LocalVariable => "local variable",
            SymbolKind::PropertyGetter => "getter",
            SymbolKind::PropertySetter => "setter",
            SymbolKind::ValueParameter => "value parameter",
        }
    }
}

/// Raw provenance tag recorded by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostOrigin {
    Source,
    SourceMemberGenerated,
    Library,
    Java,
    SamConstructor,
    IntersectionOverride,
    SubstitutionOverride,
    Delegated,
    JavaSyntheticProperty,
    PropertyBackingField,
    Plugin,
    JsDynamic,
}

impl HostOrigin {
    pub fn name(&self) -> &'static str {
        match self {
            HostOrigin::Source => "SOURCE",
            HostOrigin::SourceMemberGenerated => "SOURCE_MEMBER_GENERATED",
            HostOrigin::Library => "LIBRARY",
            HostOrigin::Java => "JAVA",
            HostOrigin::SamConstructor => "SAM_CONSTRUCTOR",
            HostOrigin::IntersectionOverride => "INTERSECTION_OVERRIDE",
            HostOrigin::SubstitutionOverride => "SUBSTITUTION_OVERRIDE",
            HostOrigin::Delegated => "DELEGATED",
            HostOrigin::JavaSyntheticProperty => "JAVA_SYNTHETIC_PROPERTY",
            HostOrigin::PropertyBackingField => "PROPERTY_BACKING_FIELD",
            HostOrigin::Plugin => "PLUGIN",
            HostOrigin::JsDynamic => "JS_DYNAMIC",
        }
    }
}

/// What kind of artifact backs a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Kotlin,
    Java,
    /// A compiled class file or archive entry
    Binary,
}

impl FileKind {
    pub fn is_binary(&self) -> bool {
        matches!(self, FileKind::Binary)
    }
}

/// A symbol's position in source: the file and a 0-based byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceHandle {
    pub file: FileId,
    pub offset: TextSize,
}

impl SourceHandle {
    pub fn new(file: FileId, offset: u32) -> Self {
        Self {
            file,
            offset: TextSize::from(offset),
        }
    }
}

/// An already-parsed, line-indexed document held by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub path: Arc<str>,
    pub line_index: LineIndex,
}

impl Document {
    pub fn new(path: impl Into<Arc<str>>, text: &str) -> Self {
        Self {
            path: path.into(),
            line_index: LineIndex::new(text),
        }
    }
}

/// Host visibility of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
    Internal,
    Protected,
    /// Declared inside a function body
    Local,
    /// Java package-private and other platform visibilities
    PackagePrivate,
}

/// Host modality of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    Final,
    Abstract,
    Open,
    Sealed,
}
