//! The host semantic engine, as seen from the bridge.
//!
//! The bridge never owns host symbols. It only holds [`SymbolId`] keys and
//! asks the host for attributes through the [`SemanticHost`] trait when a
//! concrete attribute is requested.
//!
//! ## Key Types
//!
//! - [`SemanticHost`] - accessors the bridge consumes
//! - [`SymbolKind`] - closed set of host symbol kinds
//! - [`HostType`] - the eleven type shapes the host produces
//! - [`AnnotationApplication`] - annotation data as recorded by the host
//! - [`MemoryHost`] - an in-memory host used as a fixture

mod annotations;
mod kinds;
mod memory;
mod types;

pub use annotations::{AnnotationApplication, AnnotationValue, ConstantValue, UseSiteTarget};
pub use kinds::{Document, FileKind, HostOrigin, Modality, SourceHandle, SymbolKind, Visibility};
pub use memory::{MemoryHost, SymbolBuilder};
pub use types::{
    CapturedType, ClassQualifier, ClassType, ClassifierKind, ClassifierRef, HostType,
    Nullability, TypeKind, TypeProjection, Variance,
};

use thiserror::Error;

use crate::base::{ClassId, FileId, Name, SymbolId};

/// Failures reported by the host engine itself.
///
/// These are recoverable from the bridge's point of view: classifier
/// resolution maps them to an absent result, other queries propagate them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The symbol key is not known to the host.
    #[error("unknown symbol {0}")]
    UnknownSymbol(SymbolId),

    /// No class is registered under the given id.
    #[error("no class symbol for class id {0}")]
    UnknownClassId(ClassId),

    /// The file key is not known to the host.
    #[error("unknown file {0:?}")]
    UnknownFile(FileId),

    /// The host failed internally while answering a query.
    #[error("host failure: {0}")]
    Internal(String),
}

/// Accessors the bridge needs from the host's semantic graph.
///
/// Every method is a read-only query. Implementations are free to compute
/// lazily; the bridge caches what it needs for the lifetime of a session.
pub trait SemanticHost {
    /// The dynamic kind of a symbol.
    fn symbol_kind(&self, symbol: SymbolId) -> Result<SymbolKind, HostError>;

    /// The declared name, `None` for anonymous symbols and files.
    fn symbol_name(&self, symbol: SymbolId) -> Result<Option<Name>, HostError>;

    /// Raw provenance tag.
    fn origin(&self, symbol: SymbolId) -> Result<HostOrigin, HostError>;

    /// Backing source position, `None` for symbols without source.
    fn source(&self, symbol: SymbolId) -> Result<Option<SourceHandle>, HostError>;

    /// Annotations applied directly to the symbol, in declaration order.
    fn annotations(&self, symbol: SymbolId) -> Result<Vec<AnnotationApplication>, HostError>;

    /// The symbol that lexically contains this one.
    ///
    /// Property accessors are contained by their property, value parameters
    /// by their function or setter, top-level declarations by nothing.
    fn containing_symbol(&self, symbol: SymbolId) -> Result<Option<SymbolId>, HostError>;

    /// The file symbol of the file declaring this symbol.
    fn containing_file(&self, symbol: SymbolId) -> Result<Option<SymbolId>, HostError>;

    /// Members declared directly in a class-like symbol.
    fn declared_member_scope(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError>;

    /// Static members of a class-like symbol (Java statics, companion-less objects).
    fn static_member_scope(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError>;

    /// Callable members including inherited ones.
    fn member_scope_callables(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError>;

    /// Constructors of a class-like symbol.
    fn constructors(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError>;

    /// Whether `member` is visible from inside `class`.
    fn is_visible_in_class(&self, member: SymbolId, class: SymbolId) -> Result<bool, HostError>;

    /// Look up a non-local classifier by its id: a class-like symbol or a
    /// type alias. Aliases are indexed under their own id, not their
    /// expansion's. Unknown ids are [`HostError::UnknownClassId`].
    fn class_by_id(&self, id: &ClassId) -> Result<SymbolId, HostError>;

    /// The class id of a class-like or type alias symbol, `None` for other kinds.
    fn class_id(&self, symbol: SymbolId) -> Result<Option<ClassId>, HostError>;

    /// The declared type: property/parameter type, function return type,
    /// alias expansion, or the first type-parameter bound.
    fn declared_type(&self, symbol: SymbolId) -> Result<Option<HostType>, HostError>;

    fn visibility(&self, symbol: SymbolId) -> Result<Visibility, HostError>;

    fn modality(&self, symbol: SymbolId) -> Result<Option<Modality>, HostError>;

    /// Raw documentation comment text, if any.
    fn doc_comment(&self, symbol: SymbolId) -> Result<Option<String>, HostError>;

    /// Kind of a tracked file.
    fn file_kind(&self, file: FileId) -> Result<FileKind, HostError>;

    /// The line-indexed document of a file, `None` when the file is not
    /// tracked by the active session. Must not trigger parsing.
    fn document(&self, file: FileId) -> Option<&Document>;
}
