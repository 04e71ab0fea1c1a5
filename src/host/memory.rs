//! In-memory host engine.
//!
//! `MemoryHost` holds a fully materialized symbol graph. It serves as the
//! minimal fixture the bridge is tested against, and lets a harness feed
//! precomputed symbols through the bridge without a live compiler.
//!
//! ```ignore
//! let mut host = MemoryHost::new();
//! let file = host.add_file("src/Foo.kt", "class Foo {\n  val x = 1\n}", FileKind::Kotlin);
//! let foo = host
//!     .symbol(SymbolKind::NamedClass, "Foo")
//!     .class_id(ClassId::top_level("", "Foo"))
//!     .at(file, 0)
//!     .finish();
//! let x = host.symbol(SymbolKind::Property, "x").member_of(foo).at(file, 16).finish();
//! ```

use rustc_hash::FxHashMap;

use super::annotations::AnnotationApplication;
use super::kinds::{Document, FileKind, HostOrigin, Modality, SourceHandle, SymbolKind, Visibility};
use super::types::HostType;
use super::{HostError, SemanticHost};
use crate::base::{ClassId, FileId, Name, SymbolId};

#[derive(Clone, Debug)]
struct FileData {
    kind: FileKind,
    document: Option<Document>,
    symbol: SymbolId,
}

#[derive(Clone, Debug)]
struct SymbolData {
    kind: SymbolKind,
    name: Option<Name>,
    origin: HostOrigin,
    source: Option<SourceHandle>,
    annotations: Vec<AnnotationApplication>,
    container: Option<SymbolId>,
    file: Option<SymbolId>,
    declared_members: Vec<SymbolId>,
    static_members: Vec<SymbolId>,
    inherited_callables: Vec<SymbolId>,
    constructors: Vec<SymbolId>,
    class_id: Option<ClassId>,
    declared_type: Option<HostType>,
    visibility: Visibility,
    modality: Option<Modality>,
    doc: Option<String>,
}

impl SymbolData {
    fn new(kind: SymbolKind, name: Option<Name>) -> Self {
        Self {
            kind,
            name,
            origin: HostOrigin::Source,
            source: None,
            annotations: Vec::new(),
            container: None,
            file: None,
            declared_members: Vec::new(),
            static_members: Vec::new(),
            inherited_callables: Vec::new(),
            constructors: Vec::new(),
            class_id: None,
            declared_type: None,
            visibility: Visibility::Public,
            modality: None,
            doc: None,
        }
    }
}

/// A host engine backed by plain vectors.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    symbols: Vec<SymbolData>,
    files: Vec<FileData>,
    classes: FxHashMap<ClassId, SymbolId>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tracked source file and its file symbol.
    pub fn add_file(&mut self, path: &str, text: &str, kind: FileKind) -> FileId {
        self.push_file(path, Some(Document::new(path, text)), kind)
    }

    /// Register a file the session has no document for (compiled class
    /// files, files outside the module).
    pub fn add_untracked_file(&mut self, path: &str, kind: FileKind) -> FileId {
        self.push_file(path, None, kind)
    }

    fn push_file(&mut self, path: &str, document: Option<Document>, kind: FileKind) -> FileId {
        let file = FileId::new(self.files.len() as u32);
        let name = path.rsplit('/').next().map(Name::new);
        let mut data = SymbolData::new(SymbolKind::File, name);
        data.source = Some(SourceHandle::new(file, 0));
        let symbol = self.push_symbol(data);
        self.symbols[symbol.index()].file = Some(symbol);
        self.files.push(FileData {
            kind,
            document,
            symbol,
        });
        file
    }

    /// The file symbol for a file.
    pub fn file_symbol(&self, file: FileId) -> Result<SymbolId, HostError> {
        self.files
            .get(file.index())
            .map(|f| f.symbol)
            .ok_or(HostError::UnknownFile(file))
    }

    /// Start building a named symbol.
    pub fn symbol(&mut self, kind: SymbolKind, name: &str) -> SymbolBuilder<'_> {
        SymbolBuilder {
            data: SymbolData::new(kind, Some(Name::new(name))),
            host: self,
            placement: Placement::Detached,
        }
    }

    /// Start building an anonymous symbol (object expressions, unnamed accessors).
    pub fn anonymous(&mut self, kind: SymbolKind) -> SymbolBuilder<'_> {
        SymbolBuilder {
            data: SymbolData::new(kind, None),
            host: self,
            placement: Placement::Detached,
        }
    }

    fn push_symbol(&mut self, data: SymbolData) -> SymbolId {
        let id = SymbolId::new(self.symbols.len() as u32);
        self.symbols.push(data);
        id
    }

    fn data(&self, symbol: SymbolId) -> Result<&SymbolData, HostError> {
        self.symbols
            .get(symbol.index())
            .ok_or(HostError::UnknownSymbol(symbol))
    }

    fn file_data(&self, file: FileId) -> Result<&FileData, HostError> {
        self.files
            .get(file.index())
            .ok_or(HostError::UnknownFile(file))
    }
}

/// How a new symbol is wired into its container's scopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// Not attached to any scope
    Detached,
    /// Declared member scope
    Member,
    /// Static member scope
    Static,
    /// Constructor list
    Constructor,
    /// Lexically contained only (accessors, value parameters, locals)
    Contained,
}

/// Fluent builder returned by [`MemoryHost::symbol`].
pub struct SymbolBuilder<'h> {
    host: &'h mut MemoryHost,
    data: SymbolData,
    placement: Placement,
}

impl SymbolBuilder<'_> {
    pub fn origin(mut self, origin: HostOrigin) -> Self {
        self.data.origin = origin;
        self
    }

    /// Place the symbol in `file` at a 0-based byte offset.
    pub fn at(mut self, file: FileId, offset: u32) -> Self {
        self.data.source = Some(SourceHandle::new(file, offset));
        self.data.file = self.host.files.get(file.index()).map(|f| f.symbol);
        self
    }

    pub fn annotated(mut self, annotation: AnnotationApplication) -> Self {
        self.data.annotations.push(annotation);
        self
    }

    /// Declare the symbol as a member of a class-like symbol.
    pub fn member_of(self, class: SymbolId) -> Self {
        self.placed(class, Placement::Member)
    }

    /// Declare the symbol as a static member of a class-like symbol.
    pub fn static_member_of(self, class: SymbolId) -> Self {
        self.placed(class, Placement::Static)
    }

    /// Declare the symbol as a constructor of a class-like symbol.
    pub fn constructor_of(self, class: SymbolId) -> Self {
        self.placed(class, Placement::Constructor)
    }

    /// Set the lexical container without adding a scope entry.
    pub fn contained_by(self, container: SymbolId) -> Self {
        self.placed(container, Placement::Contained)
    }

    fn placed(mut self, container: SymbolId, placement: Placement) -> Self {
        self.data.container = Some(container);
        self.placement = placement;
        self
    }

    pub fn class_id(mut self, id: ClassId) -> Self {
        self.data.class_id = Some(id);
        self
    }

    pub fn declared_type(mut self, ty: HostType) -> Self {
        self.data.declared_type = Some(ty);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.data.visibility = visibility;
        self
    }

    pub fn modality(mut self, modality: Modality) -> Self {
        self.data.modality = Some(modality);
        self
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.data.doc = Some(doc.to_string());
        self
    }

    /// Insert the symbol and wire it into its container's scopes.
    pub fn finish(self) -> SymbolId {
        let SymbolBuilder {
            host,
            mut data,
            placement,
        } = self;
        if data.file.is_none() {
            data.file = data
                .container
                .and_then(|c| host.symbols.get(c.index()))
                .and_then(|c| c.file);
        }
        let container = data.container;
        let class_id = data.class_id.clone();
        let id = host.push_symbol(data);

        if let Some(class_id) = class_id {
            host.classes.insert(class_id, id);
        }
        if let Some(owner) = container.and_then(|c| host.symbols.get_mut(c.index())) {
            match placement {
                Placement::Member => owner.declared_members.push(id),
                Placement::Static => owner.static_members.push(id),
                Placement::Constructor => owner.constructors.push(id),
                Placement::Contained | Placement::Detached => {}
            }
        }
        id
    }
}

impl MemoryHost {
    /// Make `member` visible through `class`'s member scope as an inherited callable.
    pub fn inherit(&mut self, class: SymbolId, member: SymbolId) {
        if let Some(data) = self.symbols.get_mut(class.index()) {
            data.inherited_callables.push(member);
        }
    }
}

impl SemanticHost for MemoryHost {
    fn symbol_kind(&self, symbol: SymbolId) -> Result<SymbolKind, HostError> {
        Ok(self.data(symbol)?.kind)
    }

    fn symbol_name(&self, symbol: SymbolId) -> Result<Option<Name>, HostError> {
        Ok(self.data(symbol)?.name.clone())
    }

    fn origin(&self, symbol: SymbolId) -> Result<HostOrigin, HostError> {
        Ok(self.data(symbol)?.origin)
    }

    fn source(&self, symbol: SymbolId) -> Result<Option<SourceHandle>, HostError> {
        Ok(self.data(symbol)?.source)
    }

    fn annotations(&self, symbol: SymbolId) -> Result<Vec<AnnotationApplication>, HostError> {
        Ok(self.data(symbol)?.annotations.clone())
    }

    fn containing_symbol(&self, symbol: SymbolId) -> Result<Option<SymbolId>, HostError> {
        Ok(self.data(symbol)?.container)
    }

    fn containing_file(&self, symbol: SymbolId) -> Result<Option<SymbolId>, HostError> {
        Ok(self.data(symbol)?.file)
    }

    fn declared_member_scope(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError> {
        Ok(self.data(class)?.declared_members.clone())
    }

    fn static_member_scope(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError> {
        Ok(self.data(class)?.static_members.clone())
    }

    fn member_scope_callables(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError> {
        let data = self.data(class)?;
        let mut callables = Vec::new();
        for &member in data
            .declared_members
            .iter()
            .chain(data.inherited_callables.iter())
        {
            let kind = self.data(member)?.kind;
            if matches!(
                kind,
                SymbolKind::Property | SymbolKind::FunctionLike | SymbolKind::JavaField
            ) {
                callables.push(member);
            }
        }
        Ok(callables)
    }

    fn constructors(&self, class: SymbolId) -> Result<Vec<SymbolId>, HostError> {
        Ok(self.data(class)?.constructors.clone())
    }

    fn is_visible_in_class(&self, member: SymbolId, class: SymbolId) -> Result<bool, HostError> {
        let data = self.data(member)?;
        Ok(match data.visibility {
            Visibility::Private | Visibility::Local => data.container == Some(class),
            _ => true,
        })
    }

    fn class_by_id(&self, id: &ClassId) -> Result<SymbolId, HostError> {
        self.classes
            .get(id)
            .copied()
            .ok_or_else(|| HostError::UnknownClassId(id.clone()))
    }

    fn class_id(&self, symbol: SymbolId) -> Result<Option<ClassId>, HostError> {
        Ok(self.data(symbol)?.class_id.clone())
    }

    fn declared_type(&self, symbol: SymbolId) -> Result<Option<HostType>, HostError> {
        Ok(self.data(symbol)?.declared_type.clone())
    }

    fn visibility(&self, symbol: SymbolId) -> Result<Visibility, HostError> {
        Ok(self.data(symbol)?.visibility)
    }

    fn modality(&self, symbol: SymbolId) -> Result<Option<Modality>, HostError> {
        Ok(self.data(symbol)?.modality)
    }

    fn doc_comment(&self, symbol: SymbolId) -> Result<Option<String>, HostError> {
        Ok(self.data(symbol)?.doc.clone())
    }

    fn file_kind(&self, file: FileId) -> Result<FileKind, HostError> {
        Ok(self.file_data(file)?.kind)
    }

    fn document(&self, file: FileId) -> Option<&Document> {
        self.files.get(file.index())?.document.as_ref()
    }
}
