//! Analysis sessions: scoped access to the host.
//!
//! Every query runs inside a session. The session owns the caches that give
//! adapters their identity, and drops them when the session ends, on every
//! exit path including unwinding.
//!
//! ## Usage
//!
//! ```ignore
//! let names = analyze(&host, SessionConfig::default(), |session| {
//!     let class = session.adapter_for(symbol)?;
//!     let members = session.declarations(&class)?;
//!     Ok::<_, Error>(members.iter().map(|m| m.to_string()).collect::<Vec<_>>())
//! })?;
//! ```
//!
//! Sessions are not meant to be entered concurrently for the same host;
//! callers serialize access.

mod annotations;
mod config;
mod members;

pub use config::SessionConfig;

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{ClassId, SessionId, SymbolId};
use crate::error::{Error, Result};
use crate::host::{HostType, SemanticHost};
use crate::model::{
    Declaration, DeclarationCategory, DeclarationKind, Location, Modifier, Origin, classify,
    clean_doc_comment, locate,
};
use crate::types::{Classifier, classifier_of, lookup_class, render_type};

/// Run `action` inside a fresh session over `host`.
///
/// The session and all of its caches are discarded when `action` returns or
/// unwinds.
pub fn analyze<H, R>(host: &H, config: SessionConfig, action: impl FnOnce(&Session<'_, H>) -> R) -> R
where
    H: SemanticHost + ?Sized,
{
    let session = Session::open(host, config);
    action(&session)
}

/// A live analysis session.
pub struct Session<'h, H: SemanticHost + ?Sized> {
    id: SessionId,
    host: &'h H,
    config: SessionConfig,
    /// Symbol identity → the one adapter for it in this session.
    adapters: Mutex<FxHashMap<SymbolId, Arc<Declaration>>>,
}

impl<'h, H: SemanticHost + ?Sized> Session<'h, H> {
    /// Open a session. Prefer [`analyze`], which bounds the session's lifetime.
    pub fn open(host: &'h H, config: SessionConfig) -> Self {
        let id = SessionId::generate();
        debug!(session = %id, "session opened");
        Self {
            id,
            host,
            config,
            adapters: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn host(&self) -> &'h H {
        self.host
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of adapters created so far.
    pub fn adapter_count(&self) -> usize {
        self.adapters.lock().len()
    }

    // ── Identity ────────────────────────────────────────────────────

    /// The adapter for a symbol.
    ///
    /// Repeated calls with the same symbol return the same `Arc`.
    pub fn adapter_for(&self, symbol: SymbolId) -> Result<Arc<Declaration>> {
        if let Some(existing) = self.adapters.lock().get(&symbol) {
            trace!(%symbol, "adapter cache hit");
            return Ok(Arc::clone(existing));
        }

        let kind = DeclarationKind::from(self.host.symbol_kind(symbol)?);
        let name = self.host.symbol_name(symbol)?;
        trace!(%symbol, ?kind, "adapter cache miss");

        let mut adapters = self.adapters.lock();
        let adapter = adapters
            .entry(symbol)
            .or_insert_with(|| Arc::new(Declaration::new(symbol, kind, name, self.id)));
        Ok(Arc::clone(adapter))
    }

    pub(crate) fn check(&self, decl: &Declaration) -> Result<()> {
        if decl.session_id() == self.id {
            Ok(())
        } else {
            Err(Error::ForeignSession {
                symbol: decl.symbol(),
                owner: decl.session_id(),
                current: self.id,
            })
        }
    }

    fn adapt_all(&self, symbols: impl IntoIterator<Item = SymbolId>) -> Result<Vec<Arc<Declaration>>> {
        symbols.into_iter().map(|s| self.adapter_for(s)).collect()
    }

    // ── Provenance ──────────────────────────────────────────────────

    pub fn origin(&self, decl: &Declaration) -> Result<Origin> {
        self.check(decl)?;
        decl.memo_origin(|| Ok(classify(self.host, decl.symbol())?))
    }

    /// Where the declaration is written; [`Location::NonExistent`] when unknown.
    pub fn location(&self, decl: &Declaration) -> Result<Location> {
        self.check(decl)?;
        decl.memo_location(|| {
            let handle = self.host.source(decl.symbol())?;
            Ok(locate(self.host, handle))
        })
    }

    pub fn modifiers(&self, decl: &Declaration) -> Result<Vec<Modifier>> {
        self.check(decl)?;
        let mut modifiers = vec![Modifier::from(self.host.visibility(decl.symbol())?)];
        if let Some(modality) = self.host.modality(decl.symbol())? {
            modifiers.push(Modifier::from(modality));
        }
        Ok(modifiers)
    }

    /// The documentation comment with delimiters stripped.
    pub fn doc_string(&self, decl: &Declaration) -> Result<Option<String>> {
        self.check(decl)?;
        Ok(self
            .host
            .doc_comment(decl.symbol())?
            .map(|raw| clean_doc_comment(&raw)))
    }

    // ── Structure ───────────────────────────────────────────────────

    /// The declared parent: the containing symbol, or the file for
    /// top-level declarations. `None` for files.
    pub fn parent(&self, decl: &Declaration) -> Result<Option<Arc<Declaration>>> {
        self.check(decl)?;
        if let Some(container) = self.host.containing_symbol(decl.symbol())? {
            return Ok(Some(self.adapter_for(container)?));
        }
        match self.host.containing_file(decl.symbol())? {
            Some(file) if file != decl.symbol() => Ok(Some(self.adapter_for(file)?)),
            _ => Ok(None),
        }
    }

    /// Climb the parent chain to the first ancestor of `category`.
    pub fn find_parent_of_type(
        &self,
        decl: &Declaration,
        category: DeclarationCategory,
    ) -> Result<Option<Arc<Declaration>>> {
        let mut current = self.parent(decl)?;
        while let Some(node) = current {
            if node.kind().category() == category {
                return Ok(Some(node));
            }
            current = self.parent(&node)?;
        }
        Ok(None)
    }

    /// The enclosing class, function or property, if any.
    pub fn containing_declaration(&self, decl: &Declaration) -> Result<Option<Arc<Declaration>>> {
        self.check(decl)?;
        let Some(container) = self.host.containing_symbol(decl.symbol())? else {
            return Ok(None);
        };
        let container = self.adapter_for(container)?;
        Ok(match container.kind() {
            DeclarationKind::Class | DeclarationKind::Function | DeclarationKind::Property => {
                Some(container)
            }
            _ => None,
        })
    }

    pub fn containing_file(&self, decl: &Declaration) -> Result<Option<Arc<Declaration>>> {
        self.check(decl)?;
        self.host
            .containing_file(decl.symbol())?
            .map(|file| self.adapter_for(file))
            .transpose()
    }

    // ── Types ───────────────────────────────────────────────────────

    /// The declaration's type (property type, return type, alias expansion).
    pub fn type_of(&self, decl: &Declaration) -> Result<Option<HostType>> {
        self.check(decl)?;
        Ok(self.host.declared_type(decl.symbol())?)
    }

    /// The rendered declaration type, computed once per adapter.
    pub fn rendered_type(&self, decl: &Declaration) -> Result<Option<Arc<str>>> {
        self.check(decl)?;
        decl.memo_rendered_type(|| {
            Ok(self
                .host
                .declared_type(decl.symbol())?
                .map(|ty| Arc::from(self.render(&ty))))
        })
    }

    /// Render a type with the session's options.
    pub fn render(&self, ty: &HostType) -> String {
        render_type(ty, false, &self.config.render)
    }

    /// See [`classifier_of`]; never fails.
    pub fn classifier_of(&self, ty: &HostType) -> Option<Classifier> {
        classifier_of(self.host, ty)
    }

    /// The adapter of a type's classifier.
    pub fn classifier_declaration(&self, ty: &HostType) -> Result<Option<Arc<Declaration>>> {
        self.classifier_of(ty)
            .map(|classifier| self.adapter_for(classifier.symbol()))
            .transpose()
    }

    /// The class id of a class or type alias declaration, `None` for other kinds.
    pub fn class_id(&self, decl: &Declaration) -> Result<Option<ClassId>> {
        self.check(decl)?;
        Ok(self.host.class_id(decl.symbol())?)
    }

    /// Look up a class or type alias by id, local classes included.
    pub fn class_by_id(&self, id: &ClassId) -> Result<Option<Arc<Declaration>>> {
        lookup_class(self.host, id)?
            .map(|symbol| self.adapter_for(symbol))
            .transpose()
    }
}

impl<H: SemanticHost + ?Sized> Drop for Session<'_, H> {
    fn drop(&mut self) {
        let mut adapters = self.adapters.lock();
        let count = adapters.len();
        adapters.clear();
        debug!(session = %self.id, adapters = count, "session closed");
    }
}
