//! Member enumeration for class-like declarations.

use std::sync::Arc;

use indexmap::IndexSet;

use super::Session;
use crate::base::SymbolId;
use crate::error::{Error, Result};
use crate::host::{SemanticHost, SymbolKind};
use crate::model::Declaration;

impl<H: SemanticHost + ?Sized> Session<'_, H> {
    /// All declarations of a class-like declaration: declared members
    /// followed by static members, each symbol once, in scope order.
    ///
    /// Memoized on the adapter unless the session disables member memoization.
    pub fn declarations(&self, class: &Declaration) -> Result<Vec<Arc<Declaration>>> {
        self.check(class)?;
        self.require_members(class)?;
        if self.config().memoize_members {
            class.memo_members(|| self.compute_declarations(class))
        } else {
            self.compute_declarations(class)
        }
    }

    fn compute_declarations(&self, class: &Declaration) -> Result<Vec<Arc<Declaration>>> {
        let host = self.host();
        let symbols: IndexSet<SymbolId> = host
            .declared_member_scope(class.symbol())?
            .into_iter()
            .chain(host.static_member_scope(class.symbol())?)
            .collect();
        self.adapt_all(symbols)
    }

    /// Properties (including Java fields) visible in the class, inherited ones included.
    pub fn all_properties(&self, class: &Declaration) -> Result<Vec<Arc<Declaration>>> {
        self.check(class)?;
        self.require_members(class)?;
        let callables = self.host().member_scope_callables(class.symbol())?;
        self.visible_of_kind(class, callables, |kind| {
            matches!(kind, SymbolKind::Property | SymbolKind::JavaField)
        })
    }

    /// Functions and constructors visible in the class, inherited ones included.
    pub fn all_functions(&self, class: &Declaration) -> Result<Vec<Arc<Declaration>>> {
        self.check(class)?;
        self.require_members(class)?;
        let host = self.host();
        let mut callables = host.member_scope_callables(class.symbol())?;
        callables.extend(host.constructors(class.symbol())?);
        self.visible_of_kind(class, callables, |kind| kind == SymbolKind::FunctionLike)
    }

    /// Keep members that are visible in `class` or declared directly in it,
    /// of a wanted kind, de-duplicated by identity.
    fn visible_of_kind(
        &self,
        class: &Declaration,
        candidates: Vec<SymbolId>,
        wanted: impl Fn(SymbolKind) -> bool,
    ) -> Result<Vec<Arc<Declaration>>> {
        let host = self.host();
        let mut kept = IndexSet::new();
        for member in candidates {
            let visible = host.is_visible_in_class(member, class.symbol())?
                || host.containing_symbol(member)? == Some(class.symbol());
            if visible && wanted(host.symbol_kind(member)?) {
                kept.insert(member);
            }
        }
        self.adapt_all(kept)
    }

    fn require_members(&self, decl: &Declaration) -> Result<()> {
        if decl.kind().has_members() {
            Ok(())
        } else {
            Err(Error::NotClassLike {
                symbol: decl.symbol(),
                kind: self
                    .host()
                    .symbol_kind(decl.symbol())
                    .map(|k| k.display())
                    .unwrap_or("declaration"),
            })
        }
    }
}
