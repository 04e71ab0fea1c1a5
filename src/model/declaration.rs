//! Declaration adapters.
//!
//! A [`Declaration`] wraps exactly one host symbol. The session hands out
//! one `Arc<Declaration>` per symbol, so `Arc::ptr_eq` on two adapters is
//! the same as identity of the underlying symbols.
//!
//! Adapters are immutable after construction except for memoized derived
//! fields, each filled at most once.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::location::Location;
use super::origin::Origin;
use crate::base::{Name, SessionId, SymbolId};
use crate::host::SymbolKind;

/// The public kind of a declaration adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeclarationKind {
    Class,
    EnumEntry,
    Function,
    Property,
    /// A Java field, exposed as a property
    JavaField,
    /// A local variable, exposed as a property
    LocalVariable,
    TypeAlias,
    File,
    TypeParameter,
    Getter,
    Setter,
    ValueParameter,
}

impl From<SymbolKind> for DeclarationKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Property => DeclarationKind::Property,
            SymbolKind::NamedClass => DeclarationKind::Class,
            SymbolKind::FunctionLike => DeclarationKind::Function,
            SymbolKind::TypeAlias => DeclarationKind::TypeAlias,
            SymbolKind::JavaField => DeclarationKind::JavaField,
            SymbolKind::File => DeclarationKind::File,
            SymbolKind::EnumEntry => DeclarationKind::EnumEntry,
            SymbolKind::TypeParameter => DeclarationKind::TypeParameter,
            SymbolKind::LocalVariable => DeclarationKind::LocalVariable,
            SymbolKind::PropertyGetter => DeclarationKind::Getter,
            SymbolKind::PropertySetter => DeclarationKind::Setter,
            SymbolKind::ValueParameter => DeclarationKind::ValueParameter,
        }
    }
}

impl DeclarationKind {
    pub fn category(&self) -> DeclarationCategory {
        match self {
            DeclarationKind::Class | DeclarationKind::EnumEntry => DeclarationCategory::Class,
            DeclarationKind::Function => DeclarationCategory::Function,
            DeclarationKind::Property
            | DeclarationKind::JavaField
            | DeclarationKind::LocalVariable => DeclarationCategory::Property,
            DeclarationKind::TypeAlias => DeclarationCategory::TypeAlias,
            DeclarationKind::File => DeclarationCategory::File,
            DeclarationKind::TypeParameter => DeclarationCategory::TypeParameter,
            DeclarationKind::Getter | DeclarationKind::Setter => DeclarationCategory::Accessor,
            DeclarationKind::ValueParameter => DeclarationCategory::ValueParameter,
        }
    }

    /// Class-like declarations own member scopes.
    pub fn has_members(&self) -> bool {
        self.category() == DeclarationCategory::Class
    }

    pub fn is_property_like(&self) -> bool {
        self.category() == DeclarationCategory::Property
    }
}

/// Coarse grouping used by upward parent searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationCategory {
    Class,
    Function,
    Property,
    TypeAlias,
    File,
    TypeParameter,
    Accessor,
    ValueParameter,
}

/// A stable public node over one host symbol.
pub struct Declaration {
    symbol: SymbolId,
    kind: DeclarationKind,
    name: Option<Name>,
    session: SessionId,
    origin: OnceLock<Origin>,
    location: OnceLock<Location>,
    rendered_type: OnceLock<Option<Arc<str>>>,
    members: OnceLock<Vec<Arc<Declaration>>>,
}

impl Declaration {
    pub(crate) fn new(symbol: SymbolId, kind: DeclarationKind, name: Option<Name>, session: SessionId) -> Self {
        Self {
            symbol,
            kind,
            name,
            session,
            origin: OnceLock::new(),
            location: OnceLock::new(),
            rendered_type: OnceLock::new(),
            members: OnceLock::new(),
        }
    }

    /// The identity key of the wrapped host symbol.
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The session that created this adapter.
    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub(crate) fn memo_origin<E>(&self, compute: impl FnOnce() -> Result<Origin, E>) -> Result<Origin, E> {
        if let Some(origin) = self.origin.get() {
            return Ok(*origin);
        }
        let origin = compute()?;
        Ok(*self.origin.get_or_init(|| origin))
    }

    pub(crate) fn memo_location<E>(
        &self,
        compute: impl FnOnce() -> Result<Location, E>,
    ) -> Result<Location, E> {
        if let Some(location) = self.location.get() {
            return Ok(location.clone());
        }
        let location = compute()?;
        Ok(self.location.get_or_init(|| location).clone())
    }

    pub(crate) fn memo_rendered_type<E>(
        &self,
        compute: impl FnOnce() -> Result<Option<Arc<str>>, E>,
    ) -> Result<Option<Arc<str>>, E> {
        if let Some(rendered) = self.rendered_type.get() {
            return Ok(rendered.clone());
        }
        let rendered = compute()?;
        Ok(self.rendered_type.get_or_init(|| rendered).clone())
    }

    pub(crate) fn memo_members<E>(
        &self,
        compute: impl FnOnce() -> Result<Vec<Arc<Declaration>>, E>,
    ) -> Result<Vec<Arc<Declaration>>, E> {
        if let Some(members) = self.members.get() {
            return Ok(members.clone());
        }
        let members = compute()?;
        Ok(self.members.get_or_init(|| members).clone())
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("symbol", &self.symbol)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<anonymous>"))
    }
}
