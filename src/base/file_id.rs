//! Interned identifiers for host files and symbols.

use std::fmt;

/// Identifier of a file tracked by the host engine.
///
/// Cheap to copy and compare. The mapping from id to path lives in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity key of a symbol in the host's semantic graph.
///
/// Two `SymbolId`s are equal exactly when they name the same host symbol.
/// The adapter cache is keyed on this value rather than on the host object,
/// so holding a key never pins the host symbol's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
