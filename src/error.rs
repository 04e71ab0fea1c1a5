//! Error types for bridge queries.

use thiserror::Error;

use crate::base::{SessionId, SymbolId};
use crate::host::HostError;

/// Errors a session query can return.
///
/// Version-skew faults (unknown origin tags, unsupported annotation values,
/// unexpected type shapes) are not represented here; they panic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The host failed to answer a query.
    #[error(transparent)]
    Host(#[from] HostError),

    /// An adapter was passed to a session other than the one that created it.
    #[error("declaration {symbol} belongs to session {owner}, queried through session {current}")]
    ForeignSession {
        symbol: SymbolId,
        owner: SessionId,
        current: SessionId,
    },

    /// A member query was made on a declaration without member scopes.
    #[error("{kind} {symbol} has no member scopes")]
    NotClassLike { symbol: SymbolId, kind: &'static str },
}

/// Result alias for session queries.
pub type Result<T> = std::result::Result<T, Error>;
