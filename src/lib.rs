//! # symbol-bridge
//!
//! Stable declaration model over a compiler's internal symbol graph.
//!
//! Generators query [`Declaration`] adapters through a [`Session`]; the
//! session delegates to a [`SemanticHost`] only when an attribute is first
//! requested and memoizes the answer on the adapter.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → analyze(), Session queries, identity cache, members, annotations
//!   ↓
//! model     → Declaration adapter, Origin, Location, Annotation, Modifier
//!   ↓
//! types     → Type rendering, classifier resolution, reference elements
//!   ↓
//! host      → SemanticHost trait, host symbol/type shapes, MemoryHost
//!   ↓
//! base      → Primitives (SymbolId, ClassId, Name, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → host → types → model → session)
// ============================================================================

/// Foundation types: ids, names, line index
pub mod base;

/// The host engine interface consumed by the bridge
pub mod host;

/// Type rendering and classifier resolution
pub mod types;

/// Public declaration model
pub mod model;

/// Scoped analysis sessions
pub mod session;

/// Crate error type
pub mod error;

/// Serializable declaration snapshots
#[cfg(feature = "serde")]
pub mod snapshot;

// Re-export foundation types
pub use base::{CallableId, ClassId, FileId, LineCol, LineIndex, Name, SymbolId, TextRange, TextSize};

pub use error::{Error, Result};
pub use host::{HostError, MemoryHost, SemanticHost};
pub use model::{Annotation, Declaration, DeclarationCategory, DeclarationKind, Location, Modifier, Origin};
pub use session::{Session, SessionConfig, analyze};
pub use types::{NullabilitySuffix, RenderOptions, render_type};
