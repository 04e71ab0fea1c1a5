//! Foundation types for the symbol bridge.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`], [`SymbolId`] - Opaque identity keys handed out by the host
//! - [`ClassId`], [`CallableId`] - Stable, host-independent declaration names
//! - [`Name`] - Identifier strings
//! - [`SessionId`] - Analysis session identity
//! - [`LineCol`], [`LineIndex`], [`TextSize`] - Offset to line conversion
//!
//! This module has NO dependencies on other crate modules.

mod file_id;
mod ids;
mod session_id;
mod span;

pub use file_id::{FileId, SymbolId};
pub use ids::{CallableId, ClassId, Name};
pub use session_id::SessionId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
