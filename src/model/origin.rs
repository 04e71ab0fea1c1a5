//! Origin classification.

use std::fmt;

use crate::base::SymbolId;
use crate::host::{HostError, HostOrigin, SemanticHost};

/// Where a declaration comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Origin {
    /// Authored Kotlin source
    Kotlin,
    /// Compiled Kotlin library
    KotlinLib,
    /// Authored Java source
    Java,
    /// Compiled Java library
    JavaLib,
    /// Generated by the compiler
    Synthetic,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Kotlin => "KOTLIN",
            Origin::KotlinLib => "KOTLIN_LIB",
            Origin::Java => "JAVA",
            Origin::JavaLib => "JAVA_LIB",
            Origin::Synthetic => "SYNTHETIC",
        })
    }
}

/// The fixed provenance table. `None` for tags the table does not cover.
pub fn map_origin(tag: HostOrigin) -> Option<Origin> {
    match tag {
        HostOrigin::Java => Some(Origin::Java),
        HostOrigin::Source => Some(Origin::Kotlin),
        HostOrigin::SamConstructor => Some(Origin::Synthetic),
        HostOrigin::SourceMemberGenerated => Some(Origin::Synthetic),
        HostOrigin::Delegated => Some(Origin::Synthetic),
        HostOrigin::PropertyBackingField => Some(Origin::Kotlin),
        HostOrigin::JavaSyntheticProperty => Some(Origin::Synthetic),
        HostOrigin::IntersectionOverride => Some(Origin::Kotlin),
        // TODO: split LIBRARY into Kotlin and Java libraries once the host reports the library language
        HostOrigin::Library => Some(Origin::KotlinLib),
        HostOrigin::SubstitutionOverride => Some(Origin::JavaLib),
        HostOrigin::Plugin | HostOrigin::JsDynamic => None,
    }
}

/// Classify a symbol's origin.
///
/// A Java symbol whose backing file is a compiled artifact is a Java library
/// symbol, whatever its raw tag says.
///
/// # Panics
///
/// When the host reports a provenance tag outside the table; this means the
/// host is newer than this layer.
pub fn classify<H: SemanticHost + ?Sized>(host: &H, symbol: SymbolId) -> Result<Origin, HostError> {
    let tag = host.origin(symbol)?;
    let origin = map_origin(tag).unwrap_or_else(|| panic!("unhandled origin {}", tag.name()));
    if origin == Origin::Java && is_backed_by_binary(host, symbol)? {
        return Ok(Origin::JavaLib);
    }
    Ok(origin)
}

fn is_backed_by_binary<H: SemanticHost + ?Sized>(host: &H, symbol: SymbolId) -> Result<bool, HostError> {
    match host.source(symbol)? {
        Some(handle) => Ok(host.file_kind(handle.file)?.is_binary()),
        None => Ok(false),
    }
}
