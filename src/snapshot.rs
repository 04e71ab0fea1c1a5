//! Serializable snapshots of the declaration tree.
//!
//! A snapshot evaluates every lazy attribute of a declaration once and
//! copies the result into plain data, so it can outlive the session that
//! produced it. Harnesses use this to diff the view a generator would see.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::SemanticHost;
use crate::model::{Annotation, Declaration, DeclarationKind, Location, Modifier, Origin};
use crate::session::Session;

/// Fully evaluated view of one declaration and its members.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclarationSnapshot {
    pub name: Option<String>,
    /// Dotted fully-qualified name, for classes and type aliases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    pub kind: DeclarationKind,
    pub origin: Origin,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Declared and static members, for class-like declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<DeclarationSnapshot>,
}

impl DeclarationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Evaluate `decl` and, for class-like declarations, every member below it.
pub fn snapshot<H: SemanticHost + ?Sized>(
    session: &Session<'_, H>,
    decl: &Declaration,
) -> Result<DeclarationSnapshot> {
    let members = if decl.kind().has_members() {
        session
            .declarations(decl)?
            .iter()
            .map(|member| snapshot(session, member))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };
    Ok(DeclarationSnapshot {
        name: decl.name().map(str::to_string),
        qualified_name: session.class_id(decl)?.map(|id| id.as_fq_name()),
        kind: decl.kind(),
        origin: session.origin(decl)?,
        location: session.location(decl)?,
        modifiers: session.modifiers(decl)?,
        rendered_type: session.rendered_type(decl)?.map(|ty| ty.to_string()),
        annotations: session.resolved_annotations(decl)?,
        members,
    })
}
