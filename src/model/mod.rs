//! Public symbol model handed to generators.
//!
//! These types never expose host data structures. Everything is either a
//! plain value ([`Origin`], [`Location`], [`Annotation`], [`Modifier`]) or a
//! [`Declaration`] adapter whose attributes are resolved on demand through a
//! [`Session`](crate::session::Session).

mod annotation;
mod declaration;
mod doc;
mod location;
mod modifier;
mod origin;

pub use annotation::{Annotation, AnnotationArgument, filter_by_target, project};
pub use declaration::{Declaration, DeclarationCategory, DeclarationKind};
pub use doc::clean_doc_comment;
pub use location::{Location, locate};
pub use modifier::Modifier;
pub use origin::{Origin, classify, map_origin};
