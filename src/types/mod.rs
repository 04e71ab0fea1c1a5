//! Pure functions over host types.
//!
//! Nothing in this module caches or mutates. Rendering needs only the type
//! value; classifier resolution additionally asks the host to turn a
//! [`ClassId`](crate::base::ClassId) into a symbol.
//!
//! - [`render_type`] - canonical text of a type, used for diagnostics and as a comparison key
//! - [`classifier_of`] - the class, alias or type parameter a type refers to
//! - [`reference_element`] - what kind of reference a type reference exposes
//! - [`render_annotation`], [`render_annotation_value`] - annotation text

mod annotation;
mod classifier;
mod options;
mod reference;
mod render;

pub use annotation::{render_annotation, render_annotation_value, render_constant};
pub use classifier::{Classifier, classifier_of, lookup_class};
pub use options::{NullabilitySuffix, RenderOptions};
pub use reference::{ArgumentVariance, ReferenceElement, TypeArgument, reference_element, to_projection};
pub use render::{DYNAMIC_TYPE_MARKER, ERROR_TYPE_MARKER, render_type, type_arguments};
