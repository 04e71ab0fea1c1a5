//! Session tests
//!
//! End-to-end queries over the shapes fixture:
//! - Adapter identity within and across sessions
//! - Origin and location
//! - Parent chains and member enumeration
//! - Annotation projection through use-site targets

pub mod tests_annotations;
pub mod tests_identity;
pub mod tests_provenance;
