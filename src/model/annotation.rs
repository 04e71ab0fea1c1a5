//! Public annotation model and projection from host annotation data.

use std::fmt;

use crate::base::{ClassId, Name};
use crate::host::{AnnotationApplication, UseSiteTarget};
use crate::types::{render_annotation, render_annotation_value};

/// A named annotation argument with its rendered value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationArgument {
    pub name: Name,
    pub value: String,
}

/// An annotation as exposed to generators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Identity of the annotation class
    pub annotation_type: ClassId,
    pub use_site_target: Option<UseSiteTarget>,
    /// Arguments in source order
    pub arguments: Vec<AnnotationArgument>,
    /// Full rendering, `@target:Name(args)`
    pub rendered: String,
}

impl Annotation {
    /// Convert one host annotation. Conversion of one annotation never
    /// depends on any other.
    pub fn from_application(application: &AnnotationApplication) -> Self {
        Self {
            annotation_type: application.class_id.clone(),
            use_site_target: application.use_site_target,
            arguments: application
                .arguments
                .iter()
                .map(|(name, value)| AnnotationArgument {
                    name: name.clone(),
                    value: render_annotation_value(value),
                })
                .collect(),
            rendered: render_annotation(application),
        }
    }

    /// The annotation class's simple name.
    pub fn short_name(&self) -> &str {
        self.annotation_type.short_name()
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Convert every annotation, in order.
pub fn project(applications: &[AnnotationApplication]) -> Vec<Annotation> {
    applications.iter().map(Annotation::from_application).collect()
}

/// Keep the annotations whose recorded use-site target is `target`.
pub fn filter_by_target(applications: &[AnnotationApplication], target: UseSiteTarget) -> Vec<Annotation> {
    applications
        .iter()
        .filter(|a| a.use_site_target == Some(target))
        .map(Annotation::from_application)
        .collect()
}
