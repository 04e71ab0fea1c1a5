//! Rendering options

use crate::host::TypeKind;

/// Where the trailing `?` of a nullable type is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NullabilitySuffix {
    /// Every nullable type gets a suffix, markers included (`<ERROR TYPE>?`)
    #[default]
    Uniform,
    /// The error and dynamic markers are written bare
    SkipMarkers,
}

impl NullabilitySuffix {
    /// Whether a nullable type of this shape gets a `?`.
    pub fn applies_to(&self, kind: &TypeKind) -> bool {
        match self {
            NullabilitySuffix::Uniform => true,
            NullabilitySuffix::SkipMarkers => !matches!(
                kind,
                TypeKind::ClassError { .. } | TypeKind::TypeError { .. } | TypeKind::Dynamic
            ),
        }
    }
}

/// Options for [`render_type`](super::render_type).
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub nullability: NullabilitySuffix,
}

impl RenderOptions {
    pub fn with_nullability(nullability: NullabilitySuffix) -> Self {
        Self { nullability }
    }
}
