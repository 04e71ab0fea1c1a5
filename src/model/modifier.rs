//! Declaration modifiers.

use crate::host::{Modality, Visibility};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Modifier {
    Public,
    Private,
    Internal,
    Protected,
    Final,
    Abstract,
    Open,
    Sealed,
}

impl From<Visibility> for Modifier {
    /// Platform visibilities without a Kotlin keyword map to `Public`.
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => Modifier::Public,
            Visibility::Private => Modifier::Private,
            Visibility::Internal => Modifier::Internal,
            Visibility::Protected => Modifier::Protected,
            Visibility::Local | Visibility::PackagePrivate => Modifier::Public,
        }
    }
}

impl From<Modality> for Modifier {
    fn from(modality: Modality) -> Self {
        match modality {
            Modality::Final => Modifier::Final,
            Modality::Abstract => Modifier::Abstract,
            Modality::Open => Modifier::Open,
            Modality::Sealed => Modifier::Sealed,
        }
    }
}
