//! Reference elements and type-argument conversion.

use crate::base::{Name, SymbolId};
use crate::host::{HostType, TypeKind, TypeProjection, Variance};

/// The element a type reference points at, as generators see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceElement {
    /// A function type reference (`(A) -> B`)
    Callable,
    /// `dynamic`
    Dynamic,
    /// A (possibly qualified) class reference; `qualifier` indexes the
    /// innermost qualifier segment
    Classifier { name: Name, qualifier: usize },
    /// A reference to a type parameter
    Parameter { symbol: SymbolId, name: Name },
    /// `T & Any`
    DefinitelyNonNull,
}

/// Classify the reference element of a type.
///
/// Error types have no reference element. Flexible types use their lower
/// bound.
///
/// # Panics
///
/// On captured, integer-literal and intersection types, which never appear
/// as written type references.
pub fn reference_element(ty: &HostType) -> Option<ReferenceElement> {
    match &ty.kind {
        TypeKind::Functional(_) => Some(ReferenceElement::Callable),
        TypeKind::Dynamic => Some(ReferenceElement::Dynamic),
        TypeKind::UsualClass(class) => Some(ReferenceElement::Classifier {
            name: Name::new(class.name()),
            qualifier: class.qualifiers.len().saturating_sub(1),
        }),
        TypeKind::Flexible { lower, .. } => reference_element(lower),
        TypeKind::ClassError { .. } | TypeKind::TypeError { .. } => None,
        TypeKind::TypeParameter { symbol, name } => Some(ReferenceElement::Parameter {
            symbol: *symbol,
            name: name.clone(),
        }),
        TypeKind::DefinitelyNotNull(_) => Some(ReferenceElement::DefinitelyNonNull),
        TypeKind::Captured(_) | TypeKind::IntegerLiteral { .. } | TypeKind::Intersection(_) => {
            panic!("Unexpected type element {:?}", ty.kind)
        }
    }
}

/// Variance of a type argument in the public model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentVariance {
    Invariant,
    Covariant,
    Contravariant,
    Star,
}

/// A type argument as supplied by generator code.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeArgument {
    pub variance: ArgumentVariance,
    /// `None` when the argument's type did not resolve
    pub ty: Option<HostType>,
}

/// Convert a public type argument into a host projection.
///
/// Star variance or an unresolved type both become `*`.
pub fn to_projection(argument: TypeArgument) -> TypeProjection {
    let variance = match argument.variance {
        ArgumentVariance::Invariant => Variance::Invariant,
        ArgumentVariance::Covariant => Variance::Out,
        ArgumentVariance::Contravariant => Variance::In,
        ArgumentVariance::Star => return TypeProjection::Star,
    };
    match argument.ty {
        Some(ty) => TypeProjection::WithVariance { variance, ty },
        None => TypeProjection::Star,
    }
}
