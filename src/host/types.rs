//! Type shapes produced by the host engine.
//!
//! [`TypeKind`] is the closed set of eleven shapes a host type can take.
//! Constructors on [`HostType`] keep fixtures short:
//!
//! ```ignore
//! let list = HostType::class(list_id, vec![TypeProjection::covariant(HostType::class(string_id, vec![]))]);
//! let nullable = list.clone().nullable();
//! ```

use std::fmt;

use super::annotations::AnnotationApplication;
use crate::base::{ClassId, Name, SymbolId};

/// Nullability marker of a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nullability {
    #[default]
    NonNullable,
    Nullable,
    Unknown,
}

/// Declaration-site or use-site variance of a type argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variance {
    #[default]
    Invariant,
    In,
    Out,
}

impl Variance {
    /// The keyword, empty for invariant arguments.
    pub fn label(&self) -> &'static str {
        match self {
            Variance::Invariant => "",
            Variance::In => "in",
            Variance::Out => "out",
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A type argument.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeProjection {
    /// `*`
    Star,
    WithVariance { variance: Variance, ty: HostType },
}

impl TypeProjection {
    pub fn invariant(ty: HostType) -> Self {
        Self::WithVariance {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn covariant(ty: HostType) -> Self {
        Self::WithVariance {
            variance: Variance::Out,
            ty,
        }
    }

    pub fn contravariant(ty: HostType) -> Self {
        Self::WithVariance {
            variance: Variance::In,
            ty,
        }
    }
}

/// Whether a class type's classifier is a class or a type alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassifierKind {
    Class,
    TypeAlias,
}

/// The classifier a class type names, by stable id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassifierRef {
    pub kind: ClassifierKind,
    pub id: ClassId,
}

/// One segment of a possibly nested class type: `Outer<A>.Inner<B>` has
/// two qualifiers, each with its own arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassQualifier {
    pub name: Name,
    pub arguments: Vec<TypeProjection>,
}

/// Payload shared by usual class types and functional types.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassType {
    pub classifier: ClassifierRef,
    /// Outermost qualifier first
    pub qualifiers: Vec<ClassQualifier>,
    /// For alias classifiers: the type the alias expands to
    pub expansion: Option<Box<HostType>>,
}

impl ClassType {
    /// The classifier's simple name.
    pub fn name(&self) -> &str {
        self.classifier.id.short_name()
    }

    pub fn is_alias(&self) -> bool {
        self.classifier.kind == ClassifierKind::TypeAlias
    }
}

/// A type captured from a projection during inference.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedType {
    pub projection: Box<TypeProjection>,
}

/// The shape of a host type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeKind {
    UsualClass(ClassType),
    Functional(ClassType),
    /// A class reference the host could not resolve
    ClassError { message: String },
    /// Any other erroneous type
    TypeError { message: String },
    Captured(CapturedType),
    DefinitelyNotNull(Box<HostType>),
    Dynamic,
    /// Platform type with distinct bounds
    Flexible {
        lower: Box<HostType>,
        upper: Box<HostType>,
    },
    IntegerLiteral { value: i64 },
    Intersection(Vec<HostType>),
    TypeParameter { symbol: SymbolId, name: Name },
}

/// A host type: shape, nullability marker and type annotations.
#[derive(Clone, Debug, PartialEq)]
pub struct HostType {
    pub kind: TypeKind,
    pub nullability: Nullability,
    pub annotations: Vec<AnnotationApplication>,
}

impl HostType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            nullability: Nullability::NonNullable,
            annotations: Vec::new(),
        }
    }

    /// A non-nested class type.
    pub fn class(id: ClassId, arguments: Vec<TypeProjection>) -> Self {
        let name = Name::new(id.short_name());
        Self::new(TypeKind::UsualClass(ClassType {
            classifier: ClassifierRef {
                kind: ClassifierKind::Class,
                id,
            },
            qualifiers: vec![ClassQualifier { name, arguments }],
            expansion: None,
        }))
    }

    /// A function type such as `Function1<P, R>`.
    pub fn function(id: ClassId, arguments: Vec<TypeProjection>) -> Self {
        let name = Name::new(id.short_name());
        Self::new(TypeKind::Functional(ClassType {
            classifier: ClassifierRef {
                kind: ClassifierKind::Class,
                id,
            },
            qualifiers: vec![ClassQualifier { name, arguments }],
            expansion: None,
        }))
    }

    /// A reference to a type alias together with its expansion.
    pub fn alias(id: ClassId, expansion: HostType) -> Self {
        let name = Name::new(id.short_name());
        Self::new(TypeKind::UsualClass(ClassType {
            classifier: ClassifierRef {
                kind: ClassifierKind::TypeAlias,
                id,
            },
            qualifiers: vec![ClassQualifier {
                name,
                arguments: Vec::new(),
            }],
            expansion: Some(Box::new(expansion)),
        }))
    }

    pub fn type_parameter(symbol: SymbolId, name: &str) -> Self {
        Self::new(TypeKind::TypeParameter {
            symbol,
            name: Name::new(name),
        })
    }

    pub fn class_error(message: &str) -> Self {
        Self::new(TypeKind::ClassError {
            message: message.to_string(),
        })
    }

    pub fn type_error(message: &str) -> Self {
        Self::new(TypeKind::TypeError {
            message: message.to_string(),
        })
    }

    pub fn dynamic() -> Self {
        Self::new(TypeKind::Dynamic)
    }

    pub fn flexible(lower: HostType, upper: HostType) -> Self {
        Self::new(TypeKind::Flexible {
            lower: Box::new(lower),
            upper: Box::new(upper),
        })
    }

    pub fn definitely_not_null(original: HostType) -> Self {
        Self::new(TypeKind::DefinitelyNotNull(Box::new(original)))
    }

    pub fn integer_literal(value: i64) -> Self {
        Self::new(TypeKind::IntegerLiteral { value })
    }

    pub fn intersection(conjuncts: Vec<HostType>) -> Self {
        Self::new(TypeKind::Intersection(conjuncts))
    }

    pub fn captured(projection: TypeProjection) -> Self {
        Self::new(TypeKind::Captured(CapturedType {
            projection: Box::new(projection),
        }))
    }

    /// Mark this type nullable.
    pub fn nullable(mut self) -> Self {
        self.nullability = Nullability::Nullable;
        self
    }

    /// Attach a type annotation.
    pub fn with_annotation(mut self, annotation: AnnotationApplication) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullability == Nullability::Nullable
    }

    /// The class payload of usual class and functional types.
    pub fn as_class_type(&self) -> Option<&ClassType> {
        match &self.kind {
            TypeKind::UsualClass(class) | TypeKind::Functional(class) => Some(class),
            _ => None,
        }
    }
}
