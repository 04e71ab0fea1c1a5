//! Classifier resolution: which class, alias or type parameter a type names.

use tracing::debug;

use crate::base::{ClassId, SymbolId};
use crate::host::{ClassifierKind, HostError, HostType, SemanticHost, SymbolKind, TypeKind};

/// The declaration a type ultimately refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classifier {
    Class(SymbolId),
    TypeAlias(SymbolId),
    TypeParameter(SymbolId),
}

impl Classifier {
    pub fn symbol(&self) -> SymbolId {
        match self {
            Classifier::Class(s) | Classifier::TypeAlias(s) | Classifier::TypeParameter(s) => *s,
        }
    }
}

/// Resolve the classifier of a type.
///
/// Returns `None` for types without a classifier (error, dynamic,
/// intersection and integer-literal types) and whenever the host fails to
/// resolve the classifier. Host failures are never propagated.
///
/// Flexible types resolve through their lower bound only; the upper bound is
/// not consulted. Captured types have no resolution strategy and yield `None`.
pub fn classifier_of<H: SemanticHost + ?Sized>(host: &H, ty: &HostType) -> Option<Classifier> {
    match &ty.kind {
        TypeKind::TypeParameter { symbol, .. } => Some(Classifier::TypeParameter(*symbol)),
        TypeKind::Captured(_) => {
            debug!("no classifier resolution for captured type");
            None
        }
        TypeKind::ClassError { .. } | TypeKind::TypeError { .. } => None,
        TypeKind::UsualClass(class) | TypeKind::Functional(class) => {
            match lookup_class(host, &class.classifier.id) {
                Ok(Some(symbol)) => Some(match class.classifier.kind {
                    ClassifierKind::Class => Classifier::Class(symbol),
                    ClassifierKind::TypeAlias => Classifier::TypeAlias(symbol),
                }),
                Ok(None) => None,
                Err(err) => {
                    debug!(class_id = %class.classifier.id, error = %err, "classifier lookup failed");
                    None
                }
            }
        }
        TypeKind::DefinitelyNotNull(original) => classifier_of(host, original),
        TypeKind::Dynamic => None,
        TypeKind::Flexible { lower, .. } => classifier_of(host, lower),
        TypeKind::IntegerLiteral { .. } => None,
        TypeKind::Intersection(_) => None,
    }
}

/// Find the symbol of a class or type alias by id.
///
/// Local classes are not indexed by the host; they are found by name in the
/// declared scope of their outer class. An unknown non-local id is an
/// absent result, other host failures propagate.
pub fn lookup_class<H: SemanticHost + ?Sized>(
    host: &H,
    id: &ClassId,
) -> Result<Option<SymbolId>, HostError> {
    if !id.local {
        return match host.class_by_id(id) {
            Ok(symbol) => Ok(Some(symbol)),
            Err(HostError::UnknownClassId(_)) => Ok(None),
            Err(err) => Err(err),
        };
    }

    let Some(outer) = id.outer() else {
        return Ok(None);
    };
    let Some(outer_symbol) = lookup_class(host, &outer)? else {
        return Ok(None);
    };

    let mut found = None;
    for member in host.declared_member_scope(outer_symbol)? {
        let is_classifier = matches!(
            host.symbol_kind(member)?,
            SymbolKind::NamedClass | SymbolKind::TypeAlias
        );
        if !is_classifier {
            continue;
        }
        let named = host
            .symbol_name(member)?
            .is_some_and(|n| n.as_str() == id.short_name());
        if named {
            if found.is_some() {
                // Ambiguous: no single match.
                return Ok(None);
            }
            found = Some(member);
        }
    }

    match found {
        Some(symbol) if host.symbol_kind(symbol)? == SymbolKind::NamedClass => Ok(Some(symbol)),
        _ => Ok(None),
    }
}
