//! Annotation projection, including use-site targets.
//!
//! An annotation written once on a property with a use-site target
//! (`@get:Foo val x`) belongs to the synthesized accessor, not the property.
//! The projections here walk from an accessor or setter parameter up to the
//! owning property to find those annotations.

use std::sync::Arc;

use super::Session;
use crate::error::Result;
use crate::host::{SemanticHost, UseSiteTarget};
use crate::model::{Annotation, Declaration, DeclarationKind, filter_by_target, project};

impl<H: SemanticHost + ?Sized> Session<'_, H> {
    /// Annotations written directly on the declaration.
    pub fn annotations(&self, decl: &Declaration) -> Result<Vec<Annotation>> {
        self.check(decl)?;
        Ok(project(&self.host().annotations(decl.symbol())?))
    }

    /// Project annotations with an optional use-site target.
    ///
    /// Without a target this is [`annotations`](Self::annotations). With a
    /// target, only annotations recorded with that target are returned,
    /// collected from the declaration and its owning accessor/property chain.
    pub fn project_annotations(
        &self,
        decl: &Declaration,
        target: Option<UseSiteTarget>,
    ) -> Result<Vec<Annotation>> {
        match target {
            None => self.annotations(decl),
            Some(target) => self.annotations_for_target(decl, target),
        }
    }

    /// Annotations with use-site target `target` on the declaration itself
    /// and, when the target applies to it, on the accessor and property
    /// that own it.
    ///
    /// Owners are consulted only for targets that land on the declaration:
    /// `get`/`field` for getters, `set`/`setparam` for setters, `setparam`
    /// for setter parameters. A getter never picks up the property's
    /// `@set:` annotations.
    pub fn annotations_for_target(
        &self,
        decl: &Declaration,
        target: UseSiteTarget,
    ) -> Result<Vec<Annotation>> {
        self.check(decl)?;
        let owners = if inherits_target(decl.kind(), target) {
            self.annotation_owners(decl)?
        } else {
            vec![self.adapter_for(decl.symbol())?]
        };
        let mut found = Vec::new();
        for owner in owners {
            found.extend(filter_by_target(
                &self.host().annotations(owner.symbol())?,
                target,
            ));
        }
        Ok(found)
    }

    /// Annotations a synthesized accessor or setter parameter inherits from
    /// its owners, with the target implied by its kind:
    ///
    /// - getter: `@get:` annotations of the property
    /// - setter: `@set:` annotations of the property
    /// - setter parameter: `@setparam:` annotations of the setter and the property
    ///
    /// Empty for every other declaration.
    pub fn use_site_annotations(&self, decl: &Declaration) -> Result<Vec<Annotation>> {
        self.check(decl)?;
        match decl.kind() {
            DeclarationKind::Getter => self.receiver_annotations(decl, UseSiteTarget::Get),
            DeclarationKind::Setter => self.receiver_annotations(decl, UseSiteTarget::Set),
            DeclarationKind::ValueParameter => {
                let Some(setter) = self.parent(decl)? else {
                    return Ok(Vec::new());
                };
                if setter.kind() != DeclarationKind::Setter {
                    return Ok(Vec::new());
                }
                let mut found = filter_by_target(
                    &self.host().annotations(setter.symbol())?,
                    UseSiteTarget::SetParam,
                );
                found.extend(self.receiver_annotations(&setter, UseSiteTarget::SetParam)?);
                Ok(found)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Direct annotations followed by those inherited through use-site targets.
    pub fn resolved_annotations(&self, decl: &Declaration) -> Result<Vec<Annotation>> {
        let mut all = self.annotations(decl)?;
        all.extend(self.use_site_annotations(decl)?);
        Ok(all)
    }

    fn receiver_annotations(&self, accessor: &Declaration, target: UseSiteTarget) -> Result<Vec<Annotation>> {
        match self.parent(accessor)? {
            Some(receiver) if receiver.kind().is_property_like() => Ok(filter_by_target(
                &self.host().annotations(receiver.symbol())?,
                target,
            )),
            _ => Ok(Vec::new()),
        }
    }

    /// The declaration, then its accessor (for parameters), then the property.
    fn annotation_owners(&self, decl: &Declaration) -> Result<Vec<Arc<Declaration>>> {
        let mut owners = vec![self.adapter_for(decl.symbol())?];
        let mut current = Arc::clone(&owners[0]);
        loop {
            let step = match current.kind() {
                DeclarationKind::ValueParameter | DeclarationKind::Getter | DeclarationKind::Setter => {
                    self.parent(&current)?
                }
                _ => None,
            };
            match step {
                Some(next) if is_accessor(&next) || next.kind().is_property_like() => {
                    owners.push(Arc::clone(&next));
                    current = next;
                }
                _ => break,
            }
        }
        Ok(owners)
    }
}

fn inherits_target(kind: DeclarationKind, target: UseSiteTarget) -> bool {
    match kind {
        DeclarationKind::Getter => matches!(target, UseSiteTarget::Get | UseSiteTarget::Field),
        DeclarationKind::Setter => matches!(target, UseSiteTarget::Set | UseSiteTarget::SetParam),
        DeclarationKind::ValueParameter => target == UseSiteTarget::SetParam,
        _ => false,
    }
}

fn is_accessor(decl: &Declaration) -> bool {
    matches!(decl.kind(), DeclarationKind::Getter | DeclarationKind::Setter)
}
