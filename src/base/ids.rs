//! Host-independent names for classes and callables.
//!
//! Rendering follows the compiler's own conventions: package segments are
//! separated by `/`, nested class segments by `.`, so `kotlin/collections/Map.Entry`.

use std::fmt;

use smol_str::SmolStr;

/// An identifier string. Cheap to clone for short names.
pub type Name = SmolStr;

/// Fully qualified identity of a class-like declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId {
    /// Package segments (`["kotlin", "collections"]`)
    pub package: Vec<Name>,
    /// Class segments from the outermost class inwards (`["Map", "Entry"]`)
    pub relative: Vec<Name>,
    /// Whether the class is declared inside a function body
    pub local: bool,
}

impl ClassId {
    /// Build a top-level class id from a dotted package and a dotted class path.
    ///
    /// `ClassId::top_level("kotlin.collections", "Map.Entry")`
    pub fn top_level(package: &str, relative: &str) -> Self {
        Self {
            package: split_segments(package, '.'),
            relative: split_segments(relative, '.'),
            local: false,
        }
    }

    /// Mark this id as a local class.
    pub fn into_local(mut self) -> Self {
        self.local = true;
        self
    }

    /// The innermost class name.
    pub fn short_name(&self) -> &str {
        self.relative.last().map(|n| n.as_str()).unwrap_or("")
    }

    /// The id of the directly enclosing class, or `None` for a top-level class.
    ///
    /// The outer class of a local class is never local itself from the
    /// point of view of a member scope lookup.
    pub fn outer(&self) -> Option<ClassId> {
        if self.relative.len() < 2 {
            return None;
        }
        Some(ClassId {
            package: self.package.clone(),
            relative: self.relative[..self.relative.len() - 1].to_vec(),
            local: false,
        })
    }

    /// Create a nested class id.
    pub fn nested(&self, name: &str) -> ClassId {
        let mut relative = self.relative.clone();
        relative.push(Name::new(name));
        ClassId {
            package: self.package.clone(),
            relative,
            local: self.local,
        }
    }

    /// Dotted fully-qualified name (`kotlin.collections.Map.Entry`).
    pub fn as_fq_name(&self) -> String {
        self.package
            .iter()
            .chain(self.relative.iter())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.package.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        if !self.package.is_empty() {
            f.write_str("/")?;
        }
        for (i, segment) in self.relative.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Fully qualified identity of a callable (function, property, enum entry).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallableId {
    pub package: Vec<Name>,
    pub class: Option<ClassId>,
    pub name: Name,
}

impl CallableId {
    /// A callable declared inside a class.
    pub fn member(class: ClassId, name: &str) -> Self {
        Self {
            package: class.package.clone(),
            class: Some(class),
            name: Name::new(name),
        }
    }

    /// A top-level callable.
    pub fn top_level(package: &str, name: &str) -> Self {
        Self {
            package: split_segments(package, '.'),
            class: None,
            name: Name::new(name),
        }
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{}.{}", class, self.name),
            None => {
                let package = self
                    .package
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join("/");
                if package.is_empty() {
                    write!(f, "{}", self.name)
                } else {
                    write!(f, "{}/{}", package, self.name)
                }
            }
        }
    }
}

fn split_segments(s: &str, separator: char) -> Vec<Name> {
    s.split(separator)
        .filter(|segment| !segment.is_empty())
        .map(Name::new)
        .collect()
}
