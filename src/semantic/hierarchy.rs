use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Superclass and interface queries against the resolved class graph.
///
/// The planner's method-rename walk traverses the inheritance hierarchy of a
/// method's declaring class; that hierarchy lives with the front-end, so the
/// planner only sees this trait.
pub trait TypeHierarchy {
    /// Fully-qualified dotted name of the direct superclass, when known.
    fn superclass(&self, class: &str) -> Option<String>;

    /// Fully-qualified dotted names of the directly declared interfaces.
    fn interfaces(&self, class: &str) -> Vec<String>;
}

/// Inheritance facts for one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Direct superclass, when the class has one the front-end could resolve
    #[serde(default)]
    pub superclass: Option<String>,
    /// Directly declared interfaces in declaration order
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// The map-backed [`TypeHierarchy`] shipped in resolver payloads.
///
/// Classes missing from the index simply have no known ancestors; lookups on
/// them end the walk rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassIndex {
    #[serde(default)]
    classes: HashMap<String, ClassInfo>,
}

impl ClassIndex {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        ClassIndex::default()
    }

    /// Record inheritance facts for `class`, replacing any existing entry.
    pub fn define(&mut self, class: &str, superclass: Option<&str>, interfaces: &[&str]) {
        self.classes.insert(
            class.to_string(),
            ClassInfo {
                superclass: superclass.map(str::to_string),
                interfaces: interfaces.iter().map(|name| name.to_string()).collect(),
            },
        );
    }

    /// Number of classes with recorded facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no class has recorded facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeHierarchy for ClassIndex {
    fn superclass(&self, class: &str) -> Option<String> {
        self.classes
            .get(class)
            .and_then(|info| info.superclass.clone())
    }

    fn interfaces(&self, class: &str) -> Vec<String> {
        self.classes
            .get(class)
            .map(|info| info.interfaces.clone())
            .unwrap_or_default()
    }
}
