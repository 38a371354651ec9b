use std::collections::HashMap;

use crate::{Error, Result};

/// The rename rules for one class and its members.
///
/// `old_name` and `new_name` are fully-qualified dotted names; they are equal
/// when the class itself keeps its name but members are renamed. Member maps
/// go from old unqualified name to new unqualified name.
///
/// Method entries are keyed by bare name, **not** by full signature: distinct
/// overloads sharing a name cannot be mapped to different outcomes, and the
/// first (or only) entry wins. This is a known precision limit of the mapping
/// format and is preserved as such.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    /// Fully-qualified dotted name the class has in the input sources
    pub old_name: String,
    /// Fully-qualified dotted name the class is renamed to
    pub new_name: String,
    /// Field renames, old unqualified name → new unqualified name
    pub fields: HashMap<String, String>,
    /// Method renames, old unqualified name → new unqualified name
    pub methods: HashMap<String, String>,
}

impl Mapping {
    /// An identity mapping for `name`: class and members keep their names
    /// until rename rules are recorded on it.
    #[must_use]
    pub fn identity(name: &str) -> Self {
        Mapping {
            old_name: name.to_string(),
            new_name: name.to_string(),
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    /// True when the class itself is unrenamed (members may still be).
    #[must_use]
    pub fn is_identity_pair(&self) -> bool {
        self.old_name == self.new_name
    }

    /// The `old -> new` form used in conflict messages.
    #[must_use]
    pub fn rename_pair(&self) -> String {
        format!("{} -> {}", self.old_name, self.new_name)
    }

    /// Last dot-segment of the new name, used when only a simple reference
    /// needs rewriting.
    #[must_use]
    pub fn new_simple_name(&self) -> &str {
        match self.new_name.rfind('.') {
            Some(dot) => &self.new_name[dot + 1..],
            None => &self.new_name,
        }
    }

    /// Merge `other` into this mapping.
    ///
    /// When both sides carry a real (non-identity) class rename and neither
    /// endpoint coincides, the merge fails naming both pairs. Otherwise the
    /// real rename wins and the member tables are unioned, `other` winning on
    /// duplicate keys.
    pub fn merge(&mut self, other: &Mapping) -> Result<()> {
        if !other.is_identity_pair() {
            if !self.is_identity_pair()
                && other.old_name != self.old_name
                && other.new_name != self.new_name
            {
                return Err(Error::MappingConflict {
                    left: self.rename_pair(),
                    right: other.rename_pair(),
                });
            }
            self.old_name = other.old_name.clone();
            self.new_name = other.new_name.clone();
        }
        self.fields
            .extend(other.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.methods
            .extend(other.methods.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    /// The reverse mapping: names swapped and every member entry flipped.
    ///
    /// On duplicate inverted member keys (two old names mapped to the same
    /// new name) the first entry encountered wins, mirroring the bare-name
    /// keying limit.
    #[must_use]
    pub fn invert(&self) -> Mapping {
        let mut inverted = Mapping {
            old_name: self.new_name.clone(),
            new_name: self.old_name.clone(),
            fields: HashMap::with_capacity(self.fields.len()),
            methods: HashMap::with_capacity(self.methods.len()),
        };
        for (old, new) in &self.fields {
            inverted
                .fields
                .entry(new.clone())
                .or_insert_with(|| old.clone());
        }
        for (old, new) in &self.methods {
            inverted
                .methods
                .entry(new.clone())
                .or_insert_with(|| old.clone());
        }
        inverted
    }
}

/// The full collection of rename rules for a batch, keyed by fully-qualified
/// old class name.
///
/// Built once from file input and consumed read-only by the rewrite planner;
/// an empty table means every lookup misses and every unit passes through
/// byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    classes: HashMap<String, Mapping>,
}

impl MappingTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        MappingTable::default()
    }

    /// Number of class entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up the mapping for a fully-qualified old class name.
    #[must_use]
    pub fn get(&self, old_name: &str) -> Option<&Mapping> {
        self.classes.get(old_name)
    }

    /// Iterate over all class mappings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.classes.values()
    }

    /// Insert a mapping, merging with any existing entry for the same old
    /// name under the [`Mapping::merge`] conflict rule.
    pub fn insert(&mut self, mapping: Mapping) -> Result<()> {
        match self.classes.get_mut(&mapping.old_name) {
            Some(existing) => existing.merge(&mapping),
            None => {
                self.classes.insert(mapping.old_name.clone(), mapping);
                Ok(())
            }
        }
    }

    /// Merge another table into this one, entry by entry.
    ///
    /// Supports incrementally layered mapping files; disagreements on class
    /// identity surface as [`crate::Error::MappingConflict`].
    pub fn merge(&mut self, other: MappingTable) -> Result<()> {
        for (_, mapping) in other.classes {
            self.insert(mapping)?;
        }
        Ok(())
    }

    /// The table with every mapping inverted, keyed by the former new names.
    ///
    /// Supports tables authored in the opposite direction;
    /// `table.invert().invert()` reproduces `table` for tables without
    /// colliding member targets.
    #[must_use]
    pub fn invert(&self) -> MappingTable {
        let mut inverted = MappingTable::new();
        for mapping in self.classes.values() {
            let flipped = mapping.invert();
            // Inversion of a well-formed table cannot conflict: keys were
            // unique new names.
            let _ = inverted.insert(flipped);
        }
        inverted
    }
}
