//! The mapping-driven rewrite planner.
//!
//! The planner walks one resolved compilation unit against a read-only
//! [`crate::mapping::MappingTable`] and produces the unit's edit list. It
//! works in two passes:
//!
//! 1. **Overlay discovery**: classes carrying the mixin
//!    annotation are resolved to their target class; on a table hit the
//!    class is registered in the unit's overlay table, member lookups on it
//!    thereafter resolving through the target's mapping. The discovery also
//!    triggers the annotation-payload sub-passes — accessor/invoker targets,
//!    injector `method` attributes, and the file-wide `@At` descriptor
//!    targets.
//! 2. **Identifier remap**: every resolved identifier
//!    reference is dispatched on what it resolved to. Fields look up the
//!    overlay then the main table at their declaring class; methods
//!    additionally walk the declaring class's ancestors breadth-first;
//!    classes and packages rewrite either their whole reference text or just
//!    the trailing identifier. Unqualified uses of a renamed field are
//!    flagged as shadowing hazards.
//!
//! Both passes funnel through one [`crate::patcher::EditSet`], whose validity
//! check keeps ranges claimed by an earlier, more specific rule out of reach
//! of later passes and guarantees the final edit list is non-overlapping.
//!
//! The result is a [`PlannedUnit`]: the ordered edits, the per-unit
//! line-numbered diagnostics, and the unit's failed flag. Failure does not
//! suppress output — hazard-flagged units still patch and emit — but it
//! fails the batch.

mod identifiers;
mod overlay;

pub use overlay::{
    ACCESSOR_ANNOTATION, AT_ANNOTATION, INVOKER_ANNOTATION, MIXIN_ANNOTATION, InjectorKind,
};

use std::collections::HashMap;

use crate::mapping::{Mapping, MappingTable};
use crate::patcher::{Edit, EditSet};
use crate::semantic::{SourceUnit, TypeHierarchy};
use crate::{Result, Span};

/// A line-numbered message attached to one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the unit's original text
    pub line: usize,
    /// Human-readable description of the condition
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

/// The planner's output for one unit.
#[derive(Debug, Clone)]
pub struct PlannedUnit {
    /// Unit name, as staged
    pub name: String,
    /// The edits, in ascending span order, pairwise non-intersecting
    pub edits: Vec<Edit>,
    /// Hazard diagnostics collected while planning
    pub diagnostics: Vec<Diagnostic>,
    /// True when a hazard marks this unit (and therefore the batch) failed
    pub failed: bool,
}

impl PlannedUnit {
    /// Apply the planned edits to the unit's original text.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        crate::patcher::apply(text, &self.edits)
    }
}

/// Plans the rewrite of compilation units against one mapping table.
pub struct Planner<'a> {
    table: &'a MappingTable,
    hierarchy: &'a dyn TypeHierarchy,
}

impl<'a> Planner<'a> {
    /// Create a planner over a table and the resolved class hierarchy.
    #[must_use]
    pub fn new(table: &'a MappingTable, hierarchy: &'a dyn TypeHierarchy) -> Self {
        Planner { table, hierarchy }
    }

    /// Plan the edits for one unit.
    ///
    /// # Errors
    ///
    /// [`crate::Error::AccessorTarget`] when an accessor-style method gives
    /// no explicit target and its name implies none; the unit is aborted.
    pub fn plan(&self, unit: &'a SourceUnit) -> Result<PlannedUnit> {
        let mut pass = Pass {
            table: self.table,
            hierarchy: self.hierarchy,
            unit,
            edits: EditSet::new(),
            overlays: HashMap::new(),
            diagnostics: Vec::new(),
            failed: false,
        };

        overlay::discover(&mut pass)?;
        identifiers::remap(&mut pass);

        Ok(PlannedUnit {
            name: unit.name.clone(),
            edits: pass.edits.into_edits(),
            diagnostics: pass.diagnostics,
            failed: pass.failed,
        })
    }
}

/// Mutable state threaded through both passes over one unit.
struct Pass<'a> {
    table: &'a MappingTable,
    hierarchy: &'a dyn TypeHierarchy,
    unit: &'a SourceUnit,
    edits: EditSet,
    /// Mixin overlay table: annotated class name → its target's mapping
    overlays: HashMap<String, Mapping>,
    diagnostics: Vec<Diagnostic>,
    failed: bool,
}

impl<'a> Pass<'a> {
    /// The mapping governing members declared on `class`: the unit's overlay
    /// first, the main table second.
    fn member_mapping(&self, class: &str) -> Option<&Mapping> {
        self.overlays.get(class).or_else(|| self.table.get(class))
    }

    fn diagnose(&mut self, at: Span, message: String) {
        let line = at.line_in(&self.unit.text);
        self.diagnostics.push(Diagnostic { line, message });
    }
}
