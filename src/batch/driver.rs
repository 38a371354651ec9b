use std::fs;

use crate::mapping::MappingTable;
use crate::planner::{Diagnostic, Planner};
use crate::{Error, Result};

use super::protocol::BatchRequest;
use super::resolver::Resolver;

/// The outcome for one unit.
#[derive(Debug, Clone)]
pub struct UnitResult {
    /// Unit name, as staged
    pub name: String,
    /// Rewritten text; `None` when a fatal per-unit error produced no output
    pub text: Option<String>,
    /// Line-numbered diagnostics for this unit
    pub diagnostics: Vec<Diagnostic>,
    /// True when this unit fails the batch
    pub failed: bool,
}

/// The outcome for one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Per-unit results, in input order
    pub units: Vec<UnitResult>,
    /// Logical AND of the per-unit successes, inverted: true when any unit
    /// failed
    pub failed: bool,
}

/// Drives one batch: staging, resolution, planning, patching.
pub struct Remapper<'a> {
    table: &'a MappingTable,
}

impl<'a> Remapper<'a> {
    /// Create a driver over one immutable mapping table.
    #[must_use]
    pub fn new(table: &'a MappingTable) -> Self {
        Remapper { table }
    }

    /// Remap a whole batch.
    ///
    /// Units are staged under a temporary directory which is removed when
    /// this returns, on success and failure alike. Per-unit hazards fail the
    /// batch without stopping it; a unit hitting a fatal configuration error
    /// (an indeterminate accessor target) contributes no output text and
    /// also fails the batch.
    ///
    /// # Errors
    ///
    /// Staging I/O failures and [`Error::Resolver`] abort the whole batch.
    pub fn remap(&self, resolver: &dyn Resolver, request: &BatchRequest) -> Result<BatchOutcome> {
        let staging = tempfile::tempdir()?;
        for unit in &request.units {
            let path = staging.path().join(&unit.name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &unit.source)?;
        }

        let resolved = resolver.resolve(staging.path(), &request.classpath, &request.units)?;

        let mut outcome = BatchOutcome::default();
        let planner = Planner::new(self.table, &resolved.index);
        for staged in &request.units {
            let Some(unit) = resolved.units.iter().find(|unit| unit.name == staged.name) else {
                return Err(Error::Resolver {
                    message: format!("front-end returned no model for unit {}", staged.name),
                });
            };
            match planner.plan(unit) {
                Ok(planned) => {
                    outcome.failed |= planned.failed;
                    outcome.units.push(UnitResult {
                        name: staged.name.clone(),
                        text: Some(planned.apply(&unit.text)),
                        diagnostics: planned.diagnostics,
                        failed: planned.failed,
                    });
                }
                Err(error @ Error::AccessorTarget { .. }) => {
                    outcome.failed = true;
                    outcome.units.push(UnitResult {
                        name: staged.name.clone(),
                        text: None,
                        diagnostics: vec![Diagnostic {
                            line: 1,
                            message: error.to_string(),
                        }],
                        failed: true,
                    });
                }
                Err(error) => return Err(error),
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::protocol::StagedUnit;
    use crate::batch::{ResolvedBatch, StaticResolver};
    use crate::mapping;
    use crate::semantic::SourceUnit;

    fn request_for(units: &[SourceUnit]) -> BatchRequest {
        BatchRequest {
            classpath: Vec::new(),
            units: units
                .iter()
                .map(|unit| StagedUnit {
                    name: unit.name.clone(),
                    source: unit.text.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_identity_table_passes_text_through() {
        let unit = SourceUnit {
            name: "A.java".to_string(),
            text: "class A {}".to_string(),
            classes: Vec::new(),
            annotations: Vec::new(),
            references: Vec::new(),
        };
        let request = request_for(std::slice::from_ref(&unit));
        let resolver = StaticResolver::new(ResolvedBatch {
            index: Default::default(),
            units: vec![unit],
        });
        let table = MappingTable::new();
        let outcome = Remapper::new(&table).remap(&resolver, &request).unwrap();
        assert!(!outcome.failed);
        assert_eq!(outcome.units[0].text.as_deref(), Some("class A {}"));
    }

    #[test]
    fn test_missing_resolved_unit_is_resolver_error() {
        let request = BatchRequest {
            classpath: Vec::new(),
            units: vec![StagedUnit {
                name: "A.java".to_string(),
                source: "class A {}".to_string(),
            }],
        };
        let resolver = StaticResolver::new(ResolvedBatch::default());
        let table = mapping::parse("a.A b.B\n", "inline").unwrap();
        let err = Remapper::new(&table).remap(&resolver, &request).unwrap_err();
        assert!(matches!(err, Error::Resolver { .. }));
    }
}
