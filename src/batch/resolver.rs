use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::semantic::{ClassIndex, SourceUnit};
use crate::{Error, Result};

use super::protocol::StagedUnit;

/// The resolved model for one batch, as produced by the front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBatch {
    /// Inheritance facts for every class the units touch
    #[serde(default)]
    pub index: ClassIndex,
    /// One resolved model per staged unit
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

/// The external parser/resolver collaborator.
///
/// Implementations analyze the staged source tree against the classpath and
/// return per-unit resolved models. The driver never inspects sources
/// itself; everything it knows about a unit's syntax comes through here.
pub trait Resolver {
    /// Resolve the staged units.
    ///
    /// `staging` is the directory the units were written under, using their
    /// protocol names as relative paths.
    ///
    /// # Errors
    ///
    /// [`Error::Resolver`] when analysis fails; the batch aborts.
    fn resolve(
        &self,
        staging: &Path,
        classpath: &[PathBuf],
        units: &[StagedUnit],
    ) -> Result<ResolvedBatch>;
}

/// A resolver that shells out to an external front-end command.
///
/// The command is invoked as
/// `<program> <staging dir> <classpath entry>...` and must print a JSON
/// [`ResolvedBatch`] on stdout. Spans in the payload are byte offsets into
/// the staged unit text.
pub struct CommandResolver {
    program: String,
    args: Vec<String>,
}

impl CommandResolver {
    /// Create a resolver invoking `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        CommandResolver {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a fixed argument placed before the staging directory.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Resolver for CommandResolver {
    fn resolve(
        &self,
        staging: &Path,
        classpath: &[PathBuf],
        _units: &[StagedUnit],
    ) -> Result<ResolvedBatch> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(staging)
            .args(classpath)
            .output()
            .map_err(|err| Error::Resolver {
                message: format!("failed to run {}: {}", self.program, err),
            })?;
        if !output.status.success() {
            return Err(Error::Resolver {
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

/// A resolver serving a prebuilt model, for tests and demos.
pub struct StaticResolver {
    batch: ResolvedBatch,
}

impl StaticResolver {
    /// Serve the given batch for every request.
    #[must_use]
    pub fn new(batch: ResolvedBatch) -> Self {
        StaticResolver { batch }
    }
}

impl Resolver for StaticResolver {
    fn resolve(
        &self,
        _staging: &Path,
        _classpath: &[PathBuf],
        _units: &[StagedUnit],
    ) -> Result<ResolvedBatch> {
        Ok(self.batch.clone())
    }
}
