//! The batch driver: line protocol, staging, and per-unit orchestration.
//!
//! A batch arrives on stdin in a fixed line protocol (see [`protocol`]):
//! classpath entries first, then named units with their source text. The
//! driver stages the units in a temporary directory for the external
//! front-end, asks the [`Resolver`] for the resolved model, plans and
//! patches each unit, and mirrors the protocol back on stdout. The staging
//! area is removed on every exit path.
//!
//! Per-unit hazards accumulate without stopping the rest of the batch; the
//! batch's overall success is the logical AND of the per-unit successes, and
//! a failed batch is signalled to the caller through
//! [`BatchOutcome::failed`] (a non-zero process exit in the CLI).
//!
//! # Examples
//!
//! ```rust,no_run
//! use mixremap::batch::{protocol, CommandResolver, Remapper};
//! use mixremap::mapping;
//! use std::io::BufReader;
//!
//! let table = mapping::load(std::path::Path::new("mappings.srg"), false)?;
//! let request = protocol::read_request(&mut BufReader::new(std::io::stdin()))?;
//! let resolver = CommandResolver::new("frontend");
//! let outcome = Remapper::new(&table).remap(&resolver, &request)?;
//! protocol::write_response(&mut std::io::stdout(), &outcome.units)?;
//! std::process::exit(if outcome.failed { 1 } else { 0 });
//! # Ok::<(), mixremap::Error>(())
//! ```

pub mod protocol;

mod driver;
mod resolver;

pub use driver::*;
pub use resolver::*;
