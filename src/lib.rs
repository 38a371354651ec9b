// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # mixremap
//!
//! A mapping-driven source remapper for JVM-style codebases. Given a rename
//! table and a semantically-resolved syntax tree produced by an external
//! front-end, `mixremap` computes a minimal, non-overlapping set of text edits
//! that renames classes, fields, and methods across a batch of compilation
//! units while leaving every other byte of the source untouched — including
//! the string-encoded member references and type descriptors embedded in
//! Mixin framework annotations.
//!
//! ## Features
//!
//! - **📋 Legacy mapping format** - Parse, merge, and invert line-oriented
//!   rename tables with conflict detection
//! - **🔗 Inheritance-aware renames** - Method renames follow superclass and
//!   interface chains; mixin classes resolve through their target class
//! - **🧷 Annotation payload rewriting** - `@Accessor`, `@Invoker`, injector
//!   `method` attributes, and `@At` descriptor targets are rewritten in place
//! - **✂️ Conflict-safe patching** - Edits are kept totally ordered and
//!   non-overlapping by construction, then applied in a single pass
//! - **🛡️ Shadowing hazards surfaced** - Unqualified references to renamed
//!   fields are flagged per line instead of silently changing meaning
//! - **🔌 Front-end agnostic** - The parser/resolver is a collaborator behind
//!   a small trait and a serde data model
//!
//! ## Quick Start
//!
//! Add `mixremap` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mixremap = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use mixremap::prelude::*;
//!
//! let table = load_mappings(std::path::Path::new("mappings.srg"), false)?;
//! println!("Loaded {} class mappings", table.len());
//! # Ok::<(), mixremap::Error>(())
//! ```
//!
//! ### Planning and patching one unit
//!
//! ```rust,no_run
//! use mixremap::mapping::MappingTable;
//! use mixremap::planner::Planner;
//! use mixremap::semantic::{ClassIndex, SourceUnit};
//!
//! fn remap_unit(table: &MappingTable, unit: &SourceUnit) -> mixremap::Result<String> {
//!     let index = ClassIndex::default();
//!     let planned = Planner::new(table, &index).plan(unit)?;
//!     Ok(planned.apply(&unit.text))
//! }
//! ```
//!
//! ## Architecture
//!
//! `mixremap` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`mapping`] - The rename table model and the mapping file loader
//! - [`descriptor`] - The internal type / member reference descriptor codec
//! - [`semantic`] - The resolved syntax tree model consumed from the front-end
//! - [`planner`] - The two-pass rewrite planner
//! - [`patcher`] - The conflict-safe edit set and patch application
//! - [`batch`] - The line-protocol batch driver and resolver seam
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ## Data Flow
//!
//! ```text
//! mapping file ──► mapping::load ──► MappingTable
//!                                        │
//! source units ──► batch staging ──► Resolver (external front-end)
//!                                        │
//!                                  SourceUnit(s)
//!                                        │
//!                                  planner::Planner ──► PlannedUnit (edits)
//!                                        │
//!                                  patcher::apply ──► rewritten source
//! ```
//!
//! The batch driver reads a fixed line protocol on stdin, stages units for
//! the resolver, plans and patches each unit, and writes the mirrored
//! protocol to stdout; its process exit status reports whether any unit
//! tripped the unqualified-shadow hazard.

#[macro_use]
mod error;

pub mod batch;
pub mod descriptor;
pub mod mapping;
pub mod patcher;
pub mod planner;
pub mod prelude;
pub mod semantic;
mod span;

pub use crate::error::{Error, Result};
pub use crate::span::Span;
