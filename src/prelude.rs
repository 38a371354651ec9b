//! # mixremap Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the mixremap library. Import this module to get quick access to the
//! essential types for mapping-driven source remapping.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all mixremap operations
pub use crate::Error;

/// The result type used throughout mixremap
pub use crate::Result;

/// Half-open byte ranges over original source text
pub use crate::Span;

// ================================================================================================
// Mapping Tables
// ================================================================================================

/// The rename rules for one class and its members
pub use crate::mapping::Mapping;

/// The full rename table for a batch
pub use crate::mapping::MappingTable;

/// Load a mapping file, optionally inverted
pub use crate::mapping::load as load_mappings;

/// Parse mapping text from memory
pub use crate::mapping::parse as parse_mappings;

// ================================================================================================
// Planning and Patching
// ================================================================================================

/// The per-unit rewrite planner
pub use crate::planner::Planner;

/// The planner's output: edits, diagnostics, failed flag
pub use crate::planner::PlannedUnit;

/// A line-numbered per-unit message
pub use crate::planner::Diagnostic;

/// A single (range, replacement) substitution
pub use crate::patcher::Edit;

/// The ordered, non-overlapping edit collection
pub use crate::patcher::EditSet;

// ================================================================================================
// Semantic Model
// ================================================================================================

/// One resolved compilation unit
pub use crate::semantic::SourceUnit;

/// What one identifier reference resolved to
pub use crate::semantic::ResolvedTarget;

/// The superclass/interface query seam
pub use crate::semantic::TypeHierarchy;

/// The map-backed hierarchy implementation
pub use crate::semantic::ClassIndex;

// ================================================================================================
// Batch Driving
// ================================================================================================

/// The batch driver
pub use crate::batch::Remapper;

/// The outcome of one batch
pub use crate::batch::BatchOutcome;

/// The outcome of one unit
pub use crate::batch::UnitResult;

/// The external front-end seam
pub use crate::batch::Resolver;
