//! The resolved syntax tree model consumed from the external front-end.
//!
//! Parsing and semantic resolution are collaborator concerns: an external
//! front-end analyzes the staged sources against the classpath and hands back
//! one [`SourceUnit`] per compilation unit, plus a [`ClassIndex`] describing
//! the inheritance graph. This module defines that contract as a serde data
//! model; the rewrite planner consumes it read-only.
//!
//! # Model
//!
//! - [`SourceUnit`] - one unit's original text, its class declarations, every
//!   annotation occurrence in the file, and the flat, document-ordered list
//!   of resolved identifier references
//! - [`ReferenceNode`] - one identifier occurrence: its full extent, the
//!   identifier token's extent, what it resolved to, and reference flags.
//!   Declarations are reference nodes too, flagged
//!   [`ReferenceFlags::DECLARATION`], whose extent covers the whole
//!   declaration
//! - [`ResolvedTarget`] - the closed set of declaring entities a reference
//!   can resolve to: field-in-class, method-in-class, class, package, or
//!   nothing rewritable
//! - [`ClassNode`] / [`MethodNode`] / [`AnnotationNode`] - the declaration
//!   shapes the annotation passes need; a method body whose extent equals the
//!   declaration extent marks a synthetic declaration
//! - [`TypeHierarchy`] - the seam for superclass/interface queries, with
//!   [`ClassIndex`] as the map-backed implementation shipped in resolver
//!   payloads
//!
//! Spans are byte offsets into the unit's original text. Attached annotation
//! lists on classes and methods repeat entries from the unit-level list; the
//! unit-level list exists for file-wide passes over annotation payloads.

mod hierarchy;
mod types;

pub use hierarchy::*;
pub use types::*;
