//! Rename tables and the legacy mapping file format.
//!
//! This module provides the data model for rename rules and the loader for
//! the line-oriented mapping file format. A [`Mapping`] collects the rename
//! rules for one class and its members; a [`MappingTable`] is the full
//! collection for a batch, keyed by fully-qualified old class name.
//!
//! # Mapping File Format
//!
//! One rule per line, fields separated by single spaces:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! a.pkg.A a.pkg.B                  # class rename
//! a.pkg.A aField bField            # field rename on a.pkg.A
//! a.pkg.A aMethod() bMethod()      # method rename on a.pkg.A
//! a.pkg.A aMember a.pkg.P bMember  # member declared on a different class
//! ```
//!
//! A trailing `()` on both member tokens marks a method; the suffix is
//! stripped before storage. The four-field form attributes the member to a
//! *different* declaring class than the line's class column, recorded through
//! a reverse index keyed by new class name so that a later class-rename line
//! can merge into it. A line containing `;` anywhere, or with fewer than two
//! fields, is a fatal parse error carrying the 1-based line number.
//!
//! # Table Lifecycle
//!
//! Tables are built once per invocation — parsed, optionally inverted, and
//! merged across sources — then consumed read-only by the rewrite planner.
//! Merging detects irreconcilable class renames and fails with a
//! [`crate::Error::MappingConflict`] naming both pairs.
//!
//! # Examples
//!
//! ```rust
//! use mixremap::mapping;
//!
//! let table = mapping::parse("a.pkg.A a.pkg.B\na.pkg.A aField bField\n", "inline")?;
//! let mapping = table.get("a.pkg.A").unwrap();
//! assert_eq!(mapping.new_name, "a.pkg.B");
//! assert_eq!(mapping.fields.get("aField").map(String::as_str), Some("bField"));
//! # Ok::<(), mixremap::Error>(())
//! ```

mod loader;
mod types;

pub use loader::*;
pub use types::*;
