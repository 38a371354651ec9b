//! Internal type and member reference descriptor remapping.
//!
//! One annotation payload form describes "a member of a class" outside the
//! host language's normal syntax, in a compact descriptor grammar:
//!
//! ```text
//! internal type    := primitive code | '[' internal type | 'L' name ';'
//! member reference := owner name '(' internal type* ')' internal type   (method)
//!                   | owner name ':' internal type                      (field)
//! ```
//!
//! where `name` is dotted or slash-separated. This module rewrites such
//! strings against a [`crate::mapping::MappingTable`]: class types found in
//! the table are re-emitted with their new (slash-encoded) name, member names
//! are substituted through the matched mapping, and everything else — the
//! separators, primitive codes, and array prefixes — is reproduced
//! byte-for-byte.
//!
//! # Examples
//!
//! ```rust
//! use mixremap::{descriptor, mapping};
//!
//! let table = mapping::parse("com.old.Foo com.new.Foo\ncom.old.Foo bar baz\n", "inline")?;
//! let remapped = descriptor::remap_member_reference(&table, "Lcom/old/Foo;bar:I");
//! assert_eq!(remapped, "Lcom/new/Foo;baz:I");
//! # Ok::<(), mixremap::Error>(())
//! ```

mod codec;

pub use codec::*;
