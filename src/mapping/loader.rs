use std::collections::HashMap;
use std::path::Path;

use crate::{Error, Result};

use super::{Mapping, MappingTable};

/// Parser state for one mapping source.
///
/// The file format allows one logical mapping to be reachable through two
/// indexes at once: by its old class name (the line's class column) and, for
/// entries introduced by four-field lines or recorded as rename targets, by
/// its *new* class name. Entries live in an arena so that mutations through
/// either index observe the same record.
struct Arena {
    entries: Vec<Mapping>,
    retired: Vec<bool>,
    forward: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
}

impl Arena {
    fn new() -> Self {
        Arena {
            entries: Vec::new(),
            retired: Vec::new(),
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    fn alloc(&mut self, name: &str) -> usize {
        let index = self.entries.len();
        self.entries.push(Mapping::identity(name));
        self.retired.push(false);
        index
    }

    fn forward_entry(&mut self, old_name: &str) -> usize {
        if let Some(&index) = self.forward.get(old_name) {
            return index;
        }
        let index = self.alloc(old_name);
        self.forward.insert(old_name.to_string(), index);
        index
    }

    fn reverse_entry(&mut self, new_name: &str) -> usize {
        if let Some(&index) = self.reverse.get(new_name) {
            return index;
        }
        let index = self.alloc(new_name);
        self.reverse.insert(new_name.to_string(), index);
        index
    }
}

/// Parse one mapping source into a table.
///
/// `label` identifies the source in parse errors (usually the file path).
///
/// # Errors
///
/// [`Error::MappingParse`] for a malformed line, [`Error::MappingConflict`]
/// when entries from the source cannot be reconciled. Both are fatal for the
/// whole load.
pub fn parse(source: &str, label: &str) -> Result<MappingTable> {
    parse_impl(source, label, false)
}

/// Parse one mapping source and invert the resulting table.
///
/// Inversion swaps the direction of every class and member rename, supporting
/// tables authored in the opposite direction.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_inverted(source: &str, label: &str) -> Result<MappingTable> {
    parse_impl(source, label, true)
}

/// Read and parse a mapping file.
///
/// # Errors
///
/// [`Error::FileError`] when the file cannot be read, otherwise as [`parse`].
pub fn load(path: &Path, invert: bool) -> Result<MappingTable> {
    let source = std::fs::read_to_string(path)?;
    parse_impl(&source, &path.display().to_string(), invert)
}

/// Read, parse, and merge several mapping files into one table.
///
/// Later files layer over earlier ones; member tables union, and
/// irreconcilable class renames fail the load.
///
/// # Errors
///
/// As [`load`], plus [`Error::MappingConflict`] from the merge.
pub fn load_all(paths: &[std::path::PathBuf], invert: bool) -> Result<MappingTable> {
    let mut table = MappingTable::new();
    for path in paths {
        table.merge(load(path, invert)?)?;
    }
    Ok(table)
}

fn parse_impl(source: &str, label: &str, invert: bool) -> Result<MappingTable> {
    let mut arena = Arena::new();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parse_error = || Error::MappingParse {
            file: label.to_string(),
            line: line_number,
        };

        if line.contains(';') {
            return Err(parse_error());
        }
        let mut parts: Vec<&str> = line.split(' ').collect();
        while parts.last() == Some(&"") {
            parts.pop();
        }
        if parts.len() < 2 {
            return Err(parse_error());
        }

        let entry = arena.forward_entry(parts[0]);
        match parts.len() {
            2 => {
                let new_name = parts[1].to_string();
                arena.entries[entry].new_name = new_name.clone();
                // A reverse record under this name was authored against the
                // *new* class; fold its members in and retire it.
                if let Some(rev) = arena.reverse.remove(&new_name) {
                    if rev != entry {
                        let (fields, methods) = {
                            let record = &arena.entries[rev];
                            (record.fields.clone(), record.methods.clone())
                        };
                        arena.entries[entry].fields.extend(fields);
                        arena.entries[entry].methods.extend(methods);
                        arena.retired[rev] = true;
                    }
                }
                arena.reverse.insert(new_name, entry);
            }
            3 | 4 => {
                let (from, to, secondary) = if parts.len() == 4 {
                    (parts[1], parts[3], arena.reverse_entry(parts[2]))
                } else {
                    (parts[1], parts[2], entry)
                };
                let from_is_method = from.ends_with("()");
                if from_is_method != to.ends_with("()") {
                    return Err(parse_error());
                }
                if from_is_method {
                    let from = &from[..from.len() - 2];
                    let to = &to[..to.len() - 2];
                    arena.entries[entry]
                        .methods
                        .insert(from.to_string(), to.to_string());
                    arena.entries[secondary]
                        .methods
                        .insert(from.to_string(), to.to_string());
                } else {
                    arena.entries[entry]
                        .fields
                        .insert(from.to_string(), to.to_string());
                    arena.entries[secondary]
                        .fields
                        .insert(from.to_string(), to.to_string());
                }
            }
            _ => return Err(parse_error()),
        }
    }

    let mut table = MappingTable::new();
    for (index, mut mapping) in arena.entries.into_iter().enumerate() {
        if arena.retired[index] {
            continue;
        }
        if invert {
            mapping = mapping.invert();
        }
        table.insert(mapping)?;
    }
    Ok(table)
}
