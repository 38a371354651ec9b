pub mod batch;
pub mod check;
pub mod invert;

use std::path::Path;

use mixremap::mapping::{self, MappingTable};

/// Load the mapping table, or an empty one when no file was given.
pub fn load_table(mappings: Option<&Path>, invert: bool) -> anyhow::Result<MappingTable> {
    match mappings {
        Some(path) => Ok(mapping::load(path, invert)?),
        None => Ok(MappingTable::new()),
    }
}
