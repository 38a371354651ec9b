use std::io::Write;
use std::path::Path;

use mixremap::mapping::{self, MappingTable};

/// Parse a mapping file and re-emit it with the direction swapped.
pub fn run(mappings: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let table = mapping::load(mappings, true)?;
    let rendered = render(&table);
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

/// Render a table back into the line format it was parsed from.
fn render(table: &MappingTable) -> String {
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|a, b| a.old_name.cmp(&b.old_name));

    let mut out = String::new();
    for mapping in entries {
        if !mapping.is_identity_pair() {
            out.push_str(&format!("{} {}\n", mapping.old_name, mapping.new_name));
        }
        let mut fields: Vec<_> = mapping.fields.iter().collect();
        fields.sort();
        for (old, new) in fields {
            out.push_str(&format!("{} {} {}\n", mapping.old_name, old, new));
        }
        let mut methods: Vec<_> = mapping.methods.iter().collect();
        methods.sort();
        for (old, new) in methods {
            out.push_str(&format!("{} {}() {}()\n", mapping.old_name, old, new));
        }
    }
    out
}
