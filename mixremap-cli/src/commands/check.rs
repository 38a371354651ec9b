use std::path::Path;

use mixremap::mapping;

/// Parse a mapping file and print a summary of its contents.
pub fn run(mappings: &Path) -> anyhow::Result<()> {
    let table = mapping::load(mappings, false)?;

    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|a, b| a.old_name.cmp(&b.old_name));

    let renamed_classes = entries.iter().filter(|m| !m.is_identity_pair()).count();
    let field_rules: usize = entries.iter().map(|m| m.fields.len()).sum();
    let method_rules: usize = entries.iter().map(|m| m.methods.len()).sum();

    println!("{}", mappings.display());
    println!("  classes:        {}", entries.len());
    println!("  class renames:  {renamed_classes}");
    println!("  field renames:  {field_rules}");
    println!("  method renames: {method_rules}");

    for mapping in entries {
        if mapping.is_identity_pair() {
            println!(
                "  {} ({} fields, {} methods)",
                mapping.old_name,
                mapping.fields.len(),
                mapping.methods.len()
            );
        } else {
            println!(
                "  {} -> {} ({} fields, {} methods)",
                mapping.old_name,
                mapping.new_name,
                mapping.fields.len(),
                mapping.methods.len()
            );
        }
    }
    Ok(())
}
