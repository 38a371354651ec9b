use std::io::{BufReader, Write};
use std::path::Path;

use mixremap::batch::{protocol, CommandResolver, Remapper};

/// Run the stdin/stdout batch protocol.
pub fn run(mappings: Option<&Path>, invert: bool, resolver: &str) -> anyhow::Result<()> {
    let table = super::load_table(mappings, invert)?;
    log::debug!("loaded {} class mappings", table.len());

    let request = protocol::read_request(&mut BufReader::new(std::io::stdin().lock()))?;
    log::debug!(
        "batch: {} classpath entries, {} units",
        request.classpath.len(),
        request.units.len()
    );

    let resolver = CommandResolver::new(resolver);
    let outcome = Remapper::new(&table).remap(&resolver, &request)?;

    for unit in &outcome.units {
        for diagnostic in &unit.diagnostics {
            eprintln!("{}:{}", unit.name, diagnostic);
        }
    }

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    protocol::write_response(&mut writer, &outcome.units)?;
    writer.flush()?;

    if outcome.failed {
        std::process::exit(1);
    }
    Ok(())
}
