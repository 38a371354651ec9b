//! # Single-Unit Remapping Walkthrough
//!
//! **What this example teaches:**
//! - Building a mapping table from inline mapping text
//! - Shaping a resolved unit the way a front-end would
//! - Planning edits and inspecting them before patching
//! - Reading hazard diagnostics
//!
//! **When to use this pattern:**
//! - Embedding the planner without the batch protocol
//! - Testing mapping files against a known snippet
//! - Understanding how the edit list relates to the output text

use mixremap::prelude::*;
use mixremap::semantic::{ReferenceFlags, ReferenceNode};

const SOURCE: &str = "\
package a.pkg;

public class Holder {
    private A held;

    void update(A next) {
        this.held = next;
        next.aMethod();
    }
}";

fn main() -> Result<()> {
    let table = parse_mappings(
        "a.pkg.A a.pkg.Z\na.pkg.A aMethod() zMethod()\n",
        "demo mappings",
    )?;
    println!("Table: {} class mapping(s)", table.len());

    // A front-end would produce this model; here it is shaped by hand.
    let mut unit = SourceUnit {
        name: "a/pkg/Holder.java".to_string(),
        text: SOURCE.to_string(),
        classes: Vec::new(),
        annotations: Vec::new(),
        references: Vec::new(),
    };
    for (needle, occurrence) in [("A held", 0), ("A next", 0)] {
        let start = find(SOURCE, needle, occurrence);
        unit.references.push(ReferenceNode {
            span: Span::new(start, start + 1),
            ident_span: Span::new(start, start + 1),
            target: ResolvedTarget::Class {
                name: "a.pkg.A".to_string(),
            },
            flags: ReferenceFlags::empty(),
        });
    }
    let call = find(SOURCE, "aMethod", 0);
    unit.references.push(ReferenceNode {
        span: Span::new(call, call + "aMethod".len()),
        ident_span: Span::new(call, call + "aMethod".len()),
        target: ResolvedTarget::Method {
            owner: "a.pkg.A".to_string(),
            name: "aMethod".to_string(),
        },
        flags: ReferenceFlags::QUALIFIED,
    });

    let index = ClassIndex::new();
    let planned = Planner::new(&table, &index).plan(&unit)?;

    println!("\nPlanned {} edit(s):", planned.edits.len());
    for edit in &planned.edits {
        println!(
            "  [{:>3}..{:>3}) {:?} -> {:?}",
            edit.span.start,
            edit.span.end,
            &SOURCE[edit.span.start..edit.span.end],
            edit.replacement
        );
    }
    for diagnostic in &planned.diagnostics {
        println!("  hazard: {diagnostic}");
    }

    println!("\n--- rewritten ---\n{}", planned.apply(&unit.text));
    Ok(())
}

fn find(text: &str, needle: &str, occurrence: usize) -> usize {
    let mut from = 0;
    for _ in 0..occurrence {
        from = text[from..].find(needle).expect("needle") + from + needle.len();
    }
    text[from..].find(needle).expect("needle") + from
}
