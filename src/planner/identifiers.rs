use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

use crate::semantic::{ReferenceFlags, ReferenceNode, ResolvedTarget};
use crate::Span;

use super::Pass;

/// Pass 2: remap every resolved identifier reference.
///
/// References are visited outermost-first so that a whole-reference rewrite
/// claims its range before the sub-references it contains are considered.
/// Nodes inside synthetic declarations, and nodes whose range was already
/// claimed by pass 1, are skipped.
pub(super) fn remap(pass: &mut Pass<'_>) {
    let unit = pass.unit;

    let synthetic: Vec<Span> = unit
        .classes
        .iter()
        .flat_map(|class| class.methods.iter())
        .filter(|method| method.is_synthetic())
        .map(|method| method.span)
        .collect();

    let mut references: Vec<&ReferenceNode> = unit.references.iter().collect();
    references.sort_by_key(|node| (node.span.start, Reverse(node.span.end)));

    for node in references {
        if synthetic.iter().any(|span| span.contains(&node.span)) {
            continue;
        }
        if !pass.edits.valid(&node.span) {
            continue;
        }
        match &node.target {
            ResolvedTarget::Field { owner, name } => remap_field(pass, node, owner, name),
            ResolvedTarget::Method { owner, name } => remap_method(pass, node, owner, name),
            ResolvedTarget::Class { name } | ResolvedTarget::Package { name } => {
                remap_qualified(pass, node, name);
            }
            ResolvedTarget::Unresolved => {}
        }
    }
}

/// Remap a field reference or declaration.
///
/// The declaring class resolves through the overlay table first, then the
/// main table. An unqualified, non-declaration use of a renamed field is
/// still rewritten but reported as a shadowing hazard: once renamed, such a
/// reference can silently change meaning if a local variable of the new name
/// appears in scope.
fn remap_field(pass: &mut Pass<'_>, node: &ReferenceNode, owner: &str, name: &str) {
    let Some(mapped) = pass
        .member_mapping(owner)
        .and_then(|mapping| mapping.fields.get(name))
        .cloned()
    else {
        return;
    };
    if mapped == name {
        return;
    }
    pass.edits.insert(node.ident_span, mapped);

    let exempt =
        ReferenceFlags::QUALIFIED | ReferenceFlags::DECLARATION | ReferenceFlags::SWITCH_LABEL;
    if !node.flags.intersects(exempt) {
        pass.failed = true;
        pass.diagnose(
            node.span,
            format!(
                "Implicit member reference to remapped field \"{name}\". \
                 This can cause issues if the remapped reference becomes shadowed by \
                 a local variable and is therefore forbidden. Use \"this.{name}\" instead."
            ),
        );
    }
}

/// Remap a method reference or declaration.
///
/// Lookup starts at the declaring class and proceeds breadth-first over its
/// superclass, then its declared interfaces, each visited at most once. At
/// every class the overlay table is consulted before the main table. The
/// first mapping that defines the method name ends the walk, even when it
/// maps the name to itself.
fn remap_method(pass: &mut Pass<'_>, node: &ReferenceNode, owner: &str, name: &str) {
    let mut queue = VecDeque::new();
    queue.push_back(owner.to_string());
    let mut visited: HashSet<String> = HashSet::new();

    while let Some(class) = queue.pop_front() {
        if !visited.insert(class.clone()) {
            continue;
        }
        let mapped = pass
            .member_mapping(&class)
            .and_then(|mapping| mapping.methods.get(name))
            .cloned();
        if let Some(mapped) = mapped {
            if mapped != name {
                pass.edits.insert(node.ident_span, mapped);
            }
            return;
        }
        if let Some(superclass) = pass.hierarchy.superclass(&class) {
            queue.push_back(superclass);
        }
        for interface in pass.hierarchy.interfaces(&class) {
            queue.push_back(interface);
        }
    }
}

/// Remap a class or package reference.
///
/// When the reference text is exactly the qualified name, the whole
/// reference is replaced; a simple or partial reference only has its
/// trailing identifier replaced with the new name's final dot-segment.
fn remap_qualified(pass: &mut Pass<'_>, node: &ReferenceNode, name: &str) {
    let Some(mapping) = pass.table.get(name) else {
        return;
    };
    if mapping.new_name == name {
        return;
    }
    let new_name = mapping.new_name.clone();
    let simple = mapping.new_simple_name().to_string();
    if node.span.text_in(&pass.unit.text) == name {
        pass.edits.insert(node.span, new_name);
    } else {
        pass.edits.insert(node.ident_span, simple);
    }
}
