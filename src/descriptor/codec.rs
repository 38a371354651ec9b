use crate::mapping::{Mapping, MappingTable};

/// Remap a single internal type, appending the result to `out`.
///
/// Only `L<name>;` class types are candidates: their dotted form is looked up
/// in the table and, on a hit, the new name is emitted slash-encoded and the
/// matched mapping returned so the caller can resolve member names against
/// it. Primitive codes, array-prefixed types, and unknown classes are copied
/// through unchanged and yield `None`.
pub fn remap_internal_type<'a>(
    table: &'a MappingTable,
    internal_type: &str,
    out: &mut String,
) -> Option<&'a Mapping> {
    if internal_type.len() >= 2 && internal_type.starts_with('L') && internal_type.ends_with(';') {
        let dotted = internal_type[1..internal_type.len() - 1].replace('/', ".");
        if let Some(mapping) = table.get(&dotted) {
            out.push('L');
            out.push_str(&mapping.new_name.replace('.', "/"));
            out.push(';');
            return Some(mapping);
        }
    }
    out.push_str(internal_type);
    None
}

/// Remap a single internal type, returning the rewritten text.
#[must_use]
pub fn remap_type(table: &MappingTable, internal_type: &str) -> String {
    let mut out = String::with_capacity(internal_type.len());
    remap_internal_type(table, internal_type, &mut out);
    out
}

/// Remap a fully-qualified member reference.
///
/// The reference is split into `<owner><name><rest>` where `<rest>` is
/// `(<arg types>)<return type>` for a method and `:<field type>` for a
/// field. The owner is remapped first; if it mapped, the bare member name is
/// looked up in the mapping's method table (argument list present) or field
/// table (otherwise). Class types in argument, return, and field positions
/// are always remapped, whether or not the member name changed. References
/// that do not follow the grammar are returned unchanged.
#[must_use]
pub fn remap_member_reference(table: &MappingTable, signature: &str) -> String {
    let Some(owner_end) = signature.find(';') else {
        return signature.to_string();
    };
    let args_begin = signature.find('(');
    let is_method = args_begin.is_some();
    let (args_begin, args_end) = match (args_begin, signature.find(')')) {
        (Some(begin), Some(end)) if begin < end => (begin, end),
        (None, _) => match signature.find(':') {
            Some(colon) => (colon, colon),
            None => return signature.to_string(),
        },
        _ => return signature.to_string(),
    };
    if args_begin <= owner_end {
        return signature.to_string();
    }

    let owner = &signature[..=owner_end];
    let name = &signature[owner_end + 1..args_begin];
    let return_type = &signature[args_end + 1..];

    let mut out = String::with_capacity(signature.len() + 32);
    let mapping = remap_internal_type(table, owner, &mut out);
    let mapped = mapping.and_then(|m| {
        if is_method {
            m.methods.get(name)
        } else {
            m.fields.get(name)
        }
    });
    out.push_str(mapped.map_or(name, String::as_str));

    if is_method {
        out.push('(');
        remap_argument_list(table, &signature[args_begin + 1..args_end], &mut out);
        out.push(')');
    } else {
        out.push(':');
    }
    remap_internal_type(table, return_type, &mut out);
    out
}

/// Remap every class type inside an argument list, copying primitive codes
/// and array prefixes through as-is.
fn remap_argument_list(table: &MappingTable, args: &str, out: &mut String) {
    let mut rest = args;
    while let Some(offset) = rest.find('L') {
        out.push_str(&rest[..offset]);
        match rest[offset..].find(';') {
            Some(semi) => {
                remap_internal_type(table, &rest[offset..=offset + semi], out);
                rest = &rest[offset + semi + 1..];
            }
            None => {
                // Unterminated class type; reproduce the remainder untouched.
                out.push_str(&rest[offset..]);
                return;
            }
        }
    }
    out.push_str(rest);
}

/// Remap a bare `(<args>)<return>` method descriptor.
///
/// Wraps the descriptor in a placeholder member reference so the argument
/// and return positions go through the usual class-type remapping.
#[must_use]
pub fn remap_method_desc(table: &MappingTable, desc: &str) -> String {
    let remapped = remap_member_reference(table, &format!("Ldummy;dummy{desc}"));
    match remapped.find('(') {
        Some(paren) => remapped[paren..].to_string(),
        None => desc.to_string(),
    }
}

/// Remap an annotation target string in any of its three accepted shapes.
///
/// A target containing `:` or `(` is a full member reference; a target
/// starting with `L` is an internal type; anything else is a bare dotted or
/// slash-separated class name, remapped through a synthesized `L…;` wrapper
/// (and therefore re-emitted slash-encoded when it maps).
#[must_use]
pub fn remap_target(table: &MappingTable, target: &str) -> String {
    if target.contains(':') || target.contains('(') {
        remap_member_reference(table, target)
    } else if target.starts_with('L') {
        remap_type(table, target)
    } else {
        let wrapped = remap_type(table, &format!("L{target};"));
        wrapped[1..wrapped.len() - 1].to_string()
    }
}
