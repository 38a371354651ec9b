//! Shared helpers for building resolved units in tests.
//!
//! Real resolved models come from an external front-end; tests construct
//! them by locating spans inside literal source snippets so the fixtures
//! stay readable.

#![allow(dead_code)]

use mixremap::mapping::MappingTable;
use mixremap::planner::{PlannedUnit, Planner};
use mixremap::semantic::{
    AnnotationAttribute, AnnotationNode, AnnotationValue, ClassIndex, ClassNode, MethodNode,
    ReferenceFlags, ReferenceNode, ResolvedTarget, SourceUnit,
};
use mixremap::Span;

/// Span of the `occurrence`-th (0-based) match of `needle` in `text`.
pub fn span_of(text: &str, needle: &str, occurrence: usize) -> Span {
    let mut search_from = 0;
    let mut start = None;
    for _ in 0..=occurrence {
        let at = text[search_from..]
            .find(needle)
            .unwrap_or_else(|| panic!("needle {needle:?} not found after offset {search_from}"));
        start = Some(search_from + at);
        search_from += at + needle.len();
    }
    let start = start.expect("occurrence search yielded no match");
    Span::new(start, start + needle.len())
}

/// Span of the first match of `needle`.
pub fn span(text: &str, needle: &str) -> Span {
    span_of(text, needle, 0)
}

/// An empty unit over `text`.
pub fn unit(name: &str, text: &str) -> SourceUnit {
    SourceUnit {
        name: name.to_string(),
        text: text.to_string(),
        classes: Vec::new(),
        annotations: Vec::new(),
        references: Vec::new(),
    }
}

/// A field reference whose whole extent is the identifier itself.
pub fn field_ref(
    text: &str,
    needle: &str,
    occurrence: usize,
    owner: &str,
    name: &str,
    flags: ReferenceFlags,
) -> ReferenceNode {
    let at = span_of(text, needle, occurrence);
    ReferenceNode {
        span: at,
        ident_span: at,
        target: ResolvedTarget::Field {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        flags,
    }
}

/// A method reference whose whole extent is the identifier itself.
pub fn method_ref(
    text: &str,
    needle: &str,
    occurrence: usize,
    owner: &str,
    name: &str,
) -> ReferenceNode {
    let at = span_of(text, needle, occurrence);
    ReferenceNode {
        span: at,
        ident_span: at,
        target: ResolvedTarget::Method {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        flags: ReferenceFlags::empty(),
    }
}

/// A class reference covering `needle`; the identifier token is the last
/// dot-segment of the matched text.
pub fn class_ref(text: &str, needle: &str, occurrence: usize, qualified: &str) -> ReferenceNode {
    let at = span_of(text, needle, occurrence);
    let ident_start = match needle.rfind('.') {
        Some(dot) => at.start + dot + 1,
        None => at.start,
    };
    ReferenceNode {
        span: at,
        ident_span: Span::new(ident_start, at.end),
        target: ResolvedTarget::Class {
            name: qualified.to_string(),
        },
        flags: ReferenceFlags::empty(),
    }
}

/// A field declaration node: the reference extent covers the whole
/// declaration, the identifier token is located separately.
pub fn field_decl(
    text: &str,
    decl_needle: &str,
    ident_needle: &str,
    ident_occurrence: usize,
    owner: &str,
    name: &str,
) -> ReferenceNode {
    ReferenceNode {
        span: span(text, decl_needle),
        ident_span: span_of(text, ident_needle, ident_occurrence),
        target: ResolvedTarget::Field {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        flags: ReferenceFlags::DECLARATION,
    }
}

/// A method declaration node, shaped like [`field_decl`].
pub fn method_decl(
    text: &str,
    decl_needle: &str,
    ident_needle: &str,
    ident_occurrence: usize,
    owner: &str,
    name: &str,
) -> ReferenceNode {
    ReferenceNode {
        span: span(text, decl_needle),
        ident_span: span_of(text, ident_needle, ident_occurrence),
        target: ResolvedTarget::Method {
            owner: owner.to_string(),
            name: name.to_string(),
        },
        flags: ReferenceFlags::DECLARATION,
    }
}

/// A package reference covering `needle`.
pub fn package_ref(text: &str, needle: &str, occurrence: usize, qualified: &str) -> ReferenceNode {
    let at = span_of(text, needle, occurrence);
    let ident_start = match needle.rfind('.') {
        Some(dot) => at.start + dot + 1,
        None => at.start,
    };
    ReferenceNode {
        span: at,
        ident_span: Span::new(ident_start, at.end),
        target: ResolvedTarget::Package {
            name: qualified.to_string(),
        },
        flags: ReferenceFlags::empty(),
    }
}

/// A string-valued annotation attribute; `literal` is located in `text` with
/// its surrounding quotes.
pub fn string_attribute(text: &str, name: Option<&str>, literal: &str) -> AnnotationAttribute {
    let quoted = format!("\"{literal}\"");
    AnnotationAttribute {
        name: name.map(str::to_string),
        value: AnnotationValue::String {
            value: literal.to_string(),
        },
        value_span: span(text, &quoted),
    }
}

/// An annotation whose extent and argument list are located by needle.
///
/// `args` is the exact argument list text including parentheses, or `""`
/// for an annotation without one (the args span is then zero-width at the
/// annotation's end).
pub fn annotation(
    text: &str,
    type_name: &str,
    needle: &str,
    args: &str,
    attributes: Vec<AnnotationAttribute>,
) -> AnnotationNode {
    let at = span(text, needle);
    let args_span = if args.is_empty() {
        Span::empty(at.end)
    } else {
        let inner = span(&text[at.start..at.end], args);
        Span::new(at.start + inner.start, at.start + inner.end)
    };
    AnnotationNode {
        type_name: type_name.to_string(),
        span: at,
        args_span,
        attributes,
    }
}

/// A method declaration node located by needle.
pub fn method(text: &str, name: &str, needle: &str, annotations: Vec<AnnotationNode>) -> MethodNode {
    MethodNode {
        name: name.to_string(),
        span: span(text, needle),
        body_span: None,
        annotations,
    }
}

/// A class declaration node covering the whole text.
pub fn class(
    text: &str,
    qualified_name: &str,
    annotations: Vec<AnnotationNode>,
    methods: Vec<MethodNode>,
) -> ClassNode {
    ClassNode {
        qualified_name: qualified_name.to_string(),
        span: Span::new(0, text.len()),
        annotations,
        methods,
    }
}

/// Plan one unit against an empty hierarchy.
pub fn plan(table: &MappingTable, unit: &SourceUnit) -> PlannedUnit {
    let index = ClassIndex::new();
    Planner::new(table, &index)
        .plan(unit)
        .expect("planning failed")
}

/// Plan one unit against the given hierarchy.
pub fn plan_with(table: &MappingTable, index: &ClassIndex, unit: &SourceUnit) -> PlannedUnit {
    Planner::new(table, index).plan(unit).expect("planning failed")
}

/// Plan and patch, asserting the unit did not fail.
pub fn remap(table: &MappingTable, unit: &SourceUnit) -> String {
    let planned = plan(table, unit);
    assert!(
        !planned.failed,
        "unexpected hazard: {:?}",
        planned.diagnostics
    );
    planned.apply(&unit.text)
}
