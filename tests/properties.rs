//! Tests for the planner's structural guarantees: identity behavior,
//! idempotence, edit ordering, hazard reporting, and the inheritance walk.

mod util;

use mixremap::mapping::{self, MappingTable};
use mixremap::semantic::{ClassIndex, ReferenceFlags};
use util::*;

fn simple_table() -> MappingTable {
    mapping::parse("a.pkg.A a.pkg.Z\na.pkg.A aField bField\n", "inline").unwrap()
}

const FIELD_USER: &str = "\
package a.pkg;

public class A {
    private int aField;

    int read() {
        return aField;
    }

    int readQualified() {
        return this.aField;
    }
}
";

fn field_user_unit() -> mixremap::semantic::SourceUnit {
    let mut unit = unit("a/pkg/A.java", FIELD_USER);
    unit.references = vec![
        field_decl(
            FIELD_USER,
            "private int aField;",
            "aField",
            0,
            "a.pkg.A",
            "aField",
        ),
        field_ref(
            FIELD_USER,
            "aField",
            1,
            "a.pkg.A",
            "aField",
            ReferenceFlags::empty(),
        ),
        field_ref(
            FIELD_USER,
            "aField",
            2,
            "a.pkg.A",
            "aField",
            ReferenceFlags::QUALIFIED,
        ),
    ];
    unit
}

#[test]
fn identity_table_is_a_byte_for_byte_no_op() {
    let table = MappingTable::new();
    let unit = field_user_unit();
    let planned = plan(&table, &unit);
    assert!(planned.edits.is_empty());
    assert!(!planned.failed);
    assert_eq!(planned.apply(&unit.text), FIELD_USER);
}

#[test]
fn unqualified_reference_to_renamed_field_is_a_hazard() {
    let table = simple_table();
    let unit = field_user_unit();
    let planned = plan(&table, &unit);

    // The rewrite still completes: declaration and both uses change.
    let output = planned.apply(&unit.text);
    assert!(output.contains("private int bField;"));
    assert!(output.contains("return bField;"));
    assert!(output.contains("this.bField;"));

    // But the unqualified use fails the unit, naming line and field.
    assert!(planned.failed);
    assert_eq!(planned.diagnostics.len(), 1);
    let diagnostic = &planned.diagnostics[0];
    assert_eq!(diagnostic.line, 7);
    assert!(diagnostic.message.contains("\"aField\""));
    assert!(diagnostic.message.contains("this.aField"));
}

#[test]
fn qualified_and_declaration_references_are_not_hazards() {
    let table = simple_table();
    let mut unit = field_user_unit();
    // Keep only the declaration and the qualified use.
    unit.references.remove(1);
    let planned = plan(&table, &unit);
    assert!(!planned.failed);
    assert!(planned.diagnostics.is_empty());
    assert_eq!(planned.edits.len(), 2);
}

#[test]
fn second_pass_over_rewritten_output_changes_nothing() {
    let table = simple_table();
    let first = {
        let unit = field_user_unit();
        plan(&table, &unit).apply(&unit.text)
    };

    // Re-resolve the rewritten output: names now carry the new identifiers.
    let mut again = unit("a/pkg/A.java", &first);
    again.references = vec![
        field_decl(
            &first,
            "private int bField;",
            "bField",
            0,
            "a.pkg.A",
            "bField",
        ),
        field_ref(
            &first,
            "bField",
            1,
            "a.pkg.A",
            "bField",
            ReferenceFlags::empty(),
        ),
        field_ref(
            &first,
            "bField",
            2,
            "a.pkg.A",
            "bField",
            ReferenceFlags::QUALIFIED,
        ),
    ];
    let planned = plan(&table, &again);
    assert!(planned.edits.is_empty(), "idempotence violated: {:?}", planned.edits);
    assert_eq!(planned.apply(&first), first);
}

#[test]
fn planned_edits_are_ordered_and_disjoint() {
    let text = "a.pkg.A value = new a.pkg.A();";
    let table = mapping::parse("a.pkg.A b.pkg.B\na.pkg b.pkg\n", "inline").unwrap();
    let mut unit = unit("Use.java", text);
    unit.references = vec![
        class_ref(text, "a.pkg.A", 0, "a.pkg.A"),
        package_ref(text, "a.pkg", 0, "a.pkg"),
        class_ref(text, "a.pkg.A", 1, "a.pkg.A"),
        package_ref(text, "a.pkg", 1, "a.pkg"),
    ];
    let planned = plan(&table, &unit);

    // The whole-reference rewrites claim their ranges; the nested package
    // references are no longer valid and must not produce edits.
    assert_eq!(planned.edits.len(), 2);
    for pair in planned.edits.windows(2) {
        assert!(pair[0].span.start <= pair[1].span.start);
        assert!(!pair[0].span.intersects(&pair[1].span));
    }
    assert_eq!(planned.apply(text), "b.pkg.B value = new b.pkg.B();");
}

#[test]
fn partial_class_reference_rewrites_trailing_segment_only() {
    let text = "import a.pkg.A;\n\nclass Use { A held; }\n";
    let table = mapping::parse("a.pkg.A b.pkg.B\n", "inline").unwrap();
    let mut unit = unit("Use.java", text);
    unit.references = vec![
        class_ref(text, "a.pkg.A", 0, "a.pkg.A"),
        class_ref(text, "A held", 0, "a.pkg.A"),
    ];
    // The second reference is just the simple name; trim its span to "A".
    let at = span(text, "A held");
    unit.references[1].span = mixremap::Span::new(at.start, at.start + 1);
    unit.references[1].ident_span = unit.references[1].span;

    let output = remap(&table, &unit);
    assert_eq!(output, "import b.pkg.B;\n\nclass Use { B held; }\n");
}

#[test]
fn inherited_method_rename_follows_the_ancestor_walk() {
    let text = "\
class Child extends Parent {
    void call() {
        run();
    }
}
";
    let table = mapping::parse("a.pkg.Parent a.pkg.Parent\na.pkg.Parent run() execute()\n", "inline")
        .unwrap();
    let mut index = ClassIndex::new();
    index.define("a.pkg.Child", Some("a.pkg.Parent"), &[]);

    let mut unit = unit("Child.java", text);
    unit.references = vec![method_ref(text, "run", 0, "a.pkg.Child", "run")];

    let planned = plan_with(&table, &index, &unit);
    assert_eq!(planned.apply(text).matches("execute()").count(), 1);
}

#[test]
fn interface_declarations_participate_in_the_walk() {
    let text = "\
class Impl implements Iface {
    public void run() {
    }
}
";
    let table =
        mapping::parse("a.pkg.Iface a.pkg.Iface\na.pkg.Iface run() execute()\n", "inline").unwrap();
    let mut index = ClassIndex::new();
    index.define("a.pkg.Impl", Some("java.lang.Object"), &["a.pkg.Iface"]);

    let mut unit = unit("Impl.java", text);
    unit.references = vec![method_decl(
        text,
        "public void run()",
        "run",
        0,
        "a.pkg.Impl",
        "run",
    )];

    let planned = plan_with(&table, &index, &unit);
    assert!(!planned.failed, "unexpected hazard: {:?}", planned.diagnostics);
    let output = planned.apply(&unit.text);
    assert!(output.contains("public void execute()"));
}

#[test]
fn first_defining_ancestor_wins_even_on_identity() {
    // Parent defines run -> run (identity); Grandparent maps run -> execute.
    // The walk must stop at Parent and leave the call alone.
    let text = "class Child { void call() { run(); } }";
    let table = mapping::parse(
        "a.Parent a.Parent\na.Parent run() run()\na.Grand a.Grand\na.Grand run() execute()\n",
        "inline",
    )
    .unwrap();
    let mut index = ClassIndex::new();
    index.define("a.Child", Some("a.Parent"), &[]);
    index.define("a.Parent", Some("a.Grand"), &[]);

    let mut unit = unit("Child.java", text);
    unit.references = vec![method_ref(text, "run", 0, "a.Child", "run")];

    let output = remap(&table, &unit);
    assert_eq!(output, text);
}

#[test]
fn unresolved_references_pass_through() {
    let text = "class X { void y() { mystery(); } }";
    let table = simple_table();
    let mut unit = unit("X.java", text);
    unit.references = vec![mixremap::semantic::ReferenceNode {
        span: span(text, "mystery"),
        ident_span: span(text, "mystery"),
        target: mixremap::semantic::ResolvedTarget::Unresolved,
        flags: ReferenceFlags::empty(),
    }];
    assert_eq!(remap(&table, &unit), text);
}

#[test]
fn synthetic_declarations_are_skipped_entirely() {
    let text = "class X { void gen() { aField = 1; } }";
    let table = simple_table();
    let mut base = unit("X.java", text);
    let method_span = span(text, "void gen() { aField = 1; }");
    base.classes = vec![class(
        text,
        "a.pkg.X",
        vec![],
        vec![mixremap::semantic::MethodNode {
            name: "gen".to_string(),
            span: method_span,
            body_span: Some(method_span),
            annotations: Vec::new(),
        }],
    )];
    base.references = vec![field_ref(
        text,
        "aField",
        0,
        "a.pkg.A",
        "aField",
        ReferenceFlags::empty(),
    )];

    let planned = plan(&table, &base);
    assert!(planned.edits.is_empty());
    assert!(!planned.failed, "synthetic bodies must not raise hazards");
}

#[test]
fn invert_round_trip_preserves_the_table() {
    let source = "a.pkg.A a.pkg.Z\na.pkg.A aField bField\na.pkg.A run() execute()\nb.pkg.B b.pkg.B\nb.pkg.B other stranger\n";
    let table = mapping::parse(source, "inline").unwrap();
    assert_eq!(table.invert().invert(), table);
}
