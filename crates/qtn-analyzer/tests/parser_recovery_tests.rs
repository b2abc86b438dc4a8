//! Panic-mode recovery: malformed input must never hang, never panic, and
//! never take well-formed neighbors down with it.

use qtn_analyzer::syntax::ast::Definition;
use qtn_analyzer::syntax::parse;
use tower_lsp::lsp_types::Url;

fn uri() -> Url {
    Url::parse("file:///test/recovery.qtn").unwrap()
}

#[test]
fn empty_whitespace_and_comment_only_inputs_parse_cleanly() {
    for source in ["", "   \n\n  \t  \n", "// comment\n/* block */\n// another"] {
        let doc = parse(source, &uri());
        assert!(doc.definitions.is_empty(), "source {source:?}");
        assert!(doc.parse_errors.is_empty(), "source {source:?}");
    }
}

#[test]
fn missing_close_brace_still_recovers_next_struct() {
    let doc = parse(
        "struct Incomplete { int x; \n struct NextStruct { int y; } }",
        &uri(),
    );

    assert!(!doc.parse_errors.is_empty());
    let names: Vec<_> = doc.definitions.iter().filter_map(|d| d.name()).collect();
    assert!(
        names.contains(&"NextStruct"),
        "expected NextStruct among {names:?}"
    );
}

#[test]
fn unclosed_component_recovers_following_component() {
    let doc = parse(
        "component Player {\n  int health;\n\ncomponent Enemy {\n  int damage;\n}",
        &uri(),
    );
    assert!(!doc.parse_errors.is_empty());
    let names: Vec<_> = doc.definitions.iter().filter_map(|d| d.name()).collect();
    assert!(names.contains(&"Enemy"), "got {names:?}");
}

#[test]
fn bad_field_does_not_abort_the_block() {
    let doc = parse("struct S {\n  int a;\n  $$ ;\n  int b;\n}", &uri());
    let Definition::Type(def) = &doc.definitions[0] else {
        panic!()
    };
    let fields: Vec<&str> = def.fields.iter().map(|f| f.name.as_str()).collect();
    assert!(fields.contains(&"a"));
    assert!(fields.contains(&"b"));
    assert!(!doc.parse_errors.is_empty());
}

#[test]
fn enum_recovers_after_bad_member() {
    let doc = parse("enum E { A, = 3, B }", &uri());
    let Definition::Type(def) = &doc.definitions[0] else {
        panic!()
    };
    let members: Vec<&str> = def.enum_members.iter().map(|m| m.name.as_str()).collect();
    assert!(members.contains(&"A"));
    assert!(members.contains(&"B"));
    assert!(!doc.parse_errors.is_empty());
}

#[test]
fn modifier_without_follower_reports_and_continues() {
    let doc = parse("singleton struct Nope { }\nstruct Real { int x; }", &uri());
    assert!(!doc.parse_errors.is_empty());
    let names: Vec<_> = doc.definitions.iter().filter_map(|d| d.name()).collect();
    assert!(names.contains(&"Real"));
}

#[test]
fn unknown_top_level_tokens_are_skipped() {
    let doc = parse("???\nPlayer\nstruct Ok { int x; }", &uri());
    assert!(!doc.parse_errors.is_empty());
    let names: Vec<_> = doc.definitions.iter().filter_map(|d| d.name()).collect();
    assert!(names.contains(&"Ok"));
}

#[test]
fn unterminated_block_comment_consumes_to_eof_silently() {
    let doc = parse("struct A { int x; }\n/* never closed", &uri());
    assert_eq!(doc.definitions.len(), 1);
    assert!(doc.parse_errors.is_empty());
}

#[test]
fn unterminated_string_does_not_hang() {
    let doc = parse("struct A { int x; } \"runs to eof", &uri());
    assert_eq!(doc.definitions.len(), 1);
    assert!(!doc.parse_errors.is_empty());
}

#[test]
fn adversarial_token_soup_terminates() {
    let soup = "{}{}(((];;;, => << >> ?? ** .. == [[ ]] \"str\" 0x 12.5 -3 @ident #what".repeat(50);
    let doc = parse(&soup, &uri());
    // Bounded output; errors recorded, no panic, no hang.
    assert!(!doc.parse_errors.is_empty());
}

#[test]
fn truncated_constructs_at_eof_terminate() {
    for source in [
        "struct",
        "struct Name",
        "struct Name {",
        "struct Name { int",
        "enum E { A",
        "signal S(",
        "component C { [Header(",
        "import",
        "#define NAME",
        "event E :",
    ] {
        let doc = parse(source, &uri());
        assert!(
            !doc.parse_errors.is_empty() || !doc.definitions.is_empty(),
            "source {source:?}"
        );
    }
}
