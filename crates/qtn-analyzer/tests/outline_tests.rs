use qtn_analyzer::project::ProjectModel;
use qtn_analyzer::symbols::{document_symbols, workspace_symbols};
use qtn_analyzer::syntax::parse;
use tower_lsp::lsp_types::{SymbolKind, Url};

fn uri(name: &str) -> Url {
    Url::parse(&format!("file:///test/{name}")).unwrap()
}

#[test]
fn outline_nests_fields_and_members() {
    let doc = parse(
        "singleton component Game { int round; }\nenum Mode : Byte { A, B = 2 }",
        &uri("outline.qtn"),
    );
    let symbols = document_symbols(&doc);
    assert_eq!(symbols.len(), 2);

    let game = &symbols[0];
    assert_eq!(game.name, "Game");
    assert_eq!(game.kind, SymbolKind::CLASS);
    assert_eq!(game.detail.as_deref(), Some("singleton component"));
    let children = game.children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "round");
    assert_eq!(children[0].detail.as_deref(), Some("int"));

    let mode = &symbols[1];
    assert_eq!(mode.detail.as_deref(), Some("enum : Byte"));
    let members = mode.children.as_ref().unwrap();
    assert_eq!(members[0].detail, None);
    assert_eq!(members[1].detail.as_deref(), Some("= 2"));
}

#[test]
fn outline_covers_non_type_definitions() {
    let doc = parse(
        "signal OnHit(FP amount);\ninput { button jump; }\nimport struct Vec3(12);\n#pragma max_players 8\n#define MAX 4",
        &uri("misc.qtn"),
    );
    let symbols = document_symbols(&doc);
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["OnHit", "input", "Vec3", "#pragma max_players", "MAX"]);

    assert_eq!(symbols[0].detail.as_deref(), Some("(FP amount)"));
    assert_eq!(symbols[2].detail.as_deref(), Some("import struct"));
    assert_eq!(symbols[3].detail.as_deref(), Some("8"));
    assert_eq!(symbols[4].detail.as_deref(), Some("#define = 4"));
}

#[test]
fn empty_query_lists_every_definition() {
    let mut project = ProjectModel::default();
    project.update_document(uri("a.qtn"), "struct Player { }");
    project.update_document(uri("b.qtn"), "enum Mode { A }\n#define MAX 2");

    let (documents, table) = project.documents_and_table();
    let symbols = workspace_symbols(documents, table, "");
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Player", "Mode", "MAX"]);
}

#[test]
fn query_filters_out_builtins() {
    let mut project = ProjectModel::default();
    project.update_document(uri("a.qtn"), "struct FPProxy { }");

    let (documents, table) = project.documents_and_table();
    let symbols = workspace_symbols(documents, table, "fp");
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();

    // The builtin FP family matches the query but is excluded; only the
    // user-defined type survives.
    assert_eq!(names, vec!["FPProxy"]);
}

#[test]
fn query_results_are_ranked() {
    let mut project = ProjectModel::default();
    project.update_document(uri("a.qtn"), "struct Mode { }\nstruct ModeSwitch { }\nstruct GameMode { }");

    let (documents, table) = project.documents_and_table();
    let symbols = workspace_symbols(documents, table, "mode");
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Mode", "ModeSwitch", "GameMode"]);
}
