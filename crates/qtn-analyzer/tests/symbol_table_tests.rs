use qtn_analyzer::qtn::builtins::types::Locale;
use qtn_analyzer::symbols::{SymbolSource, SymbolTable};
use qtn_analyzer::syntax::parse;
use tower_lsp::lsp_types::{SymbolKind, Url};

fn uri(name: &str) -> Url {
    Url::parse(&format!("file:///test/{name}")).unwrap()
}

fn doc(name: &str, source: &str) -> qtn_analyzer::QtnDocument {
    parse(source, &uri(name))
}

#[test]
fn add_from_document_is_additive() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("a.qtn", "struct Player { int hp; }"));

    let before: Vec<&str> = table.fuzzy_search("pla").iter().map(|s| s.name.as_str()).collect();
    assert!(before.contains(&"Player"));
    assert!(!before.contains(&"Planet"));

    table.add_from_document(&doc("b.qtn", "struct Planet { int size; }"));

    let after: Vec<&str> = table.fuzzy_search("pla").iter().map(|s| s.name.as_str()).collect();
    assert!(after.contains(&"Player"));
    assert!(after.contains(&"Planet"));
}

#[test]
fn build_from_document_clears_prior_state() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("legacy.qtn", "struct LegacyType { int value; }"));
    assert!(table.lookup("LegacyType").is_some());

    table.build_from_document(&doc("current.qtn", "struct CurrentType { int value; }"));

    assert!(table.fuzzy_search("legacy").is_empty());
    let current: Vec<&str> = table.fuzzy_search("current").iter().map(|s| s.name.as_str()).collect();
    assert!(current.contains(&"CurrentType"));
}

#[test]
fn fuzzy_ranking_exact_then_prefix_then_substring() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc(
        "rank.qtn",
        "struct Play { }\nstruct Player { }\nstruct Gameplay { }",
    ));

    let names: Vec<&str> = table.fuzzy_search("play").iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Play", "Player", "Gameplay"]);
}

#[test]
fn fuzzy_ties_break_alphabetically() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("tie.qtn", "struct Beta { }\nstruct Bravo { }"));

    let names: Vec<&str> = table.fuzzy_search("b").iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Bravo"]);
}

#[test]
fn fuzzy_search_spans_types_and_constants() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("mix.qtn", "struct MaxHealth { }\n#define MAX_AMMO 99"));

    let names: Vec<&str> = table.fuzzy_search("max").iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"MaxHealth"));
    assert!(names.contains(&"MAX_AMMO"));
}

#[test]
fn lookup_checks_types_before_constants() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("both.qtn", "struct Shared { }\n#define Shared 1"));

    let hit = table.lookup("Shared").unwrap();
    assert_eq!(hit.kind, SymbolKind::STRUCT);
}

#[test]
fn last_write_wins_by_name() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("one.qtn", "struct Thing { int a; }"));
    table.add_from_document(&doc("two.qtn", "component Thing { int b; }"));

    let hit = table.lookup("Thing").unwrap();
    assert_eq!(hit.kind, SymbolKind::CLASS);
    assert!(hit.location.uri.as_str().ends_with("two.qtn"));
}

#[test]
fn builtins_never_overwrite_user_symbols() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("fp.qtn", "struct FP { int raw; }"));
    table.merge_builtins(Locale::En);

    let hit = table.lookup("FP").unwrap();
    assert_eq!(hit.source, SymbolSource::User);

    // Untouched names still come from the catalog.
    let vector = table.lookup("FPVector2").unwrap();
    assert_eq!(vector.source, SymbolSource::Builtin);
}

#[test]
fn fields_and_enum_members_become_children() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc(
        "kids.qtn",
        "struct Player { int hp; FP speed; }\nenum State : Byte { Idle, Run = 2 }",
    ));

    let player = table.lookup("Player").unwrap();
    let child_details: Vec<&str> = player.children.iter().map(|c| c.detail.as_str()).collect();
    assert_eq!(child_details, vec!["hp: int", "speed: FP"]);

    let state = table.lookup("State").unwrap();
    assert_eq!(state.detail, "enum : Byte");
    let member_details: Vec<&str> = state.children.iter().map(|c| c.detail.as_str()).collect();
    assert_eq!(member_details, vec!["Idle", "Run = 2"]);
    assert_eq!(state.children[0].kind, SymbolKind::ENUM_MEMBER);
}

#[test]
fn input_and_global_use_synthetic_keys() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("io.qtn", "input { button jump; }\nglobal { int round; }"));

    let input = table.lookup("input").unwrap();
    assert_eq!(input.kind, SymbolKind::INTERFACE);
    assert_eq!(input.children.len(), 1);

    let global = table.lookup("global").unwrap();
    assert_eq!(global.kind, SymbolKind::NAMESPACE);
}

#[test]
fn signal_and_event_details() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc(
        "sig.qtn",
        "signal OnHit(EntityRef target, FP amount);\nsynced event Scored : Base { int points; }",
    ));

    assert_eq!(table.lookup("OnHit").unwrap().detail, "signal(EntityRef, FP)");
    assert_eq!(table.lookup("Scored").unwrap().detail, "synced event : Base");
}

#[test]
fn defines_land_in_the_constant_map() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("def.qtn", "#define MAX_PLAYERS 16"));

    let constant = table.lookup("MAX_PLAYERS").unwrap();
    assert_eq!(constant.kind, SymbolKind::CONSTANT);
    assert_eq!(constant.detail, "#define MAX_PLAYERS = 16");
    assert!(table.constants.contains_key("MAX_PLAYERS"));
    assert!(!table.types.contains_key("MAX_PLAYERS"));
}

#[test]
fn imports_are_collected_not_symbolized() {
    let mut table = SymbolTable::new();
    table.add_from_document(&doc("imp.qtn", "import struct Vec3(12);\nusing Deterministic;"));

    assert_eq!(table.imports.len(), 2);
    assert!(table.lookup("Vec3").is_none());
}
