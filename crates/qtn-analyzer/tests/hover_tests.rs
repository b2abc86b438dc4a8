use qtn_analyzer::hover::HoverProvider;
use qtn_analyzer::project::ProjectModel;
use qtn_analyzer::qtn::builtins::types::Locale;
use tower_lsp::lsp_types::{Hover, HoverContents, Position, Url};

fn uri() -> Url {
    Url::parse("file:///test/hover.qtn").unwrap()
}

fn hover_at(text: &str, position: Position, locale: Locale) -> Option<Hover> {
    let mut project = ProjectModel::new(locale);
    project.update_document(uri(), text);
    HoverProvider::new().provide(text, position, &mut project)
}

fn markdown(hover: Hover) -> String {
    match hover.contents {
        HoverContents::Markup(content) => content.value,
        other => panic!("expected markup contents, got {other:?}"),
    }
}

#[test]
fn keyword_hover_shows_category() {
    let text = "component Player { }";
    let hover = hover_at(text, Position::new(0, 3), Locale::En).unwrap();
    let value = markdown(hover);
    assert!(value.starts_with("**component** (declaration)"));
}

#[test]
fn builtin_primitive_hover_shows_csharp_type_and_size() {
    let text = "struct S { int hp; }";
    let hover = hover_at(text, Position::new(0, 12), Locale::En).unwrap();
    let value = markdown(hover);
    assert!(value.contains("**int**"));
    assert!(value.contains("`System.Int32`"));
    assert!(value.contains("(4 bytes)"));
}

#[test]
fn single_byte_size_is_singular() {
    let text = "struct S { byte b; }";
    let hover = hover_at(text, Position::new(0, 12), Locale::En).unwrap();
    assert!(markdown(hover).contains("(1 byte)"));
}

#[test]
fn attribute_hover_lists_parameters() {
    let text = "[Range(0, 1)]";
    let hover = hover_at(text, Position::new(0, 3), Locale::En).unwrap();
    let value = markdown(hover);
    assert!(value.starts_with("**Range** attribute"));
    assert!(value.contains("Parameters: min, max"));
}

#[test]
fn directive_hover_resolves_with_hash_prefix() {
    let text = "#pragma max_players 16";
    let hover = hover_at(text, Position::new(0, 4), Locale::En).unwrap();
    assert!(markdown(hover).contains("**#pragma**"));
}

#[test]
fn user_symbol_hover_shows_field_count_and_file() {
    let text = "component Player { int hp; FP speed; }";
    // Hover over the usage-site name.
    let hover = hover_at(text, Position::new(0, 12), Locale::En).unwrap();
    let value = markdown(hover);
    assert!(value.starts_with("**component**"));
    assert!(value.contains("(2 fields)"));
    assert!(value.contains("Declared in: `hover.qtn`"));
}

#[test]
fn enum_hover_counts_members() {
    let text = "enum Mode { A, B, C }";
    let hover = hover_at(text, Position::new(0, 6), Locale::En).unwrap();
    let value = markdown(hover);
    assert!(value.contains("(3 members)"));
}

#[test]
fn korean_locale_localizes_labels() {
    let text = "component Player { int hp; }";
    let hover = hover_at(text, Position::new(0, 12), Locale::Ko).unwrap();
    let value = markdown(hover);
    assert!(value.contains("(2개 필드)") || value.contains("(1개 필드)"));
}

#[test]
fn unknown_word_has_no_hover() {
    let text = "struct S { Mystery m; }";
    assert!(hover_at(text, Position::new(0, 13), Locale::En).is_none());
}

#[test]
fn whitespace_has_no_hover() {
    let text = "struct S { }";
    assert!(hover_at(text, Position::new(0, 10), Locale::En).is_none());
}
