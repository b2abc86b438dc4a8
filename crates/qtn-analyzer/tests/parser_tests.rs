use qtn_analyzer::syntax::ast::{Definition, ImportKind, NumberValue, TypeKind};
use qtn_analyzer::syntax::parse;
use tower_lsp::lsp_types::Url;

fn uri(name: &str) -> Url {
    Url::parse(&format!("file:///test/{name}")).unwrap()
}

fn parse_ok(source: &str) -> Vec<Definition> {
    let doc = parse(source, &uri("a.qtn"));
    assert!(
        doc.parse_errors.is_empty(),
        "unexpected errors: {:?}",
        doc.parse_errors
    );
    doc.definitions
}

#[test]
fn parses_struct_with_fields() {
    let defs = parse_ok("struct Player { int hp; FP speed; }");
    assert_eq!(defs.len(), 1);
    let Definition::Type(def) = &defs[0] else {
        panic!("expected type definition");
    };
    assert_eq!(def.kind, TypeKind::Struct);
    assert_eq!(def.name, "Player");
    assert_eq!(def.fields.len(), 2);
    assert_eq!(def.fields[0].name, "hp");
    assert_eq!(def.fields[0].type_ref.name, "int");
    assert_eq!(def.fields[1].type_ref.name, "FP");
}

#[test]
fn parses_component_and_singleton_component() {
    let defs = parse_ok("component Health { FP value; }\nsingleton component GameState { int round; }");
    let Definition::Type(plain) = &defs[0] else {
        panic!()
    };
    let Definition::Type(singleton) = &defs[1] else {
        panic!()
    };
    assert_eq!(plain.kind, TypeKind::Component);
    assert!(plain.modifiers.is_empty());
    assert_eq!(singleton.modifiers, vec!["singleton".to_string()]);
}

#[test]
fn parses_enum_with_base_type_and_values() {
    let defs = parse_ok("enum GameState : Byte { Idle, Running = 2, Done = 0x10 }");
    let Definition::Type(def) = &defs[0] else {
        panic!()
    };
    assert_eq!(def.kind, TypeKind::Enum);
    assert_eq!(def.base_type.as_deref(), Some("Byte"));
    assert_eq!(def.enum_members.len(), 3);
    assert_eq!(def.enum_members[0].value, None);
    assert_eq!(def.enum_members[1].value, Some(NumberValue::Int(2)));
    assert_eq!(def.enum_members[2].value, Some(NumberValue::Int(16)));
}

#[test]
fn parses_flags_and_union() {
    let defs = parse_ok("flags Abilities : Int32 { None = 0, Jump = 1 }\nunion Shape { int circle; int box; }");
    let Definition::Type(flags) = &defs[0] else {
        panic!()
    };
    let Definition::Type(union) = &defs[1] else {
        panic!()
    };
    assert_eq!(flags.kind, TypeKind::Flags);
    assert_eq!(union.kind, TypeKind::Union);
    assert_eq!(union.fields.len(), 2);
}

#[test]
fn parses_event_modifiers_and_inheritance() {
    let defs = parse_ok(
        "abstract event BaseEvent { }\nsynced event DamageDealt : BaseEvent { FP amount; }\nclient event LocalOnly { }",
    );
    let Definition::Event(base) = &defs[0] else {
        panic!()
    };
    let Definition::Event(synced) = &defs[1] else {
        panic!()
    };
    let Definition::Event(client) = &defs[2] else {
        panic!()
    };
    assert_eq!(base.modifiers, vec!["abstract".to_string()]);
    assert_eq!(synced.modifiers, vec!["synced".to_string()]);
    assert_eq!(synced.parent_name.as_deref(), Some("BaseEvent"));
    assert_eq!(client.modifiers, vec!["client".to_string()]);
}

#[test]
fn parses_signal_with_pointer_parameter() {
    let defs = parse_ok("signal OnDamage(EntityRef entity, Player* target);\nsignal Bare;");
    let Definition::Signal(signal) = &defs[0] else {
        panic!()
    };
    assert_eq!(signal.parameters.len(), 2);
    assert!(!signal.parameters[0].type_ref.is_pointer);
    assert!(signal.parameters[1].type_ref.is_pointer);
    assert_eq!(signal.parameters[1].name, "target");

    let Definition::Signal(bare) = &defs[1] else {
        panic!()
    };
    assert!(bare.parameters.is_empty());
}

#[test]
fn parses_input_and_global_blocks() {
    let defs = parse_ok("input { button jump; FPVector2 move; }\nglobal { int round; }");
    let Definition::Input(input) = &defs[0] else {
        panic!()
    };
    let Definition::Global(global) = &defs[1] else {
        panic!()
    };
    assert_eq!(input.fields.len(), 2);
    assert_eq!(input.fields[0].type_ref.name, "button");
    assert_eq!(global.fields.len(), 1);
}

#[test]
fn parses_asset_declaration() {
    let defs = parse_ok("asset CharacterSpec;");
    let Definition::Type(def) = &defs[0] else {
        panic!()
    };
    assert_eq!(def.kind, TypeKind::Asset);
    assert_eq!(def.name, "CharacterSpec");
}

#[test]
fn parses_import_variants() {
    let defs = parse_ok(
        "import struct Vec3(12);\nimport enum Mode(Byte);\nimport singleton Core.Config;\nimport Core.Types.Thing;\nusing Photon.Deterministic;",
    );
    let kinds: Vec<ImportKind> = defs
        .iter()
        .map(|def| match def {
            Definition::Import(d) => d.import_kind,
            other => panic!("expected import, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ImportKind::Struct,
            ImportKind::Enum,
            ImportKind::Singleton,
            ImportKind::Type,
            ImportKind::Using,
        ]
    );

    let Definition::Import(structural) = &defs[0] else {
        panic!()
    };
    assert_eq!(structural.size, Some(12));
    let Definition::Import(enumish) = &defs[1] else {
        panic!()
    };
    assert_eq!(enumish.underlying_type.as_deref(), Some("Byte"));
    let Definition::Import(dotted) = &defs[3] else {
        panic!()
    };
    assert_eq!(dotted.name, "Core.Types.Thing");
}

#[test]
fn parses_pragma_and_define() {
    let defs = parse_ok("#pragma max_players 16\n#define MAX_WEAPONS 4\n#define RATIO 1.5");
    let Definition::Pragma(pragma) = &defs[0] else {
        panic!()
    };
    assert_eq!(pragma.key, "max_players");
    assert_eq!(pragma.value, "16");

    let Definition::Define(int_def) = &defs[1] else {
        panic!()
    };
    assert_eq!(int_def.value, NumberValue::Int(4));
    let Definition::Define(float_def) = &defs[2] else {
        panic!()
    };
    assert_eq!(float_def.value, NumberValue::Float(1.5));
}

#[test]
fn parses_field_attributes_and_modifiers() {
    let defs = parse_ok(
        "component Stats {\n  [Header(\"Combat\"), Range(0, 100)]\n  nothashed int power;\n}",
    );
    let Definition::Type(def) = &defs[0] else {
        panic!()
    };
    let field = &def.fields[0];
    let names: Vec<&str> = field.attributes.iter().map(|a| a.name.as_str()).collect();
    // Field modifiers ride along as leading pseudo-attributes.
    assert_eq!(names, vec!["nothashed", "Header", "Range"]);
    let header = &field.attributes[1];
    assert_eq!(header.args, vec!["Combat".to_string()]);
    let range = &field.attributes[2];
    assert_eq!(range.args, vec!["0".to_string(), "100".to_string()]);
}

#[test]
fn parses_generic_array_and_nullable_type_references() {
    let defs = parse_ok(
        "struct Bag {\n  list<FP> values;\n  dictionary<int, Player> owners;\n  array<FP>[8] slots;\n  FP? maybe;\n  bitset[64] mask;\n}",
    );
    let Definition::Type(def) = &defs[0] else {
        panic!()
    };

    let list = &def.fields[0].type_ref;
    assert_eq!(list.name, "list");
    assert_eq!(list.generic_args[0].name, "FP");

    let dict = &def.fields[1].type_ref;
    assert_eq!(dict.generic_args.len(), 2);
    assert_eq!(dict.generic_args[1].name, "Player");

    let array = &def.fields[2].type_ref;
    assert_eq!(array.array_size, Some(8));

    let nullable = &def.fields[3].type_ref;
    assert_eq!(nullable.name, "NullableFP");

    let bitset = &def.fields[4].type_ref;
    assert_eq!(bitset.array_size, Some(64));
}

#[test]
fn duplicate_declarations_are_not_deduplicated() {
    let doc = parse(
        "struct Foo { int x; }\nstruct Foo { int y; }",
        &uri("dup.qtn"),
    );
    assert!(doc.parse_errors.is_empty());
    assert_eq!(doc.definitions.len(), 2);
    for def in &doc.definitions {
        assert_eq!(def.name(), Some("Foo"));
    }
}

#[test]
fn ranges_nest_and_name_range_covers_base_name() {
    let doc = parse("struct Player { int hp; }", &uri("r.qtn"));
    let Definition::Type(def) = &doc.definitions[0] else {
        panic!()
    };
    let field = &def.fields[0];

    assert!(def.range.contains(&field.range));
    assert!(field.range.contains(&field.type_ref.range));

    // `int` starts at column 16 and is exactly 3 characters wide.
    let name_range = field.type_ref.name_range;
    assert_eq!(name_range.start.line, 0);
    assert_eq!(name_range.start.character, 16);
    assert_eq!(name_range.end.character, 19);
}

#[test]
fn dotted_type_reference_keeps_full_name() {
    let defs = parse_ok("struct Holder { Core.Math.Vec3 position; }");
    let Definition::Type(def) = &defs[0] else {
        panic!()
    };
    assert_eq!(def.fields[0].type_ref.name, "Core.Math.Vec3");
}

#[test]
fn document_carries_uri_and_version() {
    let file = uri("doc.qtn");
    let doc = parse("struct A { }", &file);
    assert_eq!(doc.uri, file);
    assert_eq!(doc.version, 0);
}
