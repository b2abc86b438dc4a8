use tower_lsp::lsp_types::{Position as LspPosition, Range as LspRange, Url};

/// Zero-based line/character position. Characters are byte columns within
/// the line (sufficient for QTN sources).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open source range: `end` is exclusive of the character after the
/// last one consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span from the start of `self` to the end of `other`.
    pub fn join(self, other: SourceRange) -> SourceRange {
        SourceRange {
            start: self.start,
            end: other.end,
        }
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &SourceRange) -> bool {
        let starts_before = (self.start.line, self.start.character) <= (other.start.line, other.start.character);
        let ends_after = (self.end.line, self.end.character) >= (other.end.line, other.end.character);
        starts_before && ends_after
    }

    pub fn to_lsp(self) -> LspRange {
        LspRange {
            start: LspPosition::new(self.start.line, self.start.character),
            end: LspPosition::new(self.end.line, self.end.character),
        }
    }
}

/// Interpreted numeric literal. Hex and plain integers parse to `Int`,
/// literals containing `.` parse to `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

impl NumberValue {
    pub fn as_i64(self) -> i64 {
        match self {
            NumberValue::Int(v) => v,
            NumberValue::Float(v) => v as i64,
        }
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberValue::Int(v) => write!(f, "{v}"),
            NumberValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A type reference as written in source: `Namespace.Name<K, V>[4]*`.
///
/// `name_range` covers only the leading dotted-name segment; `range` covers
/// the whole construct including generic/array/pointer decorations. Consumers
/// highlighting the reference must use `name_range`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub name: String,
    pub name_range: SourceRange,
    pub generic_args: Vec<TypeReference>,
    pub array_size: Option<i64>,
    pub is_pointer: bool,
    pub range: SourceRange,
}

/// Attribute on a definition or field: `[Header("text")]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub args: Vec<String>,
    pub range: SourceRange,
}

/// Field in a struct/component/event/input/global block.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub type_ref: TypeReference,
    pub attributes: Vec<Attribute>,
    pub range: SourceRange,
}

/// Enum or flags member: `Running = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMemberDefinition {
    pub name: String,
    pub value: Option<NumberValue>,
    pub range: SourceRange,
}

/// Which declaration form a [`TypeDefinition`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Component,
    Struct,
    Enum,
    Flags,
    Union,
    Asset,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Component => "component",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Flags => "flags",
            TypeKind::Union => "union",
            TypeKind::Asset => "asset",
        }
    }
}

/// component, struct, enum, flags, union, or asset declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Vec<String>,
    pub fields: Vec<FieldDefinition>,
    pub enum_members: Vec<EnumMemberDefinition>,
    pub base_type: Option<String>,
    pub range: SourceRange,
    pub file_uri: Url,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDefinition {
    pub name: String,
    pub modifiers: Vec<String>,
    pub parent_name: Option<String>,
    pub fields: Vec<FieldDefinition>,
    pub range: SourceRange,
    pub file_uri: Url,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: String,
    pub type_ref: TypeReference,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalDefinition {
    pub name: String,
    pub parameters: Vec<ParameterDefinition>,
    pub range: SourceRange,
    pub file_uri: Url,
}

/// The input block. At most one per project.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDefinition {
    pub fields: Vec<FieldDefinition>,
    pub range: SourceRange,
    pub file_uri: Url,
}

/// The globals block. At most one per project.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalDefinition {
    pub fields: Vec<FieldDefinition>,
    pub range: SourceRange,
    pub file_uri: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Type,
    Struct,
    Enum,
    Singleton,
    Using,
}

/// `import …;` or `using …;` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefinition {
    pub import_kind: ImportKind,
    pub name: String,
    pub size: Option<i64>,
    pub underlying_type: Option<String>,
    pub range: SourceRange,
    pub file_uri: Url,
}

/// `#pragma key value`.
#[derive(Debug, Clone, PartialEq)]
pub struct PragmaDefinition {
    pub key: String,
    pub value: String,
    pub range: SourceRange,
    pub file_uri: Url,
}

/// `#define NAME value`.
#[derive(Debug, Clone, PartialEq)]
pub struct DefineDefinition {
    pub name: String,
    pub value: NumberValue,
    pub range: SourceRange,
    pub file_uri: Url,
}

/// A top-level QTN definition. Consumers match on the variant; there is no
/// behavioral dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Type(TypeDefinition),
    Event(EventDefinition),
    Signal(SignalDefinition),
    Input(InputDefinition),
    Global(GlobalDefinition),
    Import(ImportDefinition),
    Pragma(PragmaDefinition),
    Define(DefineDefinition),
}

impl Definition {
    /// Declared name, if the construct has one. Input and global blocks are
    /// anonymous (their symbols use the synthetic `input`/`global` names).
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Type(d) => Some(&d.name),
            Definition::Event(d) => Some(&d.name),
            Definition::Signal(d) => Some(&d.name),
            Definition::Import(d) => Some(&d.name),
            Definition::Define(d) => Some(&d.name),
            Definition::Pragma(_) | Definition::Input(_) | Definition::Global(_) => None,
        }
    }

    pub fn range(&self) -> SourceRange {
        match self {
            Definition::Type(d) => d.range,
            Definition::Event(d) => d.range,
            Definition::Signal(d) => d.range,
            Definition::Input(d) => d.range,
            Definition::Global(d) => d.range,
            Definition::Import(d) => d.range,
            Definition::Pragma(d) => d.range,
            Definition::Define(d) => d.range,
        }
    }
}

/// A recorded parse error. Never fatal: the surrounding document is still
/// produced with every definition that could be recovered.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub range: SourceRange,
}

/// One parsed `.qtn` file. Replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq)]
pub struct QtnDocument {
    pub uri: Url,
    pub version: i32,
    pub definitions: Vec<Definition>,
    pub parse_errors: Vec<ParseError>,
}
