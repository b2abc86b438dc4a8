use tower_lsp::lsp_types::Url;

use crate::qtn::builtins::keywords::{
    is_field_modifier, is_top_level_keyword, starts_top_level_definition,
};
use crate::syntax::ast::{
    Attribute, DefineDefinition, Definition, EnumMemberDefinition, EventDefinition,
    FieldDefinition, GlobalDefinition, ImportDefinition, ImportKind, InputDefinition, NumberValue,
    ParameterDefinition, ParseError, PragmaDefinition, QtnDocument, SignalDefinition, SourceRange,
    TypeDefinition, TypeKind, TypeReference,
};
use crate::syntax::kind::{Token, TokenKind};
use crate::syntax::lexer::tokenize;

/// Parse QTN source text into a document. Never fails: syntax errors are
/// collected into `parse_errors` and parsing resumes at the next recovery
/// anchor, so one malformed construct cannot invalidate the rest of the file.
pub fn parse(text: &str, file_uri: &Url) -> QtnDocument {
    let tokens = tokenize(text);
    Parser::new(tokens, file_uri.clone()).parse()
}

/// Interpret a numeric literal: `0x`/`0X` prefix as base-16 integer, a
/// literal containing `.` as a float, anything else as a base-10 integer.
/// Total; malformed input yields zero.
pub fn parse_numeric_value(raw: &str) -> NumberValue {
    let (sign, body) = match raw.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, raw),
    };
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let magnitude = i64::from_str_radix(hex, 16).unwrap_or(0);
        return NumberValue::Int(sign.wrapping_mul(magnitude));
    }
    if raw.contains('.') {
        return NumberValue::Float(raw.parse().unwrap_or(0.0));
    }
    NumberValue::Int(raw.parse().unwrap_or(0))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file_uri: Url,
    errors: Vec<ParseError>,
}

impl Parser {
    fn new(tokens: Vec<Token>, file_uri: Url) -> Self {
        Self {
            tokens,
            pos: 0,
            file_uri,
            errors: Vec::new(),
        }
    }

    // ── Token helpers ──────────────────────────────────────────────

    /// Current token. The stream always ends with EOF, which `advance` never
    /// moves past, so the cursor stays in bounds.
    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn is_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Consume and return the current token. No-op at EOF.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn at_punct(&self, value: &str) -> bool {
        self.current().is(TokenKind::Punctuation, value)
    }

    fn at_keyword(&self, value: &str) -> bool {
        self.current().is(TokenKind::Keyword, value)
    }

    fn at_name(&self) -> bool {
        matches!(self.current().kind, TokenKind::Identifier | TokenKind::Keyword)
    }

    /// Consume the current token when it is the given punctuation.
    fn eat_punct(&mut self, value: &str) -> bool {
        if self.at_punct(value) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require punctuation; record an error when missing so the caller can
    /// continue as if it were present.
    fn expect_punct(&mut self, value: &str) {
        if !self.eat_punct(value) {
            let current = self.current().clone();
            self.add_error(
                format!("Expected '{}' but got '{}'", value, current.value),
                current.range,
            );
        }
    }

    /// Require a number token; `None` (with a recorded error) when missing.
    fn expect_number(&mut self) -> Option<Token> {
        if self.current().kind == TokenKind::Number {
            return Some(self.advance());
        }
        let current = self.current().clone();
        self.add_error(
            format!("Expected number but got '{}'", current.value),
            current.range,
        );
        None
    }

    /// Require an identifier-like token. Many QTN names happen to be reserved
    /// words (a field type can be `button`), so keywords are accepted too.
    /// Returns a synthetic `<missing>` token when absent so callers continue.
    fn expect_name(&mut self, description: &str) -> Token {
        if self.at_name() {
            return self.advance();
        }
        let current = self.current().clone();
        self.add_error(
            format!("Expected {} but got '{}'", description, current.value),
            current.range,
        );
        Token {
            kind: TokenKind::Identifier,
            value: "<missing>".to_string(),
            range: current.range,
        }
    }

    // ── Error helpers ──────────────────────────────────────────────

    fn add_error(&mut self, message: String, range: SourceRange) {
        self.errors.push(ParseError { message, range });
    }

    /// Panic-mode recovery to a top-level anchor: a top-level keyword or `[`
    /// (left unconsumed so the main loop re-dispatches), or `;`/`}`
    /// (consumed so the next iteration starts clean).
    ///
    /// Always advances at least one token unless already at EOF.
    fn skip_to_recovery_point(&mut self) {
        let start_pos = self.pos;

        while !self.is_eof() {
            let token = self.current();
            if token.kind == TokenKind::Keyword && is_top_level_keyword(&token.value) {
                if self.pos == start_pos {
                    self.advance();
                }
                return;
            }
            if self.at_punct("[") {
                if self.pos == start_pos {
                    self.advance();
                }
                return;
            }
            if self.at_punct(";") || self.at_punct("}") {
                self.advance();
                return;
            }
            self.advance();
        }
    }

    /// Recovery inside a field block: skip to `;` (consumed) or `}` (left
    /// for the block-close handler). Always advances at least one token
    /// unless already at EOF.
    fn skip_to_field_recovery_point(&mut self) {
        let start_pos = self.pos;

        while !self.is_eof() {
            if self.at_punct(";") {
                self.advance();
                return;
            }
            if self.at_punct("}") {
                if self.pos == start_pos {
                    self.advance();
                }
                return;
            }
            self.advance();
        }
    }

    /// Recovery inside an enum member block: skip to `,` (consumed), `}`, or
    /// the next identifier-like token (the next member). Always advances at
    /// least one token unless already at EOF.
    fn skip_to_enum_recovery_point(&mut self) {
        let start_pos = self.pos;

        while !self.is_eof() {
            if self.at_punct(",") {
                self.advance();
                return;
            }
            if self.at_punct("}") || self.at_name() {
                if self.pos == start_pos {
                    self.advance();
                }
                return;
            }
            self.advance();
        }
    }

    // ── Range helpers ──────────────────────────────────────────────

    /// Range of the previously consumed token, for closing spans.
    fn prev_range(&self) -> SourceRange {
        if self.pos > 0 {
            self.tokens[self.pos - 1].range
        } else {
            self.current().range
        }
    }

    // ── Main entry ─────────────────────────────────────────────────

    fn parse(mut self) -> QtnDocument {
        let mut definitions = Vec::new();

        while !self.is_eof() {
            let pos_before = self.pos;
            if let Some(def) = self.parse_top_level() {
                definitions.push(def);
            }

            // Termination guarantee: every iteration must consume something.
            if self.pos == pos_before && !self.is_eof() {
                self.advance();
            }
        }

        QtnDocument {
            uri: self.file_uri,
            version: 0,
            definitions,
            parse_errors: self.errors,
        }
    }

    // ── Top-level dispatch ─────────────────────────────────────────

    fn parse_top_level(&mut self) -> Option<Definition> {
        // Leading attribute lists are parsed for resynchronization but not
        // attached to top-level definitions.
        self.try_parse_attributes();

        if self.is_eof() {
            return None;
        }

        let token = self.current().clone();
        if token.kind == TokenKind::Keyword {
            return match token.value.as_str() {
                "struct" => self.parse_struct(),
                "union" => self.parse_union(),
                "component" => self.parse_component(false, Vec::new(), None),
                "singleton" => {
                    let singleton = self.advance();
                    if self.at_keyword("component") {
                        return self.parse_component(true, Vec::new(), Some(singleton.range));
                    }
                    self.add_error(
                        "Expected 'component' after 'singleton'".to_string(),
                        self.current().range,
                    );
                    self.skip_to_recovery_point();
                    None
                }
                "enum" => self.parse_enum(TypeKind::Enum),
                "flags" => self.parse_enum(TypeKind::Flags),
                "event" => self.parse_event(Vec::new(), None),
                "abstract" => {
                    let modifier = self.advance();
                    if self.at_keyword("event") {
                        return self.parse_event(vec!["abstract".to_string()], Some(modifier.range));
                    }
                    if self.at_keyword("component") {
                        return self.parse_component(
                            false,
                            vec!["abstract".to_string()],
                            Some(modifier.range),
                        );
                    }
                    self.add_error(
                        "Expected 'event' or 'component' after 'abstract'".to_string(),
                        self.current().range,
                    );
                    self.skip_to_recovery_point();
                    None
                }
                "synced" | "client" | "server" => {
                    let modifier = self.advance();
                    if self.at_keyword("event") {
                        return self.parse_event(vec![modifier.value.clone()], Some(modifier.range));
                    }
                    self.add_error(
                        format!("Expected 'event' after '{}'", modifier.value),
                        self.current().range,
                    );
                    self.skip_to_recovery_point();
                    None
                }
                "signal" => self.parse_signal(),
                "input" => self.parse_input(),
                "global" => self.parse_global(),
                "asset" => self.parse_asset(),
                "import" => self.parse_import(),
                "using" => self.parse_using(),
                "#pragma" => self.parse_pragma(),
                "#define" => self.parse_define(),
                _ => {
                    self.add_error(
                        format!("Unexpected keyword '{}' at top level", token.value),
                        token.range,
                    );
                    self.advance();
                    self.skip_to_recovery_point();
                    None
                }
            };
        }

        self.add_error(
            format!("Unexpected token '{}' at top level", token.value),
            token.range,
        );
        self.advance();
        self.skip_to_recovery_point();
        None
    }

    // ── Type-like constructs ───────────────────────────────────────

    fn parse_struct(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("type name");

        let base_type = if self.eat_punct(":") {
            Some(self.expect_name("base type").value)
        } else {
            None
        };

        let fields = self.parse_field_block();

        Some(Definition::Type(TypeDefinition {
            kind: TypeKind::Struct,
            name: name.value,
            modifiers: Vec::new(),
            fields,
            enum_members: Vec::new(),
            base_type,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_union(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("type name");
        let fields = self.parse_field_block();

        Some(Definition::Type(TypeDefinition {
            kind: TypeKind::Union,
            name: name.value,
            modifiers: Vec::new(),
            fields,
            enum_members: Vec::new(),
            base_type: None,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_component(
        &mut self,
        singleton: bool,
        mut modifiers: Vec<String>,
        leading: Option<SourceRange>,
    ) -> Option<Definition> {
        let keyword_range = self.advance().range;
        let start = leading.unwrap_or(keyword_range);

        let name = self.expect_name("component name");
        let fields = self.parse_field_block();

        if singleton {
            modifiers.push("singleton".to_string());
        }

        Some(Definition::Type(TypeDefinition {
            kind: TypeKind::Component,
            name: name.value,
            modifiers,
            fields,
            enum_members: Vec::new(),
            base_type: None,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_enum(&mut self, kind: TypeKind) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("enum name");

        let base_type = if self.eat_punct(":") {
            Some(self.expect_name("underlying type").value)
        } else {
            None
        };

        let members = self.parse_enum_member_block();

        Some(Definition::Type(TypeDefinition {
            kind,
            name: name.value,
            modifiers: Vec::new(),
            fields: Vec::new(),
            enum_members: members,
            base_type,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_event(
        &mut self,
        modifiers: Vec<String>,
        leading: Option<SourceRange>,
    ) -> Option<Definition> {
        let keyword_range = self.advance().range;
        let start = leading.unwrap_or(keyword_range);

        let name = self.expect_name("event name");

        let parent_name = if self.eat_punct(":") {
            Some(self.expect_name("parent event name").value)
        } else {
            None
        };

        let fields = self.parse_field_block();

        Some(Definition::Event(EventDefinition {
            name: name.value,
            modifiers,
            parent_name,
            fields,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_signal(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("signal name");

        let mut parameters = Vec::new();
        if self.eat_punct("(") {
            parameters = self.parse_parameter_list();
            self.expect_punct(")");
        }

        // Trailing semicolon is conventional but not required.
        self.eat_punct(";");

        Some(Definition::Signal(SignalDefinition {
            name: name.value,
            parameters,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_input(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let fields = self.parse_field_block();

        Some(Definition::Input(InputDefinition {
            fields,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_global(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let fields = self.parse_field_block();

        Some(Definition::Global(GlobalDefinition {
            fields,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_asset(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("asset name");
        self.expect_punct(";");

        Some(Definition::Type(TypeDefinition {
            kind: TypeKind::Asset,
            name: name.value,
            modifiers: Vec::new(),
            fields: Vec::new(),
            enum_members: Vec::new(),
            base_type: None,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    // ── Imports and directives ─────────────────────────────────────

    fn parse_import(&mut self) -> Option<Definition> {
        let start = self.advance().range;

        // import struct Name(size);
        if self.at_keyword("struct") {
            self.advance();
            let name = self.expect_name("struct name").value;
            let mut size = None;
            if self.eat_punct("(") {
                size = self
                    .expect_number()
                    .map(|tok| parse_numeric_value(&tok.value).as_i64());
                self.expect_punct(")");
            }
            self.expect_punct(";");
            return Some(Definition::Import(ImportDefinition {
                import_kind: ImportKind::Struct,
                name,
                size,
                underlying_type: None,
                range: start.join(self.prev_range()),
                file_uri: self.file_uri.clone(),
            }));
        }

        // import enum Name(UnderlyingType);
        if self.at_keyword("enum") {
            self.advance();
            let name = self.expect_name("enum name").value;
            let mut underlying_type = None;
            if self.eat_punct("(") {
                underlying_type = Some(self.expect_name("underlying type").value);
                self.expect_punct(")");
            }
            self.expect_punct(";");
            return Some(Definition::Import(ImportDefinition {
                import_kind: ImportKind::Enum,
                name,
                size: None,
                underlying_type,
                range: start.join(self.prev_range()),
                file_uri: self.file_uri.clone(),
            }));
        }

        // import singleton Dotted.Name;
        if self.at_keyword("singleton") {
            self.advance();
            let name = self.parse_dotted_name();
            self.expect_punct(";");
            return Some(Definition::Import(ImportDefinition {
                import_kind: ImportKind::Singleton,
                name,
                size: None,
                underlying_type: None,
                range: start.join(self.prev_range()),
                file_uri: self.file_uri.clone(),
            }));
        }

        // import Dotted.Name;
        let name = self.parse_dotted_name();
        self.expect_punct(";");
        Some(Definition::Import(ImportDefinition {
            import_kind: ImportKind::Type,
            name,
            size: None,
            underlying_type: None,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_using(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.parse_dotted_name();
        self.expect_punct(";");

        Some(Definition::Import(ImportDefinition {
            import_kind: ImportKind::Using,
            name,
            size: None,
            underlying_type: None,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_pragma(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let key = self.expect_name("pragma key").value;

        let value = if self.current().kind == TokenKind::Number {
            self.advance().value
        } else {
            self.expect_name("pragma value").value
        };

        Some(Definition::Pragma(PragmaDefinition {
            key,
            value,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    fn parse_define(&mut self) -> Option<Definition> {
        let start = self.advance().range;
        let name = self.expect_name("define name").value;
        let value = self
            .expect_number()
            .map(|tok| parse_numeric_value(&tok.value))
            .unwrap_or(NumberValue::Int(0));

        Some(Definition::Define(DefineDefinition {
            name,
            value,
            range: start.join(self.prev_range()),
            file_uri: self.file_uri.clone(),
        }))
    }

    // ── Field block { field; field; … } ────────────────────────────

    fn parse_field_block(&mut self) -> Vec<FieldDefinition> {
        let mut fields = Vec::new();

        if !self.eat_punct("{") {
            self.add_error("Expected '{'".to_string(), self.current().range);
            self.skip_to_recovery_point();
            return fields;
        }

        while !self.is_eof() && !self.at_punct("}") {
            // A keyword that can only open a new top-level definition means
            // this block was never closed. Stop here, leaving the keyword for
            // the main loop, so the next definition is still recovered.
            if self.current().kind == TokenKind::Keyword
                && starts_top_level_definition(&self.current().value)
            {
                self.add_error(
                    "Expected '}' to close field block".to_string(),
                    self.current().range,
                );
                return fields;
            }

            let pos_before = self.pos;
            if let Some(field) = self.parse_field() {
                fields.push(field);
            }

            if self.pos == pos_before && !self.is_eof() && !self.at_punct("}") {
                self.advance();
            }
        }

        if self.at_punct("}") {
            self.advance();
        } else {
            self.add_error(
                "Expected '}' to close field block".to_string(),
                self.current().range,
            );
        }
        fields
    }

    fn parse_field(&mut self) -> Option<FieldDefinition> {
        let attributes = self.try_parse_attributes();

        // The attributes may have been the last thing before the closing brace.
        if self.at_punct("}") {
            return None;
        }

        let start = self.current().range;

        // Field modifiers: nothashed, synced, local, remote, client, server.
        let mut modifiers = Vec::new();
        while self.current().kind == TokenKind::Keyword && is_field_modifier(&self.current().value)
        {
            modifiers.push(self.advance().value);
        }

        let type_ref = match self.parse_type_ref() {
            Some(type_ref) => type_ref,
            None => {
                self.add_error(
                    "Expected type in field definition".to_string(),
                    self.current().range,
                );
                self.skip_to_field_recovery_point();
                return None;
            }
        };

        let name = self.expect_name("field name");
        self.expect_punct(";");

        // Modifiers ride along as leading pseudo-attributes; the field struct
        // has no modifier list of its own.
        let mut all_attributes: Vec<Attribute> = modifiers
            .into_iter()
            .map(|name| Attribute {
                name,
                args: Vec::new(),
                range: start,
            })
            .collect();
        all_attributes.extend(attributes);

        Some(FieldDefinition {
            name: name.value,
            type_ref,
            attributes: all_attributes,
            range: start.join(self.prev_range()),
        })
    }

    // ── Enum member block { A, B = 1, C } ──────────────────────────

    fn parse_enum_member_block(&mut self) -> Vec<EnumMemberDefinition> {
        let mut members = Vec::new();

        if !self.eat_punct("{") {
            self.add_error("Expected '{'".to_string(), self.current().range);
            self.skip_to_recovery_point();
            return members;
        }

        while !self.is_eof() && !self.at_punct("}") {
            let pos_before = self.pos;
            let member_start = self.current().range;
            let name = self.expect_name("enum member name");

            let value = if self.eat_punct("=") {
                self.expect_number()
                    .map(|tok| parse_numeric_value(&tok.value))
            } else {
                None
            };

            members.push(EnumMemberDefinition {
                name: name.value,
                value,
                range: member_start.join(self.prev_range()),
            });

            // Comma separator; optional before `}`.
            if !self.eat_punct(",") && !self.at_punct("}") {
                self.add_error(
                    "Expected ',' or '}' in enum member list".to_string(),
                    self.current().range,
                );
                self.skip_to_enum_recovery_point();
            }

            if self.pos == pos_before && !self.is_eof() && !self.at_punct("}") {
                self.advance();
            }
        }

        if self.at_punct("}") {
            self.advance();
        } else {
            self.add_error(
                "Expected '}' to close enum block".to_string(),
                self.current().range,
            );
        }
        members
    }

    // ── Parameter list (signal) ────────────────────────────────────

    fn parse_parameter_list(&mut self) -> Vec<ParameterDefinition> {
        let mut params = Vec::new();

        if self.at_punct(")") {
            return params;
        }

        while !self.is_eof() {
            let param_start = self.current().range;

            let type_ref = match self.parse_type_ref() {
                Some(type_ref) => type_ref,
                None => {
                    self.add_error("Expected parameter type".to_string(), self.current().range);
                    break;
                }
            };

            let name = self.expect_name("parameter name");

            params.push(ParameterDefinition {
                name: name.value,
                type_ref,
                range: param_start.join(self.prev_range()),
            });

            if !self.eat_punct(",") {
                break;
            }
        }

        params
    }

    // ── Type reference ─────────────────────────────────────────────

    fn parse_type_ref(&mut self) -> Option<TypeReference> {
        if !self.at_name() {
            return None;
        }

        let first = self.advance();
        let start = first.range;
        let mut name = first.value;

        // Dotted namespacing: Namespace.Sub.Type
        while self.at_punct(".") {
            self.advance();
            let segment = self.expect_name("type name segment");
            name.push('.');
            name.push_str(&segment.value);
        }
        let name_range = start.join(self.prev_range());

        // Generic args: <T>, <K, V>
        let mut generic_args = Vec::new();
        if self.eat_punct("<") {
            generic_args = self.parse_generic_args();
            self.expect_punct(">");
        }

        // Fixed array size: array<T>[N], bitset[N]
        let mut array_size = None;
        if self.eat_punct("[") {
            array_size = self
                .expect_number()
                .map(|tok| parse_numeric_value(&tok.value).as_i64());
            self.expect_punct("]");
        }

        // Nullable suffix folds into the name: FP? reads as NullableFP.
        if self.eat_punct("?") {
            name = format!("Nullable{name}");
        }

        // Pointer suffix, used in signal parameters.
        let is_pointer = self.eat_punct("*");

        Some(TypeReference {
            name,
            name_range,
            generic_args,
            array_size,
            is_pointer,
            range: start.join(self.prev_range()),
        })
    }

    fn parse_generic_args(&mut self) -> Vec<TypeReference> {
        let mut args = Vec::new();

        if self.at_punct(">") {
            return args;
        }

        while !self.is_eof() {
            match self.parse_type_ref() {
                Some(arg) => args.push(arg),
                None => {
                    self.add_error("Expected type argument".to_string(), self.current().range);
                    break;
                }
            }

            if !self.eat_punct(",") {
                break;
            }
        }

        args
    }

    // ── Attribute lists ────────────────────────────────────────────

    /// Parse zero or more `[Attr, Attr(arg, "str", 3)]` blocks.
    fn try_parse_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();

        while self.at_punct("[") {
            self.advance();

            while !self.is_eof() && !self.at_punct("]") {
                let attr_start = self.current().range;
                let name = self.expect_name("attribute name");

                let mut args = Vec::new();
                if self.eat_punct("(") {
                    while !self.is_eof() && !self.at_punct(")") {
                        match self.current().kind {
                            TokenKind::Str
                            | TokenKind::Number
                            | TokenKind::Identifier
                            | TokenKind::Keyword => {
                                args.push(self.advance().value);
                            }
                            _ => {
                                self.advance();
                            }
                        }

                        if !self.eat_punct(",") {
                            break;
                        }
                    }
                    self.expect_punct(")");
                }

                attributes.push(Attribute {
                    name: name.value,
                    args,
                    range: attr_start.join(self.prev_range()),
                });

                if !self.eat_punct(",") {
                    break;
                }
            }

            self.expect_punct("]");
        }

        attributes
    }

    // ── Name helpers ───────────────────────────────────────────────

    /// Parse a dotted name chain: A.B.C
    fn parse_dotted_name(&mut self) -> String {
        let mut name = self.expect_name("name").value;

        while self.eat_punct(".") {
            let segment = self.expect_name("name segment");
            name.push('.');
            name.push_str(&segment.value);
        }

        name
    }
}
