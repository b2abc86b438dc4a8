//! Human-readable detail strings for symbols and outlines.

use crate::syntax::ast::{
    EnumMemberDefinition, EventDefinition, FieldDefinition, SignalDefinition, TypeDefinition,
    TypeReference,
};

/// Render a type reference the way it is written: `dictionary<int, Foo>[4]`,
/// `*Player` for pointers.
pub fn format_type_reference(type_ref: &TypeReference) -> String {
    let mut result = type_ref.name.clone();

    if !type_ref.generic_args.is_empty() {
        let args: Vec<String> = type_ref.generic_args.iter().map(format_type_reference).collect();
        result.push('<');
        result.push_str(&args.join(", "));
        result.push('>');
    }

    if let Some(size) = type_ref.array_size {
        result.push_str(&format!("[{size}]"));
    }

    if type_ref.is_pointer {
        result.insert(0, '*');
    }

    result
}

/// `singleton component : Base` style header for a type definition.
pub fn type_definition_detail(def: &TypeDefinition) -> String {
    let mut detail = def.kind.keyword().to_string();
    if !def.modifiers.is_empty() {
        detail = format!("{} {}", def.modifiers.join(" "), detail);
    }
    if let Some(base) = &def.base_type {
        detail.push_str(&format!(" : {base}"));
    }
    detail
}

pub fn event_detail(def: &EventDefinition) -> String {
    let mut detail = "event".to_string();
    if !def.modifiers.is_empty() {
        detail = format!("{} {}", def.modifiers.join(" "), detail);
    }
    if let Some(parent) = &def.parent_name {
        detail.push_str(&format!(" : {parent}"));
    }
    detail
}

/// `signal(*EntityRef, FP)` parameter-type summary.
pub fn signal_detail(def: &SignalDefinition) -> String {
    let params: Vec<String> = def
        .parameters
        .iter()
        .map(|p| format_type_reference(&p.type_ref))
        .collect();
    format!("signal({})", params.join(", "))
}

pub fn field_detail(field: &FieldDefinition) -> String {
    format!("{}: {}", field.name, format_type_reference(&field.type_ref))
}

pub fn enum_member_detail(member: &EnumMemberDefinition) -> String {
    match member.value {
        Some(value) => format!("{} = {}", member.name, value),
        None => member.name.clone(),
    }
}
