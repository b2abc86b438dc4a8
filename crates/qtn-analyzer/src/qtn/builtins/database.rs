use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::{
    AttributeInfo, BuiltinCategory, BuiltinTypeInfo, KeywordCategory, KeywordInfo, LocalizedText,
};

const fn builtin(
    name: &'static str,
    category: BuiltinCategory,
    csharp_type: Option<&'static str>,
    size: Option<u32>,
    en: &'static str,
    ko: &'static str,
) -> BuiltinTypeInfo {
    BuiltinTypeInfo {
        name,
        category,
        csharp_type,
        size,
        descriptions: LocalizedText::new(en, ko),
    }
}

const fn keyword(
    name: &'static str,
    category: KeywordCategory,
    en: &'static str,
    ko: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        name,
        category,
        descriptions: LocalizedText::new(en, ko),
    }
}

const fn attribute(
    name: &'static str,
    params: &'static [&'static str],
    en: &'static str,
    ko: &'static str,
) -> AttributeInfo {
    AttributeInfo {
        name,
        params,
        descriptions: LocalizedText::new(en, ko),
    }
}

use self::BuiltinCategory::{Collection, Domain, Primitive, Special};
use self::KeywordCategory::{Control, Declaration, Directive, Modifier};

/// C# numeric types and their aliases.
pub static PRIMITIVE_TYPES: &[BuiltinTypeInfo] = &[
    builtin("bool", Primitive, Some("System.Boolean"), Some(1), "Boolean type (true/false)", "부울 타입 (참/거짓)"),
    builtin("Boolean", Primitive, Some("System.Boolean"), Some(1), "Boolean type (C# alias for bool)", "부울 타입 (bool의 C# 별칭)"),
    builtin("byte", Primitive, Some("System.Byte"), Some(1), "Unsigned 8-bit integer (0 to 255)", "부호 없는 8비트 정수 (0~255)"),
    builtin("Byte", Primitive, Some("System.Byte"), Some(1), "Unsigned 8-bit integer (C# alias)", "부호 없는 8비트 정수 (C# 별칭)"),
    builtin("sbyte", Primitive, Some("System.SByte"), Some(1), "Signed 8-bit integer (-128 to 127)", "부호 있는 8비트 정수 (-128~127)"),
    builtin("SByte", Primitive, Some("System.SByte"), Some(1), "Signed 8-bit integer (C# alias)", "부호 있는 8비트 정수 (C# 별칭)"),
    builtin("short", Primitive, Some("System.Int16"), Some(2), "Signed 16-bit integer", "부호 있는 16비트 정수"),
    builtin("Int16", Primitive, Some("System.Int16"), Some(2), "Signed 16-bit integer (C# alias)", "부호 있는 16비트 정수 (C# 별칭)"),
    builtin("ushort", Primitive, Some("System.UInt16"), Some(2), "Unsigned 16-bit integer", "부호 없는 16비트 정수"),
    builtin("UInt16", Primitive, Some("System.UInt16"), Some(2), "Unsigned 16-bit integer (C# alias)", "부호 없는 16비트 정수 (C# 별칭)"),
    builtin("int", Primitive, Some("System.Int32"), Some(4), "Signed 32-bit integer", "부호 있는 32비트 정수"),
    builtin("Int32", Primitive, Some("System.Int32"), Some(4), "Signed 32-bit integer (C# alias)", "부호 있는 32비트 정수 (C# 별칭)"),
    builtin("uint", Primitive, Some("System.UInt32"), Some(4), "Unsigned 32-bit integer", "부호 없는 32비트 정수"),
    builtin("UInt32", Primitive, Some("System.UInt32"), Some(4), "Unsigned 32-bit integer (C# alias)", "부호 없는 32비트 정수 (C# 별칭)"),
    builtin("long", Primitive, Some("System.Int64"), Some(8), "Signed 64-bit integer", "부호 있는 64비트 정수"),
    builtin("Int64", Primitive, Some("System.Int64"), Some(8), "Signed 64-bit integer (C# alias)", "부호 있는 64비트 정수 (C# 별칭)"),
    builtin("ulong", Primitive, Some("System.UInt64"), Some(8), "Unsigned 64-bit integer", "부호 없는 64비트 정수"),
    builtin("UInt64", Primitive, Some("System.UInt64"), Some(8), "Unsigned 64-bit integer (C# alias)", "부호 없는 64비트 정수 (C# 별칭)"),
];

/// Engine-provided deterministic simulation types.
pub static DOMAIN_TYPES: &[BuiltinTypeInfo] = &[
    builtin("FP", Domain, Some("Photon.Deterministic.FP"), None, "Fixed-point number (deterministic floating point)", "고정소수점 수 (결정론적 부동소수점)"),
    builtin("FPVector2", Domain, Some("Photon.Deterministic.FPVector2"), None, "Fixed-point 2D vector", "고정소수점 2D 벡터"),
    builtin("FPVector3", Domain, Some("Photon.Deterministic.FPVector3"), None, "Fixed-point 3D vector", "고정소수점 3D 벡터"),
    builtin("FPQuaternion", Domain, Some("Photon.Deterministic.FPQuaternion"), None, "Fixed-point quaternion (rotation)", "고정소수점 쿼터니언 (회전)"),
    builtin("FPMatrix", Domain, Some("Photon.Deterministic.FPMatrix2x2"), None, "Fixed-point matrix", "고정소수점 행렬"),
    builtin("FPBounds2", Domain, Some("Photon.Deterministic.FPBounds2"), None, "Fixed-point 2D bounding box", "고정소수점 2D 바운딩 박스"),
    builtin("FPBounds3", Domain, Some("Photon.Deterministic.FPBounds3"), None, "Fixed-point 3D bounding box", "고정소수점 3D 바운딩 박스"),
    builtin("EntityRef", Domain, Some("Quantum.EntityRef"), None, "Reference to an ECS entity", "ECS 엔티티에 대한 참조"),
    builtin("PlayerRef", Domain, Some("Quantum.PlayerRef"), None, "Reference to a player (0-based index)", "플레이어에 대한 참조 (0부터 시작하는 인덱스)"),
    builtin("AssetRef", Domain, Some("Quantum.AssetRef"), None, "Reference to a simulation asset (GUID-based)", "시뮬레이션 에셋에 대한 참조 (GUID 기반)"),
    builtin("QString", Domain, Some("Quantum.QString"), None, "Deterministic string (UTF-16)", "결정론적 문자열 (UTF-16)"),
    builtin("QStringUtf8", Domain, Some("Quantum.QStringUtf8"), None, "Deterministic string (UTF-8)", "결정론적 문자열 (UTF-8)"),
    builtin("LayerMask", Domain, Some("Quantum.LayerMask"), None, "Physics layer bitmask", "물리 레이어 비트마스크"),
    builtin("NullableFP", Domain, Some("Quantum.NullableFP"), None, "Nullable fixed-point number", "Null 허용 고정소수점 수"),
    builtin("NullableFPVector2", Domain, Some("Quantum.NullableFPVector2"), None, "Nullable fixed-point 2D vector", "Null 허용 고정소수점 2D 벡터"),
    builtin("NullableFPVector3", Domain, Some("Quantum.NullableFPVector3"), None, "Nullable fixed-point 3D vector", "Null 허용 고정소수점 3D 벡터"),
    builtin("Hit", Domain, Some("Quantum.Physics2D.Hit"), None, "Physics 2D raycast hit result", "2D 물리 레이캐스트 충돌 결과"),
    builtin("Hit3D", Domain, Some("Quantum.Physics3D.Hit3D"), None, "Physics 3D raycast hit result", "3D 물리 레이캐스트 충돌 결과"),
    builtin("Shape2D", Domain, Some("Quantum.Physics2D.Shape2D"), None, "Physics 2D collision shape", "2D 물리 충돌 형상"),
    builtin("Shape3D", Domain, Some("Quantum.Physics3D.Shape3D"), None, "Physics 3D collision shape", "3D 물리 충돌 형상"),
    builtin("Joint", Domain, Some("Quantum.Physics2D.Joint"), None, "Physics 2D joint", "2D 물리 조인트"),
    builtin("DistanceJoint", Domain, Some("Quantum.Physics2D.DistanceJoint"), None, "Physics 2D distance joint", "2D 물리 거리 조인트"),
    builtin("SpringJoint", Domain, Some("Quantum.Physics2D.SpringJoint"), None, "Physics 2D spring joint", "2D 물리 스프링 조인트"),
    builtin("HingeJoint", Domain, Some("Quantum.Physics2D.HingeJoint"), None, "Physics 2D hinge joint", "2D 물리 힌지 조인트"),
];

/// Generic/parameterized collection types.
pub static COLLECTION_TYPES: &[BuiltinTypeInfo] = &[
    builtin("list", Collection, Some("Quantum.QList<T>"), None, "Dynamic-length list (engine managed)", "가변 길이 리스트 (엔진 관리)"),
    builtin("array", Collection, Some("Quantum.QArray<T>"), None, "Fixed-length array: array<T>[N]", "고정 길이 배열: array<T>[N]"),
    builtin("dictionary", Collection, Some("Quantum.QDictionary<K,V>"), None, "Key-value dictionary (engine managed)", "키-값 딕셔너리 (엔진 관리)"),
    builtin("hash_set", Collection, Some("Quantum.QHashSet<T>"), None, "Hash set collection (engine managed)", "해시 셋 컬렉션 (엔진 관리)"),
    builtin("set", Collection, Some("Quantum.QHashSet<T>"), None, "Alias for hash_set", "hash_set의 별칭"),
    builtin("bitset", Collection, Some("Quantum.BitSet"), None, "Fixed-size bit array: bitset[N]", "고정 크기 비트 배열: bitset[N]"),
    builtin("entity_ref", Collection, Some("Quantum.EntityRef"), None, "Entity reference (collection context)", "엔티티 참조 (컬렉션 컨텍스트)"),
    builtin("player_ref", Collection, Some("Quantum.PlayerRef"), None, "Player reference (collection context)", "플레이어 참조 (컬렉션 컨텍스트)"),
    builtin("asset_ref", Collection, Some("Quantum.AssetRef"), None, "Asset reference (collection context)", "에셋 참조 (컬렉션 컨텍스트)"),
];

/// Context-restricted types.
pub static SPECIAL_TYPES: &[BuiltinTypeInfo] = &[
    builtin("button", Special, Some("Quantum.Input.Button"), None, "Input button type (input block only)", "입력 버튼 타입 (input 블록 전용)"),
];

pub static DECLARATION_KEYWORDS: &[KeywordInfo] = &[
    keyword("component", Declaration, "Declares an ECS component (attached to entities)", "ECS 컴포넌트 선언 (엔티티에 부착)"),
    keyword("struct", Declaration, "Declares a struct (value type, no entity attachment)", "구조체 선언 (값 타입, 엔티티 미부착)"),
    keyword("input", Declaration, "Declares the input block (player input definition, one per project)", "입력 블록 선언 (플레이어 입력 정의, 프로젝트당 하나)"),
    keyword("event", Declaration, "Declares an event (one-shot message from simulation to view)", "이벤트 선언 (시뮬레이션에서 뷰로 보내는 일회성 메시지)"),
    keyword("signal", Declaration, "Declares a signal (simulation-internal callback)", "시그널 선언 (시뮬레이션 내부 콜백)"),
    keyword("global", Declaration, "Declares the globals block (project-wide shared state)", "전역 블록 선언 (프로젝트 전체 공유 상태)"),
    keyword("enum", Declaration, "Declares an enumeration type", "열거형 타입 선언"),
    keyword("flags", Declaration, "Declares a flags enumeration (bitmask)", "플래그 열거형 선언 (비트마스크)"),
    keyword("union", Declaration, "Declares a discriminated union (one-of-many struct)", "판별 공용체 선언 (여러 구조체 중 하나)"),
    keyword("asset", Declaration, "Declares an asset type", "에셋 타입 선언"),
];

pub static MODIFIER_KEYWORDS: &[KeywordInfo] = &[
    keyword("singleton", Modifier, "Makes a component singleton (one instance per frame)", "컴포넌트를 싱글톤으로 지정 (프레임당 하나의 인스턴스)"),
    keyword("abstract", Modifier, "Makes an event abstract (must be inherited)", "이벤트를 추상으로 지정 (상속 필수)"),
];

pub static CONTROL_KEYWORDS: &[KeywordInfo] = &[
    keyword("import", Control, "Imports an external type definition", "외부 타입 정의를 임포트"),
    keyword("using", Control, "Imports a namespace", "네임스페이스를 임포트"),
    keyword("synced", Control, "Event modifier: synced across network", "이벤트 수식어: 네트워크 동기화"),
    keyword("local", Control, "Event modifier: local-only (not synced)", "이벤트 수식어: 로컬 전용 (동기화 안 됨)"),
    keyword("remote", Control, "Event modifier: remote-only", "이벤트 수식어: 리모트 전용"),
    keyword("nothashed", Control, "Field modifier: excluded from state hash", "필드 수식어: 상태 해시에서 제외"),
    keyword("client", Control, "Event modifier: client-side only", "이벤트 수식어: 클라이언트 전용"),
    keyword("server", Control, "Event modifier: server-side only", "이벤트 수식어: 서버 전용"),
];

pub static DIRECTIVE_KEYWORDS: &[KeywordInfo] = &[
    keyword("#pragma", Directive, "Preprocessor pragma directive (e.g., #pragma max_players 16)", "전처리기 pragma 지시문 (예: #pragma max_players 16)"),
    keyword("#define", Directive, "Preprocessor constant definition (e.g., #define MY_CONST 42)", "전처리기 상수 정의 (예: #define MY_CONST 42)"),
];

/// Known attributes for completion and hover.
pub static ATTRIBUTES: &[AttributeInfo] = &[
    attribute("Header", &["text"], "Displays a header label in the Unity inspector", "Unity 인스펙터에 헤더 레이블을 표시"),
    attribute("Tooltip", &["text"], "Shows a tooltip when hovering in the Unity inspector", "Unity 인스펙터에서 마우스를 올리면 툴팁을 표시"),
    attribute("DrawIf", &["field", "value", "comparison", "mode"], "Conditionally shows/hides field in inspector", "인스펙터에서 조건부로 필드를 표시/숨김"),
    attribute("Range", &["min", "max"], "Clamps value to a range with slider in inspector", "인스펙터에서 슬라이더로 값의 범위를 제한"),
    attribute("RangeEx", &["min", "max"], "Extended range constraint with slider", "슬라이더를 포함한 확장 범위 제약"),
    attribute("HideInInspector", &[], "Hides field from Unity inspector", "Unity 인스펙터에서 필드를 숨김"),
    attribute("AllocateOnComponentAdded", &[], "Auto-allocates collection when component is added to entity", "컴포넌트가 엔티티에 추가될 때 컬렉션을 자동 할당"),
    attribute("FreeOnComponentRemoved", &[], "Auto-frees collection when component is removed from entity", "컴포넌트가 엔티티에서 제거될 때 컬렉션을 자동 해제"),
    attribute("ExcludeFromPrototype", &[], "Excludes field from entity prototype serialization", "엔티티 프로토타입 직렬화에서 필드를 제외"),
    attribute("OnlyInPrototype", &[], "Field exists only in prototype, not in runtime component", "프로토타입에서만 존재하는 필드 (런타임 컴포넌트에는 없음)"),
    attribute("PreserveInPrototype", &[], "Preserves field value when prototype is applied", "프로토타입이 적용될 때 필드 값을 보존"),
    attribute("Optional", &[], "Marks field as optional in prototype", "프로토타입에서 필드를 선택 사항으로 표시"),
    attribute("Space", &[], "Adds visual spacing in Unity inspector", "Unity 인스펙터에 시각적 여백을 추가"),
    attribute("Layer", &[], "Shows Unity layer dropdown for integer field", "정수 필드에 Unity 레이어 드롭다운을 표시"),
];

/// Every built-in type, lowest-priority first within the symbol table merge.
pub fn all_types() -> impl Iterator<Item = &'static BuiltinTypeInfo> {
    PRIMITIVE_TYPES
        .iter()
        .chain(DOMAIN_TYPES)
        .chain(COLLECTION_TYPES)
        .chain(SPECIAL_TYPES)
}

/// Every cataloged keyword.
pub fn all_keywords() -> impl Iterator<Item = &'static KeywordInfo> {
    DECLARATION_KEYWORDS
        .iter()
        .chain(MODIFIER_KEYWORDS)
        .chain(CONTROL_KEYWORDS)
        .chain(DIRECTIVE_KEYWORDS)
}

pub fn lookup_type(name: &str) -> Option<&'static BuiltinTypeInfo> {
    static MAP: OnceLock<HashMap<&'static str, &'static BuiltinTypeInfo>> = OnceLock::new();
    MAP.get_or_init(|| all_types().map(|info| (info.name, info)).collect())
        .get(name)
        .copied()
}

pub fn lookup_keyword(name: &str) -> Option<&'static KeywordInfo> {
    static MAP: OnceLock<HashMap<&'static str, &'static KeywordInfo>> = OnceLock::new();
    MAP.get_or_init(|| all_keywords().map(|info| (info.name, info)).collect())
        .get(name)
        .copied()
}

pub fn lookup_attribute(name: &str) -> Option<&'static AttributeInfo> {
    static MAP: OnceLock<HashMap<&'static str, &'static AttributeInfo>> = OnceLock::new();
    MAP.get_or_init(|| ATTRIBUTES.iter().map(|info| (info.name, info)).collect())
        .get(name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_every_category() {
        assert!(lookup_type("FP").is_some());
        assert!(lookup_type("int").is_some());
        assert!(lookup_type("list").is_some());
        assert!(lookup_type("button").is_some());
        assert!(lookup_type("Player").is_none());
    }

    #[test]
    fn keyword_lookup_includes_directives() {
        assert!(lookup_keyword("component").is_some());
        assert!(lookup_keyword("#pragma").is_some());
        assert!(lookup_keyword("frobnicate").is_none());
    }

    #[test]
    fn korean_descriptions_fall_back_to_english() {
        use crate::qtn::builtins::types::{Locale, LocalizedText};
        let text = LocalizedText::new("english", "");
        assert_eq!(text.get(Locale::Ko), "english");
    }
}
