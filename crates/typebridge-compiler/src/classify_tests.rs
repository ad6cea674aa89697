use typebridge_core::{NamedType, SpecialType, SymbolProvider, TypeKind, TypeRef};

use crate::classify::{IndexKey, PrimitiveKind, ResolvedType, classify};
use crate::test_utils::{load, single_property};

/// Render the type of `Test.Prop` written as dump JSON.
fn render(ty: &str) -> String {
    let provider = load(&single_property("class", ty));
    let typebridge_core::Declaration::Type(decl) = &provider.units()[0].declarations[0] else {
        panic!("expected a type declaration");
    };
    classify(&decl.members[0].ty).render()
}

const NUMERIC: &[&str] = &[
    "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float", "double",
    "decimal", "char", "Int32", "UInt64", "Single",
];

const COLLECTIONS: &[&str] = &[
    "IEnumerable",
    "ICollection",
    "IList",
    "IReadOnlyCollection",
    "IReadOnlyList",
    "ISet",
    "List",
    "HashSet",
    "Collection",
    "ReadOnlyCollection",
];

#[test]
fn numeric_family_is_number() {
    for ty in NUMERIC {
        assert_eq!(render(&format!("\"{ty}\"")), "number", "{ty}");
    }
}

#[test]
fn primitives() {
    assert_eq!(render(r#""bool""#), "boolean");
    assert_eq!(render(r#""string""#), "string");
    assert_eq!(render(r#""String""#), "string");
    assert_eq!(render(r#""object""#), "any");
    assert_eq!(
        classify(&TypeRef::builtin("char")),
        ResolvedType::Primitive(PrimitiveKind::Char)
    );
}

#[test]
fn collection_shapes_append_brackets() {
    let elements = [("int", "number"), ("string", "string"), ("bool", "boolean")];
    for shape in COLLECTIONS {
        for (element, expected) in elements {
            let ty = format!(r#"{{ "name": "{shape}", "args": ["{element}"] }}"#);
            assert_eq!(render(&ty), format!("{expected}[]"), "{shape}<{element}>");
        }
    }
}

#[test]
fn arrays_append_brackets() {
    assert_eq!(render(r#"{ "array": "int" }"#), "number[]");
    assert_eq!(render(r#"{ "array": { "array": "string" } }"#), "string[][]");
}

#[test]
fn nested_collections() {
    let ty = r#"{ "name": "List", "args": [{ "name": "IReadOnlyList", "args": [{ "array": "double" }] }] }"#;
    assert_eq!(render(ty), "number[][][]");
}

#[test]
fn legacy_enumerable_is_any_array() {
    assert_eq!(render(r#""IEnumerable""#), "any[]");
}

#[test]
fn dictionary_interface_renders_inline_index_signature() {
    assert_eq!(
        render(r#"{ "name": "IDictionary", "args": ["string", "int"] }"#),
        "{ [key: string]: number; }"
    );
    assert_eq!(
        render(r#"{ "name": "IDictionary", "args": ["long", { "array": "bool" }] }"#),
        "{ [key: number]: boolean[]; }"
    );
}

#[test]
fn dictionary_class_maps_through_its_interfaces() {
    assert_eq!(
        render(r#"{ "name": "Dictionary", "args": ["int", "string"] }"#),
        "{ [key: number]: string; }"
    );
}

#[test]
fn dictionary_with_unsupported_key_falls_through() {
    // Falls through to ICollection<KeyValuePair<Guid, int>>.
    assert_eq!(
        render(r#"{ "name": "IDictionary", "args": ["Guid", "int"] }"#),
        "any[]"
    );
}

#[test]
fn unknown_external_types_are_any() {
    assert_eq!(render(r#""Guid""#), "any");
    assert_eq!(render(r#""Widget""#), "any");
    assert_eq!(render(r#"{ "name": "Nullable", "args": ["int"] }"#), "any");
}

#[test]
fn external_type_takes_first_interface_with_a_shape() {
    let ty = r#"{ "name": "Bag", "interfaces": [
        "IDisposable",
        { "name": "IEnumerable", "args": ["string"] },
        { "name": "IList", "args": ["int"] }
    ] }"#;
    assert_eq!(render(ty), "string[]");
}

#[test]
fn source_types_render_by_name() {
    let provider = load(
        r#"{ "declarations": [
            { "kind": "struct", "name": "Point" },
            { "kind": "class", "name": "Test", "members": [
                { "name": "Origin", "type": "Point" },
                { "name": "Path", "type": { "name": "List", "args": ["Point"] } }
            ] }
        ] }"#,
    );
    let decl = crate::test_utils::type_decl(&provider, "Test");

    assert_eq!(
        classify(&decl.members[0].ty),
        ResolvedType::Named {
            name: "Point".to_string(),
            has_source: true
        }
    );
    assert_eq!(classify(&decl.members[1].ty).render(), "Point[]");
}

#[test]
fn generic_collection_without_argument_falls_back() {
    let odd = NamedType::external("IList", TypeKind::Interface).with_special(SpecialType::GenericList);
    assert_eq!(classify(&odd.into()), ResolvedType::Fallback);
}

#[test]
fn index_keys() {
    assert_eq!(IndexKey::of(&TypeRef::builtin("string")), Some(IndexKey::String));
    assert_eq!(IndexKey::of(&TypeRef::builtin("char")), Some(IndexKey::Number));
    assert_eq!(IndexKey::of(&TypeRef::builtin("bool")), None);
    assert_eq!(IndexKey::of(&TypeRef::array(TypeRef::builtin("int"))), None);
}
