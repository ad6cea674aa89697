use typebridge_core::{Attribute, AttributeValue, MemberSymbol, NamedType, TypeKind, TypeRef};

use super::member::{MemberDeclaration, RenameAnnotation};

fn string(s: &str) -> AttributeValue {
    AttributeValue::String(s.to_string())
}

fn data_member(name: AttributeValue) -> Attribute {
    Attribute::new("DataMemberAttribute").named("Name", name)
}

fn json_property(name: AttributeValue) -> Attribute {
    Attribute::new("JsonProperty").positional(name)
}

fn prop(ty: TypeRef) -> MemberSymbol {
    MemberSymbol::new("Prop", ty)
}

#[test]
fn declared_name_without_annotations() {
    let member = MemberDeclaration::from_symbol(&prop(TypeRef::builtin("int")));
    assert_eq!(member.resolve_name(), "Prop");
    assert!(member.rename_overrides.is_empty());
}

#[test]
fn json_property_renames() {
    let symbol = prop(TypeRef::builtin("int")).with_attribute(json_property(string("foo")));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "foo");
}

#[test]
fn data_member_renames() {
    let symbol = prop(TypeRef::builtin("int")).with_attribute(data_member(string("foo")));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "foo");
}

#[test]
fn data_member_beats_json_property() {
    // Attribute order on the member does not matter.
    let symbol = prop(TypeRef::builtin("int"))
        .with_attribute(json_property(string("light")))
        .with_attribute(data_member(string("contract")));
    let member = MemberDeclaration::from_symbol(&symbol);

    assert_eq!(member.resolve_name(), "contract");
    assert_eq!(
        member.rename_overrides,
        [
            (RenameAnnotation::DataMember, "contract".to_string()),
            (RenameAnnotation::JsonProperty, "light".to_string()),
        ]
    );
}

#[test]
fn non_string_arguments_fall_through() {
    let symbol = prop(TypeRef::builtin("int"))
        .with_attribute(data_member(AttributeValue::Int(3)))
        .with_attribute(json_property(string("light")));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "light");

    let symbol = prop(TypeRef::builtin("int")).with_attribute(json_property(AttributeValue::Null));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "Prop");
}

#[test]
fn missing_arguments_fall_through() {
    let symbol = prop(TypeRef::builtin("int"))
        .with_attribute(Attribute::new("DataMember").named("Order", AttributeValue::Int(1)))
        .with_attribute(Attribute::new("JsonProperty"));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "Prop");
}

#[test]
fn only_first_attribute_of_a_kind_counts() {
    let symbol = prop(TypeRef::builtin("int"))
        .with_attribute(json_property(AttributeValue::Bool(true)))
        .with_attribute(json_property(string("second")));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "Prop");
}

#[test]
fn unrelated_attributes_are_ignored() {
    let symbol = prop(TypeRef::builtin("int"))
        .with_attribute(Attribute::new("XmlElement").positional(string("xml")));
    assert_eq!(MemberDeclaration::from_symbol(&symbol).resolve_name(), "Prop");
}

#[test]
fn optional_iff_reference_type() {
    let cases = [
        (TypeRef::builtin("string"), true),
        (TypeRef::builtin("object"), true),
        (NamedType::source("Test", TypeKind::Class).into(), true),
        (NamedType::source("ITest", TypeKind::Interface).into(), true),
        (TypeRef::array(TypeRef::builtin("int")), true),
        (TypeRef::builtin("int"), false),
        (TypeRef::builtin("bool"), false),
        (TypeRef::builtin("decimal"), false),
        (NamedType::source("Point", TypeKind::Struct).into(), false),
        (NamedType::source("Color", TypeKind::Enum).into(), false),
    ];
    for (ty, optional) in cases {
        let member = MemberDeclaration::from_symbol(&prop(ty.clone()));
        assert_eq!(member.is_optional(), optional, "{ty:?}");
    }
}
