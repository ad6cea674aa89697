use super::JsonSymbolProvider;
use super::catalog::Catalog;
use super::error::SymbolError;
use crate::declarations::Declaration;
use crate::provider::SymbolProvider;
use crate::types::TypeRef;

fn load_with(catalog: &str, json: &str) -> Result<JsonSymbolProvider, SymbolError> {
    let mut layered = Catalog::base()?;
    layered.extend(Catalog::from_json("refs.json", catalog)?);
    JsonSymbolProvider::from_json(&[("unit.json", json)], &layered)
}

#[test]
fn base_catalog_parses() {
    let catalog = Catalog::base().unwrap();

    assert!(catalog.contains("IEnumerable", 0));
    assert!(catalog.contains("IEnumerable", 1));
    assert!(catalog.contains("Dictionary", 2));
    assert!(!catalog.contains("Dictionary", 1));
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn later_layers_replace_entries() {
    let mut catalog = Catalog::base().unwrap();
    let before = catalog.len();
    let overlay = Catalog::from_json(
        "overlay.json",
        r#"{ "types": [
            { "name": "List", "kind": "class", "type_parameters": ["T"] },
            { "name": "Money", "kind": "struct" }
        ] }"#,
    )
    .unwrap();

    catalog.extend(overlay);

    assert_eq!(catalog.len(), before + 1);
    assert!(catalog.get("List", 1).unwrap().interfaces.is_empty());
}

#[test]
fn duplicate_entries_in_one_file_are_rejected() {
    let err = Catalog::from_json(
        "dup.json",
        r#"{ "types": [{ "name": "Money" }, { "name": "Money" }] }"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SymbolError::DuplicateCatalogEntry { ref name, arity: 0, .. } if name == "Money"
    ));
}

#[test]
fn unknown_special_tag_is_rejected() {
    let err = Catalog::from_json(
        "bad.json",
        r#"{ "types": [{ "name": "Bag", "type_parameters": ["T"], "special": "bag" }] }"#,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "unknown special type tag 'bag' on 'Bag'");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn cyclic_catalog_entries_are_rejected() {
    let err = load_with(
        r#"{ "types": [
            { "name": "Foo", "kind": "interface", "interfaces": ["Bar"] },
            { "name": "Bar", "kind": "interface", "interfaces": ["Foo"] }
        ] }"#,
        r#"{ "declarations": [{ "kind": "class", "name": "A",
            "members": [{ "name": "X", "type": "Foo" }] }] }"#,
    )
    .unwrap_err();

    assert!(matches!(err, SymbolError::CyclicInheritance { ref name } if name == "Foo"));
}

#[test]
fn self_reference_through_arguments_stops_shallow() {
    let provider = load_with(
        r#"{ "types": [
            { "name": "IOrdered", "kind": "interface", "type_parameters": ["T"] },
            { "name": "Money", "kind": "struct",
              "interfaces": [{ "name": "IOrdered", "args": ["Money"] }] }
        ] }"#,
        r#"{ "declarations": [{ "kind": "class", "name": "A",
            "members": [{ "name": "Price", "type": "Money" }] }] }"#,
    )
    .unwrap();

    let Declaration::Type(decl) = &provider.units()[0].declarations[0] else {
        panic!("expected a type");
    };
    let TypeRef::Named(money) = &decl.members[0].ty else {
        panic!("expected a named type");
    };
    let TypeRef::Named(ordered) = &money.interfaces[0] else {
        panic!("expected a named interface");
    };
    let TypeRef::Named(inner) = &ordered.type_args[0] else {
        panic!("expected a named argument");
    };
    assert_eq!(inner.name, "Money");
    assert!(inner.interfaces.is_empty());
}
