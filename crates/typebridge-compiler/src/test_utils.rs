use typebridge_core::{Catalog, Declaration, JsonSymbolProvider, SymbolProvider, TypeDeclaration};

use crate::{Config, Processor};

/// Load one symbol dump against the base catalog.
pub fn load(json: &str) -> JsonSymbolProvider {
    let catalog = Catalog::base().expect("base catalog must parse");
    JsonSymbolProvider::from_json(&[("input.json", json)], &catalog)
        .expect("symbol dump must resolve")
}

/// Emit one symbol dump with `config`.
pub fn emit_with(json: &str, config: Config) -> String {
    Processor::new(load(json), config)
        .emit_to_string()
        .expect("emission must succeed")
}

/// Emit one symbol dump in module (export) mode.
pub fn emit(json: &str) -> String {
    emit_with(json, Config::new())
}

/// Emit one symbol dump in declaration mode.
pub fn emit_declarations(json: &str) -> String {
    emit_with(json, Config::new().declaration_mode(true))
}

/// The type declaration named `name` in the first unit.
pub fn type_decl(provider: &JsonSymbolProvider, name: &str) -> TypeDeclaration {
    provider.units()[0]
        .declarations
        .iter()
        .find_map(|d| match d {
            Declaration::Type(t) if t.name == name => Some(t.clone()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no type declaration named '{name}'"))
}

/// A class `Test` with one public property `Prop` of the given dump type.
pub fn single_property(kind: &str, ty: &str) -> String {
    format!(
        r#"{{ "declarations": [{{ "kind": "{kind}", "name": "Test",
            "members": [{{ "name": "Prop", "type": {ty} }}] }}] }}"#
    )
}
