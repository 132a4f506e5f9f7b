//! Values described as JSON fixtures, as a host process would hand them over.

use codelit::{ObjectStringifier, Stringifier, TypeRef, Value};

/// A value plus the static type it was observed through.
#[derive(Debug, serde::Deserialize)]
struct Observed {
    value: Value,
    #[serde(default)]
    declared: Option<TypeRef>,
}

fn render(json: &str) -> Option<String> {
    let observed: Observed = serde_json::from_str(json).expect("Failed to parse fixture");
    let stringifier: Stringifier = Stringifier::default();
    stringifier.value_to_code(&observed.value, observed.declared.as_ref())
}

#[test]
fn test_primitive_fixtures() {
    assert_eq!(
        render(r#"{"value": {"kind": "int64", "value": -5}}"#).as_deref(),
        Some("-5L")
    );
    assert_eq!(
        render(r#"{"value": {"kind": "string", "value": "a\tb"}}"#).as_deref(),
        Some("\"a\\tb\"")
    );
    assert_eq!(
        render(r#"{"value": {"kind": "decimal", "value": "-0.050"}}"#).as_deref(),
        Some("-0.050m")
    );
    assert_eq!(
        render(r#"{"value": {"kind": "float64", "value": 2.5}}"#).as_deref(),
        Some("2.5")
    );
}

#[test]
fn test_null_fixture_with_declared_type() {
    let json = r#"{
        "value": {"kind": "null"},
        "declared": {"nullable": {"primitive": "float64"}}
    }"#;
    assert_eq!(render(json).as_deref(), Some("default(double?)"));

    assert_eq!(
        render(r#"{"value": {"kind": "null"}}"#).as_deref(),
        Some("null")
    );
}

#[test]
fn test_enum_fixture() {
    let json = r#"{
        "value": {
            "kind": "enum",
            "value": {
                "ty": {
                    "ty": {"named": {"namespace": "System.IO", "name": "FileAttributes"}},
                    "is_flags": true,
                    "constants": {"ReadOnly": 1, "Hidden": 2, "System": 4}
                },
                "raw": 3
            }
        }
    }"#;
    assert_eq!(
        render(json).as_deref(),
        Some("(FileAttributes.ReadOnly | FileAttributes.Hidden)")
    );
}

#[test]
fn test_struct_fixture() {
    let json = r#"{
        "value": {
            "kind": "struct",
            "value": {
                "ty": {"named": {"name": "KeyValuePair", "args": [{"primitive": "string"}, {"primitive": "int32"}]}},
                "fields": [
                    {"name": "key", "value": {"kind": "null"}},
                    {"name": "value", "value": {"kind": "int32", "value": 0}}
                ]
            }
        }
    }"#;
    assert_eq!(
        render(json).as_deref(),
        Some("default(KeyValuePair<string, int>)")
    );
}

#[test]
fn test_unsupported_fixture() {
    let json = r#"{"value": {"kind": "unsupported", "value": {"type_name": "System.Threading.Thread"}}}"#;
    assert_eq!(render(json), None);
}

#[test]
fn test_invalid_decimal_fixture_is_rejected() {
    let json = r#"{"value": {"kind": "decimal", "value": "1e5"}}"#;
    assert!(serde_json::from_str::<Observed>(json).is_err());
}
