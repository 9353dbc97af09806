//! Conversion Tests - convert() across registered formats
//!
//! Uses the built-in codecs; YAML and TOML cases run only with their
//! cargo features enabled.

#[path = "helpers/mod.rs"]
mod helpers;

use formats::codecs::Json;
use formats::{FormatError, FormatRegistry, Metadata};
use helpers::format_fixtures::{INVALID_JSON, NESTED_DOCUMENT, SIMPLE_OBJECT, join_lines, split_lines};
use rstest::rstest;
use serde_json::json;

fn json_registry() -> FormatRegistry {
    let registry = FormatRegistry::new();
    registry.register_codec(Json);
    registry
}

#[rstest]
#[case(SIMPLE_OBJECT)]
#[case(NESTED_DOCUMENT)]
#[case("[1, 2.5, \"three\", null, true]")]
#[case("\"just a string\"")]
fn test_json_identity_conversion(#[case] raw: &str) {
    let registry = json_registry();

    let converted = registry.convert("json", "json", raw).unwrap();
    assert_eq!(
        registry.parse("json", &converted).unwrap(),
        registry.parse("json", raw).unwrap()
    );
}

#[rstest]
#[case(json!({"a": 1, "b": [true, null]}))]
#[case(json!([]))]
#[case(json!("text"))]
#[case(json!(-3.5))]
fn test_json_roundtrip_law(#[case] value: serde_json::Value) {
    let registry = json_registry();
    let text = registry.compose("json", &value).unwrap();
    assert_eq!(registry.parse("json", &text).unwrap(), value);
}

#[test]
fn test_convert_invalid_input_is_attributed() {
    let registry = json_registry();

    match registry.convert("json", "json", INVALID_JSON).unwrap_err() {
        FormatError::ConversionFailed {
            from,
            to,
            kind,
            source,
            ..
        } => {
            assert_eq!(from, "json");
            assert_eq!(to, "json");
            assert!(kind.contains("serde_json"), "unexpected kind {kind}");
            match *source {
                FormatError::Codec(err) => assert!(err.is::<serde_json::Error>()),
                other => panic!("Expected Codec source, got {other:?}"),
            }
        }
        other => panic!("Expected ConversionFailed, got {other:?}"),
    }
}

#[test]
fn test_direct_parse_error_is_not_wrapped() {
    let registry = json_registry();

    match registry.parse("json", INVALID_JSON).unwrap_err() {
        FormatError::Codec(err) => {
            let inner = err.downcast_ref::<serde_json::Error>().unwrap();
            assert!(inner.is_eof());
        }
        other => panic!("Expected Codec error, got {other:?}"),
    }
}

#[test]
fn test_convert_between_custom_and_builtin() {
    let registry = json_registry();
    registry.register("lines", split_lines, join_lines, Metadata::new());

    assert_eq!(registry.convert("lines", "json", "a\nb").unwrap(), r#"["a","b"]"#);
    assert_eq!(registry.convert("json", "lines", r#"["x", "y"]"#).unwrap(), "x\ny");
}

#[test]
fn test_convert_to_unregistered_target() {
    let registry = json_registry();

    let err = registry.convert("json", "xml", SIMPLE_OBJECT).unwrap_err();
    assert_eq!(err.kind(), "ConversionFailed");
    assert!(err.to_string().contains("no composer registered for format 'xml'"));
}

#[cfg(feature = "yaml")]
mod yaml {
    use super::*;
    use formats::codecs::Yaml;

    #[test]
    fn test_json_to_yaml_and_back() {
        let registry = json_registry();
        registry.register_codec(Yaml);

        let yaml = registry.convert("json", "yaml", NESTED_DOCUMENT).unwrap();
        let json = registry.convert("yaml", "json", &yaml).unwrap();
        assert_eq!(
            registry.parse("json", &json).unwrap(),
            registry.parse("json", NESTED_DOCUMENT).unwrap()
        );
    }
}

#[cfg(feature = "toml")]
mod toml {
    use super::*;
    use formats::codecs::Toml;

    #[test]
    fn test_json_to_toml() {
        let registry = json_registry();
        registry.register_codec(Toml);

        let text = registry.convert("json", "toml", SIMPLE_OBJECT).unwrap();
        assert_eq!(
            registry.parse("toml", &text).unwrap(),
            json!({"name": "Vehicle", "wheels": 4})
        );
    }
}
