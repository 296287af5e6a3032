use constjson_core::{get, get_or, path, Array, Document, JsonError, Object, PathKey, Scalar, Value};

const SCENARIO: &str = r#"{"a":1,"b":[10,20,"x"]}"#;
const NESTED: &str = r#"{"m":{"n":[1,{"k":"v"}]}}"#;
const SAMPLE: &str = include_str!("fixtures/sample.json");

fn int(n: i64) -> Value<'static> {
    Value::Scalar(Scalar::Integer(n))
}

fn float(x: f64) -> Value<'static> {
    Value::Scalar(Scalar::Float(x))
}

fn string(s: &str) -> Value<'_> {
    Value::Scalar(Scalar::String(s))
}

// ============================================================================
// Get: scenarios
// ============================================================================

#[test]
fn get_scalar_from_object() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(doc.get(&path!["a"]).unwrap(), int(1));
}

#[test]
fn get_through_array() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(doc.get(&path!["b", 1]).unwrap(), int(20));
    assert_eq!(doc.get(&path!["b", 2]).unwrap(), string("x"));
}

#[test]
fn get_mixed_deep_path() {
    let doc = Document::parse(NESTED).unwrap();
    assert_eq!(doc.get(&path!["m", "n", 1, "k"]).unwrap(), string("v"));
    assert_eq!(doc.get(&path!["m", "n", 0]).unwrap(), int(1));
}

#[test]
fn get_with_empty_path_returns_root() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(doc.get(&path![]).unwrap(), doc.root());
}

#[test]
fn get_is_deterministic() {
    let doc = Document::parse(NESTED).unwrap();
    let first = doc.get(&path!["m", "n", 1, "k"]).unwrap();
    for _ in 0..5 {
        assert_eq!(doc.get(&path!["m", "n", 1, "k"]).unwrap(), first);
    }
}

#[test]
fn get_composes_across_levels() {
    let doc = Document::parse(NESTED).unwrap();
    let inner = doc.get(&path!["m", "n"]).unwrap();
    assert_eq!(get(inner, &path![1, "k"]).unwrap(), string("v"));
}

// ============================================================================
// Get: whitespace-heavy sample document
// ============================================================================

#[test]
fn sample_top_level_scalars() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get(&path!["Key"]).unwrap(), float(123.2));
    assert!(doc.get(&path!["Nullable"]).unwrap().is_null());
    assert_eq!(doc.get(&path!["Boolean"]).unwrap(), Value::from(true));
    assert_eq!(doc.get(&path!["hi"]).unwrap(), string("asdasd"));
}

#[test]
fn sample_list_elements() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get(&path!["list", 0]).unwrap(), int(1));
    assert_eq!(doc.get(&path!["list", 1]).unwrap(), float(-2.2));
    assert_eq!(doc.get(&path!["list", 2]).unwrap(), string("3"));
    assert_eq!(doc.get(&path!["list", 3]).unwrap(), int(4));
    assert_eq!(doc.get(&path!["list", 4, 0]).unwrap(), int(-1));
    assert_eq!(doc.get(&path!["list", 5, "in"]).unwrap(), string("val"));
}

#[test]
fn sample_nested_maps() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get(&path!["map", "inner"]).unwrap(), string("inner value"));
    assert_eq!(doc.get(&path!["map", "list1", 2]).unwrap(), string("hello"));
    assert_eq!(
        doc.get(&path!["map", "map1", "list2", 1, "in"]).unwrap(),
        string("val")
    );
    assert_eq!(
        doc.get(&path!["map", "map1", "list2", 2]).unwrap(),
        string("there it is")
    );
}

// ============================================================================
// Get: failures
// ============================================================================

#[test]
fn get_missing_key_fails() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get(&path!["c"]).unwrap_err(),
        JsonError::KeyNotFound {
            key: "c".to_string()
        }
    );
}

#[test]
fn get_index_past_end_fails() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get(&path!["b", 3]).unwrap_err(),
        JsonError::IndexOutOfRange { index: 3 }
    );
}

#[test]
fn get_missing_nested_key_reports_that_key() {
    let doc = Document::parse(NESTED).unwrap();
    assert_eq!(
        doc.get(&path!["m", "zz", "k"]).unwrap_err(),
        JsonError::KeyNotFound {
            key: "zz".to_string()
        }
    );
}

#[test]
fn index_on_scalar_is_type_mismatch() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get(&path!["a", 0]).unwrap_err(),
        JsonError::TypeMismatch {
            expected: "array",
            found: "integer"
        }
    );
}

#[test]
fn key_on_array_is_type_mismatch() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get(&path!["b", "x"]).unwrap_err(),
        JsonError::TypeMismatch {
            expected: "object",
            found: "array"
        }
    );
}

// ============================================================================
// GetOr
// ============================================================================

#[test]
fn get_or_missing_key_returns_default() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get_or(&path!["c"], Value::from("fallback")).unwrap(),
        string("fallback")
    );
}

#[test]
fn get_or_index_past_end_returns_default() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(
        doc.get_or(&path!["list", 100], Value::from("Default list")).unwrap(),
        string("Default list")
    );
}

#[test]
fn get_or_missing_middle_key_returns_default() {
    let doc = Document::parse(NESTED).unwrap();
    assert_eq!(doc.get_or(&path!["m", "zz", "k"], int(7)).unwrap(), int(7));
}

#[test]
fn get_or_found_value_ignores_default() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(
        doc.get_or(&path!["b", 2], int(0)).unwrap(),
        string("x"),
        "found value and default may differ in kind"
    );
}

#[test]
fn get_or_still_reports_type_mismatch() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert!(matches!(
        doc.get_or(&path!["a", "x"], Value::NULL),
        Err(JsonError::TypeMismatch { .. })
    ));
}

#[test]
fn get_or_still_reports_invalid_literal() {
    let doc = Document::parse(r#"{"a": nope}"#).unwrap();
    assert!(matches!(
        doc.get_or(&path!["a"], Value::NULL),
        Err(JsonError::InvalidLiteral { .. })
    ));
}

#[test]
fn free_functions_match_document_methods() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(get(doc.root(), &path!["b", 0]).unwrap(), int(10));
    assert_eq!(get_or(doc.root(), &path!["b", 9], int(-1)).unwrap(), int(-1));
}

// ============================================================================
// Typed lookups
// ============================================================================

#[test]
fn get_as_converts_scalars() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get_as::<f64>(&path!["Key"]).unwrap(), 123.2);
    assert!(doc.get_as::<bool>(&path!["Boolean"]).unwrap());
    assert_eq!(doc.get_as::<&str>(&path!["hi"]).unwrap(), "asdasd");
    assert_eq!(doc.get_as::<i64>(&path!["list", 3]).unwrap(), 4);
}

#[test]
fn get_as_widens_integers_to_f64() {
    let doc = Document::parse(SCENARIO).unwrap();
    assert_eq!(doc.get_as::<f64>(&path!["a"]).unwrap(), 1.0);
}

#[test]
fn get_as_option_maps_null_to_none() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get_as::<Option<i64>>(&path!["Nullable"]).unwrap(), None);
    assert_eq!(doc.get_as::<Option<i64>>(&path!["list", 0]).unwrap(), Some(1));
}

#[test]
fn get_as_containers() {
    let doc = Document::parse(SAMPLE).unwrap();
    let map = doc.get_as::<Object>(&path!["map"]).unwrap();
    assert_eq!(map.len().unwrap(), 3);
    let list = doc.get_as::<Array>(&path!["list"]).unwrap();
    assert_eq!(list.len().unwrap(), 6);
}

#[test]
fn get_as_wrong_kind_is_type_mismatch() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(
        doc.get_as::<i64>(&path!["hi"]).unwrap_err(),
        JsonError::TypeMismatch {
            expected: "integer",
            found: "string"
        }
    );
}

#[test]
fn get_as_or_returns_typed_default_when_missing() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(
        doc.get_as_or(&path!["NotExist"], "Default value").unwrap(),
        "Default value"
    );
    assert_eq!(doc.get_as_or(&path!["list", 100], 5i64).unwrap(), 5);
}

#[test]
fn get_as_or_rejects_present_value_of_other_kind() {
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(
        doc.get_as_or(&path!["hi"], 0i64).unwrap_err(),
        JsonError::TypeMismatch {
            expected: "integer",
            found: "string"
        }
    );
}

// ============================================================================
// PathKey
// ============================================================================

#[test]
fn path_macro_builds_keys_and_indices() {
    assert_eq!(path!["b", 1], [PathKey::Key("b"), PathKey::Index(1)]);
    assert_eq!(path![0, 0], [PathKey::Index(0), PathKey::Index(0)]);
    assert!(path![].is_empty());
}

#[test]
fn path_macro_accepts_owned_strings() {
    let key = String::from("hi");
    let doc = Document::parse(SAMPLE).unwrap();
    assert_eq!(doc.get(&path![&key]).unwrap(), string("asdasd"));
}

#[test]
fn path_built_at_runtime() {
    let doc = Document::parse(SAMPLE).unwrap();
    let segments = ["map", "map1", "most"];
    let path: Vec<PathKey> = segments.iter().map(|s| PathKey::from(*s)).collect();
    assert_eq!(doc.get(&path).unwrap(), string("inner"));
}

#[test]
fn path_key_display() {
    assert_eq!(PathKey::Key("a b").to_string(), "\"a b\"");
    assert_eq!(PathKey::Index(3).to_string(), "[3]");
}
