#![cfg(feature = "json")]

use jpretty::json::from_json;
use jpretty::{Doc, Error, Node, Number, Options, encode, render_to_string};
use serde_json::json;

#[test]
fn pretty_object_layout() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"a": 1, "b": [true, "x"]}));
    let out = render_to_string(&doc, root, &Options::default())?;
    assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    \"x\"\n  ]\n}");
    Ok(())
}

#[test]
fn compact_when_indent_zero() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"a": 1, "b": [true, "x"]}));
    let options = Options {
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "{\"a\":1,\"b\":[true,\"x\"]}");
    Ok(())
}

#[test]
fn wider_indent() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"a": [1]}));
    let options = Options {
        indent: 4,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "{\n    \"a\": [\n        1\n    ]\n}");
    Ok(())
}

#[test]
fn empty_containers_stay_inline() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"obj": {}, "arr": []}));
    let out = render_to_string(&doc, root, &Options::default())?;
    assert_eq!(out, "{\n  \"obj\": {},\n  \"arr\": []\n}");
    Ok(())
}

#[test]
fn insertion_order_is_default() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"b": 1, "a": 2}));
    let out = render_to_string(&doc, root, &Options::default())?;
    assert_eq!(out, "{\n  \"b\": 1,\n  \"a\": 2\n}");
    Ok(())
}

#[test]
fn sorted_keys_mode() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!({"b": 1, "a": {"d": 3, "c": 4}}));
    let options = Options {
        sort_keys: true,
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "{\"a\":{\"c\":4,\"d\":3},\"b\":1}");
    Ok(())
}

#[test]
fn string_escaping() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!(["quote\"", "back\\slash", "line\nbreak", "\u{0001}"]));
    let options = Options {
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(
        out,
        "[\"quote\\\"\",\"back\\\\slash\",\"line\\nbreak\",\"\\u0001\"]"
    );
    Ok(())
}

#[test]
fn float_tokens_round_trip_shortest() -> Result<(), Box<dyn std::error::Error>> {
    let (doc, root) = from_json(&json!([1.5, 1.0, 0.1, -2.75]));
    let options = Options {
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "[1.5,1.0,0.1,-2.75]");
    Ok(())
}

#[test]
fn permissive_mode_emits_nonfinite_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Doc::new();
    let nan = doc.push(Node::Number(Number::F64(f64::NAN)));
    let inf = doc.push(Node::Number(Number::F64(f64::INFINITY)));
    let neg_inf = doc.push(Node::Number(Number::F64(f64::NEG_INFINITY)));
    let root = doc.push(Node::Array(vec![nan, inf, neg_inf]));
    let options = Options {
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "[NaN,Infinity,-Infinity]");
    Ok(())
}

#[test]
fn strict_mode_rejects_nonfinite() {
    let mut doc = Doc::new();
    let nan = doc.push(Node::Number(Number::F64(f64::NAN)));
    let root = doc.push(Node::Array(vec![nan]));
    let err = encode::encode_to_string(&doc, root, &Options::default(), false).unwrap_err();
    assert!(matches!(err, Error::NonFinite));
}

#[test]
fn sanitization_makes_strict_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Doc::new();
    let nan = doc.push(Node::Number(Number::F64(f64::NAN)));
    let one = doc.push(Node::Number(Number::I64(1)));
    let root = doc.push(Node::Object(vec![
        ("bad".to_string(), nan),
        ("ok".to_string(), one),
    ]));
    let options = Options {
        convert_nans: true,
        indent: 0,
        ..Options::default()
    };
    let out = render_to_string(&doc, root, &options)?;
    assert_eq!(out, "{\"bad\":\"NaN\",\"ok\":1}");
    // The result parses as strict JSON.
    serde_json::from_str::<serde_json::Value>(&out)?;
    Ok(())
}

#[test]
fn cyclic_graph_is_an_encoding_error() {
    let mut doc = Doc::new();
    let arr = doc.push(Node::Array(Vec::new()));
    doc.set(arr, Node::Array(vec![arr]));
    let err = render_to_string(&doc, arr, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Cycle));
}

#[test]
fn dangling_id_is_an_encoding_error() {
    let mut doc = Doc::new();
    let root = doc.push(Node::Array(vec![7]));
    let err = render_to_string(&doc, root, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownNode(7)));
}
