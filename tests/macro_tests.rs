use serde_flat::{flatten, value, Kind, Map, Number, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    let string_val = value!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = value!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_value_macro_arrays() {
    let empty_array = value!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let mixed_array = value!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    match nested {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 3);

            if let Some(Value::Object(user)) = obj.get("user") {
                assert_eq!(user.get("id"), Some(&Value::from(123)));
                assert_eq!(user.get("name"), Some(&Value::from("Bob")));
                assert_eq!(user.get("active"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be an object");
            }

            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 2);
                assert_eq!(tags[1], Value::from("developer"));
            } else {
                panic!("Expected tags to be an array");
            }
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_value_macro_keeps_key_order() {
    let value = value!({ "b": 1, "a": 2, "c": 3 });
    let flat = flatten(&value);
    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_value_macro_expression_fallback() {
    let ports = vec![80u16, 443];
    assert_eq!(value!(ports), value!([80, 443]));

    let missing: Option<String> = None;
    assert_eq!(value!(missing), Value::Null);
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_array());
    assert_eq!(null_val.kind(), Kind::Scalar);

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));
    assert_eq!(array_val.kind(), Kind::Sequence);

    let obj_val = value!({ "key": "value" });
    assert_eq!(obj_val.as_object().map(Map::len), Some(1));
    assert_eq!(obj_val.kind(), Kind::Mapping);

    assert!(value!({}).is_empty_container());
    assert!(!obj_val.is_empty_container());

    let bytes = Value::Bytes(vec![1, 2]);
    assert_eq!(bytes.kind(), Kind::Opaque);
    assert_eq!(bytes.as_bytes(), Some(&[1u8, 2][..]));
}
