use serde::{Deserialize, Serialize};
use serde_flat::{
    flatten, flatten_with_options, from_flat_map, get_by_path, to_flat_map, unflatten,
    unflatten_with_options, value, FlattenOptions, Map, UnflattenOptions, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Database {
    host: String,
    port: u16,
    replicas: Vec<Replica>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Replica {
    host: String,
    weight: f64,
    readonly: bool,
}

fn flat(value: Value) -> Map {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn keys(map: &Map) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[test]
fn test_end_to_end_example() {
    let nested = value!({ "x": { "y": 2 }, "z": 4 });

    let flattened = flatten(&nested);
    assert_eq!(flattened, flat(value!({ "x.y": 2, "z": 4 })));

    let rebuilt = unflatten(&flat(value!({ "x.y": 2, "z": 4 })));
    assert_eq!(rebuilt, nested);
}

#[test]
fn test_clean_flat_round_trip() {
    let clean = flat(value!({
        "app.name": "demo",
        "app.ports.0": 80,
        "app.ports.1": 443,
        "log.level": "info",
        "log.targets.0.kind": "stdout",
        "empty": {}
    }));

    assert_eq!(flatten(&unflatten(&clean)), clean);
}

#[test]
fn test_clean_round_trip_with_index_gaps() {
    let clean = flat(value!({
        "hosts.2": "c",
        "hosts.5.name": "f",
        "slots.1000000": "last",
        "7": "seven"
    }));

    let rebuilt = unflatten(&clean);
    assert_eq!(get_by_path(&rebuilt, "hosts.2"), Some(value!("c")));
    assert_eq!(get_by_path(&rebuilt, "slots.1000000"), Some(value!("last")));
    assert_eq!(flatten(&rebuilt), clean);
}

#[test]
fn test_clean_round_trip_with_custom_delimiter() {
    let clean = flat(value!({ "a::b": 1, "a::c::0": true }));

    let unflatten_options = UnflattenOptions::new().with_delimiter("::");
    let flatten_options = FlattenOptions::new().with_delimiter("::");
    let rebuilt = unflatten_with_options(&clean, &unflatten_options);

    assert_eq!(rebuilt, value!({ "a": { "b": 1, "c": [true] } }));
    assert_eq!(flatten_with_options(&rebuilt, &flatten_options), clean);
}

#[test]
fn test_depth_bound_keeps_substructure() {
    let nested = value!({ "a": { "b": { "c": { "d": 1 } } }, "e": [[1, 2], 3] });
    let options = FlattenOptions::new().with_max_depth(2);
    let flattened = flatten_with_options(&nested, &options);

    assert_eq!(keys(&flattened), vec!["a.b", "e.0", "e.1"]);
    assert_eq!(flattened.get("a.b"), Some(&value!({ "c": { "d": 1 } })));
    assert_eq!(flattened.get("e.0"), Some(&value!([1, 2])));
}

#[test]
fn test_depth_one_is_top_level_only() {
    let nested = value!({ "a": { "b": 1 }, "c": 2 });
    let options = FlattenOptions::new().with_max_depth(1);
    assert_eq!(
        flatten_with_options(&nested, &options),
        flat(value!({ "a": { "b": 1 }, "c": 2 }))
    );
}

#[test]
fn test_array_safety() {
    let nested = value!({ "a": [1, 2, 3] });

    let safe = flatten_with_options(&nested, &FlattenOptions::new().with_array_safe(true));
    assert_eq!(safe, flat(value!({ "a": [1, 2, 3] })));

    let unsafe_keys = flatten(&nested);
    assert_eq!(unsafe_keys, flat(value!({ "a.0": 1, "a.1": 2, "a.2": 3 })));
}

#[test]
fn test_array_safe_still_descends_objects_in_root_array() {
    let nested = value!([{ "tags": ["x"] }]);
    let safe = flatten_with_options(&nested, &FlattenOptions::new().with_array_safe(true));
    assert_eq!(safe, flat(value!({ "0.tags": ["x"] })));
}

#[test]
fn test_index_inference() {
    let input = flat(value!({ "0": "x", "1": "y" }));

    assert_eq!(unflatten(&input), value!(["x", "y"]));

    let options = UnflattenOptions::new().with_force_mapping(true);
    assert_eq!(
        unflatten_with_options(&input, &options),
        value!({ "0": "x", "1": "y" })
    );
}

#[test]
fn test_index_inference_orders_by_index() {
    let input = flat(value!({ "1": "y", "0": "x" }));
    assert_eq!(unflatten(&input), value!(["x", "y"]));
}

#[test]
fn test_mixed_top_level_keys_give_object() {
    let input = flat(value!({ "0": "x", "name": "y" }));
    assert_eq!(unflatten(&input), value!({ "0": "x", "name": "y" }));
}

#[test]
fn test_reserved_key_guard() {
    let input = flat(value!({ "__proto__.polluted": true, "ok": 1 }));
    let rebuilt = unflatten(&input);

    assert_eq!(rebuilt, value!({ "ok": 1 }));
    assert_eq!(get_by_path(&rebuilt, "__proto__.polluted"), None);
    assert_eq!(get_by_path(&rebuilt, "polluted"), None);

    let nested = flat(value!({ "a.__proto__.b": 1, "a.c": 2 }));
    assert_eq!(unflatten(&nested), value!({ "a": { "c": 2 } }));
}

#[test]
fn test_reserved_key_produced_by_transform() {
    let input = flat(value!({ "PROTO.x": 1, "y": 2 }));
    let options = UnflattenOptions::new().with_transform_key(|segment| {
        if segment == "PROTO" {
            "__proto__".to_string()
        } else {
            segment.to_string()
        }
    });
    assert_eq!(unflatten_with_options(&input, &options), value!({ "y": 2 }));
}

#[test]
fn test_overwrite_policy() {
    let input = flat(value!({ "a": 1, "a.b": 2 }));

    assert_eq!(unflatten(&input), value!({ "a": 1 }));

    let options = UnflattenOptions::new().with_overwrite(true);
    assert_eq!(
        unflatten_with_options(&input, &options),
        value!({ "a": { "b": 2 } })
    );
}

#[test]
fn test_messy_entries_merge_with_flat_ones() {
    let input = flat(value!({
        "server": { "host": "localhost" },
        "server.port": 8080
    }));
    assert_eq!(
        unflatten(&input),
        value!({ "server": { "host": "localhost", "port": 8080 } })
    );
}

#[test]
fn test_transform_key_round_trip() {
    let nested = value!({ "Server": { "Host": "a" } });
    let flatten_options = FlattenOptions::new().with_transform_key(|k| k.to_lowercase());
    let flattened = flatten_with_options(&nested, &flatten_options);
    assert_eq!(flattened, flat(value!({ "server.host": "a" })));

    let unflatten_options = UnflattenOptions::new().with_transform_key(|k| k.to_uppercase());
    assert_eq!(
        unflatten_with_options(&flattened, &unflatten_options),
        value!({ "SERVER": { "HOST": "a" } })
    );
}

#[test]
fn test_struct_to_flat_map_and_back() {
    let db = Database {
        host: "primary".to_string(),
        port: 5432,
        replicas: vec![
            Replica {
                host: "r1".to_string(),
                weight: 0.5,
                readonly: true,
            },
            Replica {
                host: "r2".to_string(),
                weight: 1.5,
                readonly: false,
            },
        ],
    };

    let flattened = to_flat_map(&db).unwrap();
    assert_eq!(
        keys(&flattened),
        vec![
            "host",
            "port",
            "replicas.0.host",
            "replicas.0.weight",
            "replicas.0.readonly",
            "replicas.1.host",
            "replicas.1.weight",
            "replicas.1.readonly",
        ]
    );

    let back: Database = from_flat_map(&flattened).unwrap();
    assert_eq!(back, db);
}

#[test]
fn test_flat_map_from_json_fixture() {
    let fixture = r#"{
        "service.name": "billing",
        "service.endpoints.0": "/invoices",
        "service.endpoints.1": "/payments",
        "service.timeout": 2.5
    }"#;
    let input: Map = serde_json::from_str(fixture).unwrap();

    let rebuilt = unflatten(&input);
    assert_eq!(
        rebuilt,
        value!({
            "service": {
                "name": "billing",
                "endpoints": ["/invoices", "/payments"],
                "timeout": 2.5
            }
        })
    );
    assert_eq!(
        serde_json::to_value(&rebuilt).unwrap(),
        serde_json::json!({
            "service": {
                "name": "billing",
                "endpoints": ["/invoices", "/payments"],
                "timeout": 2.5
            }
        })
    );
}

#[test]
fn test_scalar_roots() {
    assert!(flatten(&value!(5)).is_empty());
    assert!(flatten(&Value::Null).is_empty());
    assert!(flatten(&value!([])).is_empty());
    assert_eq!(unflatten(&Map::new()), value!({}));
}
