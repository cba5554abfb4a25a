//! Expansion and re-flattening of `resource_configuration` records.

use serde_json::{Value, json};
use vracfg::test_utils::fixtures::{machine_resource_data, resource_configuration_entries};
use vracfg::{
    FlattenOptions, Flattener, PropertyMapper, ResourceConfiguration, VracfgError,
    expand_resource_configuration, flatten_resource_configurations,
    try_flatten_resource_configurations,
};

fn entries(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => panic!("Expected array, got {other}"),
    }
}

#[test]
fn test_expand_then_flatten() {
    let configs = expand_resource_configuration(&entries(resource_configuration_entries())).unwrap();
    let flattened = flatten_resource_configurations(&configs, &PropertyMapper::builtin());

    assert_eq!(flattened.len(), 2);

    assert_eq!(flattened[0].name, "vSphere_Machine_1");
    assert_eq!(flattened[0].configuration["cpu"], "2");
    assert_eq!(flattened[0].configuration["memory"], "4096");
    assert_eq!(flattened[0].configuration["Tags.owner"], "platform");

    assert_eq!(flattened[1].name, "vSphere_Machine_2");
    assert_eq!(flattened[1].configuration["cpu"], "4");
    assert_eq!(flattened[1].configuration["DISK_VOLUMES.0.DISK_CAPACITY"], "100");
}

#[test]
fn test_component_overrides_record_name() {
    let Value::Object(data) = machine_resource_data() else {
        panic!("fixture is not an object");
    };
    let configs = vec![ResourceConfiguration::new("placeholder", data)];

    let flattened = flatten_resource_configurations(&configs, &PropertyMapper::builtin());

    assert_eq!(flattened[0].name, "vSphere_Machine_1");
    assert!(!flattened[0].configuration.contains_key("Component"));
}

#[test]
fn test_flatten_does_not_restore_nesting() {
    let configs = expand_resource_configuration(&[json!({
        "name": "web",
        "configuration": { "Tags": { "owner": "platform" } }
    })])
    .unwrap();

    let flattened = flatten_resource_configurations(&configs, &PropertyMapper::new());
    let rendered = flattened[0].to_value();

    assert_eq!(rendered, json!({ "name": "web", "configuration": { "Tags.owner": "platform" } }));

    // Feeding the flattened record back in keeps the dotted keys as-is.
    let again = expand_resource_configuration(&[rendered]).unwrap();
    assert_eq!(again[0].configuration["Tags.owner"], json!("platform"));
    assert!(again[0].configuration.get("Tags").is_none());
}

#[test]
fn test_expand_rejects_non_map_configuration() {
    let err = expand_resource_configuration(&[
        json!({ "name": "ok", "configuration": {} }),
        json!({ "name": "web", "configuration": ["cpu", 2] }),
    ])
    .unwrap_err();

    match err {
        VracfgError::InvalidResourceConfiguration {
            index,
            ..
        } => assert_eq!(index, 1),
        other => panic!("Expected InvalidResourceConfiguration, got {other:?}"),
    }
}

#[test]
fn test_expand_rejects_non_map_entry() {
    let err = expand_resource_configuration(&[json!("web")]).unwrap_err();
    assert!(err.to_string().starts_with("Invalid resource configuration at index 0"));
}

#[test]
fn test_try_flatten_strict_propagates_error() {
    let configs = expand_resource_configuration(&[
        json!({ "name": "web", "configuration": { "cpu": 2 } }),
        json!({ "name": "db", "configuration": { "owner": null } }),
    ])
    .unwrap();
    let mapper = PropertyMapper::new();

    let lenient = try_flatten_resource_configurations(&configs, &Flattener::new(&mapper)).unwrap();
    assert_eq!(lenient[1].configuration["owner"], "");

    let strict = Flattener::new(&mapper).with_options(FlattenOptions::strict());
    let err = try_flatten_resource_configurations(&configs, &strict).unwrap_err();
    assert!(matches!(err, VracfgError::UnsupportedValue { .. }));
}

#[test]
fn test_empty_input_gives_empty_output() {
    let configs = expand_resource_configuration(&[]).unwrap();
    assert!(flatten_resource_configurations(&configs, &PropertyMapper::builtin()).is_empty());
}
