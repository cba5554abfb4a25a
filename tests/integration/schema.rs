use predicates::prelude::*;
use serde_json::json;

use crate::common::{TestProject, stdout_json};

#[test]
fn test_schema_json() {
    let project = TestProject::new();

    let output = project.command().arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema = &stdout_json(&output)["resource_configuration"];
    assert_eq!(schema["type"], json!("set"));
    assert_eq!(schema["optional"], json!(true));
    assert_eq!(schema["computed"], json!(true));
    assert_eq!(schema["required"], json!(false));
}

#[test]
fn test_schema_yaml() {
    project_yaml_contains("resource_configuration:");
    project_yaml_contains("type: set");
}

fn project_yaml_contains(needle: &str) {
    TestProject::new()
        .command()
        .args(["schema", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(needle));
}
