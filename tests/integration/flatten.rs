use predicates::prelude::*;
use serde_json::json;
use vracfg::test_utils::fixtures::{machine_resource_data, resource_configuration_entries};

use crate::common::{TestProject, stdout_json};

#[test]
fn test_flatten_data_map_from_file() {
    let project = TestProject::new();
    let input = project.write_file("resource.json", &machine_resource_data().to_string());

    let output = project.command().arg("flatten").arg(&input).output().unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["component"], json!("vSphere_Machine_1"));
    assert_eq!(value["configuration"]["cpu"], json!("2"));
    assert_eq!(value["configuration"]["memory"], json!("4096"));
    assert_eq!(
        value["configuration"]["NETWORK_LIST.0.NETWORK_NAME"],
        json!("dvPortGroup-wdc-sdm-vm-1521")
    );
    assert_eq!(value["configuration"]["Expire"], json!(""));
    assert!(value["configuration"].get("Component").is_none());
}

#[test]
fn test_flatten_from_stdin() {
    let project = TestProject::new();

    let output = project
        .command()
        .arg("flatten")
        .write_stdin(r#"{"MachineCPU": 4, "Tags": {"env": "prod"}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        stdout_json(&output),
        json!({ "component": null, "configuration": { "cpu": "4", "Tags.env": "prod" } })
    );
}

#[test]
fn test_flatten_yaml_input_and_output() {
    let project = TestProject::new();
    let input = project.write_file(
        "resource.yaml",
        "Component: web\nMachineMemory: 2048\nDISK_VOLUMES:\n  - classId: disk\n    data:\n      DISK_CAPACITY: 20\n",
    );

    project
        .command()
        .args(["flatten", "--format", "yaml"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("component: web"))
        .stdout(predicate::str::contains("DISK_VOLUMES.0.DISK_CAPACITY: '20'"))
        .stdout(predicate::str::contains("memory: '2048'"))
        .stdout(predicate::str::contains("classId").not());
}

#[test]
fn test_flatten_record_list() {
    let project = TestProject::new();
    let input = project.write_file("records.json", &resource_configuration_entries().to_string());

    let output = project.command().arg("flatten").arg(&input).output().unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value[0]["name"], json!("vSphere_Machine_1"));
    assert_eq!(value[0]["configuration"]["Tags.owner"], json!("platform"));
    assert_eq!(value[1]["name"], json!("vSphere_Machine_2"));
    assert_eq!(value[1]["configuration"]["DISK_VOLUMES.0.DISK_CAPACITY"], json!("100"));
}

#[test]
fn test_flatten_strict_fails_on_null() {
    let project = TestProject::new();
    let input = project.write_file("resource.json", &machine_resource_data().to_string());

    project
        .command()
        .args(["flatten", "--strict"])
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported null value at 'Expire'"));
}

#[test]
fn test_flatten_strict_from_config() {
    let project = TestProject::new();
    project.write_config("strict = true\n");

    project
        .command()
        .arg("flatten")
        .write_stdin(r#"{"owner": null}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported null value at 'owner'"));
}

#[test]
fn test_flatten_no_builtin_mappings_keeps_raw_names() {
    let project = TestProject::new();

    let output = project
        .command()
        .args(["flatten", "--no-builtin-mappings"])
        .write_stdin(r#"{"MachineCPU": 4}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(stdout_json(&output)["configuration"], json!({ "MachineCPU": "4" }));
}

#[test]
fn test_flatten_rejects_scalar_document() {
    let project = TestProject::new();

    project
        .command()
        .arg("flatten")
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected mapping or sequence"));
}

#[test]
fn test_flatten_missing_file() {
    let project = TestProject::new();

    project
        .command()
        .args(["flatten", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn test_flatten_invalid_json_file() {
    let project = TestProject::new();
    let input = project.write_file("broken.json", "{ \"MachineCPU\": ");

    project
        .command()
        .arg("flatten")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input from"));
}

#[test]
fn test_flatten_strict_accepts_null_component() {
    let project = TestProject::new();

    let output = project
        .command()
        .args(["flatten", "--strict"])
        .write_stdin(r#"{"Component": null, "MachineCPU": 2}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        stdout_json(&output),
        json!({ "component": null, "configuration": { "cpu": "2" } })
    );
}
