use serde_json::json;

use crate::common::{TestProject, stdout_json};

#[test]
fn test_mappings_builtin_table() {
    let project = TestProject::new();

    let output = project.command().arg("mappings").output().unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["MachineCPU"], json!("cpu"));
    assert_eq!(value["MachineMemory"], json!("memory"));
    assert_eq!(value["IPAddress"], json!("ip_address"));
}

#[test]
fn test_mappings_config_overrides_builtin() {
    let project = TestProject::new();
    project.write_config("[mappings]\nMachineCPU = \"vcpu\"\n\"VirtualMachine.CPU.Count\" = \"cpu_count\"\n");

    let output = project.command().arg("mappings").output().unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["MachineCPU"], json!("vcpu"));
    assert_eq!(value["VirtualMachine.CPU.Count"], json!("cpu_count"));
    assert_eq!(value["MachineMemory"], json!("memory"));
}

#[test]
fn test_mappings_without_builtin() {
    let project = TestProject::new();
    project.write_config("use_builtin_mappings = false\n[mappings]\nFoo = \"foo\"\n");

    let output = project.command().arg("mappings").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "Foo": "foo" }));

    let output = project.command().args(["mappings", "--no-builtin-mappings"]).output().unwrap();
    assert_eq!(stdout_json(&output), json!({ "Foo": "foo" }));
}

#[test]
fn test_mappings_explicit_config_flag_wins_over_env() {
    let project = TestProject::new();
    project.write_config("[mappings]\nMachineCPU = \"from_env\"\n");
    let explicit = project.write_file("explicit.toml", "[mappings]\nMachineCPU = \"from_flag\"\n");

    let output = project.command().arg("--config").arg(&explicit).arg("mappings").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["MachineCPU"], json!("from_flag"));
}

#[test]
fn test_mappings_invalid_config() {
    let project = TestProject::new();
    project.write_config("strict = \"yes\"\n");

    project
        .command()
        .arg("mappings")
        .assert()
        .failure()
        .stderr(predicates::str::contains("config.toml"));
}
