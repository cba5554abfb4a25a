use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_config_path_uses_env() {
    let project = TestProject::new();

    project
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(project.config_path().display().to_string()));
}

#[test]
fn test_config_init_writes_example() {
    let project = TestProject::new();

    project
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let content = std::fs::read_to_string(project.config_path()).unwrap();
    assert!(content.contains("[mappings]"));
    assert!(content.contains("cpu_count"));
}

#[test]
fn test_config_init_does_not_overwrite_without_force() {
    let project = TestProject::new();
    project.write_config("strict = true\n");

    project
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(std::fs::read_to_string(project.config_path()).unwrap(), "strict = true\n");

    project.command().args(["config", "init", "--force"]).assert().success();
    assert!(std::fs::read_to_string(project.config_path()).unwrap().contains("[mappings]"));
}

#[test]
fn test_config_show_defaults_when_missing() {
    let project = TestProject::new();

    project
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("strict = false"))
        .stdout(predicate::str::contains("No custom mappings configured."));
}

#[test]
fn test_config_show_lists_mappings() {
    let project = TestProject::new();
    project.write_config("strict = true\n[mappings]\nMachineCPU = \"vcpu\"\n");

    project
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("strict = true"))
        .stdout(predicate::str::contains("[mappings]"))
        .stdout(predicate::str::contains("MachineCPU = \"vcpu\""))
        .stdout(predicate::str::contains("No custom mappings configured.").not());
}
