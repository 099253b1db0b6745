use assert_cmd::Command;
use serde_json::Value;
use std::io::Write;

fn cli() -> Command {
    Command::cargo_bin("terraform-provider-k8s").unwrap()
}

#[test]
fn list_json() {
    let output = cli().args(&["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row.get("name").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 14);
    assert!(names.contains(&"k8s_gateway_solo_io_gateway_v1"));
    assert!(names.contains(&"k8s_gateway_solo_io_virtual_host_option_v1_manifest"));
}

#[test]
fn schema_of_unknown_data_source_fails() {
    cli()
        .args(&["schema", "k8s_gateway_solo_io_upstream_v1"])
        .assert()
        .failure();
}

#[test]
fn provider_schema() {
    let output = cli().args(&["schema"]).output().unwrap();
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["attributes"]["offline"]["type"], "bool");
    assert_eq!(schema["attributes"]["context"]["mode"], "optional");
}

#[test]
fn manifest_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
metadata:
  name: petstore
  namespace: default
spec:
  virtual_host:
    domains:
      - petstore.example.com
"#
    )
    .unwrap();
    let output = cli()
        .args(&[
            "manifest",
            "k8s_gateway_solo_io_virtual_service_v1_manifest",
            "--config",
            file.path().to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let manifest: Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["kind"], "VirtualService");
    assert_eq!(
        manifest["spec"]["virtualHost"]["domains"][0],
        "petstore.example.com"
    );
}

#[test]
fn read_offline_fails() {
    cli()
        .args(&[
            "--offline",
            "read",
            "k8s_gateway_solo_io_virtual_service_v1",
            "--name",
            "petstore",
        ])
        .assert()
        .failure();
}
