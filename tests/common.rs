use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A gradecase command isolated to `dir`: suite file and config both live there
pub fn gradecase(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gradecase");
    cmd.current_dir(dir)
        .env("GRADECASE_CONFIG_DIR", dir.join("config"))
        .env_remove("GRADECASE_FILE")
        .env_remove("GRADECASE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `config/config.toml` under `dir`
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

#[allow(dead_code)]
pub fn read_payload(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Weights of a wire payload in id order
#[allow(dead_code)]
pub fn payload_weights(payload: &Value) -> Vec<u64> {
    let count = payload["count"].as_u64().unwrap();
    (1..=count)
        .map(|i| payload[i.to_string().as_str()]["value"].as_u64().unwrap())
        .collect()
}

/// Weights stored in `tests.json` under `dir`
#[allow(dead_code)]
pub fn suite_weights(dir: &Path) -> Vec<u64> {
    payload_weights(&read_payload(&dir.join("tests.json")))
}

/// Initialize a suite of `count` blank tests in `dir`
#[allow(dead_code)]
pub fn init_suite(dir: &Path, count: usize) {
    gradecase(dir)
        .args(["init", "--count", &count.to_string()])
        .assert()
        .success();
}
