use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_discretia"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn stdout_json(out: &Output) -> serde_json::Value {
    assert!(
        out.status.success(),
        "command should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON")
}

#[test]
fn hyper_default_sliders() {
    let v = stdout_json(&run(&["hyper"]));
    assert_eq!(v["schema_version"], "discretia_bar_v0");
    assert_eq!(v["distribution"], "hypergeometric");
    assert_eq!(v["parameters"]["population"], 52);
    assert_eq!(v["parameters"]["successes"], 13);
    assert_eq!(v["parameters"]["draws"], 5);

    let labels: Vec<&str> =
        v["labels"].as_array().unwrap().iter().map(|x| x.as_str().unwrap()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);

    let probabilities = v["probabilities"].as_array().unwrap();
    let total: f64 = probabilities.iter().map(|p| p.as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9, "pmf should sum to 1, got {total}");

    assert_eq!(v["summary"]["mean"].as_f64().unwrap(), 1.25);
    assert_eq!(v["summary"]["expected_successes"], 1);
    assert_eq!(v["y_max"].as_f64().unwrap(), 1.0);
}

#[test]
fn hyper_caps_successes_and_draws_at_population() {
    let v = stdout_json(&run(&["hyper", "-N", "4", "-K", "10", "-n", "2"]));
    assert_eq!(v["parameters"]["successes"], 4);
    assert_eq!(v["parameters"]["draws"], 2);
    assert_eq!(v["labels"], serde_json::json!(["2"]));
    assert_eq!(v["probabilities"][0].as_f64().unwrap(), 1.0);
}

#[test]
fn hyper_writes_output_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("hyper.json");
    let svg_path = dir.path().join("charts").join("hyper.svg");

    let out = run(&[
        "hyper",
        "--population",
        "10",
        "--successes",
        "5",
        "--draws",
        "3",
        "-o",
        json_path.to_string_lossy().as_ref(),
        "--svg",
        svg_path.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "hyper should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(out.stdout.is_empty(), "artifact goes to the output file, not stdout");

    let v: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(v["labels"].as_array().unwrap().len(), 4);

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Hypergeometric Distribution (N = 10, K = 5, n = 3)"));
}

#[test]
fn hyper_rejects_unknown_theme() {
    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("hyper.svg");
    let out = run(&["hyper", "--svg", svg_path.to_string_lossy().as_ref(), "--theme", "neon"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown theme"));
    assert!(!svg_path.exists());
}
