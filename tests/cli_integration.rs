use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn mscmap(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mscmap").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("MSCMAP_CONFIG")
        .env_remove("MSCMAP_DATA_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_show_json_with_sample_data() {
    let workdir = TempDir::new().unwrap();
    let output = mscmap(&workdir)
        .args(["show", "--format", "json", "--minimum", "0", "--data-dir"])
        .arg(sample_data_dir())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["params"]["source"], "zb1");
    assert_eq!(value["params"]["sort"], "mr1");

    let table = value["table"].as_array().unwrap();
    assert!(!table.is_empty());
    let scores: Vec<f64> = table
        .iter()
        .map(|row| row["fmr1"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let labels = value["heatmap"]["display_labels"].as_array().unwrap();
    assert_eq!(labels.len(), table.len());
    assert!(labels.iter().all(|l| l.as_str().unwrap().ends_with('*')));
}

#[test]
fn test_show_terminal_writes_to_file() {
    let workdir = TempDir::new().unwrap();
    let out = workdir.path().join("report.md");

    mscmap(&workdir)
        .args(["show", "--format", "markdown", "--top", "3", "--data-dir"])
        .arg(sample_data_dir())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(out).unwrap();
    assert!(report.starts_with("# MSC Classification Comparison"));
    assert!(report.contains("## Confusion Matrix"));
}

#[test]
fn test_invalid_sort_key_exits_with_user_error() {
    let workdir = TempDir::new().unwrap();
    let output = mscmap(&workdir)
        .args(["show", "--sort", "bogus", "--data-dir"])
        .arg(sample_data_dir())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E003]"), "stderr: {stderr}");
}

#[test]
fn test_invalid_minimum_exits_with_user_error() {
    let workdir = TempDir::new().unwrap();
    mscmap(&workdir)
        .args(["show", "--minimum", "lots"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_data_is_a_failure() {
    let workdir = TempDir::new().unwrap();
    mscmap(&workdir).args(["show"]).assert().code(1);
}

#[test]
fn test_init_then_show_uses_config() {
    let workdir = TempDir::new().unwrap();
    mscmap(&workdir).args(["init"]).assert().success();
    assert!(workdir.path().join(".mscmap.toml").exists());

    mscmap(&workdir).args(["init"]).assert().failure();
    mscmap(&workdir).args(["init", "--force"]).assert().success();

    let data = workdir.path().join("data");
    fs::create_dir(&data).unwrap();
    for name in ["zbByMsc.csv", "mrByMsc.csv", "counts.csv"] {
        fs::copy(sample_data_dir().join(name), data.join(name)).unwrap();
    }

    let output = mscmap(&workdir)
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["params"]["minimum"], 200);
}

#[test]
fn test_methods_lists_all_twelve() {
    let workdir = TempDir::new().unwrap();
    let output = mscmap(&workdir).arg("methods").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in [
        "zb1", "mr1", "titer", "refs", "titls", "texts", "ref1", "uT1", "uM1", "tiref", "teref",
        "tite",
    ] {
        assert!(stdout.contains(&format!("f{key}")), "missing {key}");
    }
}
