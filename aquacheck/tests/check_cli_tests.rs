use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Copy of the fixture project in a scratch directory.
struct BasinTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl BasinTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/basin");

        let dest = tmp.path().join("basin");
        Self::copy_dir(&fixture, &dest)?;

        Ok(Self {
            _tmp: tmp,
            root: dest,
        })
    }

    fn copy_dir(src: &PathBuf, dst: &PathBuf) -> std::io::Result<()> {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.content_only = true;

        fs::create_dir_all(dst)?;
        fs_extra::dir::copy(src, dst, &options)
            .map(|_| ())
            .map_err(|e| std::io::Error::other(e.to_string()))
    }

    fn aquacheck(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aquacheck"));
        cmd.current_dir(&self.root);
        cmd.env_remove("AQUACHECK_CONTEXT");
        cmd.env_remove("AQUACHECK_TARGET_PATH");
        cmd
    }

    fn report(&self) -> Result<serde_json::Value> {
        let path = self.root.join("target/check_report.json");
        let content = fs::read_to_string(&path)
            .with_context(|| format!("report not written at {:?}", path))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[test]
fn test_check_writes_report_for_all_components() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("well_stations"))
        .stdout(predicate::str::contains("W-102, W-103, W-105"));

    let report = env.report()?;
    let context = &report["contexts"][0];
    assert_eq!(context["context"], "check");

    let results = context["results"]
        .as_array()
        .context("results is not an array")?;
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["component"], "well_stations");
    assert_eq!(results[0]["total_records"], 5);
    assert_eq!(results[0]["incomplete_count"], 3);
    assert_eq!(
        results[0]["incomplete_ids"],
        serde_json::json!(["W-102", "W-103", "W-105"])
    );

    assert_eq!(results[1]["component"], "stream_gauges");
    assert_eq!(results[1]["incomplete_count"], 0);
    Ok(())
}

#[test]
fn test_strict_mode_fails_on_incomplete_records() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .args(["check", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 incomplete record(s)"));

    // The report is still written before failing
    assert_eq!(env.report()?["contexts"][0]["results"][0]["incomplete_count"], 3);
    Ok(())
}

#[test]
fn test_strict_mode_passes_on_complete_component() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .args(["check", "--strict", "-c", "stream_gauges", "--context", "gauges_only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All records complete"));

    let report = env.report()?;
    assert_eq!(report["contexts"][0]["context"], "gauges_only");
    assert_eq!(
        report["contexts"][0]["results"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );
    Ok(())
}

#[test]
fn test_env_overrides_context_and_target_path() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .env("AQUACHECK_CONTEXT", "nightly")
        .env("AQUACHECK_TARGET_PATH", "out")
        .arg("check")
        .assert()
        .success();

    let path = env.root.join("out/check_report.json");
    assert!(path.exists(), "report not written at {:?}", path);
    assert!(!env.root.join("target/check_report.json").exists());

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(report["contexts"][0]["context"], "nightly");
    assert_eq!(
        report["contexts"][0]["results"].as_array().map(Vec::len),
        Some(2)
    );
    Ok(())
}

#[test]
fn test_unknown_component_fails_the_run() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .args(["check", "-c", "reservoirs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reservoirs"));

    let results = &env.report()?["contexts"];
    assert_eq!(results.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn test_absent_record_collection_fails_the_run() -> Result<()> {
    let env = BasinTestEnv::new()?;
    fs::write(
        env.root.join("data/diversions.yaml"),
        "components:\n  - component: diversions\n    schema: [{ name: id, type: identifier }]\n",
    )?;

    env.aquacheck()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
    Ok(())
}

#[test]
fn test_components_lists_registered_tables() -> Result<()> {
    let env = BasinTestEnv::new()?;

    env.aquacheck()
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("upper_basin"))
        .stdout(predicate::str::contains("well_stations"))
        .stdout(predicate::str::contains("stream_gauges"));
    Ok(())
}

#[test]
fn test_missing_project_config_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    Command::new(assert_cmd::cargo::cargo_bin!("aquacheck"))
        .args(["check", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration file found"));
    Ok(())
}
