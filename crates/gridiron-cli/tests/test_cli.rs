use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn get_test_dir() -> PathBuf {
    let dir = PathBuf::from("target/tmp/tests");
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SAMPLE: &str = r#"
graph [
  directed 0
  node [ id 0 label "Navy" ]
  node [ id 1 label "Duke" ]
  node [ id 2 label "Rice" ]
  node [ id 3 label "Army" ]
  edge [ source 0 target 1 ]
  edge [ source 1 target 2 ]
  edge [ source 2 target 0 ]
]
"#;

#[test]
fn test_cli_stats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = get_test_dir();
    let file = dir.join("stats.gml");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("gridiron")?;
    cmd.arg("stats").arg(&file);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nodes:    4"))
        .stdout(predicate::str::contains("Edges:    3"))
        .stdout(predicate::str::contains("Directed: no"));

    fs::remove_file(file)?;
    Ok(())
}

#[test]
fn test_cli_report_largest_component() -> Result<(), Box<dyn std::error::Error>> {
    let dir = get_test_dir();
    let file = dir.join("report.gml");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("gridiron")?;
    cmd.arg("report")
        .arg(&file)
        .arg("--filter")
        .arg("largest-component")
        .arg("--top")
        .arg("3");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nodes:          3"))
        .stdout(predicate::str::contains("Transitivity:   1.0000"))
        .stdout(predicate::str::contains("Degree Centrality"))
        .stdout(predicate::str::contains("Eigenvector Centrality"))
        .stdout(predicate::str::contains("Navy"));

    fs::remove_file(file)?;
    Ok(())
}

#[test]
fn test_cli_report_warns_on_edgeless_subset() -> Result<(), Box<dyn std::error::Error>> {
    let dir = get_test_dir();
    let file = dir.join("edgeless.gml");
    fs::write(
        &file,
        "graph [\n  node [ id 0 ]\n  node [ id 1 ]\n  node [ id 2 ]\n]\n",
    )?;

    let mut cmd = Command::cargo_bin("gridiron")?;
    cmd.arg("report").arg(&file);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Assortativity:  undefined"))
        .stdout(predicate::str::contains("warning:"));

    fs::remove_file(file)?;
    Ok(())
}

#[test]
fn test_cli_render_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = get_test_dir();
    let file = dir.join("render.gml");
    let out = dir.join("render.json");
    fs::write(&file, SAMPLE)?;

    let mut cmd = Command::cargo_bin("gridiron")?;
    cmd.arg("render").arg(&file).arg("-o").arg(&out);
    cmd.assert().success();

    let json = fs::read_to_string(&out)?;
    assert!(json.contains("\"Navy\""));
    assert!(json.contains("\"directed\": false"));

    fs::remove_file(file)?;
    fs::remove_file(out)?;
    Ok(())
}

#[test]
fn test_cli_missing_dataset_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gridiron")?;
    cmd.arg("stats").arg("does-not-exist.gml");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));

    Ok(())
}
