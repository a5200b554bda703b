//! End-to-end CLI tests spawning the built binary.

mod common;

use std::path::Path;
use std::process::Command;

use docuframe::scene::SceneFile;

use common::{scenario_record, template};

fn docuframe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docuframe"))
}

fn write_template(dir: &Path) -> std::path::PathBuf {
    let (doc, _) = template();
    let file = SceneFile::from_document(&doc);
    let path = dir.join("template.json");
    std::fs::write(&path, serde_json::to_string_pretty(&file).expect("serialize"))
        .expect("write template");
    path
}

#[test]
fn render_writes_filled_scene() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template_path = write_template(dir.path());
    let record_path = dir.path().join("record.json");
    std::fs::write(&record_path, scenario_record()).expect("write record");
    let out_path = dir.path().join("rendered.json");

    let status = docuframe()
        .args(["render", "--template"])
        .arg(&template_path)
        .arg("--doc")
        .arg(&record_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .expect("spawn");
    assert!(status.success());

    let rendered = std::fs::read_to_string(&out_path).expect("read output");
    let file: SceneFile = serde_json::from_str(&rendered).expect("parse output");
    let doc = file.into_document().expect("load output");
    let root = doc.root().clone();
    assert_eq!(common::text_of(&doc, &root, "componentName"), "Button");
    assert_eq!(common::text_of(&doc, &root, "libraryName"), "N/A");
}

#[test]
fn render_rejects_invalid_record_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template_path = write_template(dir.path());
    let record_path = dir.path().join("record.json");
    std::fs::write(&record_path, "{invalid").expect("write record");

    let status = docuframe()
        .args(["render", "--template"])
        .arg(&template_path)
        .arg("--doc")
        .arg(&record_path)
        .status()
        .expect("spawn");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn render_fails_on_missing_template_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("record.json");
    std::fs::write(&record_path, scenario_record()).expect("write record");

    let status = docuframe()
        .args(["render", "--template"])
        .arg(dir.path().join("absent.json"))
        .arg("--doc")
        .arg(&record_path)
        .status()
        .expect("spawn");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn validate_accepts_good_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("record.json");
    std::fs::write(&record_path, scenario_record()).expect("write record");

    let output = docuframe()
        .args(["validate", "--doc"])
        .arg(&record_path)
        .output()
        .expect("spawn");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok"), "{stdout}");
}

#[test]
fn validate_rejects_unnamed_property() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("record.json");
    std::fs::write(
        &record_path,
        r#"{"header": {"componentName": "Button"}, "properties": [{"type": "boolean"}]}"#,
    )
    .expect("write record");

    let output = docuframe()
        .args(["validate", "--doc"])
        .arg(&record_path)
        .output()
        .expect("spawn");
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("property name is empty"), "{stdout}");
}

#[test]
fn validate_rejects_unknown_property_kind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("record.json");
    std::fs::write(
        &record_path,
        r#"{"properties": [{"name": "tone", "type": "color"}]}"#,
    )
    .expect("write record");

    let status = docuframe()
        .args(["validate", "--doc"])
        .arg(&record_path)
        .status()
        .expect("spawn");
    assert_eq!(status.code(), Some(2));
}
