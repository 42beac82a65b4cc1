use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn relnotes(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("relnotes").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RELNOTES_SOURCE")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn tags_reads_config_json_in_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.json", r#"{"tags":["fix","feat"],"authors":["Alice"]}"#);

    relnotes(&dir)
        .arg("tags")
        .assert()
        .success()
        .stdout("fix\nfeat\n");
}

#[test]
fn authors_missing_field_is_empty_list() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.json", r#"{"tags":["fix"]}"#);

    relnotes(&dir)
        .args(["--format", "json", "authors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn missing_config_json_fails() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir)
        .arg("tags")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("config.json"));
}

#[test]
fn invalid_config_json_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.json", "{ not json");

    relnotes(&dir).arg("authors").assert().failure().code(3);
}

#[test]
fn source_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    write(&dir, "site.json", r#"{"authors":["Bob","Alice"]}"#);

    relnotes(&dir)
        .args(["--source", "site.json", "authors"])
        .assert()
        .success()
        .stdout("Bob\nAlice\n");
}

#[test]
fn settings_file_sets_location() {
    let dir = TempDir::new().unwrap();
    write(&dir, "relnotes.toml", "[source]\nlocation = \"meta.json\"\n");
    write(&dir, "meta.json", r#"{"tags":["docs"]}"#);

    relnotes(&dir).arg("tags").assert().success().stdout("docs\n");
}

#[test]
fn settings_location_is_relative_to_settings_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "relnotes.toml", "[source]\nlocation = \"meta.json\"\n");
    write(&dir, "meta.json", r#"{"tags":["docs"]}"#);
    std::fs::create_dir_all(dir.path().join("sub")).unwrap();

    relnotes(&dir)
        .current_dir(dir.path().join("sub"))
        .arg("tags")
        .assert()
        .success()
        .stdout("docs\n");
}

#[test]
fn source_flag_stays_relative_to_working_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "relnotes.toml", "[source]\nlocation = \"meta.json\"\n");
    write(&dir, "meta.json", r#"{"tags":["docs"]}"#);
    let sub = dir.path().join("sub");
    std::fs::create_dir_all(&sub).unwrap();
    std::fs::write(sub.join("local.json"), r#"{"tags":["fix"]}"#).unwrap();

    relnotes(&dir)
        .current_dir(&sub)
        .args(["--source", "local.json", "tags"])
        .assert()
        .success()
        .stdout("fix\n");
}

#[test]
fn null_config_json_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.json", "null");

    relnotes(&dir)
        .arg("tags")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("is null"));
}

#[cfg(unix)]
#[test]
fn read_failure_reports_cause_once() {
    let dir = TempDir::new().unwrap();

    let output = relnotes(&dir).arg("authors").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config.json"));
    assert_eq!(stderr.matches("os error 2").count(), 1);
}

#[test]
fn render_html() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "notes.json",
        r#"[{"version":"1.0","description":"Initial","changes":[{"tag":"feat","description":"Add login"}],"author":"Alice"}]"#,
    );

    relnotes(&dir)
        .args(["render", "notes.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Version 1.0</h2>"))
        .stdout(predicate::str::contains("<li>feat Add login</li>"))
        .stdout(predicate::str::contains("<strong>Author:</strong> Alice"));
}

#[test]
fn render_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "notes.yaml",
        "version: '2.0'\ndescription: Big\nauthor: Carol\nchanges:\n  - tag: fix\n    description: Crash\n",
    );

    relnotes(&dir)
        .args(["-q", "render", "notes.yaml", "--as", "markdown", "-o", "out.md"])
        .assert()
        .success();

    let rendered = std::fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert!(rendered.contains("## Version 2.0"));
    assert!(rendered.contains("- **fix** Crash"));
}

#[test]
fn render_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "notes.json",
        r#"{"version":"1.0","description":"d","author":"a"}"#,
    );

    relnotes(&dir)
        .args(["render", "notes.json", "--as", "pdf"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn init_writes_settings_once() {
    let dir = TempDir::new().unwrap();

    relnotes(&dir).arg("init").assert().success();
    assert!(dir.path().join("relnotes.toml").exists());

    relnotes(&dir).arg("init").assert().failure().code(2);
    relnotes(&dir).args(["init", "--force"]).assert().success();
}
