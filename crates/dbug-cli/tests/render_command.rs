//! `dbug render` end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Command isolated from the user's config.
    #[allow(deprecated)]
    fn dbug(&self) -> Command {
        let mut cmd = Command::cargo_bin("dbug").unwrap();
        cmd.env("DBUG_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_render_json_fragment() {
    let ws = Workspace::new();
    let input = ws.write("user.json", r#"{"name": "Ada", "tags": ["x", "y"]}"#);

    ws.dbug()
        .args(["render", "--fragment", &input])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<details class=\"dbug-block\" open data-kind=\"mixed\">"))
        .stdout(predicate::str::contains("array: 0"))
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("2 item(s)"))
        .stdout(predicate::str::contains("data-dbug").not());
}

#[test]
fn test_render_stdin_text_is_escaped() {
    let ws = Workspace::new();

    ws.dbug()
        .args(["render", "--fragment", "--title", "snippet"])
        .write_stdin("<b>hi</b> & \"bye\"")
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;hi&lt;/b&gt; &amp; &quot;bye&quot;"))
        .stdout(predicate::str::contains("<b>hi</b>").not())
        .stdout(predicate::str::contains("string: 0 \u{2014} snippet"));
}

#[test]
fn test_render_full_page_with_dock() {
    let ws = Workspace::new();
    let input = ws.write("n.json", "null");

    let output = ws.dbug().args(["render", &input]).output().unwrap();
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    let dock = html.find("<div class=\"dbug-dock\" data-dbug>").unwrap();
    let dump = html.find("NULL: 0").unwrap();
    let close = html.find("</body>").unwrap();
    assert!(dock < dump && dump < close);
}

#[test]
fn test_render_sequence_counts_up_per_file() {
    let ws = Workspace::new();
    let first = ws.write("a.json", "1");
    let second = ws.write("b.json", "true");

    ws.dbug()
        .args(["render", "--fragment", "--sequence", "3", &first, &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("int: 3"))
        .stdout(predicate::str::contains("boolean: 4"));
}

#[test]
fn test_render_xml_from_file() {
    let ws = Workspace::new();
    let input = ws.write("doc.xml", "<a><b>1</b></a>");

    ws.dbug()
        .args(["render", "--fragment", "--kind", "xml", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-kind=\"xml\""))
        .stdout(predicate::str::contains("&lt;b&gt;1&lt;/b&gt;"));
}

#[test]
fn test_render_forced_array() {
    let ws = Workspace::new();

    ws.dbug()
        .args(["render", "--fragment", "--kind", "array"])
        .write_stdin("hi")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 item(s)"))
        .stdout(predicate::str::contains("hi"));
}

#[test]
fn test_render_max_depth() {
    let ws = Workspace::new();
    let input = ws.write("deep.json", r#"{"a": {"b": {"c": 1}}}"#);

    ws.dbug()
        .args(["render", "--fragment", "--max-depth", "1", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max depth reached"));
}

#[test]
fn test_render_uses_config_defaults() {
    let ws = Workspace::new();
    let config = ws.write("custom.toml", "[defaults]\ncollapsed = true\n");
    let input = ws.write("v.json", "[1]");

    ws.dbug()
        .args(["render", "--fragment", "--config", &config, &input])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<details class=\"dbug-block\" data-kind=\"mixed\">"));
}

#[test]
fn test_render_missing_file_fails() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("missing.json");

    ws.dbug()
        .args(["render", &missing.to_string_lossy()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read file"));
}

#[test]
fn test_render_missing_xml_file_fails() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("missing.xml");

    ws.dbug()
        .args(["render", "--kind", "xml", &missing.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: File not found"));
}

#[test]
fn test_render_invalid_config_fails() {
    let ws = Workspace::new();
    let config = ws.write("bad.toml", "only_debug = \"maybe\"");

    ws.dbug()
        .args(["render", "--fragment", "--config", &config])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
