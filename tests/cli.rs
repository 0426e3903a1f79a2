//! End-to-end tests of the `wochenplan` binary.
//!
//! Every test runs inside its own temporary working directory so no stray
//! `wochenplan.toml` is picked up. Generation always uses `--force` because
//! the day gate depends on the real calendar.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn wochenplan(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wochenplan"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("failed to run wochenplan")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with(prefix))
        .collect();
    names.sort();
    names
}

#[test]
fn gen_config_prints_stock_file() {
    let tmp = TempDir::new().unwrap();
    let out = wochenplan(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("output_dir = \"wochenplaene\""));
    assert!(text.contains("[index]"));
}

#[test]
fn forced_generate_writes_plan_aliases_and_index() {
    let tmp = TempDir::new().unwrap();
    let out = wochenplan(tmp.path(), &["--dir", "out", "generate", "--force"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with("Wochenplaene gespeichert unter "));

    let dir = tmp.path().join("out");
    assert_eq!(files_with_prefix(&dir, "wochenplan_").len(), 2);
    assert_eq!(files_with_prefix(&dir, "kw").len(), 4);
    assert!(dir.join("index.html").is_file());
}

#[test]
fn config_file_sets_output_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wochenplan.toml"), "output_dir = \"plaene\"\n").unwrap();
    let out = wochenplan(tmp.path(), &["generate", "--force"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(tmp.path().join("plaene/index.html").is_file());
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wochenplan.toml"), "quick_max_minutes = 0\n").unwrap();
    let out = wochenplan(tmp.path(), &["generate", "--force"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("quick_max_minutes"));
}

#[test]
fn refresh_generates_once_per_week() {
    let tmp = TempDir::new().unwrap();

    let first = wochenplan(tmp.path(), &["--dir", "out", "refresh"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert!(stdout(&first).contains("Wochenplaene gespeichert unter"));

    let second = wochenplan(tmp.path(), &["--dir", "out", "refresh"]);
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert!(stdout(&second).starts_with("Plan bereits vorhanden: KW "));

    let texts: Vec<String> = files_with_prefix(&tmp.path().join("out"), "wochenplan_")
        .into_iter()
        .filter(|n| n.ends_with(".txt"))
        .collect();
    assert_eq!(texts.len(), 1);
}

#[test]
fn refresh_next_week_generates_another_plan() {
    let tmp = TempDir::new().unwrap();
    assert!(wochenplan(tmp.path(), &["--dir", "out", "refresh"]).status.success());
    let out = wochenplan(tmp.path(), &["--dir", "out", "refresh", "--next-week"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(files_with_prefix(&tmp.path().join("out"), "wochenplan_").len(), 4);
}

#[test]
fn render_rebuilds_edited_plan() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("out");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("wochenplan_2024-05-10.txt"),
        "Mein Plan\n\nGericht 1: Linsensuppe\nZubereitungszeit: 20 Minuten\n",
    )
    .unwrap();

    let out = wochenplan(tmp.path(), &["render", "out"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let page = fs::read_to_string(dir.join("wochenplan_2024-05-10.html")).unwrap();
    assert!(page.contains("<h2>Gericht 1: Linsensuppe</h2>"));
    assert_eq!(page, fs::read_to_string(dir.join("kw19-2024.html")).unwrap());
    assert!(dir.join("index.html").is_file());
}

#[test]
fn render_without_index() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wochenplan_2024-05-10.txt"), "Plan\n").unwrap();
    let out = wochenplan(tmp.path(), &["render", ".", "--no-index"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(!tmp.path().join("index.html").exists());
}

#[test]
fn render_empty_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let out = wochenplan(tmp.path(), &["render", "."]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Keine Wochenplaene gefunden"));
}

#[test]
fn render_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let out = wochenplan(tmp.path(), &["render", "nirgends"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("ist kein gueltiges Verzeichnis"));
}

#[test]
fn index_command_on_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let out = wochenplan(tmp.path(), &["--dir", "out", "index"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let html = fs::read_to_string(tmp.path().join("out/index.html")).unwrap();
    assert!(html.contains("Noch keine Wochenplaene verfuegbar."));
}
