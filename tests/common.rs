#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("caretally")
}

/// Unique path inside the system temp dir, any stale file removed.
fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_caretally.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Settings file path that does not exist, so commands run on defaults.
pub fn default_config(name: &str) -> String {
    temp_path(name, "conf")
}

pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(name, ext)
}

/// Write the standard attendance fixture and return its path.
///
/// Care minutes per row: 김민준 240, 이서연 210 (1h outing), 박지호 40,
/// 최수아 210 (serial-number times, 30-minute outing).
pub fn write_fixture_csv(name: &str) -> String {
    let path = temp_path(&format!("{name}_fixture"), "csv");
    let content = "\
학생명,반,요일,등원시간,하원시간,외출시간
김민준,1반,\"월,수,금\",13:00,17:00,
이서연,1반,\"월,수\",오후 1시,오후 5시30분,14:00~15:00
박지호,2반,월,13:00,13:40,
최수아,2반,\"월,화\",0.5833333333333334,0.75,30분
";
    fs::write(&path, content).expect("write fixture csv");
    path
}

/// Write a settings file with the given YAML body and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, yaml).expect("write config");
    path
}
