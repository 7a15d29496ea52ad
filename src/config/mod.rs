//! Persisted settings: working hours, class capacities, and screening
//! criteria. Loaded once per invocation and handed to the core as plain
//! values; the core never reads shared mutable state.

use crate::core::time_parse::parse_text;
use crate::errors::{AppError, AppResult};
use crate::models::{CriterionKind, CriterionOp, ScreeningCriterion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Applied to any class without an explicit capacity entry.
pub const DEFAULT_CAPACITY: i64 = 20;
/// 13:00, used when the configured bound does not parse.
pub const DEFAULT_WORK_START: i64 = 780;
/// 18:00.
pub const DEFAULT_WORK_END: i64 = 1080;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,
    #[serde(default = "default_capacity")]
    pub default_capacity: i64,
    /// Per-class capacity overrides, created lazily on first edit.
    #[serde(default)]
    pub capacities: BTreeMap<String, i64>,
    #[serde(default)]
    pub criteria: Vec<ScreeningCriterion>,
}

fn default_work_start() -> String {
    "13:00".to_string()
}
fn default_work_end() -> String {
    "18:00".to_string()
}
fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_start: default_work_start(),
            work_end: default_work_end(),
            default_capacity: DEFAULT_CAPACITY,
            capacities: BTreeMap::new(),
            criteria: vec![ScreeningCriterion {
                id: 1,
                kind: CriterionKind::AverageStayTime,
                op: CriterionOp::Less,
                value: 60,
            }],
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("caretally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".caretally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("caretally.conf")
    }

    /// Resolve the effective settings path: explicit override or standard
    /// location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load settings from file; a missing file yields the defaults so every
    /// command works before `init` has ever run.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Write a fresh settings file with defaults, returning its path.
    pub fn init_all(custom: Option<&str>) -> AppResult<PathBuf> {
        let path = Self::resolve_path(custom);
        Self::default().save(&path)?;
        Ok(path)
    }

    /// Capacity for a class, falling back to the default when unconfigured.
    pub fn class_capacity(&self, class_name: &str) -> i64 {
        self.capacities
            .get(class_name)
            .copied()
            .unwrap_or(self.default_capacity)
    }

    pub fn work_start_minutes(&self) -> i64 {
        resolve_bound(&self.work_start, DEFAULT_WORK_START)
    }

    pub fn work_end_minutes(&self) -> i64 {
        resolve_bound(&self.work_end, DEFAULT_WORK_END)
    }
}

fn resolve_bound(raw: &str, default: i64) -> i64 {
    match parse_text(raw) {
        0 => default,
        mins => mins,
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_class_gets_default_capacity() {
        let cfg = Config::default();
        assert_eq!(cfg.class_capacity("1반"), 20);
    }

    #[test]
    fn configured_capacity_wins() {
        let mut cfg = Config::default();
        cfg.capacities.insert("1반".to_string(), 25);
        assert_eq!(cfg.class_capacity("1반"), 25);
        assert_eq!(cfg.class_capacity("2반"), 20);
    }

    #[test]
    fn work_bounds_parse_or_default() {
        let cfg = Config::default();
        assert_eq!(cfg.work_start_minutes(), 780);
        assert_eq!(cfg.work_end_minutes(), 1080);

        let odd = Config {
            work_start: "뭐지".to_string(),
            work_end: "19:00".to_string(),
            ..Config::default()
        };
        assert_eq!(odd.work_start_minutes(), 780);
        assert_eq!(odd.work_end_minutes(), 1140);
    }

    #[test]
    fn yaml_round_trip_keeps_criteria() {
        let mut cfg = Config::default();
        cfg.criteria.push(ScreeningCriterion {
            id: 2,
            kind: CriterionKind::AbsenceDays,
            op: CriterionOp::Greater,
            value: 3,
        });
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(yaml.contains("absence-days"));
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.criteria.len(), 2);
        assert_eq!(back.criteria[1].kind, CriterionKind::AbsenceDays);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("work_start: \"14:00\"\n").unwrap();
        assert_eq!(cfg.work_start_minutes(), 840);
        assert_eq!(cfg.work_end_minutes(), 1080);
        assert_eq!(cfg.default_capacity, 20);
        assert!(cfg.criteria.is_empty());
    }
}
