//! Application configuration: TOML file loading and defaults.
//!
//! Resolution order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. Global `~/.config/dut/config.toml`
//! 3. Project-local `.dut.toml` in the current working directory

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Section configs ──────────────────────────────────────────────────────────

/// Tree panel settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Initial sort order: "size" or "name".
    pub sort_by: Option<String>,
}

/// Key bindings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct KeysConfig {
    /// Key that cycles the sort order.
    pub cycle_sort: Option<char>,
}

/// Color overrides for the custom scheme.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub dir_fg: Option<String>,
    pub file_fg: Option<String>,
    pub graphics_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub status_bg: Option<String>,
    pub status_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: Option<bool>,
    /// Filter directive, e.g. "info" or "disk_usage_tui=debug".
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different files can
/// be merged together.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub tree: TreeConfig,
    pub keys: KeysConfig,
    pub theme: ThemeConfig,
    pub log: LogConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

pub const DEFAULT_CYCLE_SORT_KEY: char = 's';
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Config file locator ──────────────────────────────────────────────────────

/// Candidate config file paths, lowest priority first.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dut").join("config.toml"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".dut.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            tree: TreeConfig {
                sort_by: other.tree.sort_by.clone().or(self.tree.sort_by),
            },
            keys: KeysConfig {
                cycle_sort: other.keys.cycle_sort.or(self.keys.cycle_sort),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
            log: LogConfig {
                enabled: other.log.enabled.or(self.log.enabled),
                level: other.log.level.clone().or(self.log.level),
                file: other.log.file.clone().or(self.log.file),
            },
        }
    }

    /// Load the merged configuration from every candidate file.
    pub fn load() -> AppConfig {
        Self::load_from(&candidate_paths())
    }

    fn load_from(paths: &[PathBuf]) -> AppConfig {
        paths
            .iter()
            .filter_map(|p| load_file(p))
            .fold(AppConfig::default(), |acc, file_cfg| acc.merge(&file_cfg))
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Initial sort mode: "size" or "name".
    pub fn sort_by(&self) -> &str {
        self.tree.sort_by.as_deref().unwrap_or("size")
    }

    pub fn cycle_sort_key(&self) -> char {
        self.keys.cycle_sort.unwrap_or(DEFAULT_CYCLE_SORT_KEY)
    }

    /// Theme scheme: "dark", "light", or "custom".
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }

    pub fn log_enabled(&self) -> bool {
        self.log.enabled.unwrap_or(true)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log file path; defaults to `<cache dir>/dut/dut.log`.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log
            .file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("dut").join("dut.log")))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
