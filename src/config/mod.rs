use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".depscanrc.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("backend"), PathBuf::from("frontend")]
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec![
        ".js".to_string(),
        ".jsx".to_string(),
        ".ts".to_string(),
        ".tsx".to_string(),
        ".mjs".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Loads `.depscanrc.json` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    pub fn add_exclude_dir(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.exclude_dirs.contains(&name) {
            self.exclude_dirs.push(name);
        }
    }

    /// Accepts `ts` or `.ts`.
    pub fn add_extension(&mut self, ext: &str) {
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
        if !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
    }

    /// Roots joined onto `base` unless already absolute, in configured order.
    pub fn resolved_roots(&self, base: &Path) -> Vec<PathBuf> {
        self.roots
            .iter()
            .map(|r| if r.is_absolute() { r.clone() } else { base.join(r) })
            .collect()
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }

    pub fn is_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_with_dot = format!(".{}", ext);
                self.extensions.contains(&ext_with_dot)
            })
            .unwrap_or(false)
    }
}
