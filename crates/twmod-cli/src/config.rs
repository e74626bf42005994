//! Configuration file support for twmod
//!
//! Loads `.twmod.toml` from current directory or parent directories.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use twmod_rules::RewriteOptions;

pub const CONFIG_FILE: &str = ".twmod.toml";

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rewrite: RewriteConfig,
    pub paths: PathsConfig,
    pub mapping: MappingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Rename map file, relative to the config file
    pub map: Option<PathBuf>,
    /// File extensions to rewrite
    pub extensions: Vec<String>,
    /// Attribute holding an element's class list
    pub class_attribute: String,
    /// Attribute holding per-slot class overrides
    pub classes_attribute: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        let options = RewriteOptions::default();
        Self {
            map: None,
            extensions: vec!["jsx".to_string(), "tsx".to_string()],
            class_attribute: options.class_attribute,
            classes_attribute: options.classes_attribute,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Glob patterns to exclude from processing
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Utility prefixes to generate class renames for
    pub prefixes: Option<Vec<String>>,
}

impl Config {
    /// Load config from `.twmod.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// The configured map file, resolved against the config file's directory
    pub fn map_path(&self, config_path: Option<&Path>) -> Option<PathBuf> {
        let map = self.rewrite.map.as_ref()?;
        match config_path.and_then(Path::parent) {
            Some(dir) if map.is_relative() => Some(dir.join(map)),
            _ => Some(map.clone()),
        }
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            class_attribute: self.rewrite.class_attribute.clone(),
            classes_attribute: self.rewrite.classes_attribute.clone(),
        }
    }

    /// Whether the file has one of the configured extensions
    pub fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.rewrite.extensions.iter().any(|e| e == ext))
    }

    /// Check if a path should be excluded based on config patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.paths.exclude {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
                if let Some(file_name) = path.file_name() {
                    if glob_pattern.matches(&file_name.to_string_lossy()) {
                        return true;
                    }
                }
            }

            // Directory patterns match anywhere in the path
            if pattern.ends_with('/') {
                let dir_pattern = pattern.trim_end_matches('/');
                if path_str.contains(&format!("/{}/", dir_pattern))
                    || path_str.starts_with(&format!("{}/", dir_pattern))
                {
                    return true;
                }
            }
        }

        false
    }
}
