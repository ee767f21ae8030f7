//! TOML configuration for the search.
//!
//! Every field has a usable default, so a missing or partial file still
//! yields a runnable setup. When the file
//! does not exist, a fully commented default is written next to it so
//! the knobs are discoverable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Total move proposals per search run.
    #[serde(default = "AnnealConfig::default_steps")]
    pub steps: usize,
    #[serde(default = "AnnealConfig::default_t_start")]
    pub t_start: f64,
    #[serde(default = "AnnealConfig::default_t_end")]
    pub t_end: f64,
    /// Progress report interval in steps.
    #[serde(default = "AnnealConfig::default_log_every")]
    pub log_every: usize,
}

impl AnnealConfig {
    fn default_steps() -> usize {
        500_000
    }
    fn default_t_start() -> f64 {
        1e5
    }
    fn default_t_end() -> f64 {
        1.0
    }
    fn default_log_every() -> usize {
        1000
    }
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            steps: Self::default_steps(),
            t_start: Self::default_t_start(),
            t_end: Self::default_t_end(),
            log_every: Self::default_log_every(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Independent annealing runs; the lowest-energy result wins.
    #[serde(default = "SearchConfig::default_restarts")]
    pub restarts: usize,
    #[serde(default = "SearchConfig::default_seed")]
    pub seed: u64,
}

impl SearchConfig {
    fn default_restarts() -> usize {
        1
    }
    fn default_seed() -> u64 {
        0
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            restarts: Self::default_restarts(),
            seed: Self::default_seed(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub anneal: AnnealConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                        commented.push_str(line);
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }
}
