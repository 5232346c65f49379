use crate::engine::availability::TimeFilter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub system: SystemConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SystemConfig {
    pub assets_dir: String,
    pub data_dir: String,
    pub debug: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    pub time_filter: TimeFilter,
    pub show_only_missing: bool,
    pub its_raining: bool,
    pub refresh_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig {
                assets_dir: "assets".to_string(),
                data_dir: "data".to_string(),
                debug: false,
            },
            display: DisplayConfig {
                time_filter: TimeFilter::RightNow,
                show_only_missing: false,
                its_raining: false,
                refresh_rate: 0.3,
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
