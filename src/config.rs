use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".daggerheart-tracker";
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";
pub const WINDOW_TITLE: &str = "Daggerheart Tracker";
pub const WINDOW_SIZE: (u32, u32) = (480, 820);

pub const DATA_DIR_ENV: &str = "DH_TRACKER_DIR";
pub const LOG_FILTER_ENV: &str = "DH_TRACKER_LOG";
pub const SYSTEM_LANGUAGE_ENV: &str = "LANG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub log_filter: String,
    pub system_language: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            system_language: String::new(),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            data_dir: get(DATA_DIR_ENV).map(PathBuf::from).unwrap_or(defaults.data_dir),
            log_filter: get(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
            system_language: get(SYSTEM_LANGUAGE_ENV).unwrap_or(defaults.system_language),
        }
    }
}
