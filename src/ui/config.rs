use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "deck.yml";
const DEFAULT_START_PAGE: &str = "Summary";

/// (De)Serializable application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub path: PathBuf,

    /// Panel identifier activated at startup. Fed through the panel
    /// manager's string surface, so an unrecognized value starts the deck
    /// with everything hidden.
    pub start_page: String,
    /// Optional directory of extra snapshot files, one JSON record per
    /// file, loaded once at startup.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            start_page: String::from(DEFAULT_START_PAGE),
            data_dir: None,
        }
    }

    /// Load the default config file if one exists in the working directory,
    /// otherwise fall back to defaults.
    pub fn load_or_default() -> Self {
        let mut config = Config::new();
        let path = config.path.clone();
        if path.exists() {
            match config.load(path) {
                Ok(()) => tracing::info!("Loaded config from {}", config.path.display()),
                Err(e) => tracing::warn!("Could not load the default config: {e}"),
            }
        }
        config
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let mut file = File::create(&self.path)?;
        let yaml_str = serde_yaml::to_string::<Config>(self)?;
        file.write_all(yaml_str.as_bytes())?;
        Ok(())
    }

    pub fn load(&mut self, path: PathBuf) -> Result<(), ConfigError> {
        let mut file = File::open(&path)?;
        let mut yaml_str = String::new();
        file.read_to_string(&mut yaml_str)?;
        *self = serde_yaml::from_str::<Config>(&yaml_str)?;
        self.path = path;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_yaml() {
        let mut config = Config::new();
        config.start_page = String::from("Page13");
        config.data_dir = Some(PathBuf::from("snapshots"));
        let yaml_str = serde_yaml::to_string(&config).unwrap();
        let restored = serde_yaml::from_str::<Config>(&yaml_str).unwrap();
        assert_eq!(restored.start_page, "Page13");
        assert_eq!(restored.data_dir, Some(PathBuf::from("snapshots")));
        // path is skipped during (de)serialization
        assert_eq!(restored.path, PathBuf::new());
    }
}
