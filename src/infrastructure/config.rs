pub mod keybindings;
pub mod styles;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::utils::paths::{get_config_dir, get_data_dir};

pub use keybindings::{AppCommand, KeyBindings};
pub use styles::Styles;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Load configuration: embedded defaults, overlaid by whichever config
    /// files exist in the config dir. A missing user config is fine; the
    /// calculator runs with the embedded defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = get_data_dir();
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge defaults underneath the user's bindings and styles.
        for (key, command) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert_with(|| command.clone());
        }
        for (name, style) in default_config.styles.iter() {
            cfg.styles.entry(name.clone()).or_insert(*style);
        }

        Ok(cfg)
    }
}
