use crate::app::AppConfig;
use crate::app::{KeyConfig, default_key_config, merge_key_config};
use crate::backend::CatalogConfig;
use crate::error::{Result, error};
use crate::ui::UiConfig;
use config::{create_strategy, gui_config_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub ui: UiConfig,
    pub catalog: CatalogConfig,
    pub keys: KeyConfig,

    // === System state ===
    pub config_path: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    app: AppConfig,
    ui: UiConfig,
    catalog: CatalogConfig,
    /// User bindings, layered over the defaults
    keys: KeyConfig,
}

impl Config {
    fn from_raw(raw: RawConfig, config_path: PathBuf) -> Self {
        let mut keys = default_key_config();
        merge_key_config(&mut keys, raw.keys);

        Self {
            app: raw.app,
            ui: raw.ui,
            catalog: raw.catalog,
            keys,
            config_path,
        }
    }

    /// Reads `gui.toml` from the config directory. A missing file means defaults.
    pub fn load() -> Result<Config> {
        let strategy = create_strategy().map_err(|_| error!("Home dir not found"))?;
        let config_path = gui_config_path(&strategy);
        Self::load_path(&config_path)
    }

    fn load_path(config_path: &Path) -> Result<Config> {
        let raw_config: RawConfig = match std::fs::read_to_string(config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_raw(raw_config, config_path.to_path_buf()))
    }

    #[cfg(test)]
    pub fn load_str(config_str: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        Ok(Self::from_raw(
            raw,
            PathBuf::from(config::constants::GUI_CONFIG_FILE_NAME),
        ))
    }
}
