//! Platform directories shared by the reel applications.

pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory, preferring the `env_key` environment variable, then the
/// platform strategy, and finally a subdirectory of the temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Path of the GUI configuration file (`CONFIG_DIRECTORY` overrides the
/// platform config dir).
pub fn gui_config_path<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir("CONFIG_DIRECTORY", strategy, |s| Some(s.config_dir()))
        .join(constants::GUI_CONFIG_FILE_NAME)
}
