mod config;
mod key;
mod main;
mod scope;
mod user_command;

pub use config::AppConfig;
pub use key::{KeyConfig, KeyHandler, KeyShortcut, default_key_config, merge_key_config};
pub use main::App;
pub use scope::Scope;
pub use user_command::UserCommand;
