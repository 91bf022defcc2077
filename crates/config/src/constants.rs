pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "reel";
pub const APP_NAME: &str = "reel";

pub const GUI_CONFIG_FILE_NAME: &str = "gui.toml";
