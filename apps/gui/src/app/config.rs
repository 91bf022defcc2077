use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
    /// Opacity of panel backgrounds, 0.0 to 1.0
    pub background_alpha: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
            background_alpha: 1.0,
        }
    }
}
