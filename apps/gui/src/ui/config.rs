use super::theme::{Theme, reel_dark, reel_light};
use serde::Deserialize;
use strum::EnumIter;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct UiConfig {
    /// Scale the whole UI
    pub scale: Option<f32>,
    pub font_size: f32,
    pub theme: ThemeChoice,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scale: None,
            font_size: 15.0,
            theme: ThemeChoice::default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self, alpha: f32) -> Theme {
        match self {
            ThemeChoice::Dark => reel_dark(alpha),
            ThemeChoice::Light => reel_light(alpha),
        }
    }

    /// Translation key of the display name
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "theme-dark",
            ThemeChoice::Light => "theme-light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }
}
