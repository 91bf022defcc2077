mod config;
mod theme;

pub use config::{ThemeChoice, UiConfig};

use crate::constants;
use egui::{FontId, TextStyle};
use std::collections::BTreeMap;

pub fn setup_ui(ctx: &egui::Context, cfg: &UiConfig, background_alpha: f32) {
    // UI Scale
    if let Some(scale) = cfg.scale {
        ctx.set_pixels_per_point(scale);
    }

    // Font Size
    let font_size = cfg.font_size;
    let text_styles: BTreeMap<_, _> = [
        (TextStyle::Small, FontId::proportional(font_size * 0.8)),
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.8)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (
            TextStyle::Name(constants::TEXT_STYLE_SEARCH_BAR.into()),
            FontId::proportional(font_size * 1.2),
        ),
        (
            TextStyle::Name(constants::TEXT_STYLE_STATUS_BAR.into()),
            FontId::proportional(font_size * 0.85),
        ),
    ]
    .into();
    // Both egui themes, so switching themes keeps the sizes
    ctx.all_styles_mut(|style| style.text_styles = text_styles.clone());

    apply_theme(ctx, cfg.theme, background_alpha);
}

pub fn apply_theme(ctx: &egui::Context, choice: ThemeChoice, background_alpha: f32) {
    let theme = choice.theme(background_alpha);
    tracing::debug!("Applying theme {}", theme.name);
    theme.apply(ctx);
}

pub fn setup_i18n() {
    let en = String::from_utf8_lossy(include_bytes!("../../assets/trans/en.ftl"));

    if egui_i18n::load_translations_from_text("en", en).is_err() {
        tracing::error!("Failed to load English translations");
    }

    egui_i18n::set_language("en");
    egui_i18n::set_fallback("en");
}

/// A headless context set up like the real one
#[cfg(test)]
pub fn test_context() -> egui::Context {
    let ctx = egui::Context::default();
    setup_i18n();
    setup_ui(&ctx, &UiConfig::default(), 1.0);
    ctx
}
