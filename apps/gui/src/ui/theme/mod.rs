mod reel;

pub use reel::{reel_dark, reel_light};

use egui::{
    Color32, Context, CornerRadius, Visuals,
    epaint::{Shadow, Stroke},
    style::{Selection, TextCursorStyle, WidgetVisuals, Widgets},
};

pub trait ColorPalette {
    fn is_dark(&self) -> bool;

    /// Accent for selection, active widgets and the rating badge
    fn primary(&self) -> Color32;
    fn on_primary(&self) -> Color32;

    fn secondary(&self) -> Color32;

    fn surface(&self) -> Color32; // Main background
    fn on_surface(&self) -> Color32; // Main text

    fn surface_variant(&self) -> Color32; // Cards, inputs, status bar
    fn on_surface_variant(&self) -> Color32;

    fn error(&self) -> Color32;
    fn outline(&self) -> Color32; // Borders
    fn hover(&self) -> Color32;
    fn on_hover(&self) -> Color32;
    fn shadow(&self) -> Color32;
}

pub struct Theme {
    pub name: String,
    pub visuals: Visuals,
}

fn widget(fill: Color32, stroke: Color32, text: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, stroke),
        fg_stroke: Stroke::new(1.0, text),
        corner_radius: CornerRadius::same(4),
        expansion,
    }
}

fn shadow(color: Color32, offset: [i8; 2], blur: u8) -> Shadow {
    Shadow {
        color: color.gamma_multiply(0.5),
        offset,
        blur,
        spread: 0,
    }
}

impl Theme {
    /// `alpha` is the opacity of panel backgrounds, 0.0 (invisible) to 1.0.
    /// Borders, hover and active states stay opaque.
    pub fn new(name: &str, palette: impl ColorPalette, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let surface = palette.surface().gamma_multiply(alpha);
        let variant = palette.surface_variant().gamma_multiply(alpha);
        let base = if palette.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        let visuals = Visuals {
            dark_mode: palette.is_dark(),
            override_text_color: Some(palette.on_surface()),
            window_fill: surface,
            panel_fill: surface,
            window_stroke: Stroke::new(1.0, palette.outline()),
            window_corner_radius: CornerRadius::same(6),
            window_shadow: shadow(palette.shadow(), [6, 10], 14),
            popup_shadow: shadow(palette.shadow(), [3, 6], 8),
            selection: Selection {
                bg_fill: palette.primary().gamma_multiply(0.4),
                stroke: Stroke::new(1.0, palette.primary()),
            },
            faint_bg_color: palette.on_surface().gamma_multiply(0.06),
            extreme_bg_color: variant,
            text_edit_bg_color: Some(palette.surface_variant()),
            text_cursor: TextCursorStyle {
                stroke: Stroke::new(2.0, palette.primary()),
                ..base.text_cursor.clone()
            },
            hyperlink_color: palette.secondary(),
            warn_fg_color: palette.primary(),
            error_fg_color: palette.error(),
            code_bg_color: variant,
            widgets: Widgets {
                noninteractive: widget(surface, palette.outline(), palette.on_surface(), 0.0),
                inactive: widget(variant, palette.outline(), palette.on_surface_variant(), 0.0),
                hovered: widget(palette.hover(), palette.primary(), palette.on_hover(), 1.0),
                active: widget(palette.primary(), palette.primary(), palette.on_primary(), 1.0),
                open: widget(variant, palette.outline(), palette.on_surface(), 0.0),
            },
            ..base
        };

        Self {
            name: name.to_string(),
            visuals,
        }
    }

    pub fn apply(self, ctx: &Context) {
        let theme = if self.visuals.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        ctx.set_theme(theme);
        ctx.set_visuals_of(theme, self.visuals);
    }
}

/// Only for literals known to be valid
macro_rules! hex {
    ($s:literal) => {{
        match egui::Color32::from_hex($s) {
            Ok(color) => color,
            Err(_) => panic!(concat!("Invalid color literal: ", $s)),
        }
    }};
}
pub(crate) use hex;
