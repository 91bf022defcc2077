use super::{ColorPalette, Theme, hex};
use egui::Color32;

/// Purple to pink accents over a near-black surface
struct ReelDark;
impl ColorPalette for ReelDark {
    fn is_dark(&self) -> bool { true }
    fn primary(&self) -> Color32 { hex!("#c084fc") }
    fn on_primary(&self) -> Color32 { hex!("#12101a") }
    fn secondary(&self) -> Color32 { hex!("#f472b6") }
    fn surface(&self) -> Color32 { hex!("#111827") }
    fn on_surface(&self) -> Color32 { hex!("#e5e7eb") }
    fn surface_variant(&self) -> Color32 { hex!("#1f2937") }
    fn on_surface_variant(&self) -> Color32 { hex!("#9ca3af") }
    fn error(&self) -> Color32 { hex!("#f87171") }
    fn outline(&self) -> Color32 { hex!("#374151") }
    fn hover(&self) -> Color32 { hex!("#4b5563") }
    fn on_hover(&self) -> Color32 { hex!("#f9fafb") }
    fn shadow(&self) -> Color32 { hex!("#000000") }
}

struct ReelLight;
impl ColorPalette for ReelLight {
    fn is_dark(&self) -> bool { false }
    fn primary(&self) -> Color32 { hex!("#9333ea") }
    fn on_primary(&self) -> Color32 { hex!("#ffffff") }
    fn secondary(&self) -> Color32 { hex!("#db2777") }
    fn surface(&self) -> Color32 { hex!("#f9fafb") }
    fn on_surface(&self) -> Color32 { hex!("#1f2937") }
    fn surface_variant(&self) -> Color32 { hex!("#ffffff") }
    fn on_surface_variant(&self) -> Color32 { hex!("#4b5563") }
    fn error(&self) -> Color32 { hex!("#dc2626") }
    fn outline(&self) -> Color32 { hex!("#d1d5db") }
    fn hover(&self) -> Color32 { hex!("#e5e7eb") }
    fn on_hover(&self) -> Color32 { hex!("#111827") }
    fn shadow(&self) -> Color32 { hex!("#9ca3af") }
}

pub fn reel_dark(alpha: f32) -> Theme {
    Theme::new("Reel Dark", ReelDark, alpha)
}

pub fn reel_light(alpha: f32) -> Theme {
    Theme::new("Reel Light", ReelLight, alpha)
}
