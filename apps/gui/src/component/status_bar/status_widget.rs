use crate::constants;
use catalog::{CatalogSnapshot, FetchState};
use egui::{Color32, Painter, Pos2, Response, Sense, Stroke, TextStyle, Ui, Widget, pos2, vec2};
use egui_i18n::tr;
use std::f32::consts::{FRAC_PI_2, TAU};

const SPINNER_SPEED: f64 = 1.2; // rotations per second
const SPINNER_DOT_COUNT: usize = 8;

const GREEN: Color32 = Color32::from_rgb(76, 175, 80);
const RED: Color32 = Color32::from_rgb(244, 67, 54);

/// Backend dot, then a spinner or icon, then a short status text.
pub struct StatusBarStatusWidget<'a> {
    pub backend_online: bool,
    pub snapshot: &'a CatalogSnapshot,
}

#[derive(Debug, PartialEq)]
struct StatusDisplay {
    text_key: &'static str,
    prefix: StatusPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatusPrefix {
    None,
    Spinner,
    Success,
    Error,
}

fn build_display(backend_online: bool, state: &FetchState) -> StatusDisplay {
    let (text_key, prefix) = match state {
        _ if !backend_online => ("status-offline", StatusPrefix::Error),
        FetchState::Idle => ("status-ready", StatusPrefix::None),
        FetchState::Loading { .. } => ("status-loading", StatusPrefix::Spinner),
        FetchState::Success(_) => ("status-ready", StatusPrefix::Success),
        FetchState::Failed(_) => ("status-failed", StatusPrefix::Error),
    };
    StatusDisplay { text_key, prefix }
}

impl Widget for StatusBarStatusWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let display = build_display(self.backend_online, &self.snapshot.state);

        let font_id = TextStyle::Name(constants::TEXT_STYLE_STATUS_BAR.into()).resolve(ui.style());
        let icon_size = font_id.size * 0.8;
        let indicator_radius = icon_size / 2.0;
        let gap = ui.spacing().item_spacing.x;
        let text_color = ui.visuals().text_color();

        let galley = ui
            .painter()
            .layout_no_wrap(tr!(display.text_key), font_id, text_color);

        let prefix_width = match display.prefix {
            StatusPrefix::None => 0.0,
            _ => icon_size + gap,
        };
        let width = indicator_radius * 2.0 + gap + prefix_width + galley.size().x;
        let height = galley.size().y.max(icon_size);

        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let mut cursor_x = rect.min.x;
            let center_y = rect.center().y;

            let indicator_color = if self.backend_online { GREEN } else { RED };
            ui.painter()
                .circle_filled(pos2(cursor_x + indicator_radius, center_y), indicator_radius, indicator_color);
            cursor_x += indicator_radius * 2.0 + gap;

            let prefix_center = pos2(cursor_x + icon_size / 2.0, center_y);
            match display.prefix {
                StatusPrefix::None => {}
                StatusPrefix::Spinner => {
                    draw_spinner(ui, prefix_center, icon_size / 2.0, text_color);
                    cursor_x += icon_size + gap;
                }
                StatusPrefix::Success | StatusPrefix::Error => {
                    draw_icon(ui.painter(), prefix_center, icon_size, display.prefix);
                    cursor_x += icon_size + gap;
                }
            }

            let text_pos = pos2(cursor_x, center_y - galley.size().y / 2.0);
            ui.painter().galley(text_pos, galley, text_color);
        }

        // Keep the spinner turning
        if display.prefix == StatusPrefix::Spinner {
            ui.ctx().request_repaint();
        }

        response
    }
}

/// Rotating dots, brightest first
fn draw_spinner(ui: &Ui, center: Pos2, radius: f32, color: Color32) {
    let time = ui.input(|i| i.time);
    let rotation = (time * SPINNER_SPEED * TAU as f64) as f32;

    for i in 0..SPINNER_DOT_COUNT {
        let progress = i as f32 / SPINNER_DOT_COUNT as f32;
        let angle = progress * TAU - FRAC_PI_2 - rotation;
        let dot_center = center + vec2(angle.cos(), angle.sin()) * radius * 0.65;
        ui.painter()
            .circle_filled(dot_center, radius * 0.2, color.gamma_multiply(1.0 - progress * 0.8));
    }
}

fn draw_icon(painter: &Painter, center: Pos2, size: f32, prefix: StatusPrefix) {
    let stroke_width = 1.8;

    match prefix {
        StatusPrefix::Success => {
            let r = size * 0.35;
            painter.line(
                vec![
                    center + vec2(-r * 0.5, 0.0),
                    center + vec2(-r * 0.1, r * 0.4),
                    center + vec2(r * 0.6, -r * 0.4),
                ],
                Stroke::new(stroke_width, GREEN),
            );
        }
        StatusPrefix::Error => {
            let r = size * 0.25;
            let stroke = Stroke::new(stroke_width, RED);
            painter.line_segment([center + vec2(-r, -r), center + vec2(r, r)], stroke);
            painter.line_segment([center + vec2(r, -r), center + vec2(-r, r)], stroke);
        }
        StatusPrefix::None | StatusPrefix::Spinner => {}
    }
}
