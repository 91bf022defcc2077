mod status_widget;

use super::ContextComponent;
use crate::constants;
use crate::ui::ThemeChoice;
use crate::util::format_refresh_time;
use catalog::CatalogSnapshot;
use egui::TextStyle;
use egui_i18n::tr;
use status_widget::StatusBarStatusWidget;
use strum::IntoEnumIterator;

#[derive(Default)]
pub struct StatusBar;

pub struct StatusBarProps<'a> {
    pub backend_online: bool,
    pub snapshot: &'a CatalogSnapshot,
    pub theme: ThemeChoice,
}

/// Events emitted by the status bar
#[derive(Debug, PartialEq)]
pub enum StatusBarEvent {
    Refresh,
    ChangeTheme(ThemeChoice),
}

pub struct StatusBarOutput {
    pub events: Vec<StatusBarEvent>,
}

fn set_borderless_button_style(style: &mut egui::Style) {
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::NONE;
}

fn render_theme_selector(ui: &mut egui::Ui, current: ThemeChoice) -> Option<StatusBarEvent> {
    let mut selected = current;
    ui.menu_button(tr!(current.label_key()), |ui| {
        for choice in ThemeChoice::iter() {
            ui.selectable_value(&mut selected, choice, tr!(choice.label_key()));
        }
    });
    (selected != current).then_some(StatusBarEvent::ChangeTheme(selected))
}

impl ContextComponent for StatusBar {
    type Props<'a> = StatusBarProps<'a>;
    type Output = StatusBarOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();

        egui::TopBottomPanel::bottom(constants::ID_PANEL_STATUS_BAR)
            .show_separator_line(false)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(6.0, 3.0))
                    .fill(ctx.style().visuals.extreme_bg_color),
            )
            .show(ctx, |ui| {
                ui.style_mut().override_text_style =
                    Some(TextStyle::Name(constants::TEXT_STYLE_STATUS_BAR.into()));
                set_borderless_button_style(ui.style_mut());

                ui.horizontal(|ui| {
                    ui.add(StatusBarStatusWidget {
                        backend_online: props.backend_online,
                        snapshot: props.snapshot,
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        events.extend(render_theme_selector(ui, props.theme));

                        ui.add(egui::Separator::default().vertical().shrink(2.0));

                        if ui
                            .button("🔄")
                            .on_hover_text(tr!("status-refresh-hint"))
                            .clicked()
                        {
                            events.push(StatusBarEvent::Refresh);
                        }

                        if let Some(refreshed) = &props.snapshot.last_refreshed {
                            ui.weak(format!(
                                "{} {}",
                                tr!("status-updated"),
                                format_refresh_time(refreshed)
                            ));
                        }
                    });
                });
            });

        StatusBarOutput { events }
    }
}
