use super::ContextComponent;
use crate::constants;
use egui_i18n::tr;

/// Title and search box. Reports raw input on every edit; debouncing is the
/// catalog's job.
#[derive(Default)]
pub struct SearchBar {
    raw_search_query: String,
    request_focus: bool,
    /// Focus as of the last rendered frame
    focused: bool,
}

pub struct SearchBarOutput {
    pub events: Vec<SearchBarEvent>,
}

#[derive(Debug, PartialEq)]
pub enum SearchBarEvent {
    InputChanged(String),
}

impl SearchBar {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            raw_search_query: query.into(),
            ..Default::default()
        }
    }

    pub fn request_focus(&mut self) {
        self.request_focus = true;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn query(&self) -> &str {
        &self.raw_search_query
    }

    /// Empties the box without emitting an event
    pub fn clear(&mut self) {
        self.raw_search_query.clear();
    }
}

impl ContextComponent for SearchBar {
    type Props<'a> = ();
    type Output = SearchBarOutput;

    fn render(&mut self, ctx: &egui::Context, _props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();

        egui::TopBottomPanel::top(constants::ID_PANEL_SEARCH_BAR)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(16.0, 10.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                let accent = ui.visuals().selection.stroke.color;
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(tr!("app-heading")).strong().color(accent));
                });
                ui.add_space(6.0);

                let output = egui::TextEdit::singleline(&mut self.raw_search_query)
                    .desired_width(f32::INFINITY)
                    .font(
                        egui::TextStyle::Name(constants::TEXT_STYLE_SEARCH_BAR.into())
                            .resolve(ui.style()),
                    )
                    .margin(egui::vec2(10.0, 6.0))
                    .hint_text(tr!("search-bar-hint"))
                    .show(ui);

                if output.response.changed() {
                    events.push(SearchBarEvent::InputChanged(self.raw_search_query.clone()));
                }

                if self.request_focus {
                    output.response.request_focus();
                    self.request_focus = false;
                }
                self.focused = output.response.has_focus();
            });

        SearchBarOutput { events }
    }
}
