use super::StatefulComponent;
use catalog::Movie;
use egui::{Align2, FontId, Margin, RichText, Sense, Stroke, StrokeKind, vec2};
use egui_i18n::tr;

const CARD_WIDTH: f32 = 170.0;
const POSTER_HEIGHT: f32 = 250.0;
const CARD_MARGIN: i8 = 8;

/// Loading row, error banner, empty state and the card grid.
#[derive(Default)]
pub struct MovieGrid;

pub struct MovieGridProps<'a> {
    pub movies: &'a [Movie],
    pub loading: bool,
    pub error: Option<&'a str>,
    pub has_search_term: bool,
}

pub struct MovieGridOutput {
    pub events: Vec<MovieGridEvent>,
}

#[derive(Debug, PartialEq)]
pub enum MovieGridEvent {
    ClearSearch,
}

/// How many cards of `card_width` fit side by side, at least one
fn column_count(available_width: f32, card_width: f32, spacing: f32) -> usize {
    (((available_width + spacing) / (card_width + spacing)).floor() as usize).max(1)
}

fn render_loading(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(tr!("loading-movies"));
    });
}

fn render_error(ui: &mut egui::Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.12))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(6)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("{} {message}", tr!("error-prefix"))).color(color));
        });
}

fn render_empty(ui: &mut egui::Ui, has_search_term: bool) -> Option<MovieGridEvent> {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new(tr!("empty-title")).heading());
        ui.weak(tr!("empty-hint"));
        ui.add_space(8.0);
        (has_search_term && ui.button(tr!("clear-search")).clicked())
            .then_some(MovieGridEvent::ClearSearch)
    })
    .inner
}

fn render_poster(ui: &mut egui::Ui, movie: &Movie) {
    let size = vec2(CARD_WIDTH, POSTER_HEIGHT);
    if movie.has_cover() {
        ui.add(
            egui::Image::new(movie.cover_image.as_str())
                .fit_to_exact_size(size)
                .corner_radius(4)
                .show_loading_spinner(true),
        );
        return;
    }

    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        tr!("movie-card-no-poster"),
        FontId::proportional(14.0),
        ui.visuals().weak_text_color(),
    );
}

fn render_card(ui: &mut egui::Ui, movie: &Movie) {
    let visuals = ui.visuals();
    let accent = visuals.selection.stroke.color;
    let frame = egui::Frame::NONE
        .fill(visuals.extreme_bg_color)
        .stroke(visuals.widgets.noninteractive.bg_stroke)
        .corner_radius(6)
        .inner_margin(Margin::same(CARD_MARGIN));

    let card = frame.show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        render_poster(ui, movie);

        ui.horizontal(|ui| {
            ui.add(egui::Label::new(RichText::new(&movie.title).strong()).truncate());
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("★ {}", movie.rating_label())).color(accent));
            ui.weak(movie.year.to_string());
            if let Some(minutes) = movie.runtime_minutes() {
                ui.weak(format!("{minutes} {}", tr!("movie-card-minutes")));
            }
        });
        ui.horizontal_wrapped(|ui| {
            for genre in movie.displayed_genres() {
                egui::Frame::NONE
                    .stroke(Stroke::new(1.0, accent.gamma_multiply(0.6)))
                    .corner_radius(8)
                    .inner_margin(Margin::symmetric(6, 1))
                    .show(ui, |ui| {
                        ui.small(genre);
                    });
            }
        });
    });

    let response = card.response;
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            6.0,
            Stroke::new(1.5, accent),
            StrokeKind::Inside,
        );
    }
    if movie.genres.len() > movie.displayed_genres().len() {
        let _ = response.on_hover_text(movie.genres.join(", "));
    }
}

impl StatefulComponent for MovieGrid {
    type Props<'a> = MovieGridProps<'a>;
    type Output = MovieGridOutput;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();

        if props.loading {
            render_loading(ui);
            ui.add_space(8.0);
        }

        if let Some(message) = props.error {
            render_error(ui, message);
            ui.add_space(8.0);
        }

        if !props.loading && props.movies.is_empty() {
            events.extend(render_empty(ui, props.has_search_term));
            return MovieGridOutput { events };
        }

        let spacing = ui.spacing().item_spacing.x;
        let card_width = CARD_WIDTH + 2.0 * CARD_MARGIN as f32 + 2.0;
        let columns = column_count(ui.available_width(), card_width, spacing);

        for (row, movies) in props.movies.chunks(columns).enumerate() {
            ui.push_id(row, |ui| {
                ui.horizontal_top(|ui| {
                    for movie in movies {
                        ui.push_id(movie.id, |ui| render_card(ui, movie));
                    }
                });
            });
        }

        MovieGridOutput { events }
    }
}
