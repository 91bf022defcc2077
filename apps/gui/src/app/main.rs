use super::{KeyHandler, Scope, UserCommand};
use crate::backend;
use crate::component::{
    self, MovieGridEvent, MovieGridProps, PaginationEvent, PaginationProps, SearchBarEvent,
    StatusBarEvent, StatusBarProps, prelude::*,
};
use crate::config::Config;
use crate::constants;
use crate::ui::{self, ThemeChoice};
use catalog::{CatalogHandle, CatalogSnapshot};
use egui_i18n::tr;
use tracing::{debug, info};

pub struct App {
    config: Config,
    catalog: CatalogHandle,
    key_handler: KeyHandler,

    s: State,
    search_bar: component::SearchBar,
    movie_grid: component::MovieGrid,
    pagination: component::Pagination,
    status_bar: component::StatusBar,
}

#[derive(Default)]
struct State {
    scope: Scope,

    /// Whether this application finishes initialization
    initialized: bool,

    theme: ThemeChoice,

    /// Jump back to the top of the grid on the next frame
    scroll_to_top: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, initial_search: String) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        ui::setup_i18n();
        ui::setup_ui(&cc.egui_ctx, &config.ui, config.app.background_alpha);

        #[cfg(debug_assertions)]
        Self::setup_debug_options(&cc.egui_ctx);

        let catalog =
            backend::spawn_backend(&config.catalog, initial_search.clone(), cc.egui_ctx.clone());

        Self {
            key_handler: KeyHandler::new(config.keys.clone()),
            s: State {
                theme: config.ui.theme,
                ..Default::default()
            },
            search_bar: component::SearchBar::with_query(initial_search),
            movie_grid: Default::default(),
            pagination: Default::default(),
            status_bar: Default::default(),
            config,
            catalog,
        }
    }

    #[cfg(debug_assertions)]
    fn setup_debug_options(ctx: &egui::Context) {
        ctx.style_mut(|style| style.debug.debug_on_hover_with_all_modifiers = true);
    }

    fn go_to_page(&mut self, page: u32) {
        info!("Go to page {page}");
        if self.catalog.set_page(page) {
            self.s.scroll_to_top = true;
        }
    }

    fn clear_search(&mut self) {
        debug!("Clear search {:?}", self.search_bar.query());
        self.search_bar.clear();
        self.catalog.input("");
    }

    fn change_theme(&mut self, ctx: &egui::Context, theme: ThemeChoice) {
        self.s.theme = theme;
        ui::apply_theme(ctx, theme, self.config.app.background_alpha);
    }

    fn handle_user_commands(&mut self, ctx: &egui::Context, snapshot: &CatalogSnapshot) {
        for (scope, command) in self.key_handler.handle(ctx, self.s.scope) {
            debug!("{scope:?}: {command:?}");

            match command {
                UserCommand::QuitApplication => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                UserCommand::ToggleFullScreen => {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                UserCommand::ToggleTheme => self.change_theme(ctx, self.s.theme.toggled()),
                UserCommand::FocusSearch => self.search_bar.request_focus(),
                UserCommand::ClearSearch => self.clear_search(),
                UserCommand::Refresh => {
                    self.catalog.refresh();
                }
                UserCommand::NextPage
                | UserCommand::PrevPage
                | UserCommand::FirstPage
                | UserCommand::LastPage => {
                    if let Some(page) =
                        command.target_page(snapshot.query.page, snapshot.total_pages)
                    {
                        self.go_to_page(page);
                    }
                }
            }
        }
    }

    fn render_search_bar(&mut self, ctx: &egui::Context) {
        let output = self.search_bar.render(ctx, ());

        for event in output.events {
            match event {
                SearchBarEvent::InputChanged(text) => {
                    self.catalog.input(text);
                }
            }
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context, snapshot: &CatalogSnapshot) {
        let props = StatusBarProps {
            backend_online: !self.catalog.is_closed(),
            snapshot,
            theme: self.s.theme,
        };
        let output = self.status_bar.render(ctx, props);

        for event in output.events {
            match event {
                StatusBarEvent::Refresh => {
                    self.catalog.refresh();
                }
                StatusBarEvent::ChangeTheme(theme) => self.change_theme(ctx, theme),
            }
        }
    }

    fn render_catalog(&mut self, ctx: &egui::Context, snapshot: &CatalogSnapshot) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical()
                .id_salt(constants::ID_SCROLL_CATALOG)
                .auto_shrink([false, false]);
            if std::mem::take(&mut self.s.scroll_to_top) {
                scroll_area = scroll_area.vertical_scroll_offset(0.0);
            }

            scroll_area.show(ui, |ui| {
                let props = MovieGridProps {
                    movies: snapshot.movies(),
                    loading: snapshot.is_loading(),
                    error: snapshot.error(),
                    has_search_term: snapshot.has_search_term(),
                };
                let output = self.movie_grid.render(ui, props);
                for event in output.events {
                    match event {
                        MovieGridEvent::ClearSearch => self.clear_search(),
                    }
                }

                if !snapshot.shows_pagination() {
                    return;
                }

                ui.add_space(12.0);
                ui.separator();
                let tokens = snapshot.page_tokens();
                let props = PaginationProps {
                    current: snapshot.query.page,
                    total: snapshot.total_pages,
                    tokens: &tokens,
                };
                let output = self.pagination.render(ui, props);
                ui.weak(format!(
                    "{} {} {} {} {}",
                    tr!("showing-prefix"),
                    snapshot.movies().len(),
                    tr!("showing-of"),
                    snapshot.total_count,
                    tr!("showing-suffix"),
                ));

                for event in output.events {
                    match event {
                        PaginationEvent::PageSelected(page) => self.go_to_page(page),
                    }
                }
            });
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.catalog.shutdown();
    }
}

impl eframe::App for App {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Panels paint the (possibly translucent) background
        egui::Color32::TRANSPARENT.to_normalized_gamma_f32()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.s.initialized {
            self.search_bar.request_focus();
            self.s.initialized = true;
        }

        let snapshot = self.catalog.snapshot();

        self.s.scope = if self.search_bar.has_focus() {
            Scope::SearchBar
        } else {
            Scope::Main
        };
        self.handle_user_commands(ctx, &snapshot);

        self.render_search_bar(ctx);
        self.render_status_bar(ctx, &snapshot);
        self.render_catalog(ctx, &snapshot);
    }
}
