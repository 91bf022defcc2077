//! UI components.
//!
//! A component keeps whatever state it needs between frames, takes borrowed
//! props every frame and reports what the user did as events in its output.
//! The app decides what the events mean.

mod movie_grid;
mod pagination;
mod search_bar;
mod status_bar;

pub use movie_grid::{MovieGrid, MovieGridEvent, MovieGridProps};
pub use pagination::{Pagination, PaginationEvent, PaginationProps};
pub use search_bar::{SearchBar, SearchBarEvent};
pub use status_bar::{StatusBar, StatusBarEvent, StatusBarProps};

/// Components that own a panel and render straight into the context
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}

/// Components rendered inside a parent `Ui`
pub trait StatefulComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output;
}

pub mod prelude {
    pub use super::{ContextComponent, StatefulComponent};
}
