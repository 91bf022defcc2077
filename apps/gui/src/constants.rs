pub const APP_ID: &str = "reel";
pub const WINDOW_TITLE: &str = "YTS Movies";

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

pub const ID_PANEL_SEARCH_BAR: &str = "search_bar_panel";
pub const ID_PANEL_STATUS_BAR: &str = "status_bar_panel";
pub const ID_SCROLL_CATALOG: &str = "catalog_scroll_area";

pub const TEXT_STYLE_SEARCH_BAR: &str = "SearchBar";
pub const TEXT_STYLE_STATUS_BAR: &str = "StatusBar";

/// The listing API rejects larger pages
pub const MAX_PAGE_SIZE: u32 = 50;
