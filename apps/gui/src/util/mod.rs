mod time;

pub use time::format_refresh_time;
