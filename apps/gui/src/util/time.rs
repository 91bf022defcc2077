use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Wall clock time of day, `HH:MM:SS`
pub fn format_refresh_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_refresh_time() {
        let time = Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 30).unwrap();
        assert_eq!(format_refresh_time(&time), "07:05:30");

        let east = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_refresh_time(&time.with_timezone(&east)), "15:05:30");
    }
}
