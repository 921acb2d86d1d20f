use time::OffsetDateTime;

/// Whole seconds from `start` to `end`, truncated; zero if the clock went backwards.
pub fn whole_seconds_between(start: OffsetDateTime, end: OffsetDateTime) -> u64 {
    (end - start).whole_seconds().max(0) as u64
}

/// `S`, `M:SS` or `H:MM:SS` depending on magnitude.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, seconds)
    } else {
        seconds.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn seconds_only_below_a_minute() {
        assert_eq!(format_hms(0), "0");
        assert_eq!(format_hms(7), "7");
        assert_eq!(format_hms(59), "59");
    }

    #[test]
    fn minutes_have_no_leading_zero() {
        assert_eq!(format_hms(60), "1:00");
        assert_eq!(format_hms(95), "1:35");
        assert_eq!(format_hms(3599), "59:59");
    }

    #[test]
    fn hours_pad_minutes_and_seconds() {
        assert_eq!(format_hms(3600), "1:00:00");
        assert_eq!(format_hms(3700), "1:01:40");
        assert_eq!(format_hms(36_005), "10:00:05");
    }

    #[test]
    fn whole_seconds_truncate() {
        let start = datetime!(2024-03-01 09:00:00.000 UTC);
        let end = datetime!(2024-03-01 09:01:35.999 UTC);
        assert_eq!(whole_seconds_between(start, end), 95);
        assert_eq!(whole_seconds_between(end, start), 0);
    }
}
