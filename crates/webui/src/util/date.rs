use chrono::NaiveDate;

/// Date-only wire format used by the backend and `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders `1990-01-01` as `Jan 1, 1990`. Anything unparseable is shown as is.
pub fn display_date(raw: &str) -> String {
    // Timestamps are cut down to their date part.
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_only_values() {
        assert_eq!(display_date("1990-01-01"), "Jan 1, 1990");
        assert_eq!(display_date("2024-09-15"), "Sep 15, 2024");
    }

    #[test]
    fn formats_timestamps_by_their_date() {
        assert_eq!(display_date("2024-09-15T08:30:00"), "Sep 15, 2024");
    }

    #[test]
    fn leaves_garbage_alone() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("someday"), "someday");
    }
}
