use chrono::{DateTime, Utc};

/// Short listing date, e.g. "Aug 29, 2026".
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_zero_padding() {
        let date: DateTime<Utc> = "2026-08-09T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(date), "Aug 9, 2026");
    }
}
