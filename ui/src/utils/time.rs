use jiff::{Timestamp, civil::Date, tz};

/// Date a review was written, in the viewer's timezone.
pub fn format_review_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%d %b %Y")
        .to_string()
}

/// "03 Apr 2025" for a single day, "03 Apr 2025 – 05 Apr 2025" otherwise.
pub fn format_date_range(start: Date, end: Date) -> String {
    if start == end {
        start.strftime("%d %b %Y").to_string()
    } else {
        format!(
            "{} – {}",
            start.strftime("%d %b %Y"),
            end.strftime("%d %b %Y")
        )
    }
}

/// Parse the value of an `<input type="date">`.
pub fn parse_date_input(value: &str) -> Option<Date> {
    value.parse().ok()
}
