use serde::Serialize;

/// One row of an `arbtt-stats --output-format=csv` report: how much of the
/// selected range one tag accounts for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Tag exactly as reported, e.g. `work:coding`.
    pub raw_tag: String,
    /// Leaf of the tag, the part after the last colon (`coding`).
    pub tag: String,
    /// First colon-separated segment of the tag (`work`).
    pub category: String,
    /// Share of the reported range, in percent.
    pub percentage: f64,
    pub hours: u32,
    pub minutes: u32,
}

impl CategorySummary {
    /// Build a summary from the three relevant CSV fields.
    ///
    /// Returns `None` when the percentage isn't numeric or the time field
    /// isn't `H:MM` shaped. A seconds component (`H:MM:SS`) is accepted and
    /// ignored.
    pub fn from_csv_fields(tag: &str, percentage: &str, time: &str) -> Option<Self> {
        let percentage: f64 = percentage.trim().parse().ok()?;
        let mut clock = time.trim().split(':');
        let hours: u32 = clock.next()?.parse().ok()?;
        let minutes: u32 = clock.next()?.parse().ok()?;

        Some(Self {
            raw_tag: tag.to_string(),
            tag: tag.rsplit(':').next().unwrap_or(tag).to_string(),
            category: tag.split(':').next().unwrap_or(tag).to_string(),
            percentage,
            hours,
            minutes,
        })
    }

    /// Tracked time in whole minutes.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Compact clock label: `1h30m`, `2h`, `45m`. Empty when the row carries
    /// no time at all.
    pub fn time_label(&self) -> String {
        let mut label = String::new();
        if self.hours > 0 {
            label.push_str(&format!("{}h", self.hours));
        }
        if self.minutes > 0 {
            label.push_str(&format!("{}m", self.minutes));
        }
        label
    }
}

/// Same compact clock form for a minute total, except that zero renders as
/// `0m` so a "nothing logged yet" line still reads as a duration.
pub fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    let mut label = String::new();
    if hours > 0 {
        label.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        label.push_str(&format!("{}m", minutes));
    }
    if label.is_empty() {
        label.push_str("0m");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_fields_splits_tag() {
        let summary = CategorySummary::from_csv_fields("work:coding", "42.5", "1:30").unwrap();
        assert_eq!(summary.raw_tag, "work:coding");
        assert_eq!(summary.tag, "coding");
        assert_eq!(summary.category, "work");
        assert_eq!(summary.percentage, 42.5);
        assert_eq!(summary.total_minutes(), 90);
    }

    #[test]
    fn test_from_csv_fields_flat_tag() {
        let summary = CategorySummary::from_csv_fields("mail", "10", "0:45").unwrap();
        assert_eq!(summary.tag, "mail");
        assert_eq!(summary.category, "mail");
        assert_eq!(summary.total_minutes(), 45);
    }

    #[test]
    fn test_from_csv_fields_ignores_seconds() {
        let summary = CategorySummary::from_csv_fields("x", "1", "8:42:45").unwrap();
        assert_eq!(summary.hours, 8);
        assert_eq!(summary.minutes, 42);
    }

    #[test]
    fn test_from_csv_fields_rejects_garbage() {
        assert!(CategorySummary::from_csv_fields("x", "many", "1:30").is_none());
        assert!(CategorySummary::from_csv_fields("x", "5", "ninety").is_none());
        assert!(CategorySummary::from_csv_fields("x", "5", "90").is_none());
    }

    #[test]
    fn test_time_label() {
        let label = |t: &str| {
            CategorySummary::from_csv_fields("x", "0", t)
                .unwrap()
                .time_label()
        };
        assert_eq!(label("1:30"), "1h30m");
        assert_eq!(label("0:45"), "45m");
        assert_eq!(label("2:00"), "2h");
        assert_eq!(label("0:00"), "");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(90), "1h30m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(0), "0m");
    }
}
