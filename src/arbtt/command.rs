use chrono::{Datelike, Duration, NaiveDate};

use crate::config::{Settings, StatsInterval, WeekStartDay};

/// Binary every query shells out to; resolved through `$PATH`
pub const ARBTT_STATS: &str = "arbtt-stats";

/// Argv for the CSV summary query
///
/// Flag order is fixed: output format, inactivity, file overrides, one
/// `--category=` per included category (in configured order), one
/// `--exclude=` per excluded category, then the date-range filter as the
/// final argument.
pub fn build_stats_command(settings: &Settings, today: NaiveDate) -> Vec<String> {
    let mut command = vec![ARBTT_STATS.to_string(), "--output-format=csv".to_string()];
    push_common_flags(&mut command, settings);
    for category in &settings.included_categories {
        command.push(format!("--category={}", category));
    }
    for category in &settings.excluded_categories {
        command.push(format!("--exclude={}", category));
    }
    command.push(date_filter(settings, today));
    command
}

/// Argv for the raw-sample dump of a single tag
///
/// `--dump-samples` only has a text form, so no output-format flag here.
pub fn build_dump_command(settings: &Settings, tag: &str, today: NaiveDate) -> Vec<String> {
    let mut command = vec![ARBTT_STATS.to_string(), "--dump-samples".to_string()];
    push_common_flags(&mut command, settings);
    command.push(format!("--only={}", tag));
    command.push(date_filter(settings, today));
    command
}

/// Flags shared by the summary and dump queries
fn push_common_flags(command: &mut Vec<String>, settings: &Settings) {
    if !settings.ignore_inactive {
        command.push("--also-inactive".to_string());
    }
    if !settings.log_file_path.is_empty() {
        command.push(format!("--logfile={}", settings.log_file_path));
    }
    if !settings.categorize_file_path.is_empty() {
        command.push(format!("--categorizefile={}", settings.categorize_file_path));
    }
}

/// `--filter=$date>=YYYY-MM-DD` covering the selected range up to now
fn date_filter(settings: &Settings, today: NaiveDate) -> String {
    let start = range_start(today, settings.stats_interval, settings.week_start_day);
    format!("--filter=$date>={}", start.format("%Y-%m-%d"))
}

/// First day of the selected range
///
/// Day is today itself, month the first of the current month. Week walks
/// back to the most recent week-start day; when today already is that day
/// the range starts today, not a week ago.
pub fn range_start(
    today: NaiveDate,
    interval: StatsInterval,
    week_start: WeekStartDay,
) -> NaiveDate {
    match interval {
        StatsInterval::Day => today,
        StatsInterval::Week => {
            let days_back = match week_start {
                WeekStartDay::Monday => today.weekday().num_days_from_monday(),
                WeekStartDay::Sunday => today.weekday().num_days_from_sunday(),
            };
            today - Duration::days(i64::from(days_back))
        }
        StatsInterval::Month => today.with_day(1).unwrap_or(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // 2024-03-14 is a Thursday; the surrounding Mondays are 03-11 and 03-18.
    const Y: i32 = 2024;

    #[test]
    fn test_range_start_day() {
        let today = date(Y, 3, 14);
        assert_eq!(
            range_start(today, StatsInterval::Day, WeekStartDay::Monday),
            today
        );
    }

    #[test]
    fn test_range_start_week_monday() {
        let start = range_start(date(Y, 3, 14), StatsInterval::Week, WeekStartDay::Monday);
        assert_eq!(start, date(Y, 3, 11));
    }

    #[test]
    fn test_range_start_week_sunday() {
        let start = range_start(date(Y, 3, 14), StatsInterval::Week, WeekStartDay::Sunday);
        assert_eq!(start, date(Y, 3, 10));
    }

    #[test]
    fn test_range_start_on_week_boundary_is_today() {
        // A Monday with Monday start must not slip back a whole week.
        let monday = date(Y, 3, 11);
        assert_eq!(
            range_start(monday, StatsInterval::Week, WeekStartDay::Monday),
            monday
        );
        let sunday = date(Y, 3, 10);
        assert_eq!(
            range_start(sunday, StatsInterval::Week, WeekStartDay::Sunday),
            sunday
        );
    }

    #[test]
    fn test_range_start_week_crosses_month() {
        // Friday 2024-03-01 with Monday start reaches back into February.
        let start = range_start(date(Y, 3, 1), StatsInterval::Week, WeekStartDay::Monday);
        assert_eq!(start, date(Y, 2, 26));
    }

    #[test]
    fn test_range_start_month() {
        let start = range_start(date(Y, 3, 14), StatsInterval::Month, WeekStartDay::Monday);
        assert_eq!(start, date(Y, 3, 1));
    }

    #[test]
    fn test_stats_command_default_settings() {
        let command = build_stats_command(&Settings::default(), date(Y, 3, 14));
        assert_eq!(
            command,
            vec![
                "arbtt-stats",
                "--output-format=csv",
                "--filter=$date>=2024-03-14",
            ]
        );
    }

    #[test]
    fn test_stats_command_all_flags() {
        let settings = Settings {
            ignore_inactive: false,
            log_file_path: "/tmp/capture.log".to_string(),
            categorize_file_path: "/tmp/categorize.cfg".to_string(),
            included_categories: vec!["work".to_string(), "play".to_string()],
            excluded_categories: vec!["idle".to_string()],
            stats_interval: StatsInterval::Week,
            ..Settings::default()
        };

        let command = build_stats_command(&settings, date(Y, 3, 14));
        assert_eq!(
            command,
            vec![
                "arbtt-stats",
                "--output-format=csv",
                "--also-inactive",
                "--logfile=/tmp/capture.log",
                "--categorizefile=/tmp/categorize.cfg",
                "--category=work",
                "--category=play",
                "--exclude=idle",
                "--filter=$date>=2024-03-11",
            ]
        );
    }

    #[test]
    fn test_dump_command() {
        let settings = Settings {
            stats_interval: StatsInterval::Month,
            ..Settings::default()
        };

        let command = build_dump_command(&settings, "work:coding", date(Y, 3, 14));
        assert_eq!(
            command,
            vec![
                "arbtt-stats",
                "--dump-samples",
                "--only=work:coding",
                "--filter=$date>=2024-03-01",
            ]
        );
    }
}
