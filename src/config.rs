use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Range the summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsInterval {
    #[default]
    Day,
    Week,
    Month,
}

impl StatsInterval {
    /// Menu heading for the range
    pub fn heading(&self) -> &'static str {
        match self {
            StatsInterval::Day => "Today",
            StatsInterval::Week => "This week",
            StatsInterval::Month => "This month",
        }
    }
}

impl FromStr for StatsInterval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(StatsInterval::Day),
            "week" => Ok(StatsInterval::Week),
            "month" => Ok(StatsInterval::Month),
            other => Err(format!(
                "unknown interval '{}' (expected day, week or month)",
                other
            )),
        }
    }
}

/// First day of the week for week-range queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum WeekStartDay {
    #[default]
    Monday,
    Sunday,
}

impl FromStr for WeekStartDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(WeekStartDay::Monday),
            "sunday" => Ok(WeekStartDay::Sunday),
            other => Err(format!(
                "unknown week start '{}' (expected Monday or Sunday)",
                other
            )),
        }
    }
}

/// On-disk settings from config.yaml
///
/// Keys are kebab-case. Category filters are comma-separated strings here
/// and split into lists when converted to [`Settings`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PanelConfig {
    #[serde(default = "default_refresh_seconds")]
    pub refresh_interval_seconds: u64,
    #[serde(default = "default_true")]
    pub strip_category_names: bool,
    #[serde(default)]
    pub log_file_path: String,
    #[serde(default)]
    pub categorize_file_path: String,
    #[serde(default = "default_true")]
    pub ignore_inactive: bool,
    #[serde(default)]
    pub included_categories: String,
    #[serde(default)]
    pub excluded_categories: String,
    #[serde(default)]
    pub stats_interval: StatsInterval,
    #[serde(default)]
    pub week_start_day: WeekStartDay,
    #[serde(default = "default_events_to_fetch")]
    pub events_to_fetch: u32,
}

fn default_refresh_seconds() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

fn default_events_to_fetch() -> u32 {
    5
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: default_refresh_seconds(),
            strip_category_names: default_true(),
            log_file_path: String::new(),
            categorize_file_path: String::new(),
            ignore_inactive: default_true(),
            included_categories: String::new(),
            excluded_categories: String::new(),
            stats_interval: StatsInterval::default(),
            week_start_day: WeekStartDay::default(),
            events_to_fetch: default_events_to_fetch(),
        }
    }
}

impl PanelConfig {
    /// Load settings from a YAML file
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config: {:?}", path.as_ref()))?;
        let config: PanelConfig =
            serde_yaml::from_str(&content).context("Failed to parse config YAML")?;
        Ok(config)
    }
}

/// Runtime settings handed to the query builders and the view
#[derive(Debug, Clone)]
pub struct Settings {
    pub refresh_interval: Duration,
    pub strip_category_names: bool,
    pub log_file_path: String,
    pub categorize_file_path: String,
    pub ignore_inactive: bool,
    pub included_categories: Vec<String>,
    pub excluded_categories: Vec<String>,
    pub stats_interval: StatsInterval,
    pub week_start_day: WeekStartDay,
    pub events_to_fetch: u32,
}

impl From<PanelConfig> for Settings {
    fn from(config: PanelConfig) -> Self {
        Self {
            // Lower bound of one second keeps a mistyped zero from busy-looping.
            refresh_interval: Duration::from_secs(config.refresh_interval_seconds.max(1)),
            strip_category_names: config.strip_category_names,
            log_file_path: config.log_file_path,
            categorize_file_path: config.categorize_file_path,
            ignore_inactive: config.ignore_inactive,
            included_categories: split_list(&config.included_categories),
            excluded_categories: split_list(&config.excluded_categories),
            stats_interval: config.stats_interval,
            week_start_day: config.week_start_day,
            events_to_fetch: config.events_to_fetch,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        PanelConfig::default().into()
    }
}

/// Split a comma-separated filter list, dropping empty entries
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Default config location: `~/.config/arbtt-panel/config.yaml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arbtt-panel")
        .join("config.yaml")
}

/// Commented settings file written by `arbtt-panel init`
const SAMPLE_CONFIG: &str = r#"# arbtt-panel configuration

# Seconds between refreshes in watch mode.
refresh-interval-seconds: 60

# Show only the leaf of each tag ("coding" instead of "work:coding").
strip-category-names: true

# Leave samples marked inactive out of the totals. Set to false to pass
# --also-inactive to arbtt-stats.
ignore-inactive: true

# Paths handed to --logfile= / --categorizefile=. Empty means the arbtt
# defaults under ~/.arbtt/.
log-file-path: ""
categorize-file-path: ""

# Comma-separated category filters. Each included entry becomes a
# --category= flag, each excluded one an --exclude= flag.
included-categories: ""
excluded-categories: ""

# day, week or month.
stats-interval: day

# Monday or Sunday.
week-start-day: Monday

# How many of the most frequent window samples to fetch per tag.
# 0 disables fetching entirely.
events-to-fetch: 5
"#;

/// Write the commented sample config, refusing to clobber an existing file
pub fn write_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        anyhow::bail!("Config already exists: {}", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create config directory: {:?}", parent))?;
    }
    fs::write(path, SAMPLE_CONFIG).context(format!("Failed to write config: {:?}", path))?;
    Ok(())
}
