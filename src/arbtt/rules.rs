use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use crate::models::UsageEvent;

/// Where arbtt looks for rules when no override is configured
const DEFAULT_CATEGORIZE_FILE: &str = ".arbtt/categorize.cfg";

/// Resolve the categorize-rules file: the configured path, or
/// `~/.arbtt/categorize.cfg` when the setting is empty.
pub fn categorize_file_path(configured: &str) -> PathBuf {
    if configured.is_empty() {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CATEGORIZE_FILE)
    } else {
        PathBuf::from(configured)
    }
}

/// Commented rule proposals for one event: exact and substring matches on
/// the program name, then the same pair for the window title. The user
/// renames CATEGORY and TAG_NAME and uncomments whichever line fits.
pub fn rule_templates(event: &UsageEvent) -> Vec<String> {
    vec![
        "-- Added by arbtt-panel".to_string(),
        format!(
            "-- current window $program == \"{}\" ==> tag CATEGORY:TAG_NAME,",
            event.program
        ),
        format!(
            "-- current window $program =~ /.*{}.*/ ==> tag CATEGORY:TAG_NAME,",
            event.program
        ),
        format!(
            "-- current window $title == \"{}\" ==> tag CATEGORY:TAG_NAME,",
            event.title
        ),
        format!(
            "-- current window $title =~ /.*{}.*/ ==> tag CATEGORY:TAG_NAME,",
            event.title
        ),
    ]
}

/// Append the rule templates for `event` to the categorize file, creating
/// it if needed. Returns the path written to.
pub fn append_rule_templates(configured: &str, event: &UsageEvent) -> Result<PathBuf> {
    let path = categorize_file_path(configured);
    append_templates_to(&path, event)?;
    Ok(path)
}

fn append_templates_to(path: &Path, event: &UsageEvent) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open categorize file: {:?}", path))?;
    for rule in rule_templates(event) {
        writeln!(file, "{}", rule)
            .context(format!("Failed to append to categorize file: {:?}", path))?;
    }
    Ok(())
}

/// Hand the categorize file to the desktop's default handler
pub fn open_categorize_file(configured: &str) -> Result<()> {
    let path = categorize_file_path(configured);
    Command::new("xdg-open")
        .arg(&path)
        .spawn()
        .context(format!("Failed to open editor for {:?}", path))?;
    Ok(())
}
