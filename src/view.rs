use serde::Serialize;

use crate::config::Settings;
use crate::models::{format_minutes, CategorySummary, UsageEvent};

/// Width of a 100% bar in the text rendering
const BAR_WIDTH: usize = 20;

/// Declarative description of the dropdown menu for one refresh: a range
/// heading, the total line, one entry per summary row. Renderers decide
/// what a bar looks like; this only carries the numbers.
#[derive(Debug, Clone, Serialize)]
pub struct MenuView {
    pub heading: String,
    pub total_label: String,
    pub total_minutes: u32,
    pub entries: Vec<MenuEntry>,
}

/// One summary row of the menu
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    /// `1h30m -- coding`, or the raw tag when stripping is off
    pub label: String,
    /// Share of the range, drives the bar width
    pub percentage: f64,
    /// Full tag, the key for fetching this row's events
    pub raw_tag: String,
}

/// Build the menu description for a set of parsed summaries
pub fn build_menu_view(settings: &Settings, summaries: &[CategorySummary]) -> MenuView {
    let total_minutes: u32 = summaries.iter().map(CategorySummary::total_minutes).sum();

    let entries = summaries
        .iter()
        .map(|summary| {
            let task = if settings.strip_category_names {
                &summary.tag
            } else {
                &summary.raw_tag
            };
            MenuEntry {
                label: format!("{} -- {}", summary.time_label(), task),
                percentage: summary.percentage,
                raw_tag: summary.raw_tag.clone(),
            }
        })
        .collect();

    MenuView {
        heading: settings.stats_interval.heading().to_string(),
        total_label: format!("Logged time: {}", format_minutes(total_minutes)),
        total_minutes,
        entries,
    }
}

impl MenuView {
    /// Render as indented text, one menu row per line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push('\n');
        out.push_str(&format!("  {}\n", self.total_label));
        for entry in &self.entries {
            out.push_str(&format!("  {:<28} {}\n", entry.label, bar(entry.percentage)));
        }
        out
    }
}

/// Render fetched events the way the per-tag submenu lists them
pub fn render_events_text(tag: &str, events: &[UsageEvent]) -> String {
    let mut out = String::new();
    out.push_str(tag);
    out.push('\n');
    for event in events {
        out.push_str(&format!("  {}\n", event.label()));
    }
    out
}

/// Percentage-proportional run of block glyphs
fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}
