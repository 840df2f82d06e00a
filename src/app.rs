use chrono::Local;

use crate::arbtt::{
    build_dump_command, build_stats_command, events_from_dump, parse_summary_csv, run_capture,
};
use crate::config::Settings;
use crate::models::{CategorySummary, UsageEvent};
use crate::view::{build_menu_view, MenuView};

/// Run the summary query for the configured range and parse it.
///
/// A failing subprocess degrades to an empty list with a logged warning;
/// the caller always gets something renderable.
pub async fn refresh_summaries(settings: &Settings) -> Vec<CategorySummary> {
    let command = build_stats_command(settings, Local::now().date_naive());
    match run_capture(&command).await {
        Ok(csv) => parse_summary_csv(&csv),
        Err(err) => {
            tracing::warn!("summary query failed: {}", err);
            Vec::new()
        }
    }
}

/// Fetch the most frequent window samples recorded for one tag.
///
/// Skips the subprocess entirely when `events_to_fetch` is 0. Failures
/// degrade to an empty list like the summary query.
pub async fn fetch_events_for_tag(settings: &Settings, tag: &str) -> Vec<UsageEvent> {
    if settings.events_to_fetch == 0 {
        return Vec::new();
    }
    let command = build_dump_command(settings, tag, Local::now().date_naive());
    match run_capture(&command).await {
        Ok(dump) => events_from_dump(&dump, settings.events_to_fetch as usize),
        Err(err) => {
            tracing::warn!("sample dump for {} failed: {}", tag, err);
            Vec::new()
        }
    }
}

/// One full refresh cycle: query, parse, describe the menu
pub async fn refresh_menu(settings: &Settings) -> MenuView {
    let summaries = refresh_summaries(settings).await;
    build_menu_view(settings, &summaries)
}
