use std::collections::HashMap;

use crate::models::UsageEvent;

/// Marker arbtt puts on the window that had input focus in a sample
const ACTIVE_FLAG: &str = "(*)";
/// Marker for windows that were visible but not focused
const SEEN_FLAG: &str = "(.)";

/// Parse aggregated sample lines of the shape
/// `<count> (*) <program>: <title>` into events.
///
/// Everything after the first colon of the line is the title, so titles may
/// themselves contain colons. Lines of any other shape, like the timestamp
/// headers in a raw dump, are silently skipped.
pub fn parse_sample_events(text: &str) -> Vec<UsageEvent> {
    text.lines().filter_map(parse_sample_line).collect()
}

fn parse_sample_line(line: &str) -> Option<UsageEvent> {
    let line = line.trim();
    let mut tokens = line.split_whitespace();

    let frequency: u32 = tokens.next()?.parse().ok()?;
    let active = match tokens.next()? {
        ACTIVE_FLAG => true,
        SEEN_FLAG => false,
        _ => return None,
    };
    let program_token = tokens.next()?;
    let program = program_token.strip_suffix(':').unwrap_or(program_token);
    let title = line
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");

    Some(UsageEvent {
        frequency,
        active,
        program: program.to_string(),
        title: title.to_string(),
    })
}

/// Reduce a raw `--dump-samples` dump to counted active-window lines.
///
/// Keeps lines that start with the active-window marker, counts duplicates
/// and orders by descending count, ties broken by descending line text the
/// way a reversed whole-line sort falls out. At most `limit` lines survive
/// (0 means no cap). The result is `<count> <line>` text ready for
/// [`parse_sample_events`].
pub fn aggregate_dump_samples(dump: &str, limit: usize) -> String {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for line in dump.lines() {
        let line = line.trim();
        if line.starts_with(ACTIVE_FLAG) {
            *counts.entry(line).or_insert(0) += 1;
        }
    }

    let mut ordered: Vec<(&str, u32)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));
    if limit > 0 {
        ordered.truncate(limit);
    }

    ordered
        .into_iter()
        .map(|(line, count)| format!("{} {}", count, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full pipeline from raw dump text to at most `limit` usage events
pub fn events_from_dump(dump: &str, limit: usize) -> Vec<UsageEvent> {
    parse_sample_events(&aggregate_dump_samples(dump, limit))
}
