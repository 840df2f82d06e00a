use crate::models::CategorySummary;

/// Parse `arbtt-stats --output-format=csv` output into summary records.
///
/// The first line names the columns and must contain `Tag`, `Percentage`
/// and `Time`; data lines are zipped against it by position, so extra
/// columns and either column order are fine. Sentinel rows, rows whose
/// numeric fields don't parse and blank lines are dropped. Never fails:
/// unusable input just yields an empty list.
pub fn parse_summary_csv(text: &str) -> Vec<CategorySummary> {
    let mut lines = text.lines();
    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };

    let (tag_column, percentage_column, time_column) = match (
        header.iter().position(|c| *c == "Tag"),
        header.iter().position(|c| *c == "Percentage"),
        header.iter().position(|c| *c == "Time"),
    ) {
        (Some(tag), Some(percentage), Some(time)) => (tag, percentage, time),
        _ => return Vec::new(),
    };

    let mut summaries = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();

        let tag = match fields.get(tag_column) {
            Some(tag) if !tag.is_empty() && !is_sentinel_tag(tag) => *tag,
            _ => continue,
        };
        if let (Some(percentage), Some(time)) =
            (fields.get(percentage_column), fields.get(time_column))
        {
            if let Some(summary) = CategorySummary::from_csv_fields(tag, percentage, time) {
                summaries.push(summary);
            }
        }
    }
    summaries
}

/// Rows that summarize the table instead of naming a tag: arbtt's
/// `(unmatched time)` and `(total time)` lines, plus the `N entries
/// omitted` marker it appends when a percentile cutoff drops rows.
fn is_sentinel_tag(tag: &str) -> bool {
    if tag == "(unmatched time)" || tag == "(total time)" {
        return true;
    }
    match tag.find(" entries omitted") {
        Some(idx) => tag[..idx].ends_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}
