use serde::Serialize;

/// One aggregated raw-sample line: how often a particular window showed up
/// in the samples of the selected range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEvent {
    /// Number of samples that captured this window.
    pub frequency: u32,
    /// Whether the window had input focus (`(*)`) or was merely visible
    /// (`(.)`).
    pub active: bool,
    pub program: String,
    pub title: String,
}

impl UsageEvent {
    /// List label: `[3] firefox -- Inbox - Gmail`.
    pub fn label(&self) -> String {
        format!("[{}] {} -- {}", self.frequency, self.program, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let event = UsageEvent {
            frequency: 3,
            active: true,
            program: "firefox".to_string(),
            title: "Inbox - Gmail".to_string(),
        };
        assert_eq!(event.label(), "[3] firefox -- Inbox - Gmail");
    }
}
