//! Meeting summary value type and action-item extraction.

use serde::{Deserialize, Serialize};

/// Keywords that mark a summary sentence as an action item.
const ACTION_KEYWORDS: [&str; 3] = ["should", "need to", "action"];

// ---------------------------------------------------------------------------
// MeetingSummary
// ---------------------------------------------------------------------------

/// Result of summarizing one recording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSummary {
    /// Free-text summary of the meeting.
    pub summary: String,
    /// Follow-up items, each already prefixed with `"- "`.
    pub action_items: Vec<String>,
}

impl MeetingSummary {
    /// Build from a summary, deriving the action items from its sentences.
    pub fn from_summary(summary: impl Into<String>) -> Self {
        let summary = summary.into();
        let action_items = extract_action_items(&summary);
        Self {
            summary,
            action_items,
        }
    }

    /// Plain-text report: the summary line, then one action item per line.
    ///
    /// ```rust
    /// use meeting_audio::summary::MeetingSummary;
    ///
    /// let s = MeetingSummary::from_summary("We should ship on Friday. Lunch was good.");
    /// assert_eq!(
    ///     s.render(),
    ///     "Summary: We should ship on Friday. Lunch was good.\nAction Items:\n- We should ship on Friday\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!("Summary: {}\nAction Items:\n", self.summary);
        for item in &self.action_items {
            out.push_str(item);
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// extract_action_items
// ---------------------------------------------------------------------------

/// Split `summary` on `.` and keep the sentences that mention `should`,
/// `need to` or `action` (case-sensitive), trimmed and prefixed with `"- "`.
pub fn extract_action_items(summary: &str) -> Vec<String> {
    summary
        .split('.')
        .filter(|sentence| ACTION_KEYWORDS.iter().any(|kw| sentence.contains(kw)))
        .map(|sentence| format!("- {}", sentence.trim()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
