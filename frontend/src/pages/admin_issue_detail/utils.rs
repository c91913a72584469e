use crate::api::{
    accounting::{Expense, ExpenseIssue, IssueStatus},
    ApiError,
};
use chrono::{DateTime, Utc};
use leptos_router::ParamsMap;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

pub const ISSUE_ID_PARAM: &str = "id";

/// Route value, percent-decoded but otherwise unvalidated. A missing key
/// yields an empty id.
pub fn issue_id_from_params(params: &ParamsMap) -> String {
    params
        .get(ISSUE_ID_PARAM)
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetailData {
    pub issue: ExpenseIssue,
    pub expense: Result<Expense, ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn issue_status_badge_class(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "bg-status-warning-bg text-status-warning-text",
        IssueStatus::Resolved => "bg-status-success-bg text-status-success-text",
        IssueStatus::Dismissed => "bg-surface-muted text-fg-muted",
    }
}

pub fn status_change_message(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "課題を再オープンしました。",
        IssueStatus::Resolved => "課題を解決済みにしました。",
        IssueStatus::Dismissed => "課題を却下しました。",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn issue_id_is_passed_through_as_string() {
        let mut params = ParamsMap::new();
        params.insert("id".into(), "42".into());
        let id = issue_id_from_params(&params);
        assert_eq!(id, String::from("42"));

        let mut odd = ParamsMap::new();
        odd.insert("id".into(), "  not-a-number ".into());
        assert_eq!(issue_id_from_params(&odd), "  not-a-number ");
    }

    #[test]
    fn encoded_issue_id_is_decoded_once() {
        let mut params = ParamsMap::new();
        params.insert("id".into(), "ISS%2F7".into());
        assert_eq!(issue_id_from_params(&params), "ISS/7");
    }

    #[test]
    fn missing_issue_id_becomes_empty() {
        assert_eq!(issue_id_from_params(&ParamsMap::new()), "");
    }

    #[test]
    fn message_state_keeps_one_message() {
        let mut state = MessageState::default();
        state.set_error("failed");
        assert_eq!(state.error.as_deref(), Some("failed"));
        state.set_success("done");
        assert!(state.error.is_none());
        assert_eq!(state.success.as_deref(), Some("done"));
        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[test]
    fn timestamps_render_in_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 2, 12, 10, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-02-12 10:05 UTC");
    }

    #[test]
    fn status_helpers_cover_every_status() {
        assert!(issue_status_badge_class(IssueStatus::Open).contains("warning"));
        assert!(issue_status_badge_class(IssueStatus::Resolved).contains("success"));
        assert!(status_change_message(IssueStatus::Dismissed).contains("却下"));
    }
}
