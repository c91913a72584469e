use crate::api::accounting::{ExpenseListResponse, ExpenseStatus};

/// `""` (the "all" option) clears the filter.
pub fn parse_status_filter(value: &str) -> Option<ExpenseStatus> {
    ExpenseStatus::parse(value.trim())
}

pub fn page_summary(page: &ExpenseListResponse) -> String {
    if page.total == 0 || page.items.is_empty() {
        return "該当する経費はありません".to_string();
    }
    let first = u64::from(page.page.saturating_sub(1)) * u64::from(page.per_page) + 1;
    let last = first + page.items.len() as u64 - 1;
    format!("{} 件中 {}–{} 件", page.total, first, last)
}

/// Status transitions an admin may apply from the list.
pub fn review_transitions(status: ExpenseStatus) -> &'static [ExpenseStatus] {
    match status {
        ExpenseStatus::Submitted => &[ExpenseStatus::Approved, ExpenseStatus::Rejected],
        ExpenseStatus::Approved => &[ExpenseStatus::Reimbursed],
        _ => &[],
    }
}
