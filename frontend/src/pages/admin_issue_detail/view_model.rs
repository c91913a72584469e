use super::utils::{status_change_message, IssueDetailData, MessageState};
use crate::api::{
    accounting::{AccountingRepository, ExpenseIssue, IssueStatus, UpdateIssueStatusRequest},
    ApiClient, ApiError,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct IssueDetailViewModel {
    pub issue_id: StoredValue<String>,
    pub reload: RwSignal<u32>,
    pub detail_resource: Resource<(String, u32), Result<IssueDetailData, ApiError>>,
    pub note: RwSignal<String>,
    pub messages: RwSignal<MessageState>,
    pub status_action: Action<IssueStatus, Result<ExpenseIssue, ApiError>>,
}

/// Loads the issue, then its expense. A failed expense lookup is kept next to
/// the issue instead of failing the whole page.
pub async fn load_issue_detail(
    repository: &AccountingRepository,
    issue_id: String,
) -> Result<IssueDetailData, ApiError> {
    let issue = repository.fetch_issue(issue_id).await?;
    let expense = repository.fetch_expense(issue.expense_id.clone()).await;
    if let Err(err) = &expense {
        log::warn!(
            "expense {} for issue {} unavailable: {}",
            issue.expense_id,
            issue.id,
            err
        );
    }
    Ok(IssueDetailData { issue, expense })
}

pub fn use_issue_detail_view_model(issue_id: String) -> IssueDetailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AccountingRepository::new_with_client(Rc::new(api));

    let issue_id = store_value(issue_id);
    let reload = create_rw_signal(0u32);
    let note = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());

    let repo_for_resource = repository.clone();
    let detail_resource = create_resource(
        move || (issue_id.get_value(), reload.get()),
        move |(id, _reload)| {
            let repo = repo_for_resource.clone();
            async move { load_issue_detail(&repo, id).await }
        },
    );

    let repo_for_action = repository.clone();
    let status_action = create_action(move |status: &IssueStatus| {
        let repo = repo_for_action.clone();
        let payload = UpdateIssueStatusRequest::new(*status, &note.get_untracked());
        let id = issue_id.get_value();
        async move { repo.update_issue_status(id, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(issue) => {
                    messages.update(|state| state.set_success(status_change_message(issue.status)));
                    note.set(String::new());
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("issue status update failed: {} ({})", err, err.code);
                    messages.update(|state| state.set_error(err.to_string()));
                }
            }
        }
    });

    IssueDetailViewModel {
        issue_id,
        reload,
        detail_resource,
        note,
        messages,
        status_action,
    }
}
