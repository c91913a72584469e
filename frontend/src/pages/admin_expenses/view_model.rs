use crate::api::{
    accounting::{
        AccountingRepository, Expense, ExpenseIssue, ExpenseListQuery, ExpenseListResponse,
        ExpenseStatus, UpdateExpenseRequest,
    },
    ApiClient, ApiError,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminExpensesViewModel {
    pub query: RwSignal<ExpenseListQuery>,
    pub reload: RwSignal<u32>,
    pub expenses_resource: Resource<(ExpenseListQuery, u32), Result<ExpenseListResponse, ApiError>>,
    pub expanded: RwSignal<Option<String>>,
    pub issues_resource: Resource<Option<String>, Result<Vec<ExpenseIssue>, ApiError>>,
    pub review_action: Action<(String, ExpenseStatus), Result<Expense, ApiError>>,
    pub review_error: RwSignal<Option<String>>,
}

impl AdminExpensesViewModel {
    pub fn set_status_filter(&self, status: Option<ExpenseStatus>) {
        self.query.update(|query| {
            query.status = status;
            query.page = 1;
        });
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| query.page = page.max(1));
    }

    pub fn toggle_expanded(&self, expense_id: &str) {
        self.expanded.update(|current| {
            *current = match current.as_deref() {
                Some(open) if open == expense_id => None,
                _ => Some(expense_id.to_string()),
            };
        });
    }
}

pub fn use_admin_expenses_view_model() -> AdminExpensesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AccountingRepository::new_with_client(Rc::new(api));

    let query = create_rw_signal(ExpenseListQuery::default());
    let reload = create_rw_signal(0u32);
    let expanded = create_rw_signal(None::<String>);
    let review_error = create_rw_signal(None::<String>);

    let repo_for_list = repository.clone();
    let expenses_resource = create_resource(
        move || (query.get(), reload.get()),
        move |(query, _reload)| {
            let repo = repo_for_list.clone();
            async move { repo.list_expenses(query).await }
        },
    );

    let repo_for_issues = repository.clone();
    let issues_resource = create_resource(
        move || expanded.get(),
        move |expense_id| {
            let repo = repo_for_issues.clone();
            async move {
                match expense_id {
                    Some(id) => repo.fetch_expense_issues(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let repo_for_review = repository.clone();
    let review_action = create_action(move |(id, status): &(String, ExpenseStatus)| {
        let repo = repo_for_review.clone();
        let id = id.clone();
        let payload = UpdateExpenseRequest {
            status: Some(*status),
            ..Default::default()
        };
        async move { repo.update_expense(id, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = review_action.value().get() {
            match result {
                Ok(expense) => {
                    log::info!("expense {} moved to {}", expense.id, expense.status.as_str());
                    review_error.set(None);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("expense review failed: {} ({})", err, err.code);
                    review_error.set(Some(err.to_string()));
                }
            }
        }
    });

    AdminExpensesViewModel {
        query,
        reload,
        expenses_resource,
        expanded,
        issues_resource,
        review_action,
        review_error,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_suppressed_resources;

    #[test]
    fn filter_change_resets_to_first_page() {
        with_suppressed_resources(|| {
            let vm = use_admin_expenses_view_model();
            vm.go_to_page(3);
            assert_eq!(vm.query.get_untracked().page, 3);
            vm.set_status_filter(Some(ExpenseStatus::Submitted));
            let query = vm.query.get_untracked();
            assert_eq!(query.page, 1);
            assert_eq!(query.status, Some(ExpenseStatus::Submitted));
            vm.go_to_page(0);
            assert_eq!(vm.query.get_untracked().page, 1);
        });
    }

    #[test]
    fn toggling_the_same_row_collapses_it() {
        with_suppressed_resources(|| {
            let vm = use_admin_expenses_view_model();
            vm.toggle_expanded("exp-1");
            assert_eq!(vm.expanded.get_untracked().as_deref(), Some("exp-1"));
            vm.toggle_expanded("exp-2");
            assert_eq!(vm.expanded.get_untracked().as_deref(), Some("exp-2"));
            vm.toggle_expanded("exp-2");
            assert!(vm.expanded.get_untracked().is_none());
        });
    }
}
