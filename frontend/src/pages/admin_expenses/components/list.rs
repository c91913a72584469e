use crate::{
    api::{
        accounting::{format_amount, Expense, ExpenseIssue, ExpenseListResponse},
        client::encode_segment,
        ApiError,
    },
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::admin_expenses::{
        utils::{page_summary, review_transitions},
        view_model::AdminExpensesViewModel,
    },
};
use leptos::*;

/// Detail link for an issue. The id is encoded so it stays one path segment.
pub fn issue_href(issue_id: &str) -> String {
    format!("/admin/issues/{}", encode_segment(issue_id))
}

#[component]
pub fn ExpenseTable(vm: AdminExpensesViewModel) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <LoadingSpinner /> }>
            {move || {
                vm.expenses_resource.get().map(|result| match result {
                    Ok(page) => view! { <ExpensePage page=page vm=vm /> }.into_view(),
                    Err(err) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                })
            }}
        </Suspense>
    }
}

#[component]
pub fn ExpensePage(page: ExpenseListResponse, vm: AdminExpensesViewModel) -> impl IntoView {
    let summary = page_summary(&page);
    let has_previous = page.has_previous_page();
    let has_next = page.has_next_page();
    let current = page.page;
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted">"発生日"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted">"内容"</th>
                        <th class="px-4 py-3 text-right text-xs font-medium text-fg-muted">"金額"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted">"ステータス"</th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted">"未対応の課題"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {page
                        .items
                        .into_iter()
                        .map(|expense| view! { <ExpenseRow expense=expense vm=vm /> })
                        .collect_view()}
                </tbody>
            </table>
            <div class="flex items-center justify-between px-4 py-3 text-sm text-fg-muted">
                <span>{summary}</span>
                <div class="flex gap-2">
                    <button
                        class="px-3 py-1 rounded border border-border disabled:opacity-50"
                        disabled=!has_previous
                        on:click=move |_| vm.go_to_page(current.saturating_sub(1))
                    >
                        "前へ"
                    </button>
                    <button
                        class="px-3 py-1 rounded border border-border disabled:opacity-50"
                        disabled=!has_next
                        on:click=move |_| vm.go_to_page(current + 1)
                    >
                        "次へ"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExpenseRow(expense: Expense, vm: AdminExpensesViewModel) -> impl IntoView {
    let expense_id = store_value(expense.id.clone());
    let is_expanded =
        move || vm.expanded.get().as_deref() == Some(expense_id.get_value().as_str());
    let pending = vm.review_action.pending();
    let transitions = review_transitions(expense.status);

    view! {
        <tr>
            <td class="px-4 py-3 text-sm text-fg">{expense.incurred_on.format("%Y-%m-%d").to_string()}</td>
            <td class="px-4 py-3 text-sm text-fg">
                <div>{expense.description.clone()}</div>
                <div class="text-xs text-fg-muted">{expense.category.clone()}</div>
            </td>
            <td class="px-4 py-3 text-sm text-fg text-right font-mono">
                {format_amount(expense.amount_minor, &expense.currency)}
            </td>
            <td class="px-4 py-3 text-sm text-fg">{expense.status.label()}</td>
            <td class="px-4 py-3 text-sm">
                <button
                    class="text-action-primary-bg hover:underline disabled:no-underline disabled:text-fg-muted"
                    disabled=expense.open_issue_count == 0
                    on:click=move |_| vm.toggle_expanded(&expense_id.get_value())
                >
                    {format!("{} 件", expense.open_issue_count)}
                </button>
            </td>
            <td class="px-4 py-3 text-sm text-right space-x-2">
                {transitions
                    .iter()
                    .map(|next| {
                        let next = *next;
                        view! {
                            <button
                                class="px-2 py-1 rounded border border-border text-xs disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| vm.review_action.dispatch((expense_id.get_value(), next))
                            >
                                {next.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </td>
        </tr>
        <Show when=is_expanded>
            <tr>
                <td colspan="6" class="px-4 py-3 bg-surface-muted">
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || vm.issues_resource.get().map(render_issue_links)}
                    </Suspense>
                </td>
            </tr>
        </Show>
    }
}

fn render_issue_links(result: Result<Vec<ExpenseIssue>, ApiError>) -> View {
    match result {
        Ok(issues) if issues.is_empty() => view! {
            <p class="text-sm text-fg-muted">"課題はありません"</p>
        }
        .into_view(),
        Ok(issues) => view! {
            <ul class="space-y-1">
                {issues
                    .into_iter()
                    .map(|issue| view! {
                        <li class="text-sm">
                            <a href=issue_href(&issue.id) class="text-action-primary-bg hover:underline">
                                {issue.title}
                            </a>
                            <span class="ml-2 text-xs text-fg-muted">{issue.status.label()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        Err(err) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
    }
}
