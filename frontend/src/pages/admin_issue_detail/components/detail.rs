use crate::{
    api::{
        accounting::{format_amount, Expense, ExpenseIssue, IssueStatus},
        ApiError,
    },
    components::{
        container::{Container, ContainerTag},
        layout::{ErrorMessage, LoadingSpinner, NotFoundMessage, SuccessMessage},
    },
    pages::admin_issue_detail::{
        utils::{format_timestamp, issue_status_badge_class, IssueDetailData},
        view_model::{use_issue_detail_view_model, IssueDetailViewModel},
    },
};
use leptos::*;

pub const ISSUE_LIST_HREF: &str = "/admin/expenses";

/// Detail view for one expense issue, keyed by `issue_id`.
#[component]
pub fn IssueDetail(#[prop(into)] issue_id: String) -> impl IntoView {
    let vm = use_issue_detail_view_model(issue_id.clone());

    view! {
        <Container
            tag=ContainerTag::Article
            class="space-y-6"
            attr:data-issue-id=issue_id
        >
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    vm.detail_resource
                        .get()
                        .map(|result| render_detail_result(result, vm))
                }}
            </Suspense>
        </Container>
    }
}

fn render_detail_result(result: Result<IssueDetailData, ApiError>, vm: IssueDetailViewModel) -> View {
    match result {
        Ok(data) => {
            let is_open = data.issue.status.is_open();
            view! {
                <IssueSummary issue=data.issue />
                <LinkedExpense expense=data.expense />
                <Show when=move || is_open>
                    <IssueActions vm=vm />
                </Show>
                <ActionMessages vm=vm />
            }
            .into_view()
        }
        Err(err) if err.is_not_found() => view! {
            <NotFoundMessage title="指定された課題は見つかりませんでした" back_href=ISSUE_LIST_HREF />
        }
        .into_view(),
        Err(err) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
    }
}

#[component]
pub fn IssueSummary(issue: ExpenseIssue) -> impl IntoView {
    let badge_class = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
        issue_status_badge_class(issue.status)
    );
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <p class="text-xs text-fg-muted">{format!("課題 #{}", issue.id)}</p>
                    <h2 class="text-lg font-semibold text-fg">{issue.title.clone()}</h2>
                </div>
                <span class=badge_class>{issue.status.label()}</span>
            </div>
            <p class="text-sm text-fg whitespace-pre-wrap">
                {issue.description.clone().unwrap_or_else(|| "説明はありません".to_string())}
            </p>
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                <div>
                    <dt class="text-fg-muted">"報告者"</dt>
                    <dd class="text-fg">{issue.reported_by.clone()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"報告日時"</dt>
                    <dd class="text-fg">{format_timestamp(&issue.created_at)}</dd>
                </div>
                {issue.resolved_at.map(|at| view! {
                    <div>
                        <dt class="text-fg-muted">"対応日時"</dt>
                        <dd class="text-fg">{format_timestamp(&at)}</dd>
                    </div>
                })}
                {issue.resolution_note.clone().map(|note| view! {
                    <div class="sm:col-span-2">
                        <dt class="text-fg-muted">"対応メモ"</dt>
                        <dd class="text-fg whitespace-pre-wrap">{note}</dd>
                    </div>
                })}
            </dl>
        </div>
    }
}

#[component]
pub fn LinkedExpense(expense: Result<Expense, ApiError>) -> impl IntoView {
    match expense {
        Ok(expense) => view! {
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <h3 class="text-sm font-semibold text-fg mb-3">"対象の経費"</h3>
                <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                    <div>
                        <dt class="text-fg-muted">"内容"</dt>
                        <dd class="text-fg">{expense.description.clone()}</dd>
                    </div>
                    <div>
                        <dt class="text-fg-muted">"金額"</dt>
                        <dd class="text-fg font-mono">
                            {format_amount(expense.amount_minor, &expense.currency)}
                        </dd>
                    </div>
                    <div>
                        <dt class="text-fg-muted">"カテゴリ"</dt>
                        <dd class="text-fg">{expense.category.clone()}</dd>
                    </div>
                    <div>
                        <dt class="text-fg-muted">"発生日"</dt>
                        <dd class="text-fg">{expense.incurred_on.format("%Y-%m-%d").to_string()}</dd>
                    </div>
                    <div>
                        <dt class="text-fg-muted">"ステータス"</dt>
                        <dd class="text-fg">{expense.status.label()}</dd>
                    </div>
                </dl>
            </div>
        }
        .into_view(),
        Err(err) => view! {
            <div class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded text-sm">
                {format!("対象の経費を読み込めませんでした: {}", err)}
            </div>
        }
        .into_view(),
    }
}

#[component]
fn IssueActions(vm: IssueDetailViewModel) -> impl IntoView {
    let pending = vm.status_action.pending();
    let dispatch = move |status: IssueStatus| {
        if pending.get_untracked() {
            return;
        }
        vm.messages.update(|state| state.clear());
        vm.status_action.dispatch(status);
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <label class="block text-sm font-medium text-fg" for="resolution-note">"対応メモ (任意)"</label>
            <textarea
                id="resolution-note"
                class="w-full border border-form-control-border rounded px-2 py-1 text-sm"
                rows="3"
                prop:value=move || vm.note.get()
                on:input=move |ev| vm.note.set(event_target_value(&ev))
            ></textarea>
            <div class="flex gap-3">
                <button
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| dispatch(IssueStatus::Resolved)
                >
                    "解決済みにする"
                </button>
                <button
                    class="px-4 py-2 rounded border border-border text-fg disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| dispatch(IssueStatus::Dismissed)
                >
                    "却下する"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ActionMessages(vm: IssueDetailViewModel) -> impl IntoView {
    view! {
        {move || vm.messages.get().error.map(|message| view! { <ErrorMessage message=message /> })}
        {move || vm.messages.get().success.map(|message| view! { <SuccessMessage message=message /> })}
    }
}
