use super::components::detail::IssueDetail;
use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminIssueDetailPanel(#[prop(into)] issue_id: Signal<String>) -> impl IntoView {
    view! {
        <Title text=move || format!("課題 {} | Ledgerly", issue_id.get()) />
        <Layout>
            <div class="space-y-6">
                <div>
                    <a href="/admin/expenses" class="text-sm text-action-primary-bg hover:underline">
                        "← 経費一覧"
                    </a>
                    <h1 class="mt-2 text-2xl font-bold text-fg">"課題の詳細"</h1>
                </div>
                // keyed by id: a new id builds a fresh view model
                {move || {
                    let id = issue_id.get();
                    view! { <IssueDetail issue_id=id /> }
                }}
            </div>
        </Layout>
    }
}
