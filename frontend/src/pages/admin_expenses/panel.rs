use super::{
    components::{filter::StatusFilter, list::ExpenseTable},
    view_model::use_admin_expenses_view_model,
};
use crate::components::layout::{ErrorMessage, Layout};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminExpensesPanel() -> impl IntoView {
    let vm = use_admin_expenses_view_model();

    view! {
        <Title text="経費レビュー | Ledgerly" />
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-end sm:justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"経費レビュー"</h1>
                        <p class="text-sm text-fg-muted">"申請された経費の承認と課題の確認を行います。"</p>
                    </div>
                    <StatusFilter vm=vm />
                </div>
                {move || vm.review_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <ExpenseTable vm=vm />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth_state};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_heading_filter_and_loading_table() {
        let html = render_to_string(|| {
            provide_auth_state(Some(admin_user(false)), false);
            view! { <AdminExpensesPanel /> }
        });
        assert!(html.contains("経費レビュー"));
        assert!(html.contains("expense-status-filter"));
        assert!(html.contains("animate-spin"));
    }
}
