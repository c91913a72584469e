use crate::{
    api::accounting::ExpenseStatus,
    pages::admin_expenses::{utils::parse_status_filter, view_model::AdminExpensesViewModel},
};
use leptos::*;

#[component]
pub fn StatusFilter(vm: AdminExpensesViewModel) -> impl IntoView {
    let selected = move || {
        vm.query
            .get()
            .status
            .map(|status| status.as_str())
            .unwrap_or("")
    };
    view! {
        <div class="flex items-center gap-2">
            <label class="text-sm text-fg-muted" for="expense-status-filter">"ステータス"</label>
            <select
                id="expense-status-filter"
                class="border border-form-control-border rounded px-2 py-1 text-sm"
                prop:value=selected
                on:change=move |ev| vm.set_status_filter(parse_status_filter(&event_target_value(&ev)))
            >
                <option value="">"すべて"</option>
                {ExpenseStatus::ALL
                    .into_iter()
                    .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
