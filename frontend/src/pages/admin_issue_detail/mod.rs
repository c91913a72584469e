use crate::components::guard::RequireAdmin;
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod panel;
pub mod utils;
pub mod view_model;

pub use panel::AdminIssueDetailPanel;

/// `/admin/issues/:id`
#[component]
pub fn AdminIssueDetailPage() -> impl IntoView {
    let params = use_params_map();
    let issue_id = create_memo(move |_| params.with(utils::issue_id_from_params));
    view! {
        <RequireAdmin>
            <AdminIssueDetailPanel issue_id=issue_id />
        </RequireAdmin>
    }
}
