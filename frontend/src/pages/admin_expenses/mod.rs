use crate::components::guard::RequireAdmin;
use leptos::*;

pub mod components;
pub mod panel;
pub mod utils;
pub mod view_model;

pub use panel::AdminExpensesPanel;

/// `/admin/expenses`
#[component]
pub fn AdminExpensesPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminExpensesPanel />
        </RequireAdmin>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth_state, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admins_see_the_review_list() {
        let html = render_to_string(|| {
            provide_auth_state(Some(admin_user(true)), false);
            view! { <AdminExpensesPage /> }
        });
        assert!(html.contains("経費レビュー"));
    }

    #[test]
    fn members_are_kept_out() {
        let html = render_to_string(|| {
            provide_auth_state(Some(regular_user()), false);
            view! { <AdminExpensesPage /> }
        });
        assert!(!html.contains("経費レビュー"));
    }
}
