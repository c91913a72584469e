use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{AdminExpensesPage, AdminIssueDetailPage, HomePage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/admin/expenses", "/admin/issues/:id"];

/// Routes wrapped in `RequireAdmin` by their page component.
pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/expenses", "/admin/issues/:id"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/admin/expenses" view=AdminExpensesPage/>
                    <Route path="/admin/issues/:id" view=AdminIssueDetailPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
