use crate::{
    components::container::{Container, ContainerTag},
    state::auth::use_auth,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let can_access_admin = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    };
    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name)
            .unwrap_or_default()
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <Container>
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Ledgerly"</a>
                    <nav class="flex items-center space-x-4">
                        <Show when=can_access_admin>
                            <a href="/admin/expenses" class=NAV_LINK_CLASS>"経費一覧"</a>
                        </Show>
                        <span class="text-sm text-fg-muted">{display_name}</span>
                    </nav>
                </div>
            </Container>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <Container tag=ContainerTag::Main class="py-6">
                {children()}
            </Container>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn NotFoundMessage(
    #[prop(into)] title: String,
    #[prop(optional, into)] back_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
            {back_href.map(|href| view! {
                <a href=href class="mt-2 inline-block text-sm text-action-primary-bg hover:underline">
                    "一覧に戻る"
                </a>
            })}
        </div>
    }
}
