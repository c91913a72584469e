use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_admin = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    };

    view! {
        <Title text="Ledgerly" />
        <Layout>
            <div class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Ledgerly"</h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                    "経費の申請とレビューをまとめて管理します"
                </p>
                <Show when=is_admin>
                    <div class="mt-8 flex justify-center">
                        <a
                            href="/admin/expenses"
                            class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                        >
                            "経費レビューへ"
                        </a>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
