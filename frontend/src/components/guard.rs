use crate::{
    api::UserResponse,
    components::layout::LoadingSpinner,
    config,
    state::auth::{use_auth, AuthState},
    utils::storage::redirect_to,
};
use leptos::*;

/// Where signed-in callers without admin rights land.
pub const NON_ADMIN_FALLBACK_PATH: &str = "/";

/// What a guarded subtree demands of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still in flight.
    Pending,
    Allow,
    Redirect(String),
}

/// Anonymous callers go to the configured sign-in page, callers lacking admin
/// rights go home.
pub fn decide(access: Access, state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    if !state.is_authenticated {
        return GuardDecision::Redirect(config::login_url());
    }
    let is_admin = state.user.as_ref().is_some_and(UserResponse::is_admin);
    if access == Access::Admin && !is_admin {
        return GuardDecision::Redirect(NON_ADMIN_FALLBACK_PATH.to_string());
    }
    GuardDecision::Allow
}

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| auth.with(|state| decide(access, state)));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::warn!("{:?} access denied, redirecting to {}", access, target);
            redirect_to(&target);
        }
    });
    view! {
        <Show
            when=move || decision.with(|decision| *decision == GuardDecision::Allow)
            fallback=move || {
                decision
                    .with(|decision| *decision == GuardDecision::Pending)
                    .then(|| view! { <LoadingSpinner /> })
            }
        >
            {children()}
        </Show>
    }
}

/// Renders `children` for any signed-in caller.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Authenticated, children)
}

/// Renders `children` only for admins (`role == "admin"` or system admins).
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Admin, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(role: &str, is_system_admin: bool) -> UserResponse {
        UserResponse {
            id: "u1".into(),
            username: "clerk".into(),
            full_name: "Clerk".into(),
            role: role.into(),
            is_system_admin,
        }
    }

    fn signed_in(user: UserResponse) -> AuthState {
        AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    #[test]
    fn pending_session_never_redirects() {
        let loading = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(decide(Access::Authenticated, &loading), GuardDecision::Pending);
        assert_eq!(decide(Access::Admin, &loading), GuardDecision::Pending);
    }

    #[test]
    fn anonymous_callers_are_sent_to_the_configured_sign_in_page() {
        let anonymous = AuthState::default();
        for access in [Access::Authenticated, Access::Admin] {
            assert_eq!(
                decide(access, &anonymous),
                GuardDecision::Redirect(config::login_url())
            );
        }
    }

    #[test]
    fn members_pass_auth_but_not_admin() {
        let state = signed_in(member("member", false));
        assert_eq!(decide(Access::Authenticated, &state), GuardDecision::Allow);
        assert_eq!(
            decide(Access::Admin, &state),
            GuardDecision::Redirect(NON_ADMIN_FALLBACK_PATH.to_string())
        );
    }

    #[test]
    fn admin_role_or_system_admin_passes_admin_guard() {
        assert_eq!(decide(Access::Admin, &signed_in(member("Admin", false))), GuardDecision::Allow);
        assert_eq!(decide(Access::Admin, &signed_in(member("member", true))), GuardDecision::Allow);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, provide_auth_state, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(Some(regular_user()), false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(None, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(None, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            provide_auth_state(Some(admin_user(false)), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth_state(Some(regular_user()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_while_session_is_loading() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(admin_user(true)),
                is_authenticated: true,
                loading: true,
            });
            provide_context((auth, set_auth));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
        assert!(html.contains("animate-spin"));
    }
}
