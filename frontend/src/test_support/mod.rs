#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user(system_admin: bool) -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            username: "admin".into(),
            full_name: "Admin User".into(),
            role: "admin".into(),
            is_system_admin: system_admin,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            username: "member".into(),
            full_name: "Regular User".into(),
            role: "member".into(),
            is_system_admin: false,
        }
    }

    /// `user == None` provides an anonymous session.
    pub fn provide_auth_state(
        user: Option<UserResponse>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
