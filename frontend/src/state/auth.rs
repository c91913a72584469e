use crate::api::{ApiClient, ApiError, UserResponse};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(result: Result<UserResponse, ApiError>) -> Self {
        match result {
            Ok(user) => Self {
                user: Some(user),
                is_authenticated: true,
                loading: false,
            },
            Err(err) => {
                log::debug!("session check failed: {} ({})", err, err.code);
                Self::default()
            }
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let state = AuthState::from_session(check_auth_status(&api_client).await);
        set_auth_state.set(state);
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

async fn check_auth_status(api_client: &ApiClient) -> Result<UserResponse, ApiError> {
    api_client.get_me().await
}
