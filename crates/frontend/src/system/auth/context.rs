use contracts::shared::envelope::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Restores the session from localStorage and provides the auth signals
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(async move {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        match api::get_current_user(&access_token).await {
            Ok(user_info) => set_auth_state.set(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
            }),
            Err(_) => restore_with_refresh(set_auth_state).await,
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Stored access token expired: try the refresh token once
async fn restore_with_refresh(set_auth_state: WriteSignal<AuthState>) {
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return;
    };
    let Ok(response) = api::refresh_token(refresh_token).await else {
        log::info!("session could not be refreshed");
        storage::clear_tokens();
        return;
    };
    storage::save_access_token(&response.access_token);
    if let Ok(user_info) = api::get_current_user(&response.access_token).await {
        set_auth_state.set(AuthState {
            access_token: Some(response.access_token),
            user_info: Some(user_info),
        });
    }
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
    Ok(())
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
