use contracts::system::auth::AuthSession;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn has_token(&self) -> bool {
        self.session.as_ref().map(|s| s.has_token()).unwrap_or(false)
    }

    pub fn username(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.username.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session the host shell left in localStorage on mount
    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            if !token.trim().is_empty() {
                set_auth_state.set(AuthState {
                    session: Some(AuthSession {
                        token,
                        username: storage::get_username(),
                    }),
                });
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
