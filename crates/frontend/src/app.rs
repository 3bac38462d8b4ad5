use crate::app_shell::AppShell;
use crate::shared::config::ApiConfig;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Remote API base is injected here so staging builds and component
    // tests can point the app at a different origin.
    provide_context(ApiConfig::default());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
