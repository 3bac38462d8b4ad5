//! Application shell - auth gate plus the single page of this app.

use crate::domain::a001_supertag::ui::list::SupertagList;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Auth gate component.
///
/// The session itself is owned by the host shell; without a token we only
/// show a notice and keep every action unavailable.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().has_token()
            fallback=|| view! {
                <div class="content">
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            "No active session. Sign in through the host application first."
                        </span>
                    </div>
                </div>
            }
        >
            <SupertagList />
        </Show>
    }
}
