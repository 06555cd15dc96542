//! Landing page at `/` shown after login.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::state::session::AuthState;

const FALLBACK_NAME: &str = "Connekta user";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<RwSignal<ApiClient>>();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "browser")]
        {
            if let Err(e) = crate::state::session::Session::clear(&crate::util::storage::LocalStore) {
                log::warn!("failed to clear stored session: {e}");
            }
        }
        api.update(|client| *client = client.without_bearer());
        auth.set(AuthState::default());
    };

    view! {
        <div class="home-page">
            <Show
                when=move || auth.with(AuthState::is_signed_in)
                fallback=|| view! {
                    <p>"You are not signed in. " <a href="/login">"Sign in"</a></p>
                }
            >
                <p>
                    "Signed in as "
                    {move || auth.with(|a| a.display_name().unwrap_or(FALLBACK_NAME).to_owned())}
                </p>
                <button class="signout-button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
