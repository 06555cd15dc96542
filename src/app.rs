//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::client::ApiClient;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::session::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth state and the API client, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let api = RwSignal::new(ApiClient::new(ApiConfig::from_build_env()));
    provide_context(auth);
    provide_context(api);

    // Runs only in the browser, after hydration or mount.
    #[cfg(feature = "browser")]
    Effect::new(move || {
        use crate::state::session::Session;
        use crate::util::storage::LocalStore;

        if let Some(session) = Session::restore(&LocalStore) {
            api.update(|client| *client = client.with_bearer(&session.token));
            auth.set(AuthState::signed_in(session));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/connekta-login.css"/>
        <Title text="Connekta"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
