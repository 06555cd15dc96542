//! Login page: email + password form posting to the backend auth endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "browser")]
use leptos_router::hooks::use_navigate;

use crate::config::SIGNUP_ROUTE;
#[cfg(feature = "browser")]
use crate::net::client::ApiClient;
use crate::state::login_form::{Field, FormEvent, LoginForm};
#[cfg(feature = "browser")]
use crate::state::session::AuthState;

/// A click is ignored while an attempt is already in flight.
fn can_submit(form: &LoginForm) -> bool {
    !form.loading
}

fn field_changed(field: Field, value: String) -> FormEvent {
    FormEvent::FieldChanged { field, value }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    #[cfg(feature = "browser")]
    let (auth, api, navigate) = (
        expect_context::<RwSignal<AuthState>>(),
        expect_context::<RwSignal<ApiClient>>(),
        use_navigate(),
    );

    let dispatch = move |event: FormEvent| {
        form.update(|state| *state = std::mem::take(state).reduce(event));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        if !can_submit(&snapshot) {
            return;
        }

        #[cfg(feature = "browser")]
        leptos::task::spawn_local({
            use leptos_router::NavigateOptions;

            use crate::net::login::{SubmissionOutcome, run_submission};
            use crate::net::transport::GlooTransport;
            use crate::util::storage::LocalStore;

            let navigate = navigate.clone();
            async move {
                let client = api.get_untracked();
                let outcome = run_submission(&snapshot, &GlooTransport, &LocalStore, &client, dispatch).await;
                if let SubmissionOutcome::Navigate { to, session, client, .. } = outcome {
                    api.set(client);
                    auth.set(AuthState::signed_in(session));
                    navigate(to, NavigateOptions::default());
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Connekta"</h1>
                <Show when=move || form.with(LoginForm::has_error)>
                    <div class="error-message">{move || form.with(|f| f.error.clone())}</div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        id="email"
                        name=Field::Email.name()
                        placeholder="Email"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| dispatch(field_changed(Field::Email, event_target_value(&ev)))
                    />
                    <input
                        class="login-input"
                        type="password"
                        id="password"
                        name=Field::Password.name()
                        placeholder="Password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| dispatch(field_changed(Field::Password, event_target_value(&ev)))
                    />
                    <div class="button-group">
                        <button class="login-button" type="submit" disabled=move || form.with(|f| f.loading)>
                            {move || form.with(LoginForm::submit_label)}
                        </button>
                        <a href=SIGNUP_ROUTE class="signup-button">
                            "Sign Up"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
