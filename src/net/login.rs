//! Login submission handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` and `connekta-cli` both call `run_submission`. It owns the
//! whole attempt: form events in, one HTTP call, session bootstrap on
//! success, one user-facing message on failure.
//!
//! ERROR HANDLING
//! ==============
//! Every branch logs its diagnostic detail through `log`. Only
//! `LoginError::user_message()` reaches the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::client::ApiClient;
use super::error::LoginError;
use super::transport::AuthTransport;
use super::types::{LoginRequest, LoginResponse, scalar_text};
use crate::config::HOME_ROUTE;
use crate::state::login_form::{FormEvent, LoginForm};
use crate::state::session::Session;
use crate::util::storage::{SessionStore, StorageError};

/// Where the caller should go once the attempt resolves.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Login succeeded; route to `to` and use `client` for later requests.
    /// `persisted` reports whether the session reached the store.
    Navigate {
        to: &'static str,
        session: Session,
        client: ApiClient,
        persisted: Result<(), StorageError>,
    },
    /// Login failed; the form already holds the error message.
    Stay,
}

/// Send `request` and classify the reply.
///
/// # Errors
///
/// Returns the `LoginError` bucket the attempt fell into.
pub async fn authenticate<T>(transport: &T, client: &ApiClient, request: &LoginRequest) -> Result<Session, LoginError>
where
    T: AuthTransport + ?Sized,
{
    log::debug!("sending login request: {request:?}");

    let http = client.login_request(request).inspect_err(|e| {
        log::error!("login request setup error: {e}");
    })?;
    let raw = transport.send(http).await.inspect_err(|e| {
        log::error!("login transport error: {e}");
    })?;
    log::debug!("login response: status={} body={:?}", raw.status, raw.body);

    if !raw.is_success() {
        log::error!("login rejected: status={} body={:?}", raw.status, raw.body);
        return Err(LoginError::Rejected { status: raw.status, body: raw.body });
    }

    let parsed = raw
        .body
        .clone()
        .and_then(|body| serde_json::from_value::<LoginResponse>(body).ok())
        .and_then(|resp| Some(Session { token: scalar_text(&resp.token)?, user: resp.user }));
    match parsed {
        Some(session) => Ok(session),
        None => {
            log::error!("invalid login response format: {:?}", raw.body);
            Err(LoginError::MalformedResponse { body: raw.body })
        }
    }
}

/// Run one login attempt against `form`, reporting progress through
/// `dispatch`.
///
/// Emits `SubmitStarted` first and `SubmitFinished` last on every path, with
/// at most one `SubmitFailed` in between. On success the session is written
/// to `store` before returning; a failed write is reported in the outcome,
/// not as a form error.
pub async fn run_submission<T, S, F>(
    form: &LoginForm,
    transport: &T,
    store: &S,
    client: &ApiClient,
    mut dispatch: F,
) -> SubmissionOutcome
where
    T: AuthTransport + ?Sized,
    S: SessionStore + ?Sized,
    F: FnMut(FormEvent),
{
    dispatch(FormEvent::SubmitStarted);

    let request = LoginRequest::from_input(&form.email, &form.password);
    let outcome = match authenticate(transport, client, &request).await {
        Ok(session) => {
            let (client, persisted) = session.bootstrap(store, client);
            log::info!("login succeeded; navigating to {HOME_ROUTE}");
            SubmissionOutcome::Navigate { to: HOME_ROUTE, session, client, persisted }
        }
        Err(err) => {
            dispatch(FormEvent::SubmitFailed(err.user_message()));
            SubmissionOutcome::Stay
        }
    };

    dispatch(FormEvent::SubmitFinished);
    outcome
}
