mod store;
#[cfg(test)]
mod test_server;
mod transport;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use connekta_login::config::{ApiConfig, DEFAULT_API_BASE_URL};
use connekta_login::net::client::ApiClient;
use connekta_login::net::login::{SubmissionOutcome, run_submission};
use connekta_login::net::transport::{AuthTransport, RawResponse, TransportError};
use connekta_login::state::login_form::{Field, FormEvent, LoginForm};
use connekta_login::state::session::Session;
use connekta_login::util::storage::{SessionStore, StorageError};
use serde_json::Value;

use store::FileStore;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    LoginFailed(String),
    #[error("not signed in; run `connekta-cli login` first")]
    NotSignedIn,
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("server returned HTTP {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "connekta-cli", about = "Connekta login and session CLI")]
struct Cli {
    #[arg(long, env = "CONNEKTA_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CONNEKTA_SESSION_FILE", default_value = ".connekta-session.json")]
    session_file: PathBuf,

    #[arg(long, env = "CONNEKTA_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the returned session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CONNEKTA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove the stored session.
    Logout,
    /// Print the stored session's user record.
    Session,
    /// Authorized GET against an API path, e.g. `/users/all`.
    Get { path: String },
}

struct CliContext {
    client: ApiClient,
    store: FileStore,
    transport: ReqwestTransport,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let ctx = CliContext {
        client: ApiClient::new(ApiConfig::new(&cli.base_url)),
        store: FileStore::new(cli.session_file),
        transport: ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?,
    };

    match cli.command {
        Command::Login { email, password } => run_login(&ctx, email, password).await,
        Command::Logout => run_logout(&ctx),
        Command::Session => run_session(&ctx),
        Command::Get { path } => run_get(&ctx, &path).await,
    }
}

async fn run_login(ctx: &CliContext, email: String, password: String) -> Result<(), CliError> {
    let (session, email) = login(&ctx.transport, &ctx.store, &ctx.client, email, password).await?;
    tracing::info!(path = %ctx.store.path().display(), "session stored");
    println!("Signed in as {}", session.display_name().unwrap_or(email.as_str()));
    Ok(())
}

/// Drive one submission. A session that could not be written counts as a
/// failed login, since later commands would not find it.
async fn login<T, S>(
    transport: &T,
    store: &S,
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<(Session, String), CliError>
where
    T: AuthTransport + ?Sized,
    S: SessionStore + ?Sized,
{
    let form = LoginForm::default()
        .reduce(FormEvent::FieldChanged { field: Field::Email, value: email })
        .reduce(FormEvent::FieldChanged { field: Field::Password, value: password });

    let mut state = form.clone();
    let outcome = run_submission(&form, transport, store, client, |event| {
        tracing::debug!(?event, "login form event");
        state = std::mem::take(&mut state).reduce(event);
    })
    .await;

    match outcome {
        SubmissionOutcome::Navigate { session, persisted, .. } => {
            persisted?;
            Ok((session, state.email))
        }
        SubmissionOutcome::Stay => Err(CliError::LoginFailed(state.error)),
    }
}

fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    Session::clear(&ctx.store)?;
    println!("Signed out");
    Ok(())
}

fn run_session(ctx: &CliContext) -> Result<(), CliError> {
    let session = Session::restore(&ctx.store).ok_or(CliError::NotSignedIn)?;
    print_json(&session.user)
}

async fn run_get(ctx: &CliContext, path: &str) -> Result<(), CliError> {
    let session = Session::restore(&ctx.store).ok_or(CliError::NotSignedIn)?;
    let client = ctx.client.with_bearer(&session.token);

    let resp = ctx.transport.send(client.get(path)).await?;
    print_json(&response_json(resp)?)
}

/// Body of a 2xx response, `null` when empty; anything else is an error.
fn response_json(resp: RawResponse) -> Result<Value, CliError> {
    if !resp.is_success() {
        let body = resp.body.map_or_else(String::new, |body| body.to_string());
        return Err(CliError::ServerError { status: resp.status, body });
    }
    Ok(resp.body.unwrap_or(Value::Null))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
