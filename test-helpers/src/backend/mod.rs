//! An in-process stand-in for the hosted backend. It speaks the same HTTP
//! surface that `payloads::APIClient` consumes: password auth under
//! `/auth/v1`, filtered table reads and writes under `/rest/v1`, and the two
//! remote procedures used for booking and paying.

mod auth;
mod rest;
mod rpc;
pub mod tables;

pub use tables::BackendState;

use actix_web::dev::Server;
use actix_web::{App, HttpRequest, HttpResponse, ResponseError, web};
use payloads::UserId;
use std::net::TcpListener;

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Project key every request must present in the `apikey` header.
    pub api_key: String,
}

#[derive(Debug, Clone)]
struct ProjectKey(String);

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    state: BackendState,
) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let project_key = web::Data::new(ProjectKey(config.api_key.clone()));

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = actix_web::HttpServer::new(move || {
        App::new()
            .service(auth::sign_in)
            .service(auth::current_user)
            .service(auth::sign_out)
            .service(rpc::create_reservation)
            .service(rpc::process_payment)
            .service(rest::read_table)
            .service(rest::create_review)
            .service(rest::update_review)
            .service(rest::delete_review)
            .app_data(state.clone())
            .app_data(project_key.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Authentication required")]
    Unauthorized,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Service unavailable")]
    Unavailable,
}

impl ResponseError for BackendError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::InvalidApiKey | Self::Unauthorized => {
                HttpResponse::Unauthorized().body(self.to_string())
            }
            Self::InvalidCredentials | Self::BadRequest(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
            Self::NotFound(_) => {
                HttpResponse::NotFound().body(self.to_string())
            }
            Self::Conflict(_) => {
                HttpResponse::Conflict().body(self.to_string())
            }
            Self::Unavailable => {
                HttpResponse::ServiceUnavailable().body(self.to_string())
            }
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Every request must carry the project key.
fn check_api_key(req: &HttpRequest) -> Result<(), BackendError> {
    let expected = req
        .app_data::<web::Data<ProjectKey>>()
        .ok_or(BackendError::InvalidApiKey)?;
    let presented = req.headers().get("apikey").and_then(|v| v.to_str().ok());
    if presented != Some(expected.0.as_str()) {
        return Err(BackendError::InvalidApiKey);
    }
    Ok(())
}

/// The user behind the bearer token, or None for anonymous requests (the
/// bearer is then the project key itself).
fn session_user(req: &HttpRequest, state: &BackendState) -> Option<UserId> {
    let token = bearer_token(req)?;
    state.tables().tokens.get(token).copied()
}

fn require_user(
    req: &HttpRequest,
    state: &BackendState,
) -> Result<UserId, BackendError> {
    let user_id = session_user(req, state).ok_or(BackendError::Unauthorized)?;
    tracing::Span::current()
        .record("user_id", tracing::field::display(&user_id));
    Ok(user_id)
}
