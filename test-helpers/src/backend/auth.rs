use actix_web::{HttpRequest, HttpResponse, get, post, web};
use payloads::{AuthSession, requests};
use std::collections::HashMap;
use uuid::Uuid;

use super::{BackendError, BackendState, check_api_key, require_user};

#[tracing::instrument(skip_all, fields(email = %details.email))]
#[post("/auth/v1/token")]
pub async fn sign_in(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    details: web::Json<requests::SignIn>,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    if query.get("grant_type").map(String::as_str) != Some("password") {
        return Err(BackendError::BadRequest(
            "unsupported grant_type".into(),
        ));
    }

    let mut tables = state.tables();
    let user = tables
        .users
        .iter()
        .find(|u| {
            u.identity.email == details.email && u.password == details.password
        })
        .map(|u| u.identity.clone())
        .ok_or(BackendError::InvalidCredentials)?;

    let access_token = Uuid::new_v4().to_string();
    tables.tokens.insert(access_token.clone(), user.id);

    Ok(HttpResponse::Ok().json(AuthSession {
        access_token,
        token_type: "bearer".into(),
        user,
    }))
}

#[tracing::instrument(skip_all, fields(user_id))]
#[get("/auth/v1/user")]
pub async fn current_user(
    req: HttpRequest,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;
    let tables = state.tables();
    let user = tables
        .users
        .iter()
        .find(|u| u.identity.id == user_id)
        .ok_or(BackendError::Unauthorized)?;
    Ok(HttpResponse::Ok().json(&user.identity))
}

#[tracing::instrument(skip_all)]
#[post("/auth/v1/logout")]
pub async fn sign_out(
    req: HttpRequest,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    if let Some(token) = super::bearer_token(&req) {
        state.tables().tokens.remove(token);
    }
    Ok(HttpResponse::NoContent().finish())
}
