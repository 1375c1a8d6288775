use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use jiff::Timestamp;
use payloads::{Review, ReviewId, requests};
use std::collections::HashMap;

use super::tables::select_rows;
use super::{
    BackendError, BackendState, check_api_key, require_user, session_user,
};

type Query = web::Query<HashMap<String, String>>;

/// Filtered read of a table. Reservations and payments are only visible to
/// the user who owns the reservation; anything else reads as an empty array.
#[tracing::instrument(skip(req, query, state), fields(user_id))]
#[get("/rest/v1/{table}")]
pub async fn read_table(
    req: HttpRequest,
    table: web::Path<String>,
    query: Query,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    if state.is_unavailable(&table) {
        return Err(BackendError::Unavailable);
    }
    let viewer = session_user(&req, &state);
    let tables = state.tables();

    let rows = match table.as_str() {
        "spaces" => select_rows(&tables.spaces, &query)?,
        "reviews" => select_rows(&tables.reviews, &query)?,
        "reservations" => {
            let visible: Vec<_> = tables
                .reservations
                .iter()
                .filter(|r| Some(r.user_id) == viewer)
                .collect();
            select_rows(&visible, &query)?
        }
        "payments" => {
            let visible: Vec<_> = tables
                .payments
                .iter()
                .filter(|p| {
                    viewer.is_some_and(|user_id| {
                        tables.owns_reservation(&user_id, &p.reservation_id)
                    })
                })
                .collect();
            select_rows(&visible, &query)?
        }
        _ => return Err(BackendError::NotFound("table")),
    };

    Ok(HttpResponse::Ok().json(rows))
}

#[tracing::instrument(skip(req, state), fields(user_id))]
#[post("/rest/v1/reviews")]
pub async fn create_review(
    req: HttpRequest,
    details: web::Json<requests::CreateReview>,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;
    let validation =
        requests::validate_review(details.rating, details.comment.as_deref());
    if let Some(message) = validation.error_message() {
        return Err(BackendError::BadRequest(message.into()));
    }

    let mut tables = state.tables();
    if !tables.spaces.iter().any(|s| s.id == details.space_id) {
        return Err(BackendError::BadRequest("unknown space".into()));
    }
    let review = Review {
        id: ReviewId::new_v4(),
        space_id: details.space_id,
        user_id,
        rating: details.rating,
        comment: details.comment.clone(),
        created_at: Timestamp::now(),
    };
    tables.reviews.push(review.clone());

    Ok(HttpResponse::Created().json(vec![review]))
}

/// Updates only rows the caller wrote; others are silently left alone.
#[tracing::instrument(skip(req, query, state), fields(user_id))]
#[patch("/rest/v1/reviews")]
pub async fn update_review(
    req: HttpRequest,
    query: Query,
    details: web::Json<requests::UpdateReview>,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;
    let validation =
        requests::validate_review(details.rating, details.comment.as_deref());
    if let Some(message) = validation.error_message() {
        return Err(BackendError::BadRequest(message.into()));
    }

    let mut tables = state.tables();
    let targets = matching_review_ids(&tables.reviews, &query)?;
    let mut updated = Vec::new();
    for review in tables.reviews.iter_mut() {
        if targets.contains(&review.id) && review.user_id == user_id {
            review.rating = details.rating;
            review.comment = details.comment.clone();
            updated.push(review.clone());
        }
    }

    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(skip(req, query, state), fields(user_id))]
#[delete("/rest/v1/reviews")]
pub async fn delete_review(
    req: HttpRequest,
    query: Query,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;

    let mut tables = state.tables();
    let targets = matching_review_ids(&tables.reviews, &query)?;
    tables
        .reviews
        .retain(|r| !(targets.contains(&r.id) && r.user_id == user_id));

    Ok(HttpResponse::NoContent().finish())
}

fn matching_review_ids(
    reviews: &[Review],
    query: &HashMap<String, String>,
) -> Result<Vec<ReviewId>, BackendError> {
    select_rows(reviews, query)?
        .into_iter()
        .map(|row| {
            serde_json::from_value::<Review>(row)
                .map(|r| r.id)
                .map_err(|e| BackendError::BadRequest(e.to_string()))
        })
        .collect()
}
