use actix_web::{HttpRequest, HttpResponse, post, web};
use jiff::Timestamp;
use payloads::{
    Payment, PaymentId, PaymentState, Reservation, ReservationId,
    ReservationStatus, requests,
};

use super::{BackendError, BackendState, check_api_key, require_user};

#[tracing::instrument(skip(req, state), fields(user_id))]
#[post("/rest/v1/rpc/create_reservation")]
pub async fn create_reservation(
    req: HttpRequest,
    details: web::Json<requests::CreateReservation>,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;
    requests::validate_reservation_dates(details.start_date, details.end_date)
        .map_err(|e| BackendError::BadRequest(e.to_string()))?;

    let mut tables = state.tables();
    let space = tables
        .spaces
        .iter()
        .find(|s| s.id == details.space_id)
        .ok_or(BackendError::NotFound("space"))?;
    let total_price = space
        .total_for(details.start_date, details.end_date)
        .ok_or_else(|| BackendError::BadRequest("invalid date range".into()))?;

    let overlaps = tables.reservations.iter().any(|r| {
        r.space_id == details.space_id
            && r.status != ReservationStatus::Cancelled
            && r.start_date <= details.end_date
            && details.start_date <= r.end_date
    });
    if overlaps {
        return Err(BackendError::Conflict(
            "space is already reserved for those dates".into(),
        ));
    }

    let reservation = Reservation {
        id: ReservationId::new_v4(),
        space_id: details.space_id,
        user_id,
        start_date: details.start_date,
        end_date: details.end_date,
        total_price,
        status: ReservationStatus::Pending,
    };
    tables.reservations.push(reservation.clone());
    tracing::info!(reservation_id = %reservation.id, "reservation created");

    Ok(HttpResponse::Ok().json(reservation))
}

/// Settles a reservation. The amount must match the reservation total, and a
/// reservation can only be paid once; an earlier unpaid attempt is replaced.
#[tracing::instrument(skip(req, state), fields(user_id))]
#[post("/rest/v1/rpc/process_payment")]
pub async fn process_payment(
    req: HttpRequest,
    details: web::Json<requests::SubmitPayment>,
    state: web::Data<BackendState>,
) -> Result<HttpResponse, BackendError> {
    check_api_key(&req)?;
    let user_id = require_user(&req, &state)?;

    let mut tables = state.tables();
    let already_paid = tables.payments.iter().any(|p| {
        p.reservation_id == details.reservation_id && p.status.is_paid()
    });
    let reservation = tables
        .reservations
        .iter_mut()
        .find(|r| r.id == details.reservation_id && r.user_id == user_id)
        .ok_or(BackendError::NotFound("reservation"))?;
    if already_paid {
        return Err(BackendError::Conflict("reservation already paid".into()));
    }
    if reservation.status == ReservationStatus::Cancelled {
        return Err(BackendError::Conflict("reservation is cancelled".into()));
    }
    if reservation.total_price != details.amount {
        return Err(BackendError::BadRequest(format!(
            "amount {} does not match reservation total {}",
            details.amount, reservation.total_price
        )));
    }
    reservation.status = ReservationStatus::Confirmed;

    tables
        .payments
        .retain(|p| p.reservation_id != details.reservation_id);

    let payment = Payment {
        id: PaymentId::new_v4(),
        reservation_id: details.reservation_id,
        amount: details.amount,
        status: PaymentState::Paid,
        created_at: Timestamp::now(),
    };
    tables.payments.push(payment.clone());
    tracing::info!(payment_id = %payment.id, "payment processed");

    Ok(HttpResponse::Ok().json(payment))
}
