use jiff::civil::date;
use payloads::{ClientError, PaymentState, ReservationStatus, requests};
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn no_payment_yet_is_not_found() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let reservation = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 1),
    );

    let result = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await;
    assert!(matches!(result, Err(ClientError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn submit_payment_settles_the_reservation() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let reservation = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 2),
    );

    let payment = app
        .client
        .submit_payment(&requests::SubmitPayment {
            reservation_id: reservation.id,
            amount: dec!(500),
        })
        .await?;
    assert_eq!(payment.status, PaymentState::Paid);
    assert_eq!(payment.amount, dec!(500));

    let fetched = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await?;
    assert_eq!(fetched, payment);

    let updated = app.client.get_reservation_by_id(&reservation.id).await?;
    assert_eq!(updated.status, ReservationStatus::Confirmed);

    // paying twice is refused
    let again = app
        .client
        .submit_payment(&requests::SubmitPayment {
            reservation_id: reservation.id,
            amount: dec!(500),
        })
        .await;
    assert_status_code(again, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn payment_amount_must_match_total() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let reservation = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 1),
    );

    let result = app
        .client
        .submit_payment(&requests::SubmitPayment {
            reservation_id: reservation.id,
            amount: dec!(1),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert!(app.backend.payment_for(&reservation.id).is_none());

    Ok(())
}

#[tokio::test]
async fn failed_attempt_is_replaced_by_new_payment() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let reservation = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 1),
    );
    app.record_payment(&reservation, PaymentState::Failed);

    let previous = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await?;
    assert_eq!(previous.status, PaymentState::Failed);

    app.client
        .submit_payment(&requests::SubmitPayment {
            reservation_id: reservation.id,
            amount: reservation.total_price,
        })
        .await?;

    let current = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await?;
    assert_eq!(current.status, PaymentState::Paid);
    assert_ne!(current.id, previous.id);

    Ok(())
}

#[tokio::test]
async fn unavailable_table_surfaces_as_api_error() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let reservation = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 1),
    );

    app.backend.set_table_unavailable("payments", true);
    let result = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await;
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);

    app.backend.set_table_unavailable("payments", false);
    let result = app
        .client
        .get_payments_by_reservation_id(&reservation.id)
        .await;
    assert!(matches!(result, Err(ClientError::NotFound)));

    Ok(())
}
