use jiff::civil::date;
use payloads::{ClientError, ReservationId, ReservationStatus, requests};
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_reservation_prices_every_day() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));

    let reservation = app
        .client
        .create_reservation(&requests::CreateReservation {
            space_id: room.id,
            start_date: date(2025, 4, 1),
            end_date: date(2025, 4, 3),
        })
        .await?;

    assert_eq!(reservation.user_id, alice.id);
    assert_eq!(reservation.total_price, dec!(750));
    assert_eq!(reservation.status, ReservationStatus::Pending);

    let fetched = app.client.get_reservation_by_id(&reservation.id).await?;
    assert_eq!(fetched, reservation);

    Ok(())
}

#[tokio::test]
async fn overlapping_reservation_conflicts() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));

    let first = requests::CreateReservation {
        space_id: room.id,
        start_date: date(2025, 4, 1),
        end_date: date(2025, 4, 3),
    };
    app.client.create_reservation(&first).await?;

    let overlapping = requests::CreateReservation {
        start_date: date(2025, 4, 3),
        end_date: date(2025, 4, 5),
        ..first.clone()
    };
    let result = app.client.create_reservation(&overlapping).await;
    assert_status_code(result, StatusCode::CONFLICT);

    let inverted = requests::CreateReservation {
        start_date: date(2025, 5, 3),
        end_date: date(2025, 5, 1),
        ..first
    };
    let result = app.client.create_reservation(&inverted).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn booking_requires_sign_in() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let room = app.create_space("Meeting room", dec!(250));

    let result = app
        .client
        .create_reservation(&requests::CreateReservation {
            space_id: room.id,
            start_date: date(2025, 4, 1),
            end_date: date(2025, 4, 1),
        })
        .await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    Ok(())
}

#[tokio::test]
async fn reservations_are_private_to_their_owner() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let alices = app.create_reservation(
        &alice,
        &room,
        date(2025, 4, 1),
        date(2025, 4, 1),
    );

    app.create_bob_user().await?;
    let result = app.client.get_reservation_by_id(&alices.id).await;
    assert!(matches!(result, Err(ClientError::NotFound)));

    let unknown_id = ReservationId::new_v4();
    let unknown = app.client.get_reservation_by_id(&unknown_id);
    assert!(matches!(unknown.await, Err(ClientError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn list_reservations_newest_first() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let room = app.create_space("Meeting room", dec!(250));
    let early = app.create_reservation(
        &alice,
        &room,
        date(2025, 1, 5),
        date(2025, 1, 5),
    );
    let late = app.create_reservation(
        &alice,
        &room,
        date(2025, 9, 1),
        date(2025, 9, 2),
    );

    let listed = app.client.list_reservations_for_user(&alice.id).await?;
    let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}
