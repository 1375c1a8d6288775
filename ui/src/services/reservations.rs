use jiff::civil::Date;
use payloads::requests::{self, validate_reservation_dates};
use payloads::{APIClient, Reservation, SpaceId};

use super::Notify;

/// Book `space_id` for the inclusive range `start..=end`.
pub async fn create_reservation(
    client: &APIClient,
    notify: &impl Notify,
    space_id: SpaceId,
    start_date: Date,
    end_date: Date,
) -> Option<Reservation> {
    if let Err(e) = validate_reservation_dates(start_date, end_date) {
        notify.error(&e.to_string());
        return None;
    }

    let details = requests::CreateReservation {
        space_id,
        start_date,
        end_date,
    };
    match client.create_reservation(&details).await {
        Ok(reservation) => {
            tracing::info!(
                reservation = %reservation.id,
                "reservation created"
            );
            notify.success("Reservation created. Pay now to confirm it.");
            Some(reservation)
        }
        Err(e) => {
            tracing::warn!(%space_id, "reservation failed: {e}");
            notify.error(&format!("Could not create reservation: {e}"));
            None
        }
    }
}
