use payloads::{APIClient, Payment, ReservationId, requests};
use rust_decimal::Decimal;

use super::Notify;
use crate::utils::format_amount;

/// Pay `amount` for a reservation. The backend only accepts the
/// reservation's full total.
pub async fn submit_payment(
    client: &APIClient,
    notify: &impl Notify,
    reservation_id: ReservationId,
    amount: Decimal,
) -> Option<Payment> {
    let details = requests::SubmitPayment {
        reservation_id,
        amount,
    };
    match client.submit_payment(&details).await {
        Ok(payment) if payment.status.is_paid() => {
            tracing::info!(%reservation_id, "payment settled");
            let amount = format_amount(amount);
            notify.success(&format!("Payment of {amount} received"));
            Some(payment)
        }
        Ok(payment) => {
            tracing::warn!(
                %reservation_id,
                status = ?payment.status,
                "payment not settled"
            );
            notify.error("The payment was not approved. Please try again.");
            None
        }
        Err(e) => {
            tracing::error!(%reservation_id, "payment failed: {e}");
            notify.error(&format!("Payment failed: {e}"));
            None
        }
    }
}
