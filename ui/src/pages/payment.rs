use payloads::ReservationId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::PaymentStatusView;
use crate::hooks::use_payment_status;
use crate::navigation::Navigate;
use crate::payment_status::PaymentPageStatus;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Raw route segment; may not be a valid id.
    pub reservation_id: String,
}

pub fn parse_reservation_id(raw: &str) -> Option<ReservationId> {
    raw.parse().ok()
}

/// After a settled payment the visitor goes back to their reservations.
pub fn finish_payment(navigator: &impl Navigate) {
    navigator.push(&Route::Dashboard);
}

#[function_component]
pub fn PaymentPage(props: &Props) -> Html {
    let reservation_id = parse_reservation_id(&props.reservation_id);
    let payment = use_payment_status(reservation_id);
    let navigator = use_navigator();

    // A malformed id never starts a load, so it would stay on Loading.
    if reservation_id.is_none() {
        tracing::debug!(
            raw = %props.reservation_id,
            "malformed reservation id"
        );
        return html! {
            <PaymentStatusView
                status={PaymentPageStatus::NotFound { retryable: false }}
            />
        };
    }

    let on_paid = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            finish_payment(navigator);
        }
    });

    html! {
        <PaymentStatusView
            status={payment.status}
            reservation={payment.reservation}
            on_retry={payment.retry}
            {on_paid}
        />
    }
}
