use payloads::{Reservation, ReservationId};
use yew::prelude::*;

use crate::get_api_client;
use crate::payment_status::{
    LoadCycles, PaymentPageStatus, PaymentStatusAction, PaymentStatusState,
    resolve_payment_lookup,
};

pub struct PaymentStatusHandle {
    pub status: PaymentPageStatus,
    pub reservation: Option<Reservation>,
    /// Start a fresh load cycle for the same reservation.
    pub retry: Callback<()>,
}

/// Load the reservation and its payment whenever `reservation_id` changes.
/// With no id nothing is fetched and the status stays `Loading`.
#[hook]
pub fn use_payment_status(
    reservation_id: Option<ReservationId>,
) -> PaymentStatusHandle {
    let state = use_reducer(PaymentStatusState::default);
    let cycles = use_mut_ref(LoadCycles::default);

    let load = {
        let state = state.clone();
        use_callback(reservation_id, move |_: (), reservation_id| {
            let Some((current, reservation_id)) =
                cycles.borrow_mut().begin(*reservation_id)
            else {
                return;
            };
            state.dispatch(PaymentStatusAction::Begin {
                generation: current,
            });

            let state = state.clone();
            yew::platform::spawn_local(async move {
                let lookup =
                    resolve_payment_lookup(&get_api_client(), &reservation_id)
                        .await;
                state.dispatch(PaymentStatusAction::Complete {
                    generation: current,
                    lookup,
                });
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(reservation_id, move |_| load.emit(()));
    }

    PaymentStatusHandle {
        status: state.status(),
        reservation: state.reservation().cloned(),
        retry: load,
    }
}
