use payloads::{Reservation, UserId};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// The user's reservations, latest start date first.
#[hook]
pub fn use_user_reservations(
    user_id: UserId,
) -> FetchHookReturn<Vec<Reservation>> {
    use_fetch(user_id, move || async move {
        get_api_client()
            .list_reservations_for_user(&user_id)
            .await
            .map_err(|e| e.to_string())
    })
}
