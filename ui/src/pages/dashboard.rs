use std::collections::HashMap;

use payloads::{Reservation, ReservationStatus, SpaceId, UserIdentity};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_spaces, use_user_reservations};
use crate::utils::format_amount;
use crate::utils::time::format_date_range;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user: UserIdentity,
}

#[function_component]
pub fn DashboardPage(props: &Props) -> Html {
    let reservations = use_user_reservations(props.user.id);
    let spaces = use_spaces();

    let space_names: HashMap<SpaceId, String> = spaces
        .data
        .as_ref()
        .map(|spaces| {
            spaces.iter().map(|s| (s.id, s.name.clone())).collect()
        })
        .unwrap_or_default();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"My reservations"}</h1>
            {reservations.render("reservations", |reservations, _| {
                if reservations.is_empty() {
                    return html! {
                        <p class="text-neutral-500">
                            {"You have no reservations yet. "}
                            <Link<Route> to={Route::Spaces} classes="underline">
                                {"Browse spaces"}
                            </Link<Route>>
                        </p>
                    };
                }
                html! {
                    <ul class="divide-y divide-neutral-200">
                        {for reservations.iter().map(|reservation| {
                            reservation_row(reservation, &space_names)
                        })}
                    </ul>
                }
            })}
        </div>
    }
}

fn reservation_row(
    reservation: &Reservation,
    space_names: &HashMap<SpaceId, String>,
) -> Html {
    let space_name = space_names
        .get(&reservation.space_id)
        .map_or("Space", String::as_str);
    let payment_route = Route::Payment {
        reservation_id: reservation.id.to_string(),
    };

    html! {
        <li key={reservation.id.to_string()} class="py-4 flex justify-between">
            <div>
                <p class="font-medium">{space_name}</p>
                <p class="text-sm text-neutral-500">
                    {format_date_range(
                        reservation.start_date,
                        reservation.end_date,
                    )}
                </p>
            </div>
            <div class="text-right space-y-1">
                <p>{format_amount(reservation.total_price)}</p>
                <p class="text-sm">{reservation.status.label()}</p>
                if reservation.status == ReservationStatus::Pending {
                    <Link<Route> to={payment_route} classes="text-sm underline">
                        {"Pay now"}
                    </Link<Route>>
                }
            </div>
        </li>
    }
}
