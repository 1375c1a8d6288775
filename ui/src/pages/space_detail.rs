use payloads::{Reservation, SpaceId};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{ReservationForm, ReviewList};
use crate::hooks::use_space;
use crate::navigation::Navigate;
use crate::pages::NotFoundPage;
use crate::utils::format_amount;
use crate::{Route, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub space_id: String,
}

#[function_component]
pub fn SpaceDetailPage(props: &Props) -> Html {
    match props.space_id.parse::<SpaceId>() {
        Ok(space_id) => html! { <SpaceDetail {space_id} /> },
        Err(_) => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct SpaceDetailProps {
    space_id: SpaceId,
}

#[function_component]
fn SpaceDetail(props: &SpaceDetailProps) -> Html {
    let space = use_space(props.space_id);
    let (state, _) = use_store::<State>();
    let navigator = use_navigator();
    let user = state.user().cloned();

    // New reservations go straight to payment.
    let on_created = Callback::from(move |reservation: Reservation| {
        if let Some(navigator) = &navigator {
            let route = Route::Payment {
                reservation_id: reservation.id.to_string(),
            };
            Navigate::push(navigator, &route);
        }
    });

    html! {
        <div class="space-y-8">
            {space.render("space", |space, _| html! {
                <div class="space-y-4">
                    <h1 class="text-3xl font-bold">{&space.name}</h1>
                    if let Some(description) = &space.description {
                        <p>{description}</p>
                    }
                    <dl class="grid grid-cols-2 gap-2 text-sm max-w-sm">
                        <dt class="text-neutral-500">{"Capacity"}</dt>
                        <dd>{space.capacity.to_string()}</dd>
                        <dt class="text-neutral-500">{"Daily price"}</dt>
                        <dd>{format_amount(space.price_per_day)}</dd>
                        if let Some(location) = &space.location {
                            <>
                                <dt class="text-neutral-500">{"Location"}</dt>
                                <dd>{location}</dd>
                            </>
                        }
                    </dl>
                    if user.is_some() {
                        <ReservationForm
                            space={space.clone()}
                            on_created={on_created.clone()}
                        />
                    } else {
                        <p class="text-sm">
                            <Link<Route> to={Route::SignIn} classes="underline">
                                {"Sign in"}
                            </Link<Route>>
                            {" to reserve this space."}
                        </p>
                    }
                </div>
            })}
            <ReviewList space_id={props.space_id} user={user.clone()} />
        </div>
    }
}
