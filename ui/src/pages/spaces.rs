use payloads::Space;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_spaces;
use crate::utils::format_amount;

#[function_component]
pub fn SpacesPage() -> Html {
    let spaces = use_spaces();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Spaces"}</h1>
            {spaces.render("spaces", |spaces, _| {
                if spaces.is_empty() {
                    return html! {
                        <p class="text-neutral-500">
                            {"No spaces available right now."}
                        </p>
                    };
                }
                html! {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {for spaces.iter().map(space_card)}
                    </div>
                }
            })}
        </div>
    }
}

fn space_card(space: &Space) -> Html {
    let route = Route::SpaceDetail {
        space_id: space.id.to_string(),
    };
    html! {
        <Link<Route>
            to={route}
            classes="block p-4 border border-neutral-200 rounded-lg \
                     hover:border-neutral-400"
        >
            <h2 class="text-lg font-semibold">{&space.name}</h2>
            if let Some(location) = &space.location {
                <p class="text-sm text-neutral-500">{location}</p>
            }
            <p class="mt-2 text-sm">
                {format!("{} / day", format_amount(space.price_per_day))}
            </p>
        </Link<Route>>
    }
}
