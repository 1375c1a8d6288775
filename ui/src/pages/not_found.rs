use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center space-y-2">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-300">
                {"Page not found"}
            </p>
            <Link<Route> to={Route::Spaces} classes="underline">
                {"Back to spaces"}
            </Link<Route>>
        </div>
    }
}
