use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_sign_out;
use crate::{AuthState, Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_sign_out = use_sign_out();

    let link_class = "text-sm text-neutral-700 dark:text-neutral-300 \
                      hover:text-neutral-900 dark:hover:text-white";

    let session_links = match &state.auth_state {
        AuthState::Unknown => html! {},
        AuthState::SignedOut => html! {
            <Link<Route> to={Route::SignIn} classes={link_class}>
                {"Sign in"}
            </Link<Route>>
        },
        AuthState::SignedIn(user) => html! {
            <>
                <Link<Route> to={Route::Dashboard} classes={link_class}>
                    {"My reservations"}
                </Link<Route>>
                <span class="text-sm text-neutral-500">{&user.email}</span>
                <button onclick={on_sign_out} class={link_class}>
                    {"Sign out"}
                </button>
            </>
        },
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b \
                       border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route>
                        to={Route::Spaces}
                        classes="text-xl font-semibold text-neutral-900 \
                                 dark:text-white"
                    >
                        {"Spaces"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-4">
                        {session_links}
                    </nav>
                </div>
            </div>
        </header>
    }
}
