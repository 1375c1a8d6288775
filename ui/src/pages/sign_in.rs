use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::auth::store_access_token;
use crate::navigation::Navigate;
use crate::utils::is_dev_mode;
use crate::{Route, State, get_api_client};

#[function_component]
pub fn SignInPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already signed in: nothing to do here.
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_authenticated(), move |signed_in| {
            if *signed_in && let Some(navigator) = navigator {
                Navigate::replace(&navigator, &Route::Dashboard);
            }
        });
    }

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.is_empty() || password.is_empty() {
                error_message
                    .set(Some("Please enter your email and password".into()));
                return;
            }

            let details = requests::SignIn {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match get_api_client().sign_in(&details).await {
                    Ok(session) => {
                        tracing::info!(user = %session.user.id, "signed in");
                        store_access_token(&session.access_token);
                        dispatch.reduce_mut(|s| s.sign_in(session.user));
                        if let Some(navigator) = navigator {
                            Navigate::push(&navigator, &Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        tracing::info!("sign in refused: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let button_text = if *is_loading { "Signing in..." } else { "Sign in" };
    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md shadow-sm \
                       bg-white dark:bg-neutral-700";

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 \
                        rounded-lg shadow-md">
                <h1 class="text-2xl font-bold mb-6 text-center">
                    {"Sign in"}
                </h1>
                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md bg-red-50 \
                                    dark:bg-red-900/20 border border-red-200">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                    <label class="block text-sm font-medium">
                        {"Email"}
                        <input
                            type="email"
                            autocomplete="email"
                            class={input_class}
                            value={(*email).clone()}
                            onchange={on_email_change}
                        />
                    </label>
                    <label class="block text-sm font-medium">
                        {"Password"}
                        <input
                            type="password"
                            autocomplete="current-password"
                            class={input_class}
                            value={(*password).clone()}
                            onchange={on_password_change}
                        />
                    </label>
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full px-4 py-2 rounded-md bg-neutral-900 \
                               text-white hover:bg-neutral-700 \
                               disabled:opacity-50"
                    >
                        {button_text}
                    </button>
                </form>
                if is_dev_mode() {
                    <p class="mt-4 text-xs text-neutral-500 text-center">
                        {"Dev credentials: alice@example.com / supersecret"}
                    </p>
                }
            </div>
        </div>
    }
}
