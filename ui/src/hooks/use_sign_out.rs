use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::auth::clear_access_token;
use crate::navigation::Navigate;
use crate::{Route, State, get_api_client};

#[hook]
pub fn use_sign_out() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // The token is revoked server-side on a best-effort basis; the
            // local session ends regardless.
            if let Err(e) = get_api_client().sign_out().await {
                tracing::warn!("sign out request failed: {e}");
            }
            clear_access_token();
            dispatch.reduce_mut(State::sign_out);

            if let Some(navigator) = navigator {
                Navigate::push(&navigator, &Route::SignIn);
            }
        });
    })
}
