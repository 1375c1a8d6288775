use yew::prelude::*;
use yewdux::prelude::*;

use crate::auth::{clear_access_token, stored_access_token};
use crate::{State, get_api_client};

/// Resolve the session once on startup from the stored access token.
/// Until this settles the store reports the session as loading.
#[hook]
pub fn use_session_bootstrap() {
    let (_, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        if stored_access_token().is_none() {
            dispatch.reduce_mut(State::sign_out);
            return;
        }

        yew::platform::spawn_local(async move {
            match get_api_client().current_user().await {
                Ok(user) => {
                    tracing::debug!(user = %user.id, "restored session");
                    dispatch.reduce_mut(|state| state.sign_in(user));
                }
                Err(e) => {
                    tracing::info!("stored session rejected: {e}");
                    clear_access_token();
                    dispatch.reduce_mut(State::sign_out);
                }
            }
        });
    });
}
