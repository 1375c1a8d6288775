use payloads::{Space, SpaceId};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

#[hook]
pub fn use_spaces() -> FetchHookReturn<Vec<Space>> {
    use_fetch((), || async {
        get_api_client()
            .list_spaces()
            .await
            .map_err(|e| e.to_string())
    })
}

#[hook]
pub fn use_space(space_id: SpaceId) -> FetchHookReturn<Space> {
    use_fetch(space_id, move || async move {
        get_api_client()
            .get_space(&space_id)
            .await
            .map_err(|e| e.to_string())
    })
}
