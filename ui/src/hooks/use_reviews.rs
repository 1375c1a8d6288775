use payloads::{Review, SpaceId};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Reviews of a space, newest first.
#[hook]
pub fn use_reviews(space_id: SpaceId) -> FetchHookReturn<Vec<Review>> {
    use_fetch(space_id, move || async move {
        get_api_client()
            .list_reviews_for_space(&space_id)
            .await
            .map_err(|e| e.to_string())
    })
}
