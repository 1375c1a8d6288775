use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Render the fetched data, or a loading/error notice while there is
    /// none. `what` names the data in those notices, e.g. "spaces".
    ///
    /// Once data exists it stays on screen during refetches; `render_fn`
    /// gets the error of a failed refetch alongside it.
    pub fn render<F>(&self, what: &str, render_fn: F) -> Html
    where
        F: Fn(&T, Option<&String>) -> Html,
    {
        if let Some(data) = self.data.as_ref() {
            return render_fn(data, self.error.as_ref());
        }
        match &self.error {
            Some(error) if !self.is_loading => html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Could not load {what}: {error}")}
                    </p>
                </div>
            },
            _ => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {what}...")}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch on mount and whenever `deps` changes; `refetch` runs it again.
///
/// ```rust
/// # use payloads::{Space, SpaceId};
/// # use ui::get_api_client;
/// # use ui::hooks::{FetchHookReturn, use_fetch};
/// # use yew::prelude::*;
/// #[hook]
/// pub fn use_space(space_id: SpaceId) -> FetchHookReturn<Space> {
///     use_fetch(space_id, move || async move {
///         get_api_client()
///             .get_space(&space_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| true);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_: (), _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match fetch_fn().await {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| refetch.emit(()));
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
    }
}
