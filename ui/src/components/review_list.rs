use payloads::{Review, ReviewId, SpaceId, UserIdentity};
use yew::prelude::*;

use crate::components::review_form::{ReviewDraft, ReviewForm};
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_reviews;
use crate::services::reviews::{create_review, delete_review, update_review};
use crate::utils::time::format_review_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub space_id: SpaceId,
    /// Signed-in visitor; reviewing needs one.
    #[prop_or_default]
    pub user: Option<UserIdentity>,
}

/// Reviews of a space, with a form for new ones and edit/delete on the
/// visitor's own.
#[function_component]
pub fn ReviewList(props: &Props) -> Html {
    let reviews = use_reviews(props.space_id);
    let toast = use_toast();
    let editing = use_state(|| None::<ReviewId>);

    let on_create = {
        let toast = toast.clone();
        let refetch = reviews.refetch.clone();
        let space_id = props.space_id;
        Callback::from(move |draft: ReviewDraft| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                let client = get_api_client();
                let created = create_review(
                    &client,
                    &toast,
                    space_id,
                    draft.rating,
                    draft.comment,
                )
                .await;
                if created.is_some() {
                    refetch.emit(());
                }
            });
        })
    };

    let on_update = {
        let toast = toast.clone();
        let refetch = reviews.refetch.clone();
        let editing = editing.clone();
        Callback::from(move |(review_id, draft): (ReviewId, ReviewDraft)| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            let editing = editing.clone();
            yew::platform::spawn_local(async move {
                let client = get_api_client();
                let updated = update_review(
                    &client,
                    &toast,
                    review_id,
                    draft.rating,
                    draft.comment,
                )
                .await;
                if updated.is_some() {
                    editing.set(None);
                    refetch.emit(());
                }
            });
        })
    };

    let on_delete = {
        let refetch = reviews.refetch.clone();
        Callback::from(move |review_id: ReviewId| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                let client = get_api_client();
                if delete_review(&client, &toast, review_id).await {
                    refetch.emit(());
                }
            });
        })
    };

    let render_review = |review: &Review| -> Html {
        let own = props
            .user
            .as_ref()
            .is_some_and(|user| user.id == review.user_id);
        let review_id = review.id;

        if own && *editing == Some(review_id) {
            let on_update = on_update.clone();
            let editing = editing.clone();
            return html! {
                <li key={review_id.to_string()} class="py-3">
                    <ReviewForm
                        initial={ReviewDraft {
                            rating: review.rating,
                            comment: review.comment.clone(),
                        }}
                        submit_text="Save"
                        on_submit={on_update.reform(move |draft: ReviewDraft| {
                            (review_id, draft)
                        })}
                        on_cancel={Callback::from(move |_: ()| {
                            editing.set(None)
                        })}
                    />
                </li>
            };
        }

        let on_edit = {
            let editing = editing.clone();
            Callback::from(move |_: MouseEvent| editing.set(Some(review_id)))
        };
        let on_delete = on_delete.reform(move |_: MouseEvent| review_id);

        html! {
            <li key={review_id.to_string()} class="py-3 space-y-1">
                <div class="flex justify-between text-sm">
                    <span>{("★".repeat(review.rating.max(0) as usize))}</span>
                    <span class="text-neutral-500">
                        {format_review_date(review.created_at)}
                    </span>
                </div>
                if let Some(comment) = &review.comment {
                    <p>{comment}</p>
                }
                if own {
                    <div class="flex gap-3 text-sm">
                        <button onclick={on_edit} class="underline">
                            {"Edit"}
                        </button>
                        <button
                            onclick={on_delete}
                            class="underline text-red-600"
                        >
                            {"Delete"}
                        </button>
                    </div>
                }
            </li>
        }
    };

    html! {
        <section class="space-y-4">
            <h2 class="text-xl font-semibold">{"Reviews"}</h2>
            if props.user.is_some() {
                <ReviewForm
                    submit_text="Publish review"
                    on_submit={on_create}
                />
            }
            {reviews.render("reviews", |reviews, _| {
                if reviews.is_empty() {
                    return html! {
                        <p class="text-neutral-500">{"No reviews yet."}</p>
                    };
                }
                html! {
                    <ul class="divide-y divide-neutral-200">
                        {for reviews.iter().map(&render_review)}
                    </ul>
                }
            })}
        </section>
    }
}
