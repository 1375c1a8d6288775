use payloads::requests::{RATING_MAX, RATING_MIN, REVIEW_COMMENT_MAX_LEN};
use yew::prelude::*;

/// Rating and comment as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Prefills the form when editing.
    #[prop_or_default]
    pub initial: Option<ReviewDraft>,
    pub submit_text: AttrValue,
    pub on_submit: Callback<ReviewDraft>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn ReviewForm(props: &Props) -> Html {
    let rating = use_state(|| {
        props.initial.as_ref().map_or(RATING_MAX, |draft| draft.rating)
    });
    let comment = use_state(|| {
        props
            .initial
            .as_ref()
            .and_then(|draft| draft.comment.clone())
            .unwrap_or_default()
    });

    let on_rating_change = {
        let rating = rating.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse() {
                rating.set(value);
            }
        })
    };

    let on_comment_input = {
        let comment = comment.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            comment.set(area.value());
        })
    };

    let on_submit = {
        let rating = rating.clone();
        let comment = comment.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(ReviewDraft {
                rating: *rating,
                comment: Some((*comment).clone()),
            });
        })
    };

    let remaining =
        REVIEW_COMMENT_MAX_LEN as i64 - comment.chars().count() as i64;

    html! {
        <form onsubmit={on_submit} class="space-y-3">
            <select
                onchange={on_rating_change}
                class="px-2 py-1 border rounded-md"
            >
                {for (RATING_MIN..=RATING_MAX).rev().map(|value| html! {
                    <option
                        value={value.to_string()}
                        selected={value == *rating}
                    >
                        {("★".repeat(value as usize))}
                    </option>
                })}
            </select>
            <textarea
                class="w-full px-3 py-2 border rounded-md"
                rows="3"
                placeholder="Share your experience (optional)"
                value={(*comment).clone()}
                oninput={on_comment_input}
            />
            <p class={classes!(
                "text-xs",
                if remaining < 0 { "text-red-600" } else { "text-neutral-500" }
            )}>
                {format!("{remaining} characters left")}
            </p>
            <div class="flex gap-2">
                <button
                    type="submit"
                    class="px-3 py-1 rounded-md bg-neutral-900 text-white"
                >
                    {&props.submit_text}
                </button>
                if let Some(on_cancel) = props.on_cancel.clone() {
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border"
                        onclick={on_cancel.reform(|_: MouseEvent| ())}
                    >
                        {"Cancel"}
                    </button>
                }
            </div>
        </form>
    }
}
