use payloads::{Reservation, Space};
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_api_client;
use crate::services::reservations::create_reservation;
use crate::utils::format_amount;
use crate::utils::time::parse_date_input;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub space: Space,
    pub on_created: Callback<Reservation>,
}

#[function_component]
pub fn ReservationForm(props: &Props) -> Html {
    let toast = use_toast();
    let start_input = use_state(String::new);
    let end_input = use_state(String::new);
    let is_submitting = use_state(|| false);

    let start = parse_date_input(&start_input);
    let end = parse_date_input(&end_input);
    // None until both dates are set and in order.
    let total = start
        .zip(end)
        .and_then(|(start, end)| props.space.total_for(start, end));

    let on_start_change = {
        let start_input = start_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            start_input.set(input.value());
        })
    };

    let on_end_change = {
        let end_input = end_input.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            end_input.set(input.value());
        })
    };

    let on_submit = {
        let is_submitting = is_submitting.clone();
        let on_created = props.on_created.clone();
        let space_id = props.space.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(start), Some(end)) = (start, end) else {
                toast.error("Choose both a start and an end date");
                return;
            };
            let is_submitting = is_submitting.clone();
            let on_created = on_created.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let client = get_api_client();
                let created =
                    create_reservation(&client, &toast, space_id, start, end)
                        .await;
                is_submitting.set(false);
                if let Some(reservation) = created {
                    on_created.emit(reservation);
                }
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700";

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <label class="block text-sm">
                    {"Start date"}
                    <input
                        type="date"
                        class={input_class}
                        value={(*start_input).clone()}
                        onchange={on_start_change}
                    />
                </label>
                <label class="block text-sm">
                    {"End date"}
                    <input
                        type="date"
                        class={input_class}
                        value={(*end_input).clone()}
                        onchange={on_end_change}
                    />
                </label>
            </div>
            if let Some(total) = total {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("Total: {}", format_amount(total))}
                </p>
            }
            <button
                type="submit"
                disabled={*is_submitting}
                class="px-4 py-2 rounded-md bg-neutral-900 text-white \
                       hover:bg-neutral-700 disabled:opacity-50"
            >
                {"Reserve"}
            </button>
        </form>
    }
}
