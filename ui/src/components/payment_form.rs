use payloads::ReservationId;
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_api_client;
use crate::services::payments::submit_payment;
use crate::utils::format_amount;

#[derive(Properties, PartialEq)]
pub struct PaymentFormProps {
    pub reservation_id: ReservationId,
    /// Full reservation total; partial payments are not offered.
    pub amount: Decimal,
    pub on_complete: Callback<()>,
}

#[function_component]
pub fn PaymentForm(props: &PaymentFormProps) -> Html {
    let toast = use_toast();
    let is_submitting = use_state(|| false);

    let on_submit = {
        let is_submitting = is_submitting.clone();
        let on_complete = props.on_complete.clone();
        let reservation_id = props.reservation_id;
        let amount = props.amount;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let is_submitting = is_submitting.clone();
            let on_complete = on_complete.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                let client = get_api_client();
                let paid =
                    submit_payment(&client, &toast, reservation_id, amount)
                        .await;
                is_submitting.set(false);
                if paid.is_some() {
                    on_complete.emit(());
                }
            });
        })
    };

    let button_text = if *is_submitting {
        "Processing..."
    } else {
        "Pay now"
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            <div class="flex justify-between text-lg">
                <span>{"Total"}</span>
                <span class="font-semibold">{format_amount(props.amount)}</span>
            </div>
            <button
                type="submit"
                disabled={*is_submitting}
                class="w-full px-4 py-2 rounded-md bg-neutral-900 text-white \
                       hover:bg-neutral-700 disabled:opacity-50"
            >
                {button_text}
            </button>
        </form>
    }
}
