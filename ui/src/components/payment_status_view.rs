use payloads::Reservation;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::PaymentForm;
use crate::payment_status::PaymentPageStatus;
use crate::utils::time::format_date_range;

#[derive(Properties, PartialEq)]
pub struct PaymentStatusViewProps {
    pub status: PaymentPageStatus,
    #[prop_or_default]
    pub reservation: Option<Reservation>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub on_paid: Callback<()>,
}

/// One screen per payment page status.
#[function_component]
pub fn PaymentStatusView(props: &PaymentStatusViewProps) -> Html {
    let body = match &props.status {
        PaymentPageStatus::Loading => html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Loading reservation..."}
            </p>
        },
        PaymentPageStatus::NotFound { retryable } => {
            let on_retry = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="space-y-4">
                    <h1 class="text-2xl font-bold">
                        {"Reservation not found"}
                    </h1>
                    if *retryable {
                        <>
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"We could not reach the server."}
                            </p>
                            <button
                                onclick={on_retry}
                                class="px-4 py-2 rounded-md bg-neutral-900 \
                                       text-white hover:bg-neutral-700"
                            >
                                {"Try again"}
                            </button>
                        </>
                    }
                    <Link<Route> to={Route::Dashboard} classes="underline">
                        {"Back to my reservations"}
                    </Link<Route>>
                </div>
            }
        }
        PaymentPageStatus::AlreadyPaid => html! {
            <div class="space-y-4">
                <h1 class="text-2xl font-bold">{"Already paid"}</h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"This reservation has been paid. Nothing more to do."}
                </p>
                <Link<Route> to={Route::Dashboard} classes="underline">
                    {"Back to my reservations"}
                </Link<Route>>
            </div>
        },
        PaymentPageStatus::Payable { amount } => match &props.reservation {
            Some(reservation) => html! {
                <div class="space-y-4">
                    <h1 class="text-2xl font-bold">{"Payment"}</h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format_date_range(
                            reservation.start_date,
                            reservation.end_date,
                        )}
                    </p>
                    <PaymentForm
                        reservation_id={reservation.id}
                        amount={*amount}
                        on_complete={props.on_paid.clone()}
                    />
                </div>
            },
            None => html! {},
        },
    };

    html! {
        <div
            class="max-w-lg mx-auto"
            data-payment-status={props.status.name()}
        >
            {body}
        </div>
    }
}
