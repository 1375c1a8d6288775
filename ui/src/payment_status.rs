//! Resolving what the payment page should show for a reservation.
//!
//! A load cycle fetches the reservation and, only once that succeeded, its
//! payment. The page state is always derived from the cycle's outcome, never
//! stored as separate flags, so exactly one of the page states holds at a
//! time:
//!
//! | loading | reservation       | payment          | status         |
//! |---------|-------------------|------------------|----------------|
//! | yes     | -                 | -                | `Loading`      |
//! | no      | not found/failed  | (not fetched)    | `NotFound`     |
//! | no      | found             | status `pago`    | `AlreadyPaid`  |
//! | no      | found             | other or missing | `Payable`      |

use std::rc::Rc;

use payloads::{
    APIClient, ClientError, Payment, Reservation, ReservationId,
};
use rust_decimal::Decimal;
use yew::Reducible;

/// The lookups the resolver needs from the backend.
#[allow(async_fn_in_trait)]
pub trait PaymentLookupSource {
    async fn reservation_by_id(
        &self,
        id: &ReservationId,
    ) -> Result<Reservation, ClientError>;

    async fn payment_by_reservation_id(
        &self,
        id: &ReservationId,
    ) -> Result<Payment, ClientError>;
}

impl PaymentLookupSource for APIClient {
    async fn reservation_by_id(
        &self,
        id: &ReservationId,
    ) -> Result<Reservation, ClientError> {
        self.get_reservation_by_id(id).await
    }

    async fn payment_by_reservation_id(
        &self,
        id: &ReservationId,
    ) -> Result<Payment, ClientError> {
        self.get_payments_by_reservation_id(id).await
    }
}

/// Outcome of the reservation half of a load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationLoad {
    Found(Reservation),
    NotFound,
    /// Transport or backend failure, with the message that was logged.
    Failed(String),
}

/// Everything one load cycle learned.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLookup {
    pub reservation: ReservationLoad,
    /// None both when no payment exists yet and when its lookup failed.
    pub payment: Option<Payment>,
}

/// Run one load cycle: the reservation first, then its payment.
///
/// Payment lookup failures never escape: a reservation without a payment
/// is the normal state of an unpaid booking.
pub async fn resolve_payment_lookup(
    source: &impl PaymentLookupSource,
    reservation_id: &ReservationId,
) -> PaymentLookup {
    let reservation = match source.reservation_by_id(reservation_id).await {
        Ok(reservation) => ReservationLoad::Found(reservation),
        Err(ClientError::NotFound) => {
            tracing::info!(%reservation_id, "reservation not found");
            ReservationLoad::NotFound
        }
        Err(e) => {
            tracing::error!(%reservation_id, "failed to load reservation: {e}");
            ReservationLoad::Failed(e.to_string())
        }
    };

    let payment = match &reservation {
        ReservationLoad::Found(_) => {
            match source.payment_by_reservation_id(reservation_id).await {
                Ok(payment) => Some(payment),
                Err(e) => {
                    tracing::debug!(%reservation_id, "no payment yet: {e}");
                    None
                }
            }
        }
        ReservationLoad::NotFound | ReservationLoad::Failed(_) => None,
    };

    PaymentLookup {
        reservation,
        payment,
    }
}

/// The one screen the payment page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentPageStatus {
    Loading,
    /// No reservation to pay. `retryable` is set when the lookup failed
    /// rather than coming back empty, so the page can offer to try again.
    NotFound { retryable: bool },
    AlreadyPaid,
    Payable { amount: Decimal },
}

impl PaymentPageStatus {
    pub fn derive(loading: bool, lookup: Option<&PaymentLookup>) -> Self {
        let Some(lookup) = lookup.filter(|_| !loading) else {
            return Self::Loading;
        };
        match &lookup.reservation {
            ReservationLoad::NotFound => Self::NotFound { retryable: false },
            ReservationLoad::Failed(_) => Self::NotFound { retryable: true },
            ReservationLoad::Found(reservation) => {
                let paid = lookup
                    .payment
                    .as_ref()
                    .is_some_and(|payment| payment.status.is_paid());
                if paid {
                    Self::AlreadyPaid
                } else {
                    Self::Payable {
                        amount: reservation.total_price,
                    }
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound { .. } => "not_found",
            Self::AlreadyPaid => "already_paid",
            Self::Payable { .. } => "payable",
        }
    }
}

/// Per-page state of the resolver. Every cycle is tagged with a generation;
/// a result whose generation is no longer current belongs to a superseded
/// reservation id (or an earlier retry) and is dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentStatusState {
    generation: u64,
    loading: bool,
    lookup: Option<PaymentLookup>,
}

pub enum PaymentStatusAction {
    Begin { generation: u64 },
    Complete { generation: u64, lookup: PaymentLookup },
}

impl Reducible for PaymentStatusState {
    type Action = PaymentStatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PaymentStatusAction::Begin { generation } => Rc::new(Self {
                generation,
                loading: true,
                lookup: None,
            }),
            PaymentStatusAction::Complete { generation, lookup } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping stale payment lookup"
                    );
                    return self;
                }
                Rc::new(Self {
                    generation,
                    loading: false,
                    lookup: Some(lookup),
                })
            }
        }
    }
}

/// Hands out generations for load cycles. A page without a reservation id
/// never starts one, so its counter stays put.
#[derive(Debug, Default)]
pub struct LoadCycles {
    latest: u64,
}

impl LoadCycles {
    /// Start a cycle for `reservation_id`, returning its generation together
    /// with the id to fetch.
    pub fn begin(
        &mut self,
        reservation_id: Option<ReservationId>,
    ) -> Option<(u64, ReservationId)> {
        let reservation_id = reservation_id?;
        self.latest += 1;
        Some((self.latest, reservation_id))
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

impl PaymentStatusState {
    pub fn status(&self) -> PaymentPageStatus {
        PaymentPageStatus::derive(self.loading, self.lookup.as_ref())
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        match self.lookup.as_ref()?.reservation {
            ReservationLoad::Found(ref reservation) => Some(reservation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use jiff::{Timestamp, civil::date};
    use payloads::{
        PaymentId, PaymentState, ReservationStatus, SpaceId, UserId,
    };
    use reqwest::StatusCode;
    use rust_decimal::dec;
    use std::cell::{Cell, RefCell};

    fn reservation(total_price: Decimal) -> Reservation {
        Reservation {
            id: ReservationId::new_v4(),
            space_id: SpaceId::new_v4(),
            user_id: UserId::new_v4(),
            start_date: date(2025, 2, 1),
            end_date: date(2025, 2, 2),
            total_price,
            status: ReservationStatus::Pending,
        }
    }

    fn payment(reservation: &Reservation, status: PaymentState) -> Payment {
        Payment {
            id: PaymentId::new_v4(),
            reservation_id: reservation.id,
            amount: reservation.total_price,
            status,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn server_error() -> ClientError {
        ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, "boom".into())
    }

    /// Canned backend answers, counting how often each lookup ran.
    struct FakeSource {
        reservation: RefCell<Option<Result<Reservation, ClientError>>>,
        payment: RefCell<Option<Result<Payment, ClientError>>>,
        payment_calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(
            reservation: Result<Reservation, ClientError>,
            payment: Result<Payment, ClientError>,
        ) -> Self {
            Self {
                reservation: RefCell::new(Some(reservation)),
                payment: RefCell::new(Some(payment)),
                payment_calls: Cell::new(0),
            }
        }
    }

    impl PaymentLookupSource for FakeSource {
        async fn reservation_by_id(
            &self,
            _id: &ReservationId,
        ) -> Result<Reservation, ClientError> {
            self.reservation
                .borrow_mut()
                .take()
                .expect("reservation fetched once")
        }

        async fn payment_by_reservation_id(
            &self,
            _id: &ReservationId,
        ) -> Result<Payment, ClientError> {
            self.payment_calls.set(self.payment_calls.get() + 1);
            self.payment
                .borrow_mut()
                .take()
                .expect("payment fetched once")
        }
    }

    fn run(source: &FakeSource) -> PaymentPageStatus {
        let lookup = block_on(resolve_payment_lookup(
            source,
            &ReservationId::new_v4(),
        ));
        PaymentPageStatus::derive(false, Some(&lookup))
    }

    #[test]
    fn loading_wins_over_any_lookup() {
        let found = reservation(dec!(100));
        let lookup = PaymentLookup {
            payment: Some(payment(&found, PaymentState::Paid)),
            reservation: ReservationLoad::Found(found),
        };
        assert_eq!(
            PaymentPageStatus::derive(true, Some(&lookup)),
            PaymentPageStatus::Loading
        );
        assert_eq!(
            PaymentPageStatus::derive(false, None),
            PaymentPageStatus::Loading
        );
    }

    #[test]
    fn payment_failure_leaves_reservation_payable() {
        // id "R1": reservation resolves with total 5000, payment rejects
        let source =
            FakeSource::new(Ok(reservation(dec!(5000))), Err(server_error()));
        assert_eq!(
            run(&source),
            PaymentPageStatus::Payable {
                amount: dec!(5000)
            }
        );
        assert_eq!(source.payment_calls.get(), 1);
    }

    #[test]
    fn paid_payment_means_already_paid() {
        // id "R2": payment resolves with status "pago"
        let found = reservation(dec!(120));
        let paid = payment(&found, PaymentState::Paid);
        let source = FakeSource::new(Ok(found), Ok(paid));
        assert_eq!(run(&source), PaymentPageStatus::AlreadyPaid);
    }

    #[test]
    fn reservation_failure_is_not_found() {
        // id "R3": reservation rejects
        let source = FakeSource::new(Err(server_error()), Err(server_error()));
        let status = run(&source);
        assert_eq!(status, PaymentPageStatus::NotFound { retryable: true });
        assert_eq!(status.name(), "not_found");
        assert_eq!(source.payment_calls.get(), 0);
    }

    #[test]
    fn missing_reservation_is_not_found_whatever_the_payment() {
        let found = reservation(dec!(10));
        let paid = payment(&found, PaymentState::Paid);
        let source = FakeSource::new(Err(ClientError::NotFound), Ok(paid));
        assert_eq!(
            run(&source),
            PaymentPageStatus::NotFound { retryable: false }
        );
        assert_eq!(source.payment_calls.get(), 0);
    }

    #[test]
    fn unsettled_payment_states_stay_payable() {
        for state in [
            PaymentState::Pending,
            PaymentState::Failed,
            PaymentState::Refunded,
        ] {
            let found = reservation(dec!(75.50));
            let attempt = payment(&found, state);
            let source = FakeSource::new(Ok(found), Ok(attempt));
            assert_eq!(
                run(&source),
                PaymentPageStatus::Payable {
                    amount: dec!(75.50)
                },
                "{state:?}"
            );
        }
    }

    #[test]
    fn missing_payment_is_payable() {
        let source = FakeSource::new(
            Ok(reservation(dec!(42))),
            Err(ClientError::NotFound),
        );
        assert_eq!(
            run(&source),
            PaymentPageStatus::Payable { amount: dec!(42) }
        );
    }

    /// Reservation answer arrives through a channel the test controls.
    struct GatedSource {
        reservation: RefCell<Option<oneshot::Receiver<Reservation>>>,
        payment_calls: Cell<usize>,
    }

    impl PaymentLookupSource for GatedSource {
        async fn reservation_by_id(
            &self,
            _id: &ReservationId,
        ) -> Result<Reservation, ClientError> {
            let receiver = self
                .reservation
                .borrow_mut()
                .take()
                .expect("reservation fetched once");
            receiver.await.map_err(|_| ClientError::NotFound)
        }

        async fn payment_by_reservation_id(
            &self,
            _id: &ReservationId,
        ) -> Result<Payment, ClientError> {
            self.payment_calls.set(self.payment_calls.get() + 1);
            Err(ClientError::NotFound)
        }
    }

    #[test]
    fn payment_waits_for_reservation() {
        let (sender, receiver) = oneshot::channel();
        let source = GatedSource {
            reservation: RefCell::new(Some(receiver)),
            payment_calls: Cell::new(0),
        };
        let id = ReservationId::new_v4();
        let mut cycle = Box::pin(resolve_payment_lookup(&source, &id));

        // still waiting on the reservation: nothing resolved, no payment call
        assert!((&mut cycle).now_or_never().is_none());
        assert_eq!(source.payment_calls.get(), 0);

        sender.send(reservation(dec!(300))).unwrap();
        let lookup = block_on(cycle);
        assert_eq!(source.payment_calls.get(), 1);
        assert_eq!(
            PaymentPageStatus::derive(false, Some(&lookup)),
            PaymentPageStatus::Payable { amount: dec!(300) }
        );
    }

    fn found_lookup(total: Decimal) -> PaymentLookup {
        PaymentLookup {
            reservation: ReservationLoad::Found(reservation(total)),
            payment: None,
        }
    }

    #[test]
    fn state_is_loading_until_its_cycle_completes() {
        let state = Rc::new(PaymentStatusState::default())
            .reduce(PaymentStatusAction::Begin { generation: 1 });
        assert_eq!(state.status(), PaymentPageStatus::Loading);

        let state = state.reduce(PaymentStatusAction::Complete {
            generation: 1,
            lookup: found_lookup(dec!(90)),
        });
        assert_eq!(
            state.status(),
            PaymentPageStatus::Payable { amount: dec!(90) }
        );
        assert!(state.reservation().is_some());
    }

    #[test]
    fn stale_cycle_results_are_dropped() {
        let state = Rc::new(PaymentStatusState::default())
            .reduce(PaymentStatusAction::Begin { generation: 1 })
            .reduce(PaymentStatusAction::Begin { generation: 2 });

        // the first id's answer lands after the second load started
        let state = state.reduce(PaymentStatusAction::Complete {
            generation: 1,
            lookup: found_lookup(dec!(1)),
        });
        assert_eq!(state.status(), PaymentPageStatus::Loading);

        let state = state.reduce(PaymentStatusAction::Complete {
            generation: 2,
            lookup: found_lookup(dec!(2)),
        });
        assert_eq!(
            state.status(),
            PaymentPageStatus::Payable { amount: dec!(2) }
        );

        // and a late answer cannot overwrite a completed newer cycle
        let state = state.reduce(PaymentStatusAction::Complete {
            generation: 1,
            lookup: found_lookup(dec!(1)),
        });
        assert_eq!(
            state.status(),
            PaymentPageStatus::Payable { amount: dec!(2) }
        );
    }

    #[test]
    fn no_reservation_id_starts_no_cycle() {
        let mut cycles = LoadCycles::default();
        assert!(cycles.begin(None).is_none());
        assert!(cycles.begin(None).is_none());
        assert_eq!(cycles.latest(), 0);

        // nothing dispatched, so the page keeps showing the spinner
        assert_eq!(
            PaymentStatusState::default().status(),
            PaymentPageStatus::Loading
        );
    }

    #[test]
    fn retry_supersedes_the_running_cycle() {
        let id = ReservationId::new_v4();
        let mut cycles = LoadCycles::default();

        let (first, first_id) = cycles.begin(Some(id)).unwrap();
        let (retry, retry_id) = cycles.begin(Some(id)).unwrap();
        assert_eq!((first_id, retry_id), (id, id));
        assert!(retry > first);
        assert_eq!(cycles.latest(), retry);

        let state = Rc::new(PaymentStatusState::default())
            .reduce(PaymentStatusAction::Begin { generation: first })
            .reduce(PaymentStatusAction::Begin { generation: retry });
        let state = state.reduce(PaymentStatusAction::Complete {
            generation: first,
            lookup: found_lookup(dec!(7)),
        });
        assert_eq!(state.status(), PaymentPageStatus::Loading);

        let state = state.reduce(PaymentStatusAction::Complete {
            generation: retry,
            lookup: found_lookup(dec!(8)),
        });
        assert_eq!(
            state.status(),
            PaymentPageStatus::Payable { amount: dec!(8) }
        );
    }
}
