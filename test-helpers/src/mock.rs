//! Seed data for the dev-server and for tests that want a populated
//! backend.
//!
//! Alice has three reservations that exercise each payment page state:
//! one with no payment yet, one already paid, and one whose earlier payment
//! attempt failed. Bob owns one reservation Alice cannot see.

use jiff::{Timestamp, ToSpan, civil::Date};
use payloads::{
    PaymentState, Reservation, Review, ReviewId, Space, UserIdentity,
};
use rust_decimal::dec;

use crate::{TestApp, alice_credentials, bob_credentials};

pub struct SeedData {
    pub alice: UserIdentity,
    pub bob: UserIdentity,
    pub coworking_desk: Space,
    pub meeting_room: Space,
    pub event_hall: Space,
    pub unpaid_reservation: Reservation,
    pub paid_reservation: Reservation,
    pub failed_payment_reservation: Reservation,
    pub bobs_reservation: Reservation,
}

impl SeedData {
    /// Populate the backend without signing the app's client in.
    pub fn create(app: &TestApp) -> anyhow::Result<Self> {
        let alice_login = alice_credentials();
        let bob_login = bob_credentials();
        let alice = app
            .backend
            .add_user(&alice_login.email, &alice_login.password);
        let bob = app.backend.add_user(&bob_login.email, &bob_login.password);

        let coworking_desk = app.create_space("Coworking desk", dec!(80));
        let meeting_room = app.create_space("Meeting room", dec!(250));
        let event_hall = app.create_space("Event hall", dec!(1200));

        let today = Timestamp::now().to_zoned(jiff::tz::TimeZone::UTC).date();
        let in_days = |days: i64| -> anyhow::Result<Date> {
            Ok(today.checked_add(days.days())?)
        };

        let unpaid_reservation = app.create_reservation(
            &alice,
            &meeting_room,
            in_days(7)?,
            in_days(8)?,
        );
        let paid_reservation = app.create_reservation(
            &alice,
            &coworking_desk,
            in_days(1)?,
            in_days(5)?,
        );
        app.record_payment(&paid_reservation, PaymentState::Paid);
        let failed_payment_reservation = app.create_reservation(
            &alice,
            &event_hall,
            in_days(30)?,
            in_days(30)?,
        );
        app.record_payment(&failed_payment_reservation, PaymentState::Failed);
        let bobs_reservation = app.create_reservation(
            &bob,
            &meeting_room,
            in_days(14)?,
            in_days(14)?,
        );

        for (user, rating, comment) in [
            (&alice, 5, "Quiet, bright and the coffee is free."),
            (&bob, 3, "Good desk, noisy on Fridays."),
        ] {
            app.backend.insert_review(Review {
                id: ReviewId::new_v4(),
                space_id: coworking_desk.id,
                user_id: user.id,
                rating,
                comment: Some(comment.into()),
                created_at: Timestamp::now(),
            });
        }

        Ok(Self {
            alice,
            bob,
            coworking_desk,
            meeting_room,
            event_hall,
            unpaid_reservation,
            paid_reservation,
            failed_payment_reservation,
            bobs_reservation,
        })
    }

    pub fn print_summary(&self) {
        let alice = alice_credentials();
        let bob = bob_credentials();
        tracing::info!("Users:");
        tracing::info!("  {} / {}", alice.email, alice.password);
        tracing::info!("  {} / {}", bob.email, bob.password);
        tracing::info!("Payment pages (sign in as Alice):");
        tracing::info!(
            "  payable:      /payment/{}",
            self.unpaid_reservation.id
        );
        tracing::info!(
            "  already paid: /payment/{}",
            self.paid_reservation.id
        );
        tracing::info!(
            "  failed try:   /payment/{}",
            self.failed_payment_reservation.id
        );
        tracing::info!("  not found:    /payment/{}", self.bobs_reservation.id);
    }
}
