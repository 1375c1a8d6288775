pub mod backend;
pub mod mock;
pub mod telemetry;

use backend::{BackendState, Config};
use jiff::{Timestamp, civil::Date};
use payloads::{
    APIClient, Payment, PaymentId, PaymentState, Reservation, ReservationId,
    ReservationStatus, Space, SpaceId, UserIdentity, requests,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;

/// Project key the fake backend expects in the `apikey` header.
pub const TEST_API_KEY: &str = "test-anon-key";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    /// Starts out anonymous; the `create_*_user` helpers sign it in.
    pub client: APIClient,
    /// Direct access to the backend's tables for seeding and assertions.
    pub backend: BackendState,
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A second, signed-out client for the same backend.
    pub fn anonymous_client(&self) -> APIClient {
        APIClient::new(self.address(), TEST_API_KEY)
    }

    /// Sign in through the auth endpoint and keep the token on `client`.
    pub async fn sign_in(
        &mut self,
        email: &str,
        password: &str,
    ) -> anyhow::Result<UserIdentity> {
        let session = self
            .client
            .sign_in(&requests::SignIn {
                email: email.into(),
                password: password.into(),
            })
            .await?;
        self.client.set_access_token(Some(session.access_token));
        Ok(session.user)
    }

    pub async fn create_alice_user(&mut self) -> anyhow::Result<UserIdentity> {
        let credentials = alice_credentials();
        self.backend
            .add_user(&credentials.email, &credentials.password);
        self.sign_in(&credentials.email, &credentials.password).await
    }

    pub async fn create_bob_user(&mut self) -> anyhow::Result<UserIdentity> {
        let credentials = bob_credentials();
        self.backend
            .add_user(&credentials.email, &credentials.password);
        self.sign_in(&credentials.email, &credentials.password).await
    }

    pub fn create_space(&self, name: &str, price_per_day: Decimal) -> Space {
        let space = Space {
            id: SpaceId::new_v4(),
            name: name.into(),
            description: Some(format!("{name} for testing")),
            location: Some("Floor 2".into()),
            capacity: 10,
            price_per_day,
        };
        self.backend.insert_space(space.clone());
        space
    }

    /// Seed a pending reservation directly, bypassing the booking procedure.
    pub fn create_reservation(
        &self,
        user: &UserIdentity,
        space: &Space,
        start_date: Date,
        end_date: Date,
    ) -> Reservation {
        let reservation = Reservation {
            id: ReservationId::new_v4(),
            space_id: space.id,
            user_id: user.id,
            start_date,
            end_date,
            total_price: space
                .total_for(start_date, end_date)
                .unwrap_or(space.price_per_day),
            status: ReservationStatus::Pending,
        };
        self.backend.insert_reservation(reservation.clone());
        reservation
    }

    pub fn record_payment(
        &self,
        reservation: &Reservation,
        status: PaymentState,
    ) -> Payment {
        let payment = Payment {
            id: PaymentId::new_v4(),
            reservation_id: reservation.id,
            amount: reservation.total_price,
            status,
            created_at: Timestamp::now(),
        };
        self.backend.insert_payment(payment.clone());
        payment
    }
}

pub fn alice_credentials() -> requests::SignIn {
    requests::SignIn {
        email: "alice@example.com".into(),
        password: "supersecret".into(),
    }
}

pub fn bob_credentials() -> requests::SignIn {
    requests::SignIn {
        email: "bob@example.com".into(),
        password: "bobspassword".into(),
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    telemetry::init_test_logging();

    let backend = BackendState::default();
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        api_key: TEST_API_KEY.into(),
    };
    let server = backend::build(&mut config, backend.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient::new(
            format!("http://127.0.0.1:{}", config.port),
            TEST_API_KEY,
        ),
        backend,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
