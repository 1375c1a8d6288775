pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{
    AuthSession, Payment, PaymentState, Reservation, ReservationStatus,
    Review, Space, UserIdentity,
};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Newtype ids double as route parameters, so they need to round-trip
/// through strings.
macro_rules! uuid_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Display,
            Serialize,
            Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl $name {
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }
        }
    };
}

uuid_id!(UserId);
uuid_id!(SpaceId);
uuid_id!(ReservationId);
uuid_id!(PaymentId);
uuid_id!(ReviewId);
