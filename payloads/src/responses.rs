use crate::{PaymentId, ReservationId, ReviewId, SpaceId, UserId};
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub email: String,
}

/// Result of a password sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub user: UserIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub capacity: i32,
    pub price_per_day: Decimal,
}

impl Space {
    /// Price of holding the space from `start` through `end`, both days
    /// included. None if the range is inverted.
    pub fn total_for(&self, start: Date, end: Date) -> Option<Decimal> {
        if end < start {
            return None;
        }
        let days = (end - start).get_days() + 1;
        Some(self.price_per_day * Decimal::from(days))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A booking of a space for a range of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub space_id: SpaceId,
    pub user_id: UserId,
    pub start_date: Date,
    pub end_date: Date,
    pub total_price: Decimal,
    pub status: ReservationStatus,
}

/// Payment lifecycle as stored by the backend. `Paid` ("pago") is the only
/// state that settles a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentState {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "pago")]
    Paid,
    #[serde(rename = "falhou")]
    Failed,
    #[serde(rename = "reembolsado")]
    Refunded,
}

impl PaymentState {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// Payment record for a reservation. A reservation has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub reservation_id: ReservationId,
    pub amount: Decimal,
    pub status: PaymentState,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub space_id: SpaceId,
    pub user_id: UserId,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}
