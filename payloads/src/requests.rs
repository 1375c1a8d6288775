use crate::{ReservationId, SpaceId};
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const REVIEW_COMMENT_MAX_LEN: usize = 2000;
pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

/// Arguments of the `create_reservation` remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservation {
    pub space_id: SpaceId,
    pub start_date: Date,
    pub end_date: Date,
}

/// Arguments of the `process_payment` remote procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayment {
    pub reservation_id: ReservationId,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReview {
    pub space_id: SpaceId,
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReview {
    pub rating: i16,
    pub comment: Option<String>,
}

/// Validation result for a review before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidation {
    Valid,
    RatingOutOfRange,
    CommentTooLong,
}

impl ReviewValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::RatingOutOfRange => Some("Rating must be between 1 and 5"),
            Self::CommentTooLong => {
                Some("Comment must be at most 2000 characters")
            }
        }
    }
}

/// Validate a review's rating and optional comment.
pub fn validate_review(rating: i16, comment: Option<&str>) -> ReviewValidation {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return ReviewValidation::RatingOutOfRange;
    }
    if comment.is_some_and(|c| c.chars().count() > REVIEW_COMMENT_MAX_LEN) {
        return ReviewValidation::CommentTooLong;
    }
    ReviewValidation::Valid
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationDatesError {
    #[error("End date must not be before the start date")]
    EndBeforeStart,
}

pub fn validate_reservation_dates(
    start: Date,
    end: Date,
) -> Result<(), ReservationDatesError> {
    if end < start {
        return Err(ReservationDatesError::EndBeforeStart);
    }
    Ok(())
}
