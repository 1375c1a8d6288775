pub mod use_fetch;
pub mod use_payment_status;
pub mod use_reviews;
pub mod use_session_bootstrap;
pub mod use_sign_out;
pub mod use_spaces;
pub mod use_user_reservations;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_payment_status::{PaymentStatusHandle, use_payment_status};
pub use use_reviews::use_reviews;
pub use use_session_bootstrap::use_session_bootstrap;
pub use use_sign_out::use_sign_out;
pub use use_spaces::{use_space, use_spaces};
pub use use_user_reservations::use_user_reservations;

/// Distinguishes "nothing fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchState;

    #[test]
    fn empty_results_still_count_as_fetched() {
        let fetched: FetchState<Vec<u8>> = FetchState::Fetched(vec![]);
        assert!(fetched.is_fetched());
        assert_eq!(fetched.as_ref(), Some(&vec![]));
        assert_eq!(FetchState::<Vec<u8>>::NotFetched.as_ref(), None);
    }
}
