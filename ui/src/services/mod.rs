//! Mutations behind the forms. Each forwards to the API client and reports
//! the outcome to the user; callers only get the result back on success.

pub mod payments;
pub mod reservations;
pub mod reviews;

use crate::contexts::ToastHandle;

/// Where service outcomes are reported.
pub trait Notify {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl Notify for ToastHandle {
    fn success(&self, message: &str) {
        ToastHandle::success(self, message);
    }

    fn error(&self, message: &str) {
        ToastHandle::error(self, message);
    }
}
