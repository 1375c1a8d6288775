pub mod layout;
pub mod payment_form;
pub mod payment_status_view;
pub mod require_auth;
pub mod reservation_form;
pub mod review_form;
pub mod review_list;
pub mod toast;

pub use payment_form::PaymentForm;
pub use payment_status_view::PaymentStatusView;
pub use require_auth::RequireAuth;
pub use reservation_form::ReservationForm;
pub use review_form::ReviewForm;
pub use review_list::ReviewList;
pub use toast::ToastContainer;
