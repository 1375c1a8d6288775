pub mod dashboard;
pub mod not_found;
pub mod payment;
pub mod sign_in;
pub mod space_detail;
pub mod spaces;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use payment::PaymentPage;
pub use sign_in::SignInPage;
pub use space_detail::SpaceDetailPage;
pub use spaces::SpacesPage;
