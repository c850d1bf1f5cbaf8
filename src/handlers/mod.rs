pub mod auth;
pub mod booking;
pub mod demo_request;
pub mod package;
pub mod payment;
pub mod user;

pub use auth::auth_config;
pub use booking::booking_config;
pub use demo_request::demo_request_config;
pub use package::package_config;
pub use payment::payment_config;
pub use user::user_config;
