pub mod bookings;
pub mod demo_requests;
pub mod payments;
pub mod users;

pub use bookings as booking_entity;
pub use demo_requests as demo_request_entity;
pub use payments as payment_entity;
pub use users as user_entity;

pub use bookings::{BookingStatus, PackageTier};
