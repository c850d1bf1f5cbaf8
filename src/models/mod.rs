pub mod booking;
pub mod common;
pub mod demo_request;
pub mod package;
pub mod pagination;
pub mod payment;
pub mod user;

pub use booking::*;
pub use common::*;
pub use demo_request::*;
pub use package::*;
pub use pagination::*;
pub use payment::*;
pub use user::*;
