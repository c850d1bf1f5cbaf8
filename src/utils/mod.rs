pub mod email;
pub mod jwt;
pub mod password;
pub mod receipt;
pub mod whatsapp;

pub use email::*;
pub use jwt::*;
pub use password::*;
pub use receipt::generate_receipt_id;
pub use whatsapp::{build_demo_link, build_demo_message};
