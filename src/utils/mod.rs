pub mod email;
pub mod jwt;
pub mod password;
pub mod qr;

pub use email::{normalize_email, validate_email};
pub use jwt::JwtService;
pub use password::{hash_password, verify_password};
pub use qr::birdie_qr_payload;
