pub mod accounts;
pub mod error;
pub mod otp;

pub use error::Error;
