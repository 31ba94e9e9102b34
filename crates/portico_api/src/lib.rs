//! Portico API - bearer-token payload and v1 endpoint paths
//!
//! Shapes of what the Portico v1 service hands out: the token issued by
//! `/api/v1/login` and the list of endpoint paths the service exposes. No
//! HTTP client or authentication flow lives here.

pub mod endpoint;
pub mod error;
pub mod token;

pub use endpoint::*;
pub use error::ApiError;
pub use token::*;
