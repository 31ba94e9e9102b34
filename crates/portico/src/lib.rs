//! Portico - typed data contracts for the Portico v1 API
//!
//! Re-exports the OpenAPI document shapes from `portico_core` at the crate
//! root and the bearer-token and endpoint shapes under [`api`].
//!
//! ```
//! use portico::{HttpMethod, OpenApi, Operation};
//! use portico::api::{AuthToken, Endpoint};
//!
//! let mut doc = OpenApi::new("Portico", "1.0.0");
//! doc.insert_operation(Endpoint::Login.path(), HttpMethod::Post, Operation::default());
//! assert_eq!(doc.operations().count(), 1);
//! assert_eq!(AuthToken::example().authorization_header().split_once(' ').unwrap().0, "Bearer");
//! ```

pub use portico_core::*;

pub use portico_api as api;
