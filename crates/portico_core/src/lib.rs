//! Portico Core - OpenAPI document shapes
//!
//! Provides structures mirroring a subset of the OpenAPI 3.x object graph.
//! Nothing here resolves `$ref` pointers or validates documents; the types only
//! describe what a document looks like so it can be (de)serialized with serde.

pub mod openapi;
pub mod route;
pub mod schema;

pub use openapi::*;
pub use route::*;
pub use schema::*;
