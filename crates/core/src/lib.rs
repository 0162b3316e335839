//! `httpresults-core` — framework-independent building blocks.
//!
//! This crate holds the error model and the endpoint metadata model. It has
//! **no** HTTP framework dependency; the result types live in
//! `httpresults-results`.

pub mod error;
pub mod metadata;

pub use error::{ResultError, ResultResult};
pub use metadata::{
    describe, EndpointCatalog, EndpointDescription, EndpointDescriptor, EndpointMetadataContext,
    EndpointMetadataProvider, ProducesResponseType, APPLICATION_JSON,
};
