//! HTTP result types for axum handlers.
//!
//! Every type here is a not-yet-executed response: it holds a status code,
//! optionally a value to serialize or a redirect target, and writes them when
//! axum calls [`IntoResponse::into_response`]. Types with a statically known
//! status also implement [`EndpointMetadataProvider`] so their responses can be
//! documented without running the handler.
//!
//! [`IntoResponse::into_response`]: axum::response::IntoResponse::into_response

#[macro_use]
mod macros;

pub mod gone;
pub mod json_status;
pub mod no_content;
pub mod redirect;
pub mod status;
pub mod union;

#[cfg(test)]
pub(crate) mod test_support;

pub use gone::Gone;
pub use json_status::{Conflict, NotFound, UnprocessableEntity};
pub use no_content::NoContent;
pub use redirect::{Redirect, RedirectPermanent, RedirectPermanentPreserveMethod, RedirectTemporary};
pub use status::StatusCodeResult;
pub use union::{Results2, Results3};

pub use httpresults_core::{
    EndpointCatalog, EndpointDescription, EndpointMetadataContext, EndpointMetadataProvider,
    ProducesResponseType, ResultError, ResultResult,
};
