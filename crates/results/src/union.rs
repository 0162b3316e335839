//! Handler return types that are one of several results.
//!
//! Executing a union executes whichever variant it holds. Its metadata is
//! every variant's metadata in declaration order, so a handler returning
//! `Results2<RedirectPermanent, Gone<T>>` documents both the 301 and the 410.

use axum::response::{IntoResponse, Response};
use httpresults_core::{EndpointMetadataContext, EndpointMetadataProvider};

/// One of two results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results2<A, B> {
    First(A),
    Second(B),
}

impl<A: IntoResponse, B: IntoResponse> IntoResponse for Results2<A, B> {
    fn into_response(self) -> Response {
        match self {
            Results2::First(r) => r.into_response(),
            Results2::Second(r) => r.into_response(),
        }
    }
}

impl<A, B> EndpointMetadataProvider for Results2<A, B>
where
    A: EndpointMetadataProvider,
    B: EndpointMetadataProvider,
{
    fn populate_metadata(ctx: &mut EndpointMetadataContext) {
        A::populate_metadata(ctx);
        B::populate_metadata(ctx);
    }
}

/// One of three results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results3<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A, B, C> IntoResponse for Results3<A, B, C>
where
    A: IntoResponse,
    B: IntoResponse,
    C: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Results3::First(r) => r.into_response(),
            Results3::Second(r) => r.into_response(),
            Results3::Third(r) => r.into_response(),
        }
    }
}

impl<A, B, C> EndpointMetadataProvider for Results3<A, B, C>
where
    A: EndpointMetadataProvider,
    B: EndpointMetadataProvider,
    C: EndpointMetadataProvider,
{
    fn populate_metadata(ctx: &mut EndpointMetadataContext) {
        A::populate_metadata(ctx);
        B::populate_metadata(ctx);
        C::populate_metadata(ctx);
    }
}
