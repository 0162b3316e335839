use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use chrono::Utc;

use httpresults_results::{
    Conflict, Gone, NoContent, NotFound, RedirectPermanent, Results2, Results3,
    UnprocessableEntity,
};

use crate::app::dto::{ErrorBody, PutLinkRequest, RetiredLink};
use crate::app::errors;
use crate::app::store::{LinkStore, LinkStoreError};

pub type GetLinkResult = Results3<RedirectPermanent, Gone<RetiredLink>, NotFound<ErrorBody>>;
pub type PutLinkResult = Results2<NoContent, UnprocessableEntity<ErrorBody>>;
pub type DeleteLinkResult = Results3<NoContent, Conflict<ErrorBody>, NotFound<ErrorBody>>;

pub async fn get_link(
    Extension(store): Extension<Arc<LinkStore>>,
    Path(slug): Path<String>,
) -> GetLinkResult {
    let Some(link) = store.get(&slug) else {
        return Results3::Third(errors::not_found(&slug));
    };

    match RetiredLink::from_link(&link) {
        Some(retired) => Results3::Second(Gone::new(retired)),
        None => Results3::First(link.redirect),
    }
}

pub async fn put_link(
    Extension(store): Extension<Arc<LinkStore>>,
    Path(slug): Path<String>,
    payload: Result<Json<PutLinkRequest>, JsonRejection>,
) -> PutLinkResult {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(%slug, "rejected link body: {}", rejection.body_text());
            return Results2::Second(errors::json_rejection_to_response(&rejection));
        }
    };

    let redirect = match RedirectPermanent::try_from(req.target) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(%slug, "rejected link target: {e}");
            return Results2::Second(errors::result_error_to_response(e));
        }
    };

    let created = store.upsert(&slug, redirect);
    tracing::info!(%slug, created, "link saved");
    Results2::First(NoContent)
}

pub async fn delete_link(
    Extension(store): Extension<Arc<LinkStore>>,
    Path(slug): Path<String>,
) -> DeleteLinkResult {
    match store.retire(&slug, Utc::now()) {
        Ok(_) => {
            tracing::info!(%slug, "link retired");
            Results3::First(NoContent)
        }
        Err(LinkStoreError::AlreadyRetired(_)) => Results3::Second(errors::already_retired(&slug)),
        Err(LinkStoreError::NotFound(_)) => Results3::Third(errors::not_found(&slug)),
    }
}
