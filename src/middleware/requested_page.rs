//! Requested page extractor for Axum handlers.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};

use crate::models::pagination::PAGE_PARAM;

/// Page number from the `page` query parameter.
///
/// Missing, empty, or non-numeric values become `0`; range checks are left to
/// [`PageState::configure`](crate::models::pagination::PageState::configure).
/// Never rejects the request:
/// ```ignore
/// async fn handler(RequestedPage(page): RequestedPage) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedPage(pub i64);

impl RequestedPage {
    pub fn from_uri(uri: &Uri) -> Self {
        let page = Query::<HashMap<String, String>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(params)| params.get(PAGE_PARAM)?.trim().parse().ok())
            .unwrap_or(0);

        Self(page)
    }
}

impl<S> FromRequestParts<S> for RequestedPage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
