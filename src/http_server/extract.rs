//! Extractors whose rejections render as `ApiError`

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use super::errors::ApiError;

/// JSON body; malformed or mistyped input becomes a 422 `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; e.g. a malformed UUID becomes a 422 `ApiError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
