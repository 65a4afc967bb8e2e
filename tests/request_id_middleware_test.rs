// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for request ID middleware
//!
//! Tests the request ID middleware functionality including:
//! - UUID generation for each request
//! - Reuse of a caller-supplied `x-request-id`
//! - Request ID availability in handlers via extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use calorie_api::middleware::request_id::{request_id_middleware, RequestId};
use std::error::Error;
use tower::ServiceExt;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn app() -> Router {
    Router::new()
        .route("/", get(test_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let header_value = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .ok_or("Request ID header not present")?;
    assert!(
        Uuid::parse_str(header_value.to_str()?).is_ok(),
        "Request ID is not a valid UUID"
    );

    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .ok_or("Request ID header not present")?
        .to_str()?
        .to_owned();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert_eq!(body_str, format!("Request ID: {header}"));

    Ok(())
}

#[tokio::test]
async fn test_inbound_request_id_is_reused() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "upstream-42")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "upstream-42");

    Ok(())
}

#[tokio::test]
async fn test_blank_inbound_request_id_is_replaced() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "   ")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let header = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str()?;
    assert!(Uuid::parse_str(header).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_unique_ids_per_request() -> Result<(), Box<dyn Error>> {
    let first = app()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;
    let second = app()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_ne!(
        first.headers().get(REQUEST_ID_HEADER),
        second.headers().get(REQUEST_ID_HEADER)
    );

    Ok(())
}
