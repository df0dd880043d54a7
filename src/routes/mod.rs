// src/routes/mod.rs
pub mod query;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use query::query_handler;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", post(query_handler))
        .route("/query", post(query_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(middleware::from_fn(preflight_middleware))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn preflight_middleware(req: Request, next: Next) -> Response {
    // Browsers send OPTIONS first; answer it without touching the handler.
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
