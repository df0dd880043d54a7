use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};

use crate::{error::ForwardError, message::QueryResponse, state::SharedState};

pub async fn query_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<QueryResponse>, ForwardError> {
    // Oversized or unreadable bodies share the 500 envelope too.
    let body = body.map_err(|e| ForwardError::InvalidRequest(format!("Invalid request body: {e}")))?;
    let response = state.forwarder.forward_body(&body).await?;
    Ok(Json(QueryResponse::ok(response)))
}
