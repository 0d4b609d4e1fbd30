//! Quote management routes.
//!
//! This module implements the quote-related HTTP endpoints:
//! - POST /quotes - Create a quote
//! - GET /quotes - List all quotes, or filter by author
//! - GET /quotes/random - Fetch one quote at random
//! - DELETE /quotes/{id} - Delete a quote by id

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;

use quotes_core::{NewQuote, Quote, QuoteId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /quotes.
///
/// Missing fields deserialize as empty strings so they fail domain
/// validation (with its canonical messages) instead of failing the
/// decoder.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    /// Quote author.
    #[serde(default)]
    pub author: String,
    /// Quote text; the wire field is named `quote`.
    #[serde(default, rename = "quote")]
    pub text: String,
}

/// Query parameters for GET /quotes.
#[derive(Debug, Deserialize)]
pub struct ListQuotesParams {
    /// When present, only quotes by this author are returned.
    pub author: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /quotes - Create a new quote.
///
/// # Request
///
/// Body: `{ "author": "...", "quote": "..." }`
///
/// # Response
///
/// - 201 Created: the stored quote with assigned `id` and `created_at`
/// - 400 Bad Request: malformed body, empty author, or empty text
async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    // Normalize every decode failure (bad syntax, wrong content type) to a
    // plain 400 rather than axum's default 415/422 split.
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected create payload");
        ApiError::BadRequest("Invalid request body".to_string())
    })?;

    let quote = state
        .service()
        .create_quote(NewQuote::new(request.author, request.text))?;

    tracing::info!(id = %quote.id, author = %quote.author, "quote created");

    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes - List quotes, optionally filtered by author.
///
/// # Response
///
/// - 200 OK: array of quotes; an empty store yields `[]`, never null
/// - 400 Bad Request: `author` parameter present but empty
async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<ListQuotesParams>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = match params.author.as_deref() {
        None => state.service().get_all_quotes()?,
        Some("") => {
            return Err(ApiError::BadRequest(
                "Author parameter is required".to_string(),
            ));
        }
        Some(author) => state.service().get_quotes_by_author(author)?,
    };

    Ok(Json(quotes))
}

/// GET /quotes/random - Fetch one quote at random.
///
/// # Response
///
/// - 200 OK: a uniformly chosen quote
/// - 404 Not Found: the store is empty
async fn random_quote(State(state): State<AppState>) -> ApiResult<Json<Quote>> {
    let quote = state.service().get_random_quote()?;
    Ok(Json(quote))
}

/// DELETE /quotes/{id} - Delete a quote by id.
///
/// A non-numeric id segment is answered with 400, the same as a
/// non-positive one.
///
/// # Response
///
/// - 204 No Content: the quote was removed
/// - 400 Bad Request: id not a positive integer
/// - 404 Not Found: no quote carries the id
async fn delete_quote(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "rejected delete path segment");
        ApiError::BadRequest("Invalid quote ID".to_string())
    })?;

    state.service().delete_quote(QuoteId::from_i64(id))?;

    tracing::info!(id, "quote deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build quote routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/{id}", delete(delete_quote))
}

// ============================================================================
// Tests
// ============================================================================
