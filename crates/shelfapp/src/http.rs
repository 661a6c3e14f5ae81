//! HTTP transport for the catalog. Maps JSON requests onto the API facade.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/books?category=`: list, optionally filtered. `All` or blank means no filter.
//! - `POST /api/books/search`: body `{ "name": "..." }`, case-insensitive title search.
//! - `POST /api/books`: body `{ name, author, date, category }`, responds `201 { success, book }`.
//! - `DELETE /api/books/:id`: responds `{ "success": true }` whether or not the id existed.
//! - `POST /api/books/erase`: empties the catalog.
//! - `GET /api/categories`: distinct categories, sorted.
//! - `GET /api/summary`: totals per category.
//! - `GET /health`: `{ "ok": true }`.
//!
//! Store failures become `500 { "success": false, "error": "..." }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shelfapp::{http, init};
//!
//! let ctx = init::initialize(None)?;
//! http::serve(Arc::new(ctx.api), "localhost:5000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::api::ShelfApi;
use crate::error::ShelfError;
use crate::model::BookInput;
use crate::store::DataStore;

type SharedApi<S> = Arc<ShelfApi<S>>;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Build an axum `Router` serving the catalog through the given API.
pub fn router<S>(api: SharedApi<S>) -> Router
where
    S: DataStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/books", get(list_handler::<S>).post(add_handler::<S>))
        .route("/api/books/search", post(search_handler::<S>))
        .route("/api/books/erase", post(erase_handler::<S>))
        .route("/api/books/:id", delete(delete_handler::<S>))
        .route("/api/categories", get(categories_handler::<S>))
        .route("/api/summary", get(summary_handler::<S>))
        .with_state(api)
}

/// Serve the catalog over HTTP at the given address (e.g. `"localhost:5000"`).
pub async fn serve<S>(api: SharedApi<S>, addr: &str) -> Result<(), std::io::Error>
where
    S: DataStore + Send + Sync + 'static,
{
    let app = router(api);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving catalog");
    axum::serve(listener, app).await
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_handler<S: DataStore>(
    State(api): State<SharedApi<S>>,
    Query(params): Query<ListParams>,
) -> Response {
    match api.list_books(params.category.as_deref()) {
        Ok(result) => Json(result.listed_books).into_response(),
        Err(e) => error_response(e),
    }
}

async fn search_handler<S: DataStore>(
    State(api): State<SharedApi<S>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let term = request.name.unwrap_or_default();
    match api.search_books(&term) {
        Ok(result) => Json(result.listed_books).into_response(),
        Err(e) => error_response(e),
    }
}

async fn add_handler<S: DataStore>(
    State(api): State<SharedApi<S>>,
    Json(input): Json<BookInput>,
) -> Response {
    match api.add_book(input) {
        Ok(mut result) => match result.affected_books.pop() {
            Some(book) => (
                StatusCode::CREATED,
                Json(json!({ "success": true, "book": book })),
            )
                .into_response(),
            None => error_response(ShelfError::Api("add returned no book".to_string())),
        },
        Err(e) => error_response(e),
    }
}

async fn delete_handler<S: DataStore>(
    State(api): State<SharedApi<S>>,
    Path(id): Path<u64>,
) -> Response {
    match api.delete_book(id) {
        Ok(_) => success_response(),
        Err(e) => error_response(e),
    }
}

async fn erase_handler<S: DataStore>(State(api): State<SharedApi<S>>) -> Response {
    match api.erase_books() {
        Ok(_) => success_response(),
        Err(e) => error_response(e),
    }
}

async fn categories_handler<S: DataStore>(State(api): State<SharedApi<S>>) -> Response {
    match api.categories() {
        Ok(result) => Json(result.categories).into_response(),
        Err(e) => error_response(e),
    }
}

async fn summary_handler<S: DataStore>(State(api): State<SharedApi<S>>) -> Response {
    match api.summary() {
        Ok(result) => Json(result.summary).into_response(),
        Err(e) => error_response(e),
    }
}

fn success_response() -> Response {
    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}

fn error_response(e: ShelfError) -> Response {
    error!(error = %e, "request failed");
    let body = json!({ "success": false, "error": e.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
