//! HTTP handlers for the Bibliotheque pages

pub mod authors;
pub mod books;
pub mod health;
pub mod home;


use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        request::Parts,
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

use crate::{error::AppError, AppState};

/// Request body accepted either as an urlencoded form or as JSON,
/// depending on the `Content-Type` header.
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(FormOrJson(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(FormOrJson(value))
        }
    }
}

/// Record id taken from the `:id` path segment.
///
/// A segment that is not a UUID cannot name any record and is reported as
/// not found.
pub struct RecordId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Uuid::parse_str(&raw)
            .map(RecordId)
            .map_err(|_| AppError::NotFound(format!("Aucun enregistrement {}", raw)))
    }
}

/// `302 Found` redirect to a listing page
pub fn redirect(to: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, to)]).into_response()
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Home
        .route("/", get(home::index))
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route("/authors/new", get(authors::new_author))
        .route(
            "/authors/edit/:id",
            get(authors::edit_author).post(authors::update_author),
        )
        .route("/authors/delete/:id", get(authors::delete_author))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/new", get(books::new_book))
        .route(
            "/books/edit/:id",
            get(books::edit_book).post(books::update_book),
        )
        .route("/books/delete/:id", get(books::delete_book))
        .with_state(state)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
