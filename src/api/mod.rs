//! HTTP surface of the service.
//!
//! Handlers translate requests into [`BeeClient`] calls and the results into
//! responses. Collaborators are built once at startup and injected through
//! [`AppState`]; nothing is looked up globally.

pub mod docs;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::BeeClient;
use axum::routing::get;
use axum::Router;
use opentelemetry_sdk::trace::Tracer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub bees: BeeClient,
    /// Present only when the service runs traced.
    pub tracer: Option<Tracer>,
}

impl AppState {
    pub fn new(bees: BeeClient, tracer: Option<Tracer>) -> Self {
        Self { bees, tracer }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/bees", get(handlers::list_bees).post(handlers::create_bee))
        .route(
            "/bees/{id}",
            get(handlers::get_bee)
                .put(handlers::update_bee)
                .delete(handlers::delete_bee),
        )
        .route(docs::SWAGGER_UI_PATH, get(docs::swagger_ui))
        .route(docs::OPENAPI_PATH, get(docs::openapi_document))
        .with_state(state)
}
