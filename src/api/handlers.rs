use crate::api::{ApiError, AppState};
use crate::clients::ActorClient;
use crate::model::{Bee, BeeCreate, BeeUpdate};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use opentelemetry::baggage::BaggageExt;
use opentelemetry::trace::{TraceContextExt, Tracer as _};
use opentelemetry::{Context, KeyValue};
use opentelemetry_sdk::trace::Tracer;
use tracing::debug;

pub const GREETING: &str = "Hello World!";

/// Baggage entry set on the traced root route.
pub const USERNAME_BAGGAGE_KEY: &str = "app.username";
pub const USERNAME_BAGGAGE_VALUE: &str = "beekeeper";

/// Span opened by the traced root route, and its single attribute.
pub const GREETING_SPAN_NAME: &str = "SayHello";
pub const GREETING_ATTRIBUTE_KEY: &str = "greeting.target";
pub const GREETING_ATTRIBUTE_VALUE: &str = "world";

/// `GET /`
///
/// Only this route is traced; the CRUD routes never open spans.
pub async fn hello(State(state): State<AppState>) -> &'static str {
    if let Some(tracer) = &state.tracer {
        trace_greeting(tracer);
    }
    GREETING
}

/// The current context plus the fixed username baggage.
pub fn greeting_context() -> Context {
    Context::current_with_baggage(vec![KeyValue::new(USERNAME_BAGGAGE_KEY, USERNAME_BAGGAGE_VALUE)])
}

/// Opens the greeting span under the username baggage and returns the username seen inside it.
// Synchronous so the context guard can never be held across an await point.
fn trace_greeting(tracer: &Tracer) -> Option<String> {
    let _baggage = greeting_context().attach();
    tracer.in_span(GREETING_SPAN_NAME, |cx| {
        cx.span()
            .set_attribute(KeyValue::new(GREETING_ATTRIBUTE_KEY, GREETING_ATTRIBUTE_VALUE));
        let username = cx.baggage().get(USERNAME_BAGGAGE_KEY).map(|v| v.as_str().to_string());
        debug!(?username, "Greeting traced");
        username
    })
}

/// `GET /bees`
pub async fn list_bees(State(state): State<AppState>) -> Result<Json<Vec<Bee>>, ApiError> {
    Ok(Json(state.bees.list().await?))
}

/// `GET /bees/{id}`
pub async fn get_bee(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Bee>, ApiError> {
    state
        .bees
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `POST /bees`
///
/// Responds `201 Created` with the stored bee and a `Location` pointing at it.
pub async fn create_bee(
    State(state): State<AppState>,
    Json(input): Json<BeeCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let bee = state.bees.create_bee(input.name).await?;
    let location = format!("/bees/{}", bee.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(bee)))
}

/// `PUT /bees/{id}`
pub async fn update_bee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<BeeUpdate>,
) -> Result<StatusCode, ApiError> {
    state.bees.update_bee(id, input.name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /bees/{id}`
pub async fn delete_bee(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Bee>, ApiError> {
    Ok(Json(state.bees.delete_bee(id).await?))
}
