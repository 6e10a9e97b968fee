use crate::api::api_error::APIError;
use crate::api::model::NewWord;
use crate::api::server::AppState;
use crate::error::Error;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    let word_list = if state.config.allow_append {
        get(list_words).post(append_word)
    } else {
        get(list_words)
    };
    Router::new()
        .route("/", get(hello_world))
        .route("/api/word", word_list)
        .route("/api/word/:index", get(get_word))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn hello_world() -> &'static str {
    "Hello World!"
}

async fn list_words(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.word_store.read().await.list().await)
}

async fn get_word(
    State(state): State<AppState>,
    WithRejection(Path(index), _): WithRejection<Path<String>, APIError>,
) -> Result<Json<String>, APIError> {
    let word_store = state.word_store.read().await;
    let len = word_store.len().await;
    let word = match state.config.index_policy.resolve_decimal(&index, len) {
        Some(resolved) => word_store.get(resolved).await,
        None => None,
    };
    word.map(Json)
        .ok_or_else(|| Error::WordNotFound(index).into())
}

async fn append_word(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, APIError> {
    let NewWord(word) = NewWord::try_from(&body)?;
    let index = state.word_store.write().await.append(word).await;
    tracing::info!("appended word at index {index}");
    Ok((StatusCode::CREATED, index.to_string()))
}
