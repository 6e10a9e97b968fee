use crate::api::routes;
use crate::config::SharedConfig;
use crate::word_store::DynWordStore;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub word_store: DynWordStore,
}

/// Build the API [`Router`] serving the given word store.
pub fn router(config: SharedConfig, word_store: DynWordStore) -> Router {
    routes::new(AppState { config, word_store })
}

/// Serve the API on [`Config::bind_addr`][crate::config::Config::bind_addr] until `shutdown`
/// resolves, letting in-flight requests finish.
pub fn new(
    config: SharedConfig,
    word_store: DynWordStore,
    shutdown: impl Future<Output = ()>,
) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.bind_addr)
        .serve(router(config.clone(), word_store).into_make_service())
        .with_graceful_shutdown(shutdown)
}
