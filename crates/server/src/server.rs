use axum::{
    Router,
    routing::{delete, get, post},
};

use std::sync::Arc;

use crate::{categories, expenses, export, forecast};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/expenses", get(expenses::list))
        .route("/expenses/bulk", post(expenses::bulk_add))
        .route("/expenses/delete", post(expenses::delete))
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route("/categories/{name}", delete(categories::remove))
        .route("/forecast", post(forecast::forecast))
        .route("/export/{format}", get(export::download))
        .with_state(state)
}

/// Build the HTTP application around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
