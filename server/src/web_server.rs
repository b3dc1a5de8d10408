use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::post,
};
use tower_http::cors::{Any, CorsLayer};

use common::log;

use crate::email::EmailSender;
use crate::relay::{RelayState, send_contact_email};

pub const CONTACT_ROUTE: &str = "/send-contact-email";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn build_router<E: EmailSender>(state: RelayState<E>) -> Router {
    Router::new()
        .route(CONTACT_ROUTE, post(send_contact_email::<E>))
        .layer(cors_layer())
        .with_state(state)
}

pub async fn run_web_server<E, F>(
    addr: SocketAddr,
    state: RelayState<E>,
    shutdown_signal: F,
) -> Result<(), String>
where
    E: EmailSender,
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    log!("Contact relay listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Web server error: {}", e))
}
