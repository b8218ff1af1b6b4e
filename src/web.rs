use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Form, Router,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ConverterError;
use crate::handler::{ConversionRequest, handle_conversion};
use crate::templates;

impl IntoResponse for ConverterError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.user_message()).into_response()
    }
}

/// Routes without middleware, used directly by tests
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/convert", post(convert).fallback(redirect_to_form))
        .fallback(index)
}

pub fn app(config: &ServerConfig) -> Router {
    router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_seconds.into()),
        ))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server is running on http://localhost:{}", config.port);
    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server terminated unexpectedly")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn index() -> Html<&'static str> {
    Html(templates::render_index())
}

async fn redirect_to_form() -> Redirect {
    Redirect::to("/")
}

async fn convert(
    form: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let request: ConversionRequest = match form {
        Ok(Form(pairs)) => pairs.into_iter().collect(),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!("Request body too large: {rejection}");
            return rejection.into_response();
        }
        // An undecodable body carries no usable value
        Err(rejection) => {
            tracing::debug!("Rejected form body: {rejection}");
            ConversionRequest::default()
        }
    };

    match handle_conversion(&request) {
        Ok(result) => Html(templates::render_result(&result)).into_response(),
        Err(err) => {
            tracing::debug!("Conversion failed: {err}");
            err.into_response()
        }
    }
}
