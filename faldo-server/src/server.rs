mod error;
mod index;
mod sparql;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use faldo_core::FeatureCollection;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{Any, CorsLayer},
};
use tracing::info;
use utoipa::OpenApi;

pub use self::error::Error;
use crate::cli::ServerConfig;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(OpenApi)]
#[openapi(paths(sparql::query, sparql::query_form))]
struct ApiDoc;

#[derive(Clone)]
pub struct Context {
    features: Arc<dyn FeatureCollection>,
}

impl Context {
    pub fn new(features: Arc<dyn FeatureCollection>) -> Self {
        Self { features }
    }
}

pub async fn serve(
    config: &ServerConfig,
    features: Arc<dyn FeatureCollection>,
) -> anyhow::Result<()> {
    let service = ServiceBuilder::new().trace_for_http();

    let ctx = Context::new(features);
    let app = router().layer(service).with_state(ctx);

    let listener = TcpListener::bind(config.bind).await?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn router() -> Router<Context> {
    index::router()
        .merge(sparql::router())
        .route("/openapi.json", get(api_doc))
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

async fn api_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C listener");

    info!("received shutdown signal");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use faldo_core::collections::SampleFeatures;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let ctx = Context::new(Arc::new(SampleFeatures::default()));
        router().with_state(ctx)
    }

    #[tokio::test]
    async fn test_api_doc() -> anyhow::Result<()> {
        let request = Request::builder()
            .uri("/openapi.json")
            .body(Body::empty())?;
        let response = app().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await?.to_bytes();
        let actual: Value = serde_json::from_slice(&body)?;

        assert!(actual["paths"]["/sparql"]["get"].is_object());
        assert!(actual["paths"]["/sparql"]["post"].is_object());

        Ok(())
    }

    #[tokio::test]
    async fn test_preflight() -> anyhow::Result<()> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/sparql")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())?;
        let response = app().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,POST,OPTIONS"
        );

        let body = response.into_body().collect().await?.to_bytes();
        assert!(body.is_empty());

        Ok(())
    }
}
