//! # Server Setup
//!
//! Serves the built front end with a client-side-routing fallback and publishes the
//! footer content as JSON.

// region: --- Imports
use axum::{routing::get, Json, Router};
use shared::footer::{FooterContent, FOOTER};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
// endregion: --- Imports

/// Create the router: `/api/footer`, then static files, then `index.html` for anything
/// the bundle does not contain.
pub fn create_router(config: &ServerConfig) -> Router {
    let static_files = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/api/footer", get(footer_content))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn footer_content() -> Json<FooterContent> {
    Json(FOOTER)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("preview server running at http://{}", config.bind_address);
    info!("serving from {}", config.dist_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>index</body></html>";

    fn test_config(dir: &tempfile::TempDir) -> ServerConfig {
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("main.css"), "body{}").unwrap();
        ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_footer_json() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(&test_config(&dir));

        let (status, body) = get_body(app, "/api/footer").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["brand"]["name"], "INTELIK");
        assert_eq!(json["groups"].as_array().unwrap().len(), 3);
        assert_eq!(json["socials"][0]["href"], "https://twitter.com/intelik");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(&test_config(&dir));

        let (status, body) = get_body(app, "/main.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"body{}");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(&test_config(&dir));

        let (status, body) = get_body(app, "/services").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(&test_config(&dir));

        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());
    }
}
