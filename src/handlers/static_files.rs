//! Static portfolio page and asset serving.

use std::fs;
use std::path::Path as FsPath;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
};

use crate::state::AppState;

fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default();
    match extension {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn serve_file(path: &FsPath) -> Response<Body> {
    match fs::read(path) {
        Ok(contents) => {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type_for(filename))
                .body(Body::from(contents))
                .unwrap()
        }
        Err(_) => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not found"))
            .unwrap(),
    }
}

fn empty_not_found() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())
        .unwrap()
}

/// Serve the portfolio landing page (GET /).
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    serve_file(&state.static_dir.join("index.html"))
}

/// Serve a named portfolio page (GET /{page}).
///
/// Only `.html` pages are served; anything else gets an empty 404.
pub async fn page(State(state): State<AppState>, Path(page): Path<String>) -> impl IntoResponse {
    if !page.ends_with(".html") || page.contains("..") {
        return empty_not_found();
    }

    serve_file(&state.static_dir.join(page))
}

/// Serve images and other assets (GET /assets/{*path}).
pub async fn asset(State(state): State<AppState>, Path(path): Path<String>) -> impl IntoResponse {
    if path.split('/').any(|segment| segment == "..") {
        return empty_not_found();
    }

    serve_file(&state.static_dir.join("assets").join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type_for("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
        assert_eq!(content_type_for("no-extension"), "application/octet-stream");
    }
}
