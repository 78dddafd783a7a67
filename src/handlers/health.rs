//! Health check and API description endpoints.
//!
//! Both are stateless and never touch the database, so they keep answering
//! even when database initialization failed.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health - liveness check with a server timestamp.
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /api - fixed service description with the endpoint inventory.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Madison Duran Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "contact": "POST /api/contact - Submit contact form",
            "contacts": "GET /api/contacts - Get all contacts",
            "contactById": "GET /api/contacts/{id} - Get contact by ID",
            "contactResponses": "GET /api/contacts/{id}/responses - List responses for a contact",
            "createResponse": "POST /api/contacts/{id}/responses - Record a response",
            "health": "GET /api/health - Health check",
        },
        "status": "API is running successfully",
    }))
}
