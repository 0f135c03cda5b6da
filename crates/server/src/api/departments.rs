//! Canonical department listing.

use axum::Json;
use campusdesk_core::{Department, CANONICAL_DEPARTMENTS};

/// List departments in canonical order
pub async fn list_departments() -> Json<Vec<Department>> {
    Json(CANONICAL_DEPARTMENTS.to_vec())
}
