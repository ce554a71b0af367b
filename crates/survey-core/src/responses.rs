//! JSON payloads returned by the survey HTTP endpoints.
//!
//! Field names are part of the wire contract consumed by the form's script
//! and stay in Spanish where the page expects them (`reporte`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `POST /encuesta` on success.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitResponse {
    pub ok: bool,
    /// Generated id of the stored response.
    pub id: i64,
    /// Report name exactly as submitted.
    pub reporte: String,
}

impl SubmitResponse {
    #[must_use]
    pub fn accepted(id: i64, reporte: impl Into<String>) -> Self {
        Self {
            ok: true,
            id,
            reporte: reporte.into(),
        }
    }
}

/// Response from `GET /api/subprocesos`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubprocessListResponse {
    pub ok: bool,
    pub items: Vec<String>,
}

impl SubprocessListResponse {
    #[must_use]
    pub const fn found(items: Vec<String>) -> Self {
        Self { ok: true, items }
    }

    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            ok: false,
            items: Vec::new(),
        }
    }
}

/// Error body for every rejected request that answers with JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub ok: bool,
    pub detail: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            detail: detail.into(),
        }
    }
}
