//! Handler errors and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use survey_core::errors::ValidationError;
use survey_core::responses::ErrorResponse;
use survey_db::error::DatabaseError;
use thiserror::Error;

/// Why a survey submission was rejected.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The body could not be decoded as a form.
    #[error(transparent)]
    Rejected(#[from] FormRejection),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("El reporte seleccionado no existe en la base.")]
    UnknownReport { name: String },

    #[error("No se pudo verificar el reporte. Intenta de nuevo.")]
    Lookup(#[source] DatabaseError),

    #[error("No se pudo guardar la encuesta. Intenta de nuevo.")]
    Storage(#[source] DatabaseError),
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => rejection.status(),
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownReport { .. } => StatusCode::BAD_REQUEST,
            Self::Lookup(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        match &self {
            Self::Lookup(error) => tracing::error!(%error, "report lookup failed"),
            Self::Storage(error) => tracing::error!(%error, "survey insert failed"),
            Self::UnknownReport { name } => tracing::info!(report = %name, "unknown report submitted"),
            Self::Rejected(_) | Self::Validation(_) => {}
        }

        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Failure while producing an HTML page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Io(error) if error.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Self::Io(_) | Self::Render(_) => {
                tracing::error!(error = %self, "page failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
