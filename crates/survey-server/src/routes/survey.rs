//! Survey endpoints: the form page, the dependent subprocess list, and the
//! submission.

use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Json,
    extract::{Query, State, rejection::FormRejection},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use survey_core::listing::Listing;
use survey_core::responses::{SubmitResponse, SubprocessListResponse};
use survey_core::validation::validate_comment;
use tracing::{error, info, warn};

use crate::error::{PageError, SubmitError};
use crate::form::SurveyForm;
use crate::pages::SurveyFormPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FormPageQuery {
    pub reporte: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubprocessQuery {
    pub proceso: Option<String>,
}

/// `GET /encuesta`
///
/// A non-blank `reporte` pins the report and skips the report list. Catalog
/// failures render as empty lists.
pub async fn encuesta_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FormPageQuery>,
) -> Result<Html<String>, PageError> {
    let pinned_report = query.reporte.filter(|r| !r.trim().is_empty());

    let report_names = if pinned_report.is_some() {
        None
    } else {
        Some(degrade("reports", state.service.report_names_listing().await))
    };
    let processes = degrade("processes", state.service.processes_listing().await);

    let page = SurveyFormPage {
        pinned_report,
        report_names,
        processes,
        static_version: state.server.static_version.clone(),
    };
    Ok(Html(page.render()?))
}

fn degrade(catalog: &'static str, listing: Listing<String>) -> Vec<String> {
    if let Some(diagnostic) = listing.diagnostic() {
        warn!(catalog, diagnostic, "catalog unavailable, rendering empty list");
    }
    listing.into_items()
}

/// `GET /api/subprocesos?proceso=<name>`
pub async fn api_subprocesos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubprocessQuery>,
) -> (StatusCode, Json<SubprocessListResponse>) {
    let Some(process) = query.proceso.filter(|p| !p.trim().is_empty()) else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubprocessListResponse::unavailable()),
        );
    };

    match state.service.list_subprocesses(&process).await {
        Ok(items) => (StatusCode::OK, Json(SubprocessListResponse::found(items))),
        Err(error) => {
            error!(%error, process = %process, "subprocess lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubprocessListResponse::unavailable()),
            )
        }
    }
}

/// `POST /encuesta`
///
/// Parse, resolve the report, check the comment, insert. Nothing is written
/// unless every earlier step passed.
pub async fn encuesta_post(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SurveyForm>, FormRejection>,
) -> Result<Json<SubmitResponse>, SubmitError> {
    let Form(form) = form?;
    let submission = form.parse()?;

    let report = state
        .service
        .resolve_report_by_name(&submission.report)
        .await
        .map_err(SubmitError::Lookup)?
        .ok_or_else(|| SubmitError::UnknownReport {
            name: submission.report.clone(),
        })?;

    validate_comment(&submission.comment)?;

    let reporte = submission.report.clone();
    let answers = submission.into_answers(report.meta());
    let id = state
        .service
        .insert_survey_response(report.id, &answers)
        .await
        .map_err(SubmitError::Storage)?;

    info!(id, report = %reporte, report_id = report.id, "survey response stored");
    Ok(Json(SubmitResponse::accepted(id, reporte)))
}
