//! Axum route handlers for the Routine and Timetable API.

use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::render::render_report;
use crate::routine::{compose_routine_from_raw, Routine};
use crate::state::AppState;

pub const DEFAULT_MORNING_TIME: &str = "7:00 AM";
pub const DEFAULT_EVENING_TIME: &str = "9:00 PM";
pub const TIMETABLE_FILENAME: &str = "skincare-timetable.pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Storefront form submission. Missing fields are reported by `compose`, not by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default = "default_morning_time")]
    pub morning_time: String,
    #[serde(default = "default_evening_time")]
    pub evening_time: String,
}

fn default_morning_time() -> String {
    DEFAULT_MORNING_TIME.to_string()
}

fn default_evening_time() -> String {
    DEFAULT_EVENING_TIME.to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResponse {
    pub report_id: Uuid,
    pub key: String,
    pub size_bytes: usize,
    pub recipient: String,
}

impl TimetableRequest {
    /// Checks the form fields, then composes through `compose_routine_from_raw`, which
    /// rejects an unknown skin type before any catalog lookup and drops unknown concerns.
    pub fn compose(self, catalog: &ProductCatalog) -> Result<(UserProfile, Routine), AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(AppError::Validation(
                "email must be a valid address".to_string(),
            ));
        }

        let skin_type = match self.skin_type.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(AppError::Validation("skinType is required".to_string()));
            }
            Some(raw) => raw,
        };

        if self.morning_time.trim().is_empty() || self.evening_time.trim().is_empty() {
            return Err(AppError::Validation(
                "morningTime and eveningTime cannot be blank".to_string(),
            ));
        }

        let routine = compose_routine_from_raw(
            catalog,
            skin_type,
            &self.concerns,
            &self.morning_time,
            &self.evening_time,
        )?;

        let profile = UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            skin_type: routine.skin_type,
            concerns: routine.concerns.clone(),
            morning_time: self.morning_time,
            evening_time: self.evening_time,
        };
        Ok((profile, routine))
    }
}

/// `local@host.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Renders with the configured timeout. A timeout of 0 disables it.
async fn render_with_timeout(
    state: &AppState,
    profile: &UserProfile,
    routine: &Routine,
) -> Result<Bytes, AppError> {
    let secs = state.config.render_timeout_secs;
    if secs == 0 {
        return Ok(render_report(profile, routine).await?);
    }
    match tokio::time::timeout(Duration::from_secs(secs), render_report(profile, routine)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::RenderTimeout(secs)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/routines
///
/// Composes and returns the routine as JSON. No PDF is produced.
pub async fn handle_compose_routine(
    State(state): State<AppState>,
    Json(request): Json<TimetableRequest>,
) -> Result<Json<Routine>, AppError> {
    let (_, routine) = request.compose(&state.catalog)?;

    info!(
        "Composed routine: skin_type={} concerns={} serums={}",
        routine.skin_type,
        routine.concerns.len(),
        routine.products.serums.len()
    );

    Ok(Json(routine))
}

/// POST /api/v1/timetables
///
/// Composes the routine and streams the rendered timetable back as a PDF download.
pub async fn handle_render_timetable(
    State(state): State<AppState>,
    Json(request): Json<TimetableRequest>,
) -> Result<Response, AppError> {
    let (profile, routine) = request.compose(&state.catalog)?;
    let pdf = render_with_timeout(&state, &profile, &routine).await?;

    info!(
        "Rendered timetable: skin_type={} bytes={}",
        profile.skin_type,
        pdf.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TIMETABLE_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// POST /api/v1/timetables/deliveries
///
/// Renders the timetable and hands it to the configured report store.
/// The request is validated first; with no store configured it then responds 503
/// without rendering.
pub async fn handle_deliver_timetable(
    State(state): State<AppState>,
    Json(request): Json<TimetableRequest>,
) -> Result<Json<DeliveryResponse>, AppError> {
    let (profile, routine) = request.compose(&state.catalog)?;
    let store = state.store.clone().ok_or(AppError::StorageUnavailable)?;

    let pdf = render_with_timeout(&state, &profile, &routine).await?;

    let report_id = Uuid::new_v4();
    let stored = store.put_report(report_id, pdf).await?;

    info!("Delivered timetable {report_id} to {}", stored.key);

    Ok(Json(DeliveryResponse {
        report_id: stored.report_id,
        key: stored.key,
        size_bytes: stored.size_bytes,
        recipient: profile.email,
    }))
}
