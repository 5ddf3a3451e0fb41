// Timetable PDF renderer.
// Page composition is pure (`layout_report`); `encode_pdf` serializes the result.
// Both are CPU-bound and run inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod layout;
pub mod pages;
pub mod palette;
pub mod pdf;

use bytes::Bytes;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::profile::UserProfile;
use crate::routine::Routine;

pub use pages::layout_report;
pub use pdf::encode_pdf;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Pdf(String),

    #[error("render task failed: {0}")]
    Join(String),
}

/// Lays out and encodes the report in one synchronous step.
pub fn render_report_sync(
    profile: &UserProfile,
    routine: &Routine,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, RenderError> {
    let layout = layout_report(profile, routine, generated_on);
    encode_pdf(&layout)
}

/// Renders the timetable PDF for `profile` and its composed `routine`, dated today.
pub async fn render_report(profile: &UserProfile, routine: &Routine) -> Result<Bytes, RenderError> {
    let profile = profile.clone();
    let routine = routine.clone();
    let generated_on = chrono::Local::now().date_naive();

    let pdf = tokio::task::spawn_blocking(move || render_report_sync(&profile, &routine, generated_on))
        .await
        .map_err(|e| RenderError::Join(e.to_string()))??;

    Ok(Bytes::from(pdf))
}
