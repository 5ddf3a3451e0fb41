//! Report delivery storage.
//!
//! `ReportStore` is carried in `AppState` as `Arc<dyn ReportStore>` so the S3 backend
//! can be swapped for the in-memory one in tests without touching the handlers.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[cfg(test)]
pub mod memory;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload failed: {0}")]
    Upload(String),
}

/// Where a delivered report ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub report_id: Uuid,
    pub key: String,
    pub size_bytes: usize,
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn put_report(&self, report_id: Uuid, pdf: Bytes) -> Result<StoredReport, StorageError>;
}

/// Object key for a report: `{prefix}/{uuid}.pdf`, or `{uuid}.pdf` with no prefix.
pub fn report_key(prefix: &str, report_id: Uuid) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{report_id}.pdf")
    } else {
        format!("{prefix}/{report_id}.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// S3ReportStore
// ────────────────────────────────────────────────────────────────────────────

pub struct S3ReportStore {
    client: S3Client,
    bucket: String,
    key_prefix: String,
}

impl S3ReportStore {
    pub fn new(client: S3Client, bucket: impl Into<String>, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key_prefix: key_prefix.into(),
        }
    }
}

#[async_trait]
impl ReportStore for S3ReportStore {
    async fn put_report(&self, report_id: Uuid, pdf: Bytes) -> Result<StoredReport, StorageError> {
        let key = report_key(&self.key_prefix, report_id);
        let size_bytes = pdf.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(pdf))
            .content_type(PDF_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| StorageError::Upload(format!("S3 upload failed: {e}")))?;

        info!("Uploaded timetable to s3://{}/{} ({size_bytes} bytes)", self.bucket, key);

        Ok(StoredReport {
            report_id,
            key,
            size_bytes,
        })
    }
}
