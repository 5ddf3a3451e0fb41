//! In-memory `ReportStore` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use super::{report_key, ReportStore, StorageError, StoredReport};

/// Keeps reports in a map keyed by object key.
#[derive(Default)]
pub struct InMemoryReportStore {
    key_prefix: String,
    objects: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryReportStore {
    pub fn new(key_prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn put_report(&self, report_id: Uuid, pdf: Bytes) -> Result<StoredReport, StorageError> {
        let key = report_key(&self.key_prefix, report_id);
        let size_bytes = pdf.len();
        self.objects
            .lock()
            .map_err(|_| StorageError::Upload("in-memory store lock poisoned".to_string()))?
            .insert(key.clone(), pdf);
        Ok(StoredReport {
            report_id,
            key,
            size_bytes,
        })
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_round_trip() {
        let store = InMemoryReportStore::new("timetables");
        let id = Uuid::new_v4();
        let stored = store
            .put_report(id, Bytes::from_static(b"%PDF-1.5 test"))
            .await
            .unwrap();
        assert_eq!(stored.report_id, id);
        assert_eq!(stored.size_bytes, 13);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&stored.key).unwrap(), Bytes::from_static(b"%PDF-1.5 test"));
    }
}
