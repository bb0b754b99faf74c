use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{fs, sync::RwLock};
use tracing::{debug, warn};

use crate::{error::AppError, models::trip::TripRecord};

/// Authoritative `driver_id -> TripRecord` map. Records live in memory and
/// every mutation rewrites the whole persisted snapshot while the write lock
/// is held, so concurrent submissions serialize instead of clobbering each
/// other's writes. Records are never evicted, only replaced.
#[derive(Clone)]
pub struct LocationStore {
    path: Arc<PathBuf>,
    records: Arc<RwLock<HashMap<String, TripRecord>>>,
}

impl LocationStore {
    /// Loads the persisted snapshot, or starts empty when the file is
    /// missing, empty, or unreadable as JSON.
    pub async fn open(path: PathBuf) -> Result<Self, AppError> {
        let records = load_snapshot(&path).await?;
        Ok(Self {
            path: Arc::new(path),
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Replaces any existing record for the same driver, then persists the
    /// full snapshot.
    pub async fn upsert(&self, record: TripRecord) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        debug!("storing trip for driver {}", record.driver_id);
        records.insert(record.driver_id.clone(), record);
        self.persist(&records).await
    }

    /// Exact-match point lookup. `None` means no record, not an error.
    pub async fn get_by_driver(&self, driver_id: &str) -> Option<TripRecord> {
        self.records.read().await.get(driver_id).cloned()
    }

    /// All current records, in no particular order.
    pub async fn snapshot(&self) -> Vec<TripRecord> {
        self.records.read().await.values().cloned().collect()
    }

    async fn persist(&self, records: &HashMap<String, TripRecord>) -> Result<(), AppError> {
        let snapshot: Vec<&TripRecord> = records.values().collect();
        let data =
            serde_json::to_vec_pretty(&snapshot).map_err(|err| AppError::Other(err.into()))?;
        fs::write(self.path.as_ref(), data).await?;
        Ok(())
    }
}

async fn load_snapshot(path: &Path) -> Result<HashMap<String, TripRecord>, AppError> {
    if !fs::try_exists(path).await? {
        return Ok(HashMap::new());
    }
    let raw = fs::read(path).await?;
    if raw.is_empty() {
        return Ok(HashMap::new());
    }
    let records: Vec<TripRecord> = match serde_json::from_slice(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "bus locations file {} is not valid JSON, starting empty: {err}",
                path.display()
            );
            Vec::new()
        }
    };
    Ok(records
        .into_iter()
        .map(|record| (record.driver_id.clone(), record))
        .collect())
}
