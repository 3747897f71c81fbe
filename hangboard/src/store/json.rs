use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use super::{insert_custom, remove_by, replace_custom, HistoryRepository, ProtocolRepository};
use crate::{history::HistoryRecord, Protocol, StoreError};

const PROTOCOLS_FILE: &str = "custom_protocols.json";
const HISTORY_FILE: &str = "history.json";

/// Store backed by two JSON documents in a data directory.
///
/// Every mutation rewrites the whole file through a sibling temp file and a
/// rename, so a crash never leaves a half-written collection behind.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn protocols_path(&self) -> PathBuf {
        self.dir.join(PROTOCOLS_FILE)
    }

    fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }
}

async fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_slice(&bytes).map_err(|e| StoreError::malformed(path, e))
}

async fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }
    let body = serde_json::to_vec_pretty(items).map_err(|e| StoreError::serialize(path, e))?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, body)
        .await
        .map_err(|e| StoreError::io(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::io(path, e))?;
    tracing::debug!(path = %path.display(), count = items.len(), "wrote collection");
    Ok(())
}

#[async_trait]
impl ProtocolRepository for JsonFileStore {
    async fn list_custom(&self) -> Result<Vec<Protocol>, StoreError> {
        read_list(&self.protocols_path()).await
    }

    async fn create_custom(&self, protocol: &Protocol) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.protocols_path();
        let mut list = read_list(&path).await?;
        insert_custom(&mut list, protocol)?;
        write_list(&path, &list).await
    }

    async fn update_custom(&self, protocol: &Protocol) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.protocols_path();
        let mut list: Vec<Protocol> = read_list(&path).await?;
        replace_custom(&mut list, protocol)?;
        write_list(&path, &list).await
    }

    async fn delete_custom(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.protocols_path();
        let mut list: Vec<Protocol> = read_list(&path).await?;
        if !remove_by(&mut list, |p| p.id() == id) {
            return Ok(false);
        }
        write_list(&path, &list).await?;
        Ok(true)
    }
}

#[async_trait]
impl HistoryRepository for JsonFileStore {
    async fn list(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        read_list(&self.history_path()).await
    }

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.history_path();
        let mut list: Vec<HistoryRecord> = read_list(&path).await?;
        list.insert(0, record.clone());
        write_list(&path, &list).await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.history_path();
        let mut list: Vec<HistoryRecord> = read_list(&path).await?;
        if !remove_by(&mut list, |r| r.id == id) {
            return Ok(false);
        }
        write_list(&path, &list).await?;
        Ok(true)
    }
}
