use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{insert_custom, remove_by, replace_custom, HistoryRepository, ProtocolRepository};
use crate::{history::HistoryRecord, Protocol, StoreError};

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    protocols: Arc<RwLock<Vec<Protocol>>>,
    history: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing custom protocols.
    pub fn with_protocols(protocols: Vec<Protocol>) -> Self {
        Self {
            protocols: Arc::new(RwLock::new(protocols)),
            ..Self::default()
        }
    }

    /// Seed with history ordered most recent first.
    pub fn with_history(self, records: Vec<HistoryRecord>) -> Self {
        Self {
            history: Arc::new(RwLock::new(records)),
            ..self
        }
    }
}

#[async_trait]
impl ProtocolRepository for MemoryStore {
    async fn list_custom(&self) -> Result<Vec<Protocol>, StoreError> {
        Ok(self.protocols.read().await.clone())
    }

    async fn create_custom(&self, protocol: &Protocol) -> Result<(), StoreError> {
        insert_custom(&mut *self.protocols.write().await, protocol)
    }

    async fn update_custom(&self, protocol: &Protocol) -> Result<(), StoreError> {
        replace_custom(&mut self.protocols.write().await, protocol)
    }

    async fn delete_custom(&self, id: &str) -> Result<bool, StoreError> {
        Ok(remove_by(&mut *self.protocols.write().await, |p| p.id() == id))
    }
}

#[async_trait]
impl HistoryRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(self.history.read().await.clone())
    }

    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        self.history.write().await.insert(0, record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(remove_by(&mut *self.history.write().await, |r| r.id == id))
    }
}
