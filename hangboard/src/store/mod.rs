//! Persistence ports for custom protocols and session history.
//!
//! Built-in protocols are not stored; see [`crate::catalog`].

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::{history::HistoryRecord, Protocol, StoreError};

/// Outbound port for the user's own protocols.
#[async_trait]
pub trait ProtocolRepository: Send + Sync + 'static {
    /// All custom protocols in creation order.
    async fn list_custom(&self) -> Result<Vec<Protocol>, StoreError>;

    async fn create_custom(&self, protocol: &Protocol) -> Result<(), StoreError>;

    /// Replace the protocol with the same id.
    async fn update_custom(&self, protocol: &Protocol) -> Result<(), StoreError>;

    /// Returns whether a protocol was removed.
    async fn delete_custom(&self, id: &str) -> Result<bool, StoreError>;
}

/// Outbound port for the history log.
#[async_trait]
pub trait HistoryRepository: Send + Sync + 'static {
    /// All records, most recent first.
    async fn list(&self) -> Result<Vec<HistoryRecord>, StoreError>;

    /// Add a record in front of all others.
    async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Both collections behind one handle.
pub trait Store: ProtocolRepository + HistoryRepository {}

impl<T: ProtocolRepository + HistoryRepository> Store for T {}

pub(crate) fn insert_custom(list: &mut Vec<Protocol>, protocol: &Protocol) -> Result<(), StoreError> {
    if list.iter().any(|p| p.id() == protocol.id()) {
        return Err(StoreError::DuplicateProtocol(protocol.id().to_string()));
    }
    list.push(protocol.clone());
    Ok(())
}

pub(crate) fn replace_custom(list: &mut [Protocol], protocol: &Protocol) -> Result<(), StoreError> {
    let slot = list
        .iter_mut()
        .find(|p| p.id() == protocol.id())
        .ok_or_else(|| StoreError::ProtocolNotFound(protocol.id().to_string()))?;
    *slot = protocol.clone();
    Ok(())
}

pub(crate) fn remove_by<T>(list: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = list.len();
    list.retain(|item| !matches(item));
    list.len() != before
}
