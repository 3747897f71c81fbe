use crate::app::App;
use hangboard::history::HistoryLog;
use hangboard::store::{HistoryRepository, ProtocolRepository, Store};

/// Load persisted collections into the app. Failures leave the collection
/// empty and are reported, never fatal.
pub async fn initialize_app_state(app: &mut App, store: &dyn Store) {
    let mut warnings = Vec::new();

    match store.list_custom().await {
        Ok(custom) => {
            tracing::info!(count = custom.len(), "loaded custom protocols");
            app.set_custom_protocols(custom);
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load custom protocols");
            warnings.push(format!("Warning: Could not load custom protocols: {}", e));
        }
    }

    match store.list().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "loaded history");
            app.history = HistoryLog::from_records(records);
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load history");
            warnings.push(format!("Warning: Could not load history: {}", e));
        }
    }

    if !warnings.is_empty() {
        app.set_status(warnings.join("; "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use hangboard::store::{JsonFileStore, MemoryStore};
    use hangboard::Protocol;

    #[tokio::test]
    async fn loads_custom_protocols_and_history() {
        let (mut app, _) = test_app();
        let store = MemoryStore::with_protocols(vec![Protocol::new(
            "c1", "Campus", 8, 4, 4, 120, 2,
        )
        .unwrap()]);
        initialize_app_state(&mut app, &store).await;

        assert_eq!(app.catalog.len(), 5);
        assert!(app.history.is_empty());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn broken_history_file_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("history.json"), "[{").unwrap();
        let store = JsonFileStore::new(dir.path());

        let (mut app, _) = test_app();
        initialize_app_state(&mut app, &store).await;

        assert!(app.history.is_empty());
        assert_eq!(app.catalog.len(), 4);
        assert!(app
            .status_message
            .unwrap()
            .starts_with("Warning: Could not load history"));
    }
}
