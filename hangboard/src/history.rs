//! Completed and stopped sessions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::SessionSummary;

/// A finished or stopped session as stored in the history log.
///
/// The protocol name is a snapshot; editing or deleting the protocol later
/// does not touch existing records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub protocol_name: String,
    /// Seconds actually trained, prepare countdown included.
    pub duration: u64,
    pub completed: bool,
}

impl HistoryRecord {
    pub fn from_summary(summary: &SessionSummary, date: OffsetDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            protocol_name: summary.protocol_name.clone(),
            duration: summary.elapsed,
            completed: summary.completed,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Done"
        } else {
            "Stopped"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub sessions: usize,
    pub completed: usize,
    pub total_seconds: u64,
}

/// History records, most recent first.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: VecDeque<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records that are already ordered most recent first.
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn record(&mut self, record: HistoryRecord) {
        self.records.push_front(record);
    }

    pub fn delete(&mut self, id: &str) -> Option<HistoryRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        self.records.remove(idx)
    }

    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        self.records.iter().fold(HistoryStats::default(), |mut acc, r| {
            acc.sessions += 1;
            acc.total_seconds = acc.total_seconds.saturating_add(r.duration);
            if r.completed {
                acc.completed += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;
    use time::macros::datetime;

    fn summary(name: &str, elapsed: u64, completed: bool) -> SessionSummary {
        SessionSummary {
            protocol_name: name.to_string(),
            elapsed,
            completed,
            final_phase: if completed {
                Phase::Finished
            } else {
                Phase::Hang
            },
        }
    }

    #[test]
    fn record_prepends() {
        let mut log = HistoryLog::new();
        let first = HistoryRecord::from_summary(
            &summary("Repeaters", 536, true),
            datetime!(2026-10-01 18:00 UTC),
        );
        let second = HistoryRecord::from_summary(
            &summary("Max Hangs", 40, false),
            datetime!(2026-10-02 18:00 UTC),
        );
        log.record(first.clone());
        log.record(second.clone());

        let names: Vec<_> = log.records().map(|r| r.protocol_name.as_str()).collect();
        assert_eq!(names, vec!["Max Hangs", "Repeaters"]);
        assert_eq!(log.get(0), Some(&second));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn delete_by_id() {
        let mut log = HistoryLog::new();
        let rec = HistoryRecord::from_summary(
            &summary("Endurance", 300, false),
            OffsetDateTime::now_utc(),
        );
        let id = rec.id.clone();
        log.record(rec);

        assert!(log.delete("missing").is_none());
        assert_eq!(log.delete(&id).map(|r| r.duration), Some(300));
        assert!(log.is_empty());
    }

    #[test]
    fn stats_and_labels() {
        let now = OffsetDateTime::now_utc();
        let log = HistoryLog::from_records(vec![
            HistoryRecord::from_summary(&summary("A", 100, true), now),
            HistoryRecord::from_summary(&summary("B", 50, false), now),
        ]);
        assert_eq!(
            log.stats(),
            HistoryStats {
                sessions: 2,
                completed: 1,
                total_seconds: 150
            }
        );
        assert_eq!(log.get(0).unwrap().status_label(), "Done");
        assert_eq!(log.get(1).unwrap().status_label(), "Stopped");
    }

    #[test]
    fn serializes_camel_case_rfc3339() {
        let rec = HistoryRecord {
            id: "abc".to_string(),
            date: datetime!(2026-10-17 07:30 UTC),
            protocol_name: "Repeaters".to_string(),
            duration: 536,
            completed: true,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["protocolName"], "Repeaters");
        assert_eq!(json["date"], "2026-10-17T07:30:00Z");
    }
}
