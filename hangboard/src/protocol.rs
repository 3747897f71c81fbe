use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// An interval pattern for one hang-board session.
///
/// Construct through [`Protocol::new`] or deserialization; both reject values
/// that would make the timer loop forever or never hang.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProtocolFields")]
pub struct Protocol {
    id: String,
    name: String,
    hang_time: u32,
    rest_time: u32,
    #[serde(rename = "sets")]
    reps_per_set: u32,
    rest_between_sets: u32,
    number_of_sets: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProtocolFields {
    id: String,
    name: String,
    hang_time: u32,
    rest_time: u32,
    sets: u32,
    rest_between_sets: u32,
    number_of_sets: u32,
}

impl TryFrom<ProtocolFields> for Protocol {
    type Error = ProtocolError;

    fn try_from(f: ProtocolFields) -> Result<Self, Self::Error> {
        Protocol::new(
            f.id,
            f.name,
            f.hang_time,
            f.rest_time,
            f.sets,
            f.rest_between_sets,
            f.number_of_sets,
        )
    }
}

impl Protocol {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hang_time: u32,
        rest_time: u32,
        reps_per_set: u32,
        rest_between_sets: u32,
        number_of_sets: u32,
    ) -> Result<Self, ProtocolError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ProtocolError::EmptyName);
        }
        for (field, value) in [
            ("hang time", hang_time),
            ("reps per set", reps_per_set),
            ("number of sets", number_of_sets),
        ] {
            if value == 0 {
                return Err(ProtocolError::MustBePositive { field });
            }
        }

        Ok(Self {
            id: id.into(),
            name,
            hang_time,
            rest_time,
            reps_per_set,
            rest_between_sets,
            number_of_sets,
        })
    }

    /// Build a protocol whose values are known to be valid at compile time.
    pub(crate) fn builtin(
        id: &str,
        name: &str,
        hang_time: u32,
        rest_time: u32,
        reps_per_set: u32,
        rest_between_sets: u32,
        number_of_sets: u32,
    ) -> Self {
        debug_assert!(hang_time > 0 && reps_per_set > 0 && number_of_sets > 0);
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hang_time,
            rest_time,
            reps_per_set,
            rest_between_sets,
            number_of_sets,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hang_time(&self) -> u32 {
        self.hang_time
    }

    pub fn rest_time(&self) -> u32 {
        self.rest_time
    }

    pub fn reps_per_set(&self) -> u32 {
        self.reps_per_set
    }

    pub fn rest_between_sets(&self) -> u32 {
        self.rest_between_sets
    }

    pub fn number_of_sets(&self) -> u32 {
        self.number_of_sets
    }

    /// Seconds from the first hang of a set to the end of its last hang.
    /// There is no trailing rest after the last rep.
    pub fn per_set_duration(&self) -> u64 {
        let per_rep = i128::from(self.hang_time) + i128::from(self.rest_time);
        clamp_seconds(per_rep * i128::from(self.reps_per_set) - i128::from(self.rest_time))
    }

    /// Planned workout length in seconds, excluding the prepare countdown.
    /// Saturates at `u64::MAX`.
    pub fn total_duration(&self) -> u64 {
        planned_seconds(
            self.hang_time,
            self.rest_time,
            self.reps_per_set,
            self.number_of_sets,
            self.rest_between_sets,
        )
    }

    /// Total number of hangs across all sets.
    pub fn hang_count(&self) -> u64 {
        u64::from(self.reps_per_set) * u64::from(self.number_of_sets)
    }
}

// Every field fits in u32, so the worst case (2^33 * 2^32 * 2^32) stays well
// inside i128.
fn planned_seconds(hang: u32, rest: u32, reps: u32, sets: u32, set_rest: u32) -> u64 {
    let (hang, rest, reps, sets, set_rest) = (
        i128::from(hang),
        i128::from(rest),
        i128::from(reps),
        i128::from(sets),
        i128::from(set_rest),
    );
    let per_set = (hang + rest) * reps - rest;
    let total = per_set * sets + set_rest * (sets - 1);
    clamp_seconds(total)
}

fn clamp_seconds(seconds: i128) -> u64 {
    if seconds < 0 {
        return 0;
    }
    u64::try_from(seconds).unwrap_or(u64::MAX)
}

/// Generate an identifier for a user-created protocol.
pub fn new_protocol_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Format seconds as `MM:SS`. Negative values display as `00:00`.
pub fn format_clock(seconds: impl Into<i128>) -> String {
    let seconds = seconds.into().max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Raw, unvalidated protocol fields as typed into an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolDraft {
    pub name: String,
    pub hang_time: String,
    pub rest_time: String,
    pub reps_per_set: String,
    pub number_of_sets: String,
    pub rest_between_sets: String,
}

impl Default for ProtocolDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            hang_time: "7".to_string(),
            rest_time: "3".to_string(),
            reps_per_set: "6".to_string(),
            number_of_sets: "3".to_string(),
            rest_between_sets: "180".to_string(),
        }
    }
}

impl From<&Protocol> for ProtocolDraft {
    fn from(p: &Protocol) -> Self {
        Self {
            name: p.name.clone(),
            hang_time: p.hang_time.to_string(),
            rest_time: p.rest_time.to_string(),
            reps_per_set: p.reps_per_set.to_string(),
            number_of_sets: p.number_of_sets.to_string(),
            rest_between_sets: p.rest_between_sets.to_string(),
        }
    }
}

impl ProtocolDraft {
    /// Live duration estimate. Fields that don't parse count as zero and
    /// oversized ones are capped at `u32::MAX`.
    pub fn estimate(&self) -> u64 {
        let lenient = |s: &str| {
            let s = s.trim();
            match s.parse::<u32>() {
                Ok(n) => n,
                Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => u32::MAX,
                Err(_) => 0,
            }
        };
        planned_seconds(
            lenient(&self.hang_time),
            lenient(&self.rest_time),
            lenient(&self.reps_per_set),
            lenient(&self.number_of_sets),
            lenient(&self.rest_between_sets),
        )
    }

    /// Validate every field and produce a protocol with the given id.
    pub fn build(&self, id: impl Into<String>) -> Result<Protocol, ProtocolError> {
        Protocol::new(
            id,
            self.name.as_str(),
            parse_seconds("hang time", &self.hang_time)?,
            parse_seconds("rest time", &self.rest_time)?,
            parse_seconds("reps per set", &self.reps_per_set)?,
            parse_seconds("rest between sets", &self.rest_between_sets)?,
            parse_seconds("number of sets", &self.number_of_sets)?,
        )
    }
}

fn parse_seconds(field: &'static str, raw: &str) -> Result<u32, ProtocolError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ProtocolError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeaters() -> Protocol {
        Protocol::new("repeaters", "Repeaters", 7, 3, 6, 180, 3).unwrap()
    }

    #[test]
    fn total_duration_of_repeaters() {
        let p = repeaters();
        assert_eq!(p.per_set_duration(), 57);
        assert_eq!(p.total_duration(), 531);
        assert_eq!(p.hang_count(), 18);
    }

    #[test]
    fn single_set_has_no_set_rest() {
        let p = Protocol::new("x", "One set", 10, 5, 3, 600, 1).unwrap();
        assert_eq!(p.total_duration(), 40);
    }

    #[test]
    fn zero_rest_time_is_allowed() {
        let p = Protocol::new("max", "Max Hangs", 10, 0, 1, 180, 5).unwrap();
        assert_eq!(p.total_duration(), 770);
    }

    #[test]
    fn durations_saturate_instead_of_overflowing() {
        let max = u32::MAX;
        let p = Protocol::new("x", "Big", max, max, max, max, max).unwrap();
        assert_eq!(p.per_set_duration(), u64::MAX);
        assert_eq!(p.total_duration(), u64::MAX);
        assert_eq!(p.hang_count(), u64::from(max) * u64::from(max));

        let p = Protocol::new("x", "Many", 1, 0, 100_000, 0, 100_000).unwrap();
        assert_eq!(p.hang_count(), 10_000_000_000);
        assert_eq!(p.total_duration(), 10_000_000_000);
    }

    #[test]
    fn rejects_zero_sets() {
        let err = Protocol::new("x", "Bad", 10, 5, 3, 60, 0).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::MustBePositive {
                field: "number of sets"
            }
        );
        assert!(Protocol::new("x", "Bad", 0, 5, 3, 60, 1).is_err());
        assert!(Protocol::new("x", "Bad", 5, 5, 0, 60, 1).is_err());
    }

    #[test]
    fn rejects_blank_name_and_trims() {
        assert_eq!(
            Protocol::new("x", "   ", 1, 0, 1, 0, 1).unwrap_err(),
            ProtocolError::EmptyName
        );
        let p = Protocol::new("x", "  Campus  ", 1, 0, 1, 0, 1).unwrap();
        assert_eq!(p.name(), "Campus");
    }

    #[test]
    fn serializes_with_on_disk_field_names() {
        let json = serde_json::to_value(repeaters()).unwrap();
        assert_eq!(json["hangTime"], 7);
        assert_eq!(json["sets"], 6);
        assert_eq!(json["numberOfSets"], 3);
        assert_eq!(json["restBetweenSets"], 180);
    }

    #[test]
    fn deserialization_validates() {
        let raw = r#"{"id":"a","name":"Broken","hangTime":7,"restTime":3,"sets":6,"restBetweenSets":180,"numberOfSets":0}"#;
        assert!(serde_json::from_str::<Protocol>(raw).is_err());

        let raw = r#"{"id":"a","name":"Fine","hangTime":7,"restTime":3,"sets":6,"restBetweenSets":180,"numberOfSets":3}"#;
        let p: Protocol = serde_json::from_str(raw).unwrap();
        assert_eq!(p, Protocol::new("a", "Fine", 7, 3, 6, 180, 3).unwrap());
    }

    #[test]
    fn format_clock_pads_and_clamps() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(531), "08:51");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(-2), "00:00");
    }

    #[test]
    fn draft_estimate_is_lenient() {
        let mut draft = ProtocolDraft::from(&repeaters());
        assert_eq!(draft.estimate(), 531);

        draft.rest_between_sets = "abc".to_string();
        assert_eq!(draft.estimate(), 171);

        draft.reps_per_set = String::new();
        assert_eq!(draft.estimate(), 0);
    }

    #[test]
    fn draft_estimate_caps_oversized_fields() {
        let draft = ProtocolDraft {
            name: "Huge".to_string(),
            hang_time: "9999999999".to_string(),
            rest_time: "9999999999".to_string(),
            reps_per_set: "9999999999".to_string(),
            number_of_sets: "1".to_string(),
            rest_between_sets: "0".to_string(),
        };
        let capped = Protocol::new("x", "Huge", u32::MAX, u32::MAX, u32::MAX, 0, 1).unwrap();
        assert_eq!(draft.estimate(), capped.total_duration());
    }

    #[test]
    fn draft_build_reports_offending_field() {
        let draft = ProtocolDraft {
            name: "Mine".to_string(),
            rest_time: "-3".to_string(),
            ..ProtocolDraft::default()
        };
        assert_eq!(
            draft.build("id").unwrap_err(),
            ProtocolError::InvalidNumber {
                field: "rest time",
                value: "-3".to_string()
            }
        );

        let draft = ProtocolDraft {
            name: "Mine".to_string(),
            ..ProtocolDraft::default()
        };
        let p = draft.build("id").unwrap();
        assert_eq!(p.total_duration(), 531);
        assert_eq!(p.id(), "id");
    }
}
