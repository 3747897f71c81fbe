use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// `YYYY-MM-DD HH:MM` in the offset the value already carries.
pub fn format_date(dt: OffsetDateTime) -> String {
    dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| dt.to_string())
}

/// History dates are stored in UTC and shown in local time.
pub fn format_record_date(dt: OffsetDateTime) -> String {
    format_date(to_local_time(dt))
}
