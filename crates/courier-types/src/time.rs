use chrono::{DateTime, Utc};

/// Unix seconds to UTC. The protocol uses `0` for "not set".
pub(crate) fn unix_time(secs: i32) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(i64::from(secs), 0)
}
