use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};


const TIMEOUT: Duration = Duration::from_secs(5);

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}
