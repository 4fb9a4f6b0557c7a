use crate::server::{data::bump_event::BumpEventRepository, error::AppError};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod latest_for_user_since;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}
