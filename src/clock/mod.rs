use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPart {
    /// 05:00..=10:59
    Morning,
    /// 11:00..=14:59
    Afternoon,
    /// 15:00..=18:59
    Evening,
    /// 19:00..=04:59
    Night,
}

pub fn day_part(hour: u32) -> DayPart {
    match hour {
        5..=10 => DayPart::Morning,
        11..=14 => DayPart::Afternoon,
        15..=18 => DayPart::Evening,
        _ => DayPart::Night,
    }
}

/// Signed minutes since `target`, positive once the target time has passed,
/// corrected for day wraparound: a raw difference beyond ±12 hours is folded
/// by 24 hours so a 23:30 target seen at 00:10 reads as 40 minutes ago, not
/// 1400 minutes ahead.
pub fn minutes_since(target: NaiveTime, now: NaiveTime) -> i64 {
    let target_min = i64::from(target.hour()) * 60 + i64::from(target.minute());
    let now_min = i64::from(now.hour()) * 60 + i64::from(now.minute());

    let mut diff = now_min - target_min;
    if diff > 12 * 60 {
        diff -= 24 * 60;
    } else if diff < -12 * 60 {
        diff += 24 * 60;
    }
    diff
}
