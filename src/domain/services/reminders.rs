use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use crate::domain::models::booking::ReminderCandidate;

/// Interprets a booking's local date + start minute in the given IANA zone.
/// Returns None for an unknown zone and for local times that do not exist
/// (spring-forward gap) or are ambiguous (fall-back fold); the scan skips
/// those instead of guessing.
pub fn booking_start_instant(date: NaiveDate, start_min: i32, timezone: &str) -> Option<DateTime<Utc>> {
    let tz: Tz = timezone.parse().ok()?;
    let naive = date.and_hms_opt(0, 0, 0)? + Duration::minutes(start_min as i64);
    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Keeps the candidates whose start instant falls inside
/// `[now, now + minutes_ahead]`, both ends inclusive. Each candidate is
/// converted with its own business's timezone.
pub fn select_upcoming(
    candidates: Vec<ReminderCandidate>,
    now: DateTime<Utc>,
    minutes_ahead: i64,
) -> Vec<(ReminderCandidate, DateTime<Utc>)> {
    let horizon = now + Duration::minutes(minutes_ahead);

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let start = booking_start_instant(candidate.date, candidate.start_min, &candidate.timezone)?;
            (start >= now && start <= horizon).then_some((candidate, start))
        })
        .collect()
}
