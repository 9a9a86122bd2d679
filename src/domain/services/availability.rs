use crate::domain::models::booking::OccupiedBooking;
use crate::domain::models::schedule::{TimeWindow, WeeklySchedule};
use crate::domain::models::special_day::SpecialDay;
use crate::domain::services::intervals::{format_hm, TimeInterval, MINUTES_PER_DAY};

/// Resolves the open intervals for one business day.
///
/// A closed special day wins unconditionally. A special day with authored
/// intervals replaces the weekly row entirely (an empty list closes the
/// day); one without intervals falls through to the weekly row. No weekly
/// row, or an inactive one, means closed.
pub fn resolve_open_intervals(
    weekly: Option<&WeeklySchedule>,
    special: Option<&SpecialDay>,
) -> Vec<TimeInterval> {
    if let Some(day) = special {
        if day.is_closed {
            return Vec::new();
        }
        if let Some(windows) = day.windows() {
            return to_sorted_intervals(&windows);
        }
    }

    match weekly {
        Some(schedule) if schedule.is_active => to_sorted_intervals(&schedule.windows()),
        _ => Vec::new(),
    }
}

fn to_sorted_intervals(windows: &[TimeWindow]) -> Vec<TimeInterval> {
    let mut intervals: Vec<TimeInterval> = windows
        .iter()
        .filter_map(TimeInterval::from_window)
        .collect();
    intervals.sort_by_key(|i| i.start_min);
    intervals
}

/// Each existing booking blocks `[start_min, end_min + its own service's
/// cleaning buffer)`. The requested service's buffer never appears here; it
/// extends the candidate window instead.
pub fn occupied_windows(bookings: &[OccupiedBooking], exclude_id: Option<&str>) -> Vec<TimeInterval> {
    bookings
        .iter()
        .filter(|b| !exclude_id.is_some_and(|id| b.id == id))
        .map(|b| TimeInterval {
            start_min: b.start_min,
            end_min: (b.end_min + b.cleaning_min).min(MINUTES_PER_DAY),
        })
        .collect()
}

/// Fits-check for one candidate window: inside a single open interval and
/// clear of every occupied window.
pub fn slot_fits(candidate: TimeInterval, open: &[TimeInterval], occupied: &[TimeInterval]) -> bool {
    open.iter().any(|window| window.contains(&candidate))
        && !occupied.iter().any(|window| window.overlaps(&candidate))
}

/// Walks each open interval at the business's step, emitting every start
/// whose full window (duration + buffer) fits. The grid restarts at each
/// interval's start, so no window ever crosses an interval boundary.
pub fn calculate_slots(
    open: &[TimeInterval],
    occupied: &[TimeInterval],
    total_duration_min: i32,
    step_min: i32,
) -> Vec<String> {
    let mut valid_slots = Vec::new();

    if total_duration_min <= 0 || step_min <= 0 {
        return valid_slots;
    }

    for window in open {
        let mut cursor = window.start_min;
        while cursor + total_duration_min <= window.end_min {
            let candidate = TimeInterval {
                start_min: cursor,
                end_min: cursor + total_duration_min,
            };
            if !occupied.iter().any(|w| w.overlaps(&candidate)) {
                valid_slots.push(format_hm(cursor));
            }
            cursor += step_min;
        }
    }

    valid_slots.sort();
    valid_slots.dedup();
    valid_slots
}
