use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use crate::domain::models::schedule::TimeWindow;

pub const MINUTES_PER_DAY: i32 = 1440;

/// Half-open interval in minutes since local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start_min: i32,
    pub end_min: i32,
}

impl TimeInterval {
    pub fn new(start_min: i32, end_min: i32) -> Option<Self> {
        if start_min >= 0 && start_min < end_min && end_min <= MINUTES_PER_DAY {
            Some(Self { start_min, end_min })
        } else {
            None
        }
    }

    /// Half-open overlap: touching intervals ([540,600) and [600,660)) do
    /// not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }

    pub fn contains(&self, other: &TimeInterval) -> bool {
        other.start_min >= self.start_min && other.end_min <= self.end_min
    }

    pub fn from_window(window: &TimeWindow) -> Option<Self> {
        let start = parse_hm(&window.start)?;
        let mut end = parse_hm(&window.end)?;
        // "23:59" means end of day
        if end == MINUTES_PER_DAY - 1 {
            end = MINUTES_PER_DAY;
        }
        Self::new(start, end)
    }
}

pub fn parse_hm(value: &str) -> Option<i32> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    Some((time.hour() * 60 + time.minute()) as i32)
}

pub fn format_hm(minute: i32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_half_open() {
        let a = TimeInterval::new(540, 600).unwrap();
        let b = TimeInterval::new(600, 660).unwrap();
        let c = TimeInterval::new(570, 610).unwrap();

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn contains_allows_exact_fit() {
        let window = TimeInterval::new(540, 780).unwrap();
        assert!(window.contains(&TimeInterval::new(540, 780).unwrap()));
        assert!(window.contains(&TimeInterval::new(600, 640).unwrap()));
        assert!(!window.contains(&TimeInterval::new(740, 800).unwrap()));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(TimeInterval::new(-10, 60).is_none());
        assert!(TimeInterval::new(600, 600).is_none());
        assert!(TimeInterval::new(700, 600).is_none());
        assert!(TimeInterval::new(1000, 1441).is_none());
        assert!(TimeInterval::new(0, 1440).is_some());
    }

    #[test]
    fn parse_hm_rejects_garbage() {
        assert_eq!(parse_hm("09:00"), Some(540));
        assert_eq!(parse_hm("23:59"), Some(1439));
        assert_eq!(parse_hm("9am"), None);
        assert_eq!(parse_hm("25:00"), None);
        assert_eq!(parse_hm(""), None);
    }

    #[test]
    fn format_hm_zero_pads() {
        assert_eq!(format_hm(0), "00:00");
        assert_eq!(format_hm(540), "09:00");
        assert_eq!(format_hm(605), "10:05");
        assert_eq!(format_hm(1439), "23:59");
    }

    #[test]
    fn window_end_of_day_rounds_up() {
        let window = TimeWindow { start: "22:00".to_string(), end: "23:59".to_string() };
        let interval = TimeInterval::from_window(&window).unwrap();
        assert_eq!(interval.end_min, MINUTES_PER_DAY);
    }
}
