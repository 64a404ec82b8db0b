// Derived aggregates and the analytics built on them

use crate::models::TaskStatus;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Days added to today for the analytics completion estimate
pub const ESTIMATED_COMPLETION_DAYS: i64 = 14;

/// Counts derived from the status map. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregateStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub pending_tasks: usize,
    pub percent_complete: u32,
}

impl AggregateStats {
    pub fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending_tasks,
            TaskStatus::InProgress => self.in_progress_tasks,
            TaskStatus::Completed => self.completed_tasks,
        }
    }

    /// Percentage of all tasks currently in `status`
    pub fn share_of_total(&self, status: TaskStatus) -> u32 {
        percent_of(self.count(status), self.total_tasks)
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatusCounts {
    total: usize,
    completed: usize,
    in_progress: usize,
}

impl StatusCounts {
    pub(crate) fn add(&mut self, status: TaskStatus) {
        self.total += 1;
        match status {
            TaskStatus::Completed => self.completed += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Pending => {}
        }
    }

    pub(crate) fn into_stats(self) -> AggregateStats {
        AggregateStats {
            total_tasks: self.total,
            completed_tasks: self.completed,
            in_progress_tasks: self.in_progress,
            pending_tasks: self.total - self.completed - self.in_progress,
            percent_complete: percent_of(self.completed, self.total),
        }
    }
}

/// round(100 * part / total) with halves rounded up; 0 when total is 0
pub fn percent_of(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor((100 * part / total) + 0.5) in integer arithmetic
    ((200 * part + total) / (2 * total)) as u32
}

/// Encouragement line for the overall progress panel
pub fn progress_message(percent: u32) -> &'static str {
    match percent {
        0..=24 => "Just getting started! Keep moving forward.",
        25..=49 => "Good progress! You're building momentum.",
        50..=74 => "Halfway there! Excellent work.",
        75..=99 => "Almost done! The finish line is in sight.",
        _ => "All tasks completed! Outstanding work!",
    }
}

/// Completion estimate shown by analytics
pub fn estimated_completion(today: NaiveDate) -> NaiveDate {
    today + Duration::days(ESTIMATED_COMPLETION_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(1, 2), 50);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13); // 12.5 rounds up
        assert_eq!(percent_of(1, 200), 1); // 0.5 rounds up
        assert_eq!(percent_of(20, 20), 100);
    }

    #[test]
    fn test_percent_of_rounds_exact_ratio() {
        // 14.5 exactly; a float 29.0 / 200.0 * 100.0 lands just under it
        assert_eq!(percent_of(29, 200), 15);
        assert_eq!(percent_of(7, 200), 4);
    }

    #[test]
    fn test_counts_into_stats() {
        let mut counts = StatusCounts::default();
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Completed] {
            counts.add(status);
        }
        let stats = counts.into_stats();
        assert_eq!(stats, AggregateStats {
            total_tasks: 4,
            completed_tasks: 2,
            in_progress_tasks: 1,
            pending_tasks: 1,
            percent_complete: 50,
        });
        assert_eq!(stats.share_of_total(TaskStatus::InProgress), 25);
        assert_eq!(stats.share_of_total(TaskStatus::Pending), 25);
    }

    #[test]
    fn test_share_of_empty_total() {
        let stats = AggregateStats::default();
        for status in TaskStatus::ALL {
            assert_eq!(stats.share_of_total(status), 0);
        }
    }

    #[test]
    fn test_progress_message_buckets() {
        assert_eq!(progress_message(0), "Just getting started! Keep moving forward.");
        assert_eq!(progress_message(25), "Good progress! You're building momentum.");
        assert_eq!(progress_message(50), "Halfway there! Excellent work.");
        assert_eq!(progress_message(99), "Almost done! The finish line is in sight.");
        assert_eq!(progress_message(100), "All tasks completed! Outstanding work!");
    }

    #[test]
    fn test_estimated_completion() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(estimated_completion(today), NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
    }
}
