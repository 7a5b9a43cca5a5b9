//! Derived summary statistics over the habit collection.

use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Summary statistics derived from every habit's history.
///
/// Never persisted; recomputed whenever the collection changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    /// Highest habit streak, counted only when every habit is completed
    /// today (a cross-habit "today" measure rather than a true streak).
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_days: u32,
    pub total_days: u32,
}

impl HabitStats {
    /// Computes the aggregate for the given collection. An empty
    /// collection yields all zeros.
    pub fn compute(habits: &[Habit]) -> Self {
        if habits.is_empty() {
            return Self::default();
        }

        let mut completed_days = 0u32;
        let mut total_days = 0u32;
        for habit in habits {
            completed_days += habit.history.iter().filter(|d| d.completed).count() as u32;
            total_days += habit.history.len() as u32;
        }

        let all_done_today = habits.iter().all(|h| h.completed_today);
        let current_streak = if all_done_today {
            habits.iter().map(|h| h.streak).max().unwrap_or(0)
        } else {
            0
        };
        let longest_streak = habits.iter().map(|h| h.longest_streak).max().unwrap_or(0);

        Self {
            current_streak,
            longest_streak,
            completed_days,
            total_days,
        }
    }

    /// Fraction of recorded days that were completed; 0.0 with no history.
    pub fn completion_rate(&self) -> f64 {
        if self.total_days == 0 {
            0.0
        } else {
            f64::from(self.completed_days) / f64::from(self.total_days)
        }
    }
}
