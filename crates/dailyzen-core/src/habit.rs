//! Habit record types and per-habit day bookkeeping.
//!
//! Wire format note: `Habit` serializes with camelCase field names and
//! "YYYY-MM-DD" dates, byte-compatible with the mobile app's JSON export,
//! so data moves between the two without translation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::reminders::ReminderTime;

/// Category of habit for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Mindfulness,
    Exercise,
    Nutrition,
    Productivity,
    Sleep,
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mindfulness => "mindfulness",
            Self::Exercise => "exercise",
            Self::Nutrition => "nutrition",
            Self::Productivity => "productivity",
            Self::Sleep => "sleep",
        };
        f.write_str(name)
    }
}

impl FromStr for HabitCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mindfulness" => Ok(Self::Mindfulness),
            "exercise" => Ok(Self::Exercise),
            "nutrition" => Ok(Self::Nutrition),
            "productivity" => Ok(Self::Productivity),
            "sleep" => Ok(Self::Sleep),
            other => Err(CoreError::InvalidValue {
                field: "category".to_string(),
                message: format!("'{other}' is not a habit category"),
            }),
        }
    }
}

/// One calendar day's completion record for a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDay {
    pub date: NaiveDate,
    pub completed: bool,
}

/// One tracked behavior with its daily completion history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique, immutable, assigned at creation.
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub icon: String,
    pub color: String,
    pub reminder_enabled: bool,
    pub reminder_time: ReminderTime,
    pub created_at: DateTime<Utc>,
    /// Current consecutive-completion count.
    pub streak: u32,
    /// Maximum `streak` ever observed; never decreases.
    pub longest_streak: u32,
    /// Cache of today's history entry (absent entry means false).
    pub completed_today: bool,
    /// Ordered by date, at most one entry per calendar day.
    pub history: Vec<HabitDay>,
}

/// Fields a caller provides when creating a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub category: HabitCategory,
    pub icon: String,
    pub color: String,
    pub reminder_enabled: bool,
    pub reminder_time: ReminderTime,
}

/// Partial update applied by the edit operation; `None` leaves the field
/// untouched. History and streaks are never editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub category: Option<HabitCategory>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub reminder_enabled: Option<bool>,
    pub reminder_time: Option<ReminderTime>,
}

impl HabitUpdate {
    /// Whether applying this update changes reminder delivery.
    pub fn touches_reminder(&self) -> bool {
        self.reminder_enabled.is_some() || self.reminder_time.is_some()
    }
}

impl Habit {
    /// Builds a habit with a fresh id and a history seeding yesterday and
    /// today as incomplete.
    pub(crate) fn create(new: NewHabit, today: NaiveDate, now: DateTime<Utc>) -> Self {
        let yesterday = today.pred_opt().unwrap_or(today);
        Self {
            id: format!("habit-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            name: new.name,
            category: new.category,
            icon: new.icon,
            color: new.color,
            reminder_enabled: new.reminder_enabled,
            reminder_time: new.reminder_time,
            created_at: now,
            streak: 0,
            longest_streak: 0,
            completed_today: false,
            history: vec![
                HabitDay { date: yesterday, completed: false },
                HabitDay { date: today, completed: false },
            ],
        }
    }

    /// The history entry for `date`, if one exists.
    pub fn day(&self, date: NaiveDate) -> Option<&HabitDay> {
        self.history.iter().find(|d| d.date == date)
    }

    /// Upserts the history entry for `date`, keeping entries ordered and
    /// unique per calendar day.
    pub(crate) fn set_day(&mut self, date: NaiveDate, completed: bool) {
        if let Some(day) = self.history.iter_mut().find(|d| d.date == date) {
            day.completed = completed;
            return;
        }
        let at = self.history.partition_point(|d| d.date < date);
        self.history.insert(at, HabitDay { date, completed });
    }

    /// Rolls the history forward to `today`, appending an incomplete entry
    /// when the day has no record yet. Returns whether anything changed.
    ///
    /// A streak only survives the rollover when the previous calendar day
    /// was completed; a missed day (entry absent or incomplete) drops the
    /// streak back to zero.
    pub(crate) fn roll_to(&mut self, today: NaiveDate) -> bool {
        if self.day(today).is_some() {
            return false;
        }
        let yesterday = today.pred_opt().unwrap_or(today);
        if !self.day(yesterday).is_some_and(|d| d.completed) {
            self.streak = 0;
        }
        self.set_day(today, false);
        self.completed_today = false;
        true
    }

    /// Merges an update; absent fields keep their current value.
    pub(crate) fn apply(&mut self, update: HabitUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(enabled) = update.reminder_enabled {
            self.reminder_enabled = enabled;
        }
        if let Some(time) = update.reminder_time {
            self.reminder_time = time;
        }
    }
}
