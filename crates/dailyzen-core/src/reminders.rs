//! Reminder scheduling collaborator.
//!
//! The habit store routes reminder side effects through the
//! [`ReminderScheduler`] trait so the delivery mechanism stays injectable:
//! a desktop shell or mobile bridge plugs in its own implementation, the
//! CLI uses [`FileScheduler`], and tests use whatever they like.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::storage::data_dir;

/// Notification title used for every habit reminder.
pub const REMINDER_TITLE: &str = "Daily Zen Reminder";

/// Notification body for a habit reminder.
pub fn reminder_message(habit_name: &str) -> String {
    format!("Time for your mindful habit: {habit_name}")
}

/// A wall-clock reminder time in 24-hour "HH:MM" form.
///
/// Serialized as the string form so habit JSON stays compatible with the
/// mobile app's export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    pub hour: u8,
    pub minute: u8,
}

impl ReminderTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::InvalidValue {
                field: "reminderTime".to_string(),
                message: format!("{hour:02}:{minute:02} is not a valid 24-hour time"),
            });
        }
        Ok(Self { hour, minute })
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ReminderTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidValue {
            field: "reminderTime".to_string(),
            message: format!("'{s}' is not an HH:MM time"),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TimeVisitor;

        impl Visitor<'_> for TimeVisitor {
            type Value = ReminderTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an HH:MM time string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

/// A reminder currently scheduled for a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReminder {
    pub habit_id: String,
    pub time: ReminderTime,
    pub message: String,
}

/// External notification scheduler consumed by the habit store.
///
/// At most one reminder exists per habit id; scheduling again replaces the
/// previous entry.
pub trait ReminderScheduler {
    fn schedule(&mut self, habit_id: &str, time: ReminderTime, message: &str) -> Result<()>;
    fn cancel(&mut self, habit_id: &str) -> Result<()>;
    fn cancel_all(&mut self) -> Result<()>;
    fn list(&self) -> Result<Vec<ScheduledReminder>>;
}

/// Scheduler that drops every request, for headless or embedded use.
#[derive(Debug, Default)]
pub struct NullScheduler;

impl ReminderScheduler for NullScheduler {
    fn schedule(&mut self, _habit_id: &str, _time: ReminderTime, _message: &str) -> Result<()> {
        Ok(())
    }

    fn cancel(&mut self, _habit_id: &str) -> Result<()> {
        Ok(())
    }

    fn cancel_all(&mut self) -> Result<()> {
        Ok(())
    }

    fn list(&self) -> Result<Vec<ScheduledReminder>> {
        Ok(Vec::new())
    }
}

/// Scheduler that keeps the pending set in a JSON file under the data
/// directory, standing in for an OS notification service.
pub struct FileScheduler {
    path: PathBuf,
}

impl FileScheduler {
    /// Open the scheduler backed by `reminders.json` in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("reminders.json"),
        })
    }

    /// Scheduler backed by a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<ScheduledReminder>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, reminders: &[ScheduledReminder]) -> Result<()> {
        let raw = serde_json::to_string(reminders)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ReminderScheduler for FileScheduler {
    fn schedule(&mut self, habit_id: &str, time: ReminderTime, message: &str) -> Result<()> {
        let mut reminders = self.load()?;
        reminders.retain(|r| r.habit_id != habit_id);
        reminders.push(ScheduledReminder {
            habit_id: habit_id.to_string(),
            time,
            message: message.to_string(),
        });
        self.save(&reminders)
    }

    fn cancel(&mut self, habit_id: &str) -> Result<()> {
        let mut reminders = self.load()?;
        reminders.retain(|r| r.habit_id != habit_id);
        self.save(&reminders)
    }

    fn cancel_all(&mut self) -> Result<()> {
        self.save(&[])
    }

    fn list(&self) -> Result<Vec<ScheduledReminder>> {
        self.load()
    }
}
