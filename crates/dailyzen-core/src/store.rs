//! The habit store: authoritative in-memory collection and every state
//! transition on it.
//!
//! All operations are sequential; there is no concurrent-writer protocol.
//! Each mutation updates the in-memory collection first and then persists
//! the whole collection under [`HABITS_KEY`]. A failed persist leaves the
//! in-memory state in place and surfaces a recoverable error, so the
//! session keeps working off memory while the caller decides what to tell
//! the user.
//!
//! Reminder side effects go through the injected [`ReminderScheduler`].
//! Scheduler failures never block a habit mutation; they are logged and
//! swallowed.

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::warn;

use crate::error::{CoreError, Result};
use crate::habit::{Habit, HabitUpdate, NewHabit};
use crate::reminders::{reminder_message, ReminderScheduler};
use crate::stats::HabitStats;
use crate::storage::{Storage, HABITS_KEY};

/// Owns the habit collection plus the storage and reminder collaborators.
pub struct HabitStore {
    habits: Vec<Habit>,
    storage: Box<dyn Storage>,
    scheduler: Box<dyn ReminderScheduler>,
}

impl HabitStore {
    /// Opens the store, loading any previously persisted collection.
    pub fn open(storage: Box<dyn Storage>, scheduler: Box<dyn ReminderScheduler>) -> Result<Self> {
        let habits = match storage.get(HABITS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(Self {
            habits,
            storage,
            scheduler,
        })
    }

    /// The current collection, in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// The habit with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Summary statistics over the current collection.
    pub fn stats(&self) -> HabitStats {
        HabitStats::compute(&self.habits)
    }

    /// Creates a habit seeded with yesterday and today as incomplete and
    /// returns its id. Schedules the reminder when enabled.
    pub fn add(&mut self, new: NewHabit) -> Result<String> {
        self.add_on(new, Local::now().date_naive(), Utc::now())
    }

    fn add_on(&mut self, new: NewHabit, today: NaiveDate, now: DateTime<Utc>) -> Result<String> {
        let habit = Habit::create(new, today, now);
        let id = habit.id.clone();
        if habit.reminder_enabled {
            self.schedule_reminder(&habit);
        }
        self.habits.push(habit);
        self.persist()?;
        Ok(id)
    }

    /// Sets today's completion for the habit with the given id.
    ///
    /// A day transitioning to completed bumps the streak by one (and the
    /// longest streak when passed); marking the day uncompleted resets the
    /// streak to zero. Re-marking an already completed day changes nothing.
    pub fn complete(&mut self, id: &str, completed: bool) -> Result<()> {
        self.complete_on(id, completed, Local::now().date_naive())
    }

    fn complete_on(&mut self, id: &str, completed: bool, today: NaiveDate) -> Result<()> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let was_completed = habit.day(today).is_some_and(|d| d.completed);
        habit.set_day(today, completed);
        if !completed {
            habit.streak = 0;
        } else if !was_completed {
            habit.streak += 1;
        }
        habit.longest_streak = habit.longest_streak.max(habit.streak);
        habit.completed_today = completed;
        self.persist()
    }

    /// Merges the provided fields into the habit with the given id.
    /// History and streaks are untouched. Reminder changes are pushed to
    /// the scheduler.
    pub fn edit(&mut self, id: &str, update: HabitUpdate) -> Result<()> {
        let touches_reminder = update.touches_reminder();
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        habit.apply(update);

        if touches_reminder {
            let habit = habit.clone();
            if habit.reminder_enabled {
                self.schedule_reminder(&habit);
            } else if let Err(e) = self.scheduler.cancel(&habit.id) {
                warn!(habit = %habit.id, "failed to cancel reminder: {e}");
            }
        }
        self.persist()
    }

    /// Removes the habit with the given id and cancels its reminder.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let at = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        let habit = self.habits.remove(at);

        if let Err(e) = self.scheduler.cancel(&habit.id) {
            warn!(habit = %habit.id, "failed to cancel reminder: {e}");
        }
        self.persist()
    }

    /// Rolls every habit forward to today, appending an incomplete entry
    /// where the day has no record yet. Idempotent within a day.
    ///
    /// Streaks require consecutive calendar days: a habit whose previous
    /// day went uncompleted has its streak reset here, at rollover.
    pub fn refresh(&mut self) -> Result<()> {
        self.refresh_on(Local::now().date_naive())
    }

    fn refresh_on(&mut self, today: NaiveDate) -> Result<()> {
        let mut changed = false;
        for habit in &mut self.habits {
            changed |= habit.roll_to(today);
        }
        if changed {
            self.persist()?;
        }
        Ok(())
    }

    /// Empties the collection and cancels every reminder.
    pub fn clear_all(&mut self) -> Result<()> {
        self.habits.clear();
        if let Err(e) = self.scheduler.cancel_all() {
            warn!("failed to cancel reminders: {e}");
        }
        self.persist()
    }

    /// Serializes the full collection to its transportable JSON form.
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.habits)?)
    }

    /// Replaces the collection wholesale from a JSON export.
    ///
    /// Malformed data fails before any state is touched. On success every
    /// reminder is rescheduled from the imported collection.
    pub fn import(&mut self, data: &str) -> Result<()> {
        let imported: Vec<Habit> = serde_json::from_str(data)?;
        self.habits = imported;

        if let Err(e) = self.scheduler.cancel_all() {
            warn!("failed to cancel reminders: {e}");
        }
        for habit in &self.habits {
            if habit.reminder_enabled {
                if let Err(e) = self.scheduler.schedule(
                    &habit.id,
                    habit.reminder_time,
                    &reminder_message(&habit.name),
                ) {
                    warn!(habit = %habit.id, "failed to schedule reminder: {e}");
                }
            }
        }
        self.persist()
    }

    fn schedule_reminder(&mut self, habit: &Habit) {
        if let Err(e) = self.scheduler.schedule(
            &habit.id,
            habit.reminder_time,
            &reminder_message(&habit.name),
        ) {
            warn!(habit = %habit.id, "failed to schedule reminder: {e}");
        }
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.habits)?;
        if let Err(e) = self.storage.set(HABITS_KEY, &raw) {
            warn!("habit collection not persisted: {e}");
            return Err(e.into());
        }
        Ok(())
    }
}
