//! # Daily Zen Core Library
//!
//! This library provides the core business logic for the Daily Zen habit
//! tracker. All operations are available to any front end; the bundled CLI
//! binary is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Habit Store**: the authoritative in-memory habit collection and all
//!   state transitions (add, complete, edit, delete, daily refresh,
//!   export/import), persisting the whole collection after every mutation
//! - **Stats Aggregator**: pure derivation of summary statistics from the
//!   collection
//! - **Storage**: key-value persistence behind an injectable trait, with a
//!   file-per-key backend and an in-memory backend
//! - **Reminders**: injectable notification scheduler collaborator
//!
//! ## Key Components
//!
//! - [`HabitStore`]: habit collection and state transitions
//! - [`HabitStats`]: derived summary statistics
//! - [`Storage`] / [`FileStorage`]: persistence
//! - [`ReminderScheduler`]: reminder side effects

pub mod error;
pub mod habit;
pub mod quotes;
pub mod reminders;
pub mod stats;
pub mod storage;
pub mod store;
pub mod theme;

pub use error::{CoreError, Result, StorageError};
pub use habit::{Habit, HabitCategory, HabitDay, HabitUpdate, NewHabit};
pub use reminders::{
    FileScheduler, NullScheduler, ReminderScheduler, ReminderTime, ScheduledReminder,
};
pub use stats::HabitStats;
pub use storage::{FileStorage, MemoryStorage, Storage, HABITS_KEY, THEME_KEY};
pub use store::HabitStore;
pub use theme::ThemePreference;
