use clap::Subcommand;
use dailyzen_core::{HabitCategory, HabitUpdate, NewHabit, ReminderTime};

use crate::common;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        name: String,
        #[arg(long, default_value = "mindfulness")]
        category: HabitCategory,
        #[arg(long, default_value = "leaf")]
        icon: String,
        #[arg(long, default_value = "#5FBDB0")]
        color: String,
        /// Daily reminder time (HH:MM, 24-hour)
        #[arg(long)]
        remind: Option<ReminderTime>,
    },
    /// List habits
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark a habit completed for today
    Done { id: String },
    /// Unmark today's completion
    Undo { id: String },
    /// Edit habit fields; omitted flags keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<HabitCategory>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Set a daily reminder time (HH:MM, 24-hour)
        #[arg(long, conflicts_with = "no_remind")]
        remind: Option<ReminderTime>,
        /// Turn the reminder off
        #[arg(long)]
        no_remind: bool,
    },
    /// Delete a habit and cancel its reminder
    Delete { id: String },
    /// Pending reminders
    Reminders,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = common::open_store()?;

    match action {
        HabitAction::Add {
            name,
            category,
            icon,
            color,
            remind,
        } => {
            let id = store.add(NewHabit {
                name,
                category,
                icon,
                color,
                reminder_enabled: remind.is_some(),
                reminder_time: remind.unwrap_or_default(),
            })?;
            println!("Habit created: {id}");
        }
        HabitAction::List { json } => {
            if json {
                println!("{}", store.export()?);
            } else if store.habits().is_empty() {
                println!("No habits yet. Start one with `dailyzen habit add`.");
            } else {
                for habit in store.habits() {
                    let today = if habit.completed_today { "done" } else { "open" };
                    println!(
                        "{:<40} {:<24} {:<13} streak {:>3} (best {:>3})  [{today}]",
                        habit.id, habit.name, habit.category, habit.streak, habit.longest_streak,
                    );
                }
            }
        }
        HabitAction::Done { id } => {
            store.complete(&id, true)?;
            report_streak(&store, &id);
        }
        HabitAction::Undo { id } => {
            store.complete(&id, false)?;
            report_streak(&store, &id);
        }
        HabitAction::Edit {
            id,
            name,
            category,
            icon,
            color,
            remind,
            no_remind,
        } => {
            store.edit(
                &id,
                HabitUpdate {
                    name,
                    category,
                    icon,
                    color,
                    reminder_enabled: if no_remind {
                        Some(false)
                    } else {
                        remind.map(|_| true)
                    },
                    reminder_time: remind,
                },
            )?;
            println!("Habit updated: {id}");
        }
        HabitAction::Delete { id } => {
            store.delete(&id)?;
            println!("Habit deleted: {id}");
        }
        HabitAction::Reminders => {
            let scheduler = dailyzen_core::FileScheduler::open()?;
            use dailyzen_core::ReminderScheduler;
            let pending = scheduler.list()?;
            if pending.is_empty() {
                println!("No reminders scheduled.");
            } else {
                for reminder in pending {
                    println!("{}  {}  {}", reminder.time, reminder.habit_id, reminder.message);
                }
            }
        }
    }
    Ok(())
}

fn report_streak(store: &dailyzen_core::HabitStore, id: &str) {
    if let Some(habit) = store.get(id) {
        println!(
            "{}: streak {} (best {})",
            habit.name, habit.streak, habit.longest_streak
        );
    }
}
