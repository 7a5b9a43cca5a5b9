use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregate stats across all habits
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Daily history for one habit
    History { id: String },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = common::open_store()?;

    match action {
        StatsAction::Summary { json } => {
            let stats = store.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("current streak : {}", stats.current_streak);
                println!("longest streak : {}", stats.longest_streak);
                println!("completed days : {}", stats.completed_days);
                println!("total days     : {}", stats.total_days);
                println!("completion     : {:.0}%", stats.completion_rate() * 100.0);
            }
        }
        StatsAction::History { id } => {
            let habit = store
                .get(&id)
                .ok_or_else(|| dailyzen_core::CoreError::NotFound(id.clone()))?;
            println!("{} ({})", habit.name, habit.category);
            for day in &habit.history {
                println!("{}  {}", day.date, if day.completed { "x" } else { "." });
            }
        }
    }
    Ok(())
}
