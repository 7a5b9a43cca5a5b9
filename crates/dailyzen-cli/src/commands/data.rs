use std::io::Read;
use std::path::PathBuf;

use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum DataAction {
    /// Print the full collection as JSON
    Export,
    /// Replace the collection from a JSON export ("-" reads stdin)
    Import { file: PathBuf },
    /// Delete every habit and cancel all reminders
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = common::open_store()?;

    match action {
        DataAction::Export => {
            println!("{}", store.export()?);
        }
        DataAction::Import { file } => {
            let data = if file.to_str() == Some("-") {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };
            store.import(&data)?;
            println!("Imported {} habits.", store.habits().len());
        }
        DataAction::Clear { yes } => {
            if !yes {
                println!("This deletes every habit. Re-run with --yes to confirm.");
                return Ok(());
            }
            store.clear_all()?;
            println!("All habits cleared.");
        }
    }
    Ok(())
}
