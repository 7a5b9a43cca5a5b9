use clap::Subcommand;
use dailyzen_core::theme::{load_theme, save_theme};
use dailyzen_core::{FileStorage, ThemePreference};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show or set the theme preference (light, dark, system)
    Theme { value: Option<ThemePreference> },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStorage::open()?;

    match action {
        ConfigAction::Theme { value } => match value {
            Some(theme) => {
                save_theme(&storage, theme)?;
                println!("Theme set to {theme}.");
            }
            None => println!("{}", load_theme(&storage)?),
        },
    }
    Ok(())
}
