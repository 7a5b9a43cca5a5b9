use dailyzen_core::{FileScheduler, FileStorage, HabitStore};

/// Opens the store against the on-disk backends and rolls every habit
/// forward to today, the same way the mobile app refreshed on launch.
pub fn open_store() -> Result<HabitStore, Box<dyn std::error::Error>> {
    let storage = FileStorage::open()?;
    let scheduler = FileScheduler::open()?;
    let mut store = HabitStore::open(Box::new(storage), Box::new(scheduler))?;
    store.refresh()?;
    Ok(store)
}
