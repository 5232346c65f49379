use crate::engine::collectable::{Collectable, CollectableKind};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted key/value store for the collected sets, one JSON document per
/// kind under the data directory. Writes are last-writer-wins; the three
/// keys are independent of each other.
pub struct SelectionStore {
    data_dir: PathBuf,
}

impl SelectionStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, kind: CollectableKind) -> PathBuf {
        self.data_dir.join(format!("{}.json", kind.storage_key()))
    }

    /// Restore the collected set for one kind. A missing or corrupt document
    /// is an empty set, never an error.
    pub fn load(&self, kind: CollectableKind) -> Vec<Collectable> {
        let path = self.path_for(kind);
        if !path.exists() {
            return Vec::new();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from));

        match parsed {
            Ok(items) => items,
            Err(e) => {
                warn!("Discarding unreadable {}: {:#}", path.display(), e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, kind: CollectableKind, items: &[Collectable]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("creating {}", self.data_dir.display()))?;
        let path = self.path_for(kind);
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::collectable::Month;

    fn critter(name: &str) -> Collectable {
        Collectable {
            kind: CollectableKind::Bug,
            name: name.to_string(),
            sell_price: 80,
            location: String::new(),
            weather: String::new(),
            shadow_size: String::new(),
            time_start: 0,
            time_end: 0,
            second_time_start: None,
            second_time_end: None,
            months_northern: vec![Month::Jun],
            notes: String::new(),
            months: String::new(),
            is_last_month: false,
        }
    }

    #[test]
    fn round_trips_a_collected_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());

        store
            .save(CollectableKind::Bug, &[critter("Ant"), critter("Bee")])
            .unwrap();
        let restored = store.load(CollectableKind::Bug);

        let names: Vec<&str> = restored.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ant", "Bee"]);
        // keys are independent
        assert!(store.load(CollectableKind::Fish).is_empty());
    }

    #[test]
    fn missing_document_is_an_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path().join("never_created"));
        assert!(store.load(CollectableKind::SeaCreature).is_empty());
    }

    #[test]
    fn corrupt_document_is_an_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        fs::write(dir.path().join("selectedFish.json"), "{not json").unwrap();
        assert!(store.load(CollectableKind::Fish).is_empty());
    }

    #[test]
    fn documents_use_the_storage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        store.save(CollectableKind::SeaCreature, &[critter("Pearl Oyster")]).unwrap();
        assert!(dir.path().join("selectedSeaCreatures.json").exists());
    }
}
