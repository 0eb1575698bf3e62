//! Local persistence for a herd
//!
//! JSON file holding the registry plus a little metadata. Open the file,
//! act on the herd, save it back. That is the CLI's whole storage story.

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::registry::Registry;

#[derive(Debug, Serialize, Deserialize)]
pub struct HerdFile {
    pub registry: Registry,
    pub metadata: HerdMetadata,
    #[serde(skip)]
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HerdMetadata {
    pub keeper: String,
    pub created_at: String,
    pub breed_calls: u64,
}

impl HerdFile {
    /// Load the herd at `path`, or start a fresh one if the file is
    /// missing. An unreadable or unparsable file also falls back to a
    /// fresh herd, loudly: the next `save` will overwrite it.
    pub fn open(path: impl AsRef<Path>, keeper: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str::<HerdFile>(&data) {
                    Ok(mut herd) => {
                        herd.path = path;
                        return herd;
                    }
                    Err(e) => warn!(
                        "herd file {} cannot be parsed, starting fresh: {e}",
                        path.display()
                    ),
                },
                Err(e) => warn!(
                    "herd file {} cannot be read, starting fresh: {e}",
                    path.display()
                ),
            }
        }
        Self {
            registry: Registry::new(),
            metadata: HerdMetadata {
                keeper: keeper.to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                breed_calls: 0,
            },
            path,
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        let total = self.registry.total_count();
        let founders = self.registry.iter().filter(|i| i.is_founder()).count();
        let max_gen = self
            .registry
            .iter()
            .map(|i| i.age.generation)
            .max()
            .unwrap_or(0);
        format!(
            "Herd of '{}' | {} individual(s) | {} founder(s) | deepest generation {} | {} breed call(s)",
            self.metadata.keeper, total, founders, max_gen, self.metadata.breed_calls
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OwnerId;

    #[test]
    fn open_missing_file_starts_empty() {
        let herd = HerdFile::open("/nonexistent/herd.json", "keeper");
        assert_eq!(herd.registry.total_count(), 0);
        assert_eq!(herd.metadata.keeper, "keeper");
    }

    #[test]
    fn save_and_reopen_round_trips() {
        let dir = std::env::temp_dir().join("broodline-herdfile-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("herd.json");

        let mut herd = HerdFile::open(&path, "keeper");
        herd.registry
            .create(OwnerId::from("keeper"), None, None, 0, 42);
        herd.metadata.breed_calls = 3;
        herd.save().unwrap();

        let back = HerdFile::open(&path, "ignored");
        assert_eq!(back.registry.total_count(), 1);
        assert_eq!(back.metadata.keeper, "keeper");
        assert_eq!(back.metadata.breed_calls, 3);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn open_corrupt_file_falls_back_to_fresh() {
        let dir = std::env::temp_dir().join("broodline-herdfile-corrupt-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("herd.json");
        std::fs::write(&path, "{ not json").unwrap();

        let herd = HerdFile::open(&path, "keeper");
        assert_eq!(herd.registry.total_count(), 0);
        assert_eq!(herd.metadata.keeper, "keeper");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn summary_names_the_keeper() {
        let herd = HerdFile::open("/nonexistent/herd.json", "mara");
        assert!(herd.summary().contains("mara"));
        assert!(herd.summary().contains("0 individual"));
    }
}
