use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use tracing::debug;

use crate::task::Task;

/// Durable home for the task list. Implementations hold the whole list as
/// one JSON array and overwrite it on every save.
pub trait TaskStorage {
    fn load(&self) -> anyhow::Result<Vec<Task>>;

    fn save(&self, tasks: &[Task]) -> anyhow::Result<()>;
}

pub fn decode_tasks(raw: &str) -> anyhow::Result<Vec<Task>> {
    if raw.trim().is_empty() {
        return Ok(vec![]);
    }
    serde_json::from_str(raw).context("failed parsing stored task list")
}

pub fn encode_tasks(tasks: &[Task]) -> anyhow::Result<String> {
    serde_json::to_string(tasks).context("failed serializing task list")
}

/// In-process storage holding the serialized payload. Clones share the
/// same slot, so a store reopened from a clone sees earlier saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TaskStorage for MemoryStorage {
    #[tracing::instrument(skip(self))]
    fn load(&self) -> anyhow::Result<Vec<Task>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode_tasks(raw),
            None => Ok(vec![]),
        }
    }

    #[tracing::instrument(skip(self, tasks))]
    fn save(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let payload = encode_tasks(tasks)?;
        debug!(count = tasks.len(), bytes = payload.len(), "saving tasks to memory");
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow};
    use tempfile::NamedTempFile;
    use tracing::debug;

    use super::{TaskStorage, decode_tasks, encode_tasks};
    use crate::task::Task;

    /// Task list kept in a single JSON file, replaced atomically on save.
    #[derive(Debug, Clone)]
    pub struct JsonFileStorage {
        path: PathBuf,
    }

    impl JsonFileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl TaskStorage for JsonFileStorage {
        #[tracing::instrument(skip(self), fields(file = %self.path.display()))]
        fn load(&self) -> anyhow::Result<Vec<Task>> {
            if !self.path.exists() {
                debug!("task file missing; starting empty");
                return Ok(vec![]);
            }
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("failed reading {}", self.path.display()))?;
            decode_tasks(&raw).with_context(|| format!("failed loading {}", self.path.display()))
        }

        #[tracing::instrument(skip(self, tasks), fields(file = %self.path.display()))]
        fn save(&self, tasks: &[Task]) -> anyhow::Result<()> {
            debug!(count = tasks.len(), "saving tasks atomically");
            let payload = encode_tasks(tasks)?;

            let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let mut temp = NamedTempFile::new_in(dir)?;
            temp.write_all(payload.as_bytes())?;
            temp.flush()?;

            temp.persist(&self.path)
                .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::task::{Category, DateRange};

    fn sample() -> Task {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        Task::new("sample", Category::ToDo, DateRange::single(day))
    }

    #[test]
    fn empty_memory_storage_loads_nothing() {
        let storage = MemoryStorage::new();
        assert!(storage.load().expect("load").is_empty());
    }

    #[test]
    fn memory_clones_share_payload() {
        let storage = MemoryStorage::new();
        let twin = storage.clone();
        let task = sample();

        storage.save(std::slice::from_ref(&task)).expect("save");

        assert_eq!(twin.load().expect("load"), vec![task]);
    }

    #[test]
    fn corrupt_payload_is_an_error() {
        let storage = MemoryStorage::with_raw("{not json");
        assert!(storage.load().is_err());
    }

    #[test]
    fn blank_payload_is_empty_list() {
        assert!(decode_tasks("  \n").expect("decode").is_empty());
    }
}
