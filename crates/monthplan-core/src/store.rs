use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::storage::TaskStorage;
use crate::task::Task;

/// In-memory task list mirrored to a [`TaskStorage`] after every mutation.
///
/// Persistence failures are logged and swallowed: the in-memory list stays
/// authoritative for the session. Mutators return whether the list changed.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore<S> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: TaskStorage> TaskStore<S> {
    #[tracing::instrument(skip(storage))]
    pub fn open(storage: S) -> Self {
        let loaded = match storage.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed loading tasks; starting empty");
                vec![]
            }
        };

        let before = loaded.len();
        let mut seen = HashSet::new();
        let tasks: Vec<Task> = loaded
            .into_iter()
            .filter(|task| seen.insert(task.id.clone()))
            .map(normalize)
            .collect();
        if tasks.len() != before {
            warn!(
                before,
                after = tasks.len(),
                "dropped tasks with duplicate ids"
            );
        }

        info!(count = tasks.len(), "opened task store");
        Self { storage, tasks }
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[tracing::instrument(skip(self, task), fields(id = %task.id))]
    pub fn add(&mut self, task: Task) -> bool {
        if self.get(&task.id).is_some() {
            warn!("task id already present; ignoring add");
            return false;
        }
        self.tasks.push(normalize(task));
        self.persist();
        true
    }

    #[tracing::instrument(skip(self, task), fields(id = %task.id))]
    pub fn update(&mut self, task: Task) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            debug!("no task with id; update is a no-op");
            return false;
        };
        *slot = normalize(task);
        self.persist();
        true
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("no task with id; delete is a no-op");
            return false;
        }
        self.persist();
        true
    }

    fn persist(&self) {
        match self.storage.save(&self.tasks) {
            Ok(()) => debug!(count = self.tasks.len(), "persisted tasks"),
            Err(err) => {
                error!(error = %format!("{err:#}"), "failed persisting tasks; keeping in-memory state")
            }
        }
    }
}

fn normalize(mut task: Task) -> Task {
    if task.has_reversed_range() {
        warn!(
            id = %task.id,
            start = %task.start_date,
            end = %task.end_date,
            "swapping reversed task dates"
        );
        std::mem::swap(&mut task.start_date, &mut task.end_date);
    }
    task
}
