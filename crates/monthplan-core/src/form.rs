use tracing::{
  debug,
  info
};

use crate::storage::TaskStorage;
use crate::store::TaskStore;
use crate::task::{
  Category,
  DateRange,
  Priority,
  Task,
  new_task_id
};

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum FormMode {
  New,
  Edit(String)
}

/// Field values of an open create/edit form. The date range is fixed by
/// whatever opened the form.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub mode:        FormMode,
  pub name:        String,
  pub category:    Category,
  pub priority:    Priority,
  pub description: String,
  range:           DateRange
}

impl TaskDraft {
  pub fn blank(
    range: DateRange,
    category: Category,
    priority: Priority
  ) -> Self {
    Self {
      mode: FormMode::New,
      name: String::new(),
      category,
      priority,
      description: String::new(),
      range
    }
  }

  pub fn from_task(
    task: &Task,
    fallback_priority: Priority
  ) -> Self {
    Self {
      mode:        FormMode::Edit(
        task.id.clone()
      ),
      name:        task.name.clone(),
      category:    task.category,
      priority:    task
        .priority
        .unwrap_or(fallback_priority),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      range:       task.range()
    }
  }

  #[must_use]
  pub fn range(&self) -> DateRange {
    self.range
  }

  #[must_use]
  pub fn is_edit(&self) -> bool {
    matches!(self.mode, FormMode::Edit(_))
  }

  #[must_use]
  pub fn can_save(&self) -> bool {
    !self.name.trim().is_empty()
  }

  fn build_task(&self, id: String) -> Task {
    let description =
      self.description.trim();
    Task {
      id,
      name: self.name.trim().to_string(),
      category: self.category,
      start_date: self.range.start(),
      end_date: self.range.end(),
      description: (!description
        .is_empty())
      .then(|| description.to_string()),
      priority: Some(self.priority)
    }
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub enum TaskForm {
  #[default]
  Closed,
  Open(TaskDraft)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SaveOutcome {
  Created,
  Updated,
  /// The edited task disappeared before save; nothing was written.
  Missing,
  /// The form was closed or the name was blank; the form is unchanged.
  Rejected
}

impl TaskForm {
  pub fn open_new(
    &mut self,
    range: DateRange,
    category: Category,
    priority: Priority
  ) {
    debug!(%range, "opening new task form");
    *self = TaskForm::Open(
      TaskDraft::blank(
        range, category, priority
      )
    );
  }

  pub fn open_edit(
    &mut self,
    task: &Task,
    fallback_priority: Priority
  ) {
    debug!(id = %task.id, "opening edit form");
    *self = TaskForm::Open(
      TaskDraft::from_task(
        task,
        fallback_priority
      )
    );
  }

  #[must_use]
  pub fn is_open(&self) -> bool {
    matches!(self, TaskForm::Open(_))
  }

  #[must_use]
  pub fn draft(
    &self
  ) -> Option<&TaskDraft> {
    match self {
      | TaskForm::Open(draft) => {
        Some(draft)
      }
      | TaskForm::Closed => None
    }
  }

  pub fn draft_mut(
    &mut self
  ) -> Option<&mut TaskDraft> {
    match self {
      | TaskForm::Open(draft) => {
        Some(draft)
      }
      | TaskForm::Closed => None
    }
  }

  /// Validates the draft and commits it to `store`. On anything but
  /// `Rejected` the form closes.
  pub fn save<S: TaskStorage>(
    &mut self,
    store: &mut TaskStore<S>
  ) -> SaveOutcome {
    let Some(draft) = self.draft() else {
      return SaveOutcome::Rejected;
    };
    if !draft.can_save() {
      debug!("blank task name; save ignored");
      return SaveOutcome::Rejected;
    }

    let outcome = match &draft.mode {
      | FormMode::New => {
        let task =
          draft.build_task(new_task_id());
        info!(id = %task.id, name = %task.name, "creating task");
        store.add(task);
        SaveOutcome::Created
      }
      | FormMode::Edit(id) => {
        let task =
          draft.build_task(id.clone());
        if store.update(task) {
          info!(%id, "updated task");
          SaveOutcome::Updated
        } else {
          SaveOutcome::Missing
        }
      }
    };

    *self = TaskForm::Closed;
    outcome
  }

  pub fn cancel(&mut self) {
    *self = TaskForm::Closed;
  }

  /// Removes the task being edited and closes the form. A new-task form
  /// just closes.
  pub fn delete<S: TaskStorage>(
    &mut self,
    store: &mut TaskStore<S>
  ) -> bool {
    let removed = match self.draft() {
      | Some(TaskDraft {
        mode: FormMode::Edit(id),
        ..
      }) => {
        let id = id.clone();
        store.delete(&id)
      }
      | _ => false
    };
    *self = TaskForm::Closed;
    removed
  }
}
