pub mod calendar;
pub mod config;
pub mod filter;
pub mod form;
pub mod planner;
pub mod selection;
pub mod storage;
pub mod store;
pub mod task;

pub use config::PlannerConfig;
pub use filter::{
  Filters,
  TimeRange
};
pub use form::{
  FormMode,
  SaveOutcome,
  TaskDraft,
  TaskForm
};
pub use planner::Planner;
pub use selection::DragSelection;
pub use storage::{
  MemoryStorage,
  TaskStorage
};
pub use store::TaskStore;
pub use task::{
  Category,
  DateRange,
  Priority,
  Task
};
