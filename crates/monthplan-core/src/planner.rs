//! Top-level view state: the one place tasks, filters, the visible month,
//! the form and the pending drag live. Views read from it and call back
//! into it; nothing below mutates the pieces directly.

use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};
use tracing::debug;

use crate::calendar::{
  calendar_days,
  first_day_of_month,
  shift_months,
  weeks
};
use crate::config::PlannerConfig;
use crate::filter::{
  Filters,
  TimeRange,
  tasks_for_day
};
use crate::form::{
  SaveOutcome,
  TaskForm
};
use crate::selection::DragSelection;
use crate::storage::TaskStorage;
use crate::store::TaskStore;
use crate::task::{
  Category,
  DateRange,
  Priority,
  Task
};

#[derive(Debug, Clone)]
pub struct Planner<S> {
  store:            TaskStore<S>,
  filters:          Filters,
  current_month:    NaiveDate,
  form:             TaskForm,
  drag:             DragSelection,
  show_filters:     bool,
  week_start:       Weekday,
  default_category: Category,
  default_priority: Priority
}

impl<S: TaskStorage> Planner<S> {
  pub fn new(
    storage: S,
    config: &PlannerConfig,
    today: NaiveDate
  ) -> Self {
    Self {
      store:            TaskStore::open(
        storage
      ),
      filters:          Filters::default(),
      current_month:    month_of(today),
      form:             TaskForm::Closed,
      drag:             DragSelection::default(),
      show_filters:     false,
      week_start:       config.week_start(),
      default_category: config
        .form
        .default_category,
      default_priority: config
        .form
        .default_priority
    }
  }

  pub fn tasks(&self) -> &[Task] {
    self.store.list()
  }

  pub fn filters(&self) -> &Filters {
    &self.filters
  }

  pub fn current_month(&self) -> NaiveDate {
    self.current_month
  }

  pub fn week_start(&self) -> Weekday {
    self.week_start
  }

  pub fn form(&self) -> &TaskForm {
    &self.form
  }

  pub fn form_mut(&mut self) -> &mut TaskForm {
    &mut self.form
  }

  pub fn drag(&self) -> &DragSelection {
    &self.drag
  }

  pub fn show_filters(&self) -> bool {
    self.show_filters
  }

  pub fn prev_month(&mut self) {
    self.current_month =
      shift_months(self.current_month, -1);
    debug!(month = %self.current_month, "navigated back");
  }

  pub fn next_month(&mut self) {
    self.current_month =
      shift_months(self.current_month, 1);
    debug!(month = %self.current_month, "navigated forward");
  }

  pub fn go_to_today(
    &mut self,
    today: NaiveDate
  ) {
    self.current_month = month_of(today);
  }

  pub fn visible_days(&self) -> Vec<NaiveDate> {
    calendar_days(
      self.current_month,
      self.week_start
    )
  }

  pub fn visible_weeks(
    &self
  ) -> Vec<Vec<NaiveDate>> {
    weeks(&self.visible_days())
  }

  pub fn visible_tasks(
    &self,
    today: NaiveDate
  ) -> Vec<&Task> {
    self
      .filters
      .apply(self.store.list(), today)
  }

  pub fn tasks_for_day(
    &self,
    day: NaiveDate,
    today: NaiveDate
  ) -> Vec<&Task> {
    tasks_for_day(
      &self.visible_tasks(today),
      day
    )
  }

  pub fn toggle_filters_panel(&mut self) {
    self.show_filters = !self.show_filters;
  }

  pub fn toggle_category(
    &mut self,
    category: Category
  ) {
    self.filters.toggle_category(category);
  }

  pub fn toggle_priority(
    &mut self,
    priority: Priority
  ) {
    self.filters.toggle_priority(priority);
  }

  pub fn set_search_query(
    &mut self,
    query: impl Into<String>
  ) {
    self.filters.set_search_query(query);
  }

  pub fn set_time_range(
    &mut self,
    range: Option<TimeRange>
  ) {
    self.filters.set_time_range(range);
  }

  pub fn clear_filters(&mut self) {
    self.filters.clear();
  }

  pub fn begin_drag(
    &mut self,
    day: NaiveDate
  ) {
    self.drag.begin(day);
  }

  pub fn extend_drag(
    &mut self,
    day: NaiveDate
  ) {
    self.drag.extend(day);
  }

  /// Pointer found released without a mouseup reaching the grid.
  pub fn cancel_drag(&mut self) {
    self.drag.cancel();
  }

  /// Pointer released: opens a new-task form over the dragged range, if a
  /// drag was pending, and always clears the selection.
  pub fn finish_drag(&mut self) -> bool {
    match self.drag.finish() {
      | Some(range) => {
        self.open_new(range);
        true
      }
      | None => false
    }
  }

  pub fn open_new_on(
    &mut self,
    day: NaiveDate
  ) {
    self.drag = DragSelection::default();
    self.open_new(DateRange::single(day));
  }

  fn open_new(
    &mut self,
    range: DateRange
  ) {
    self.form.open_new(
      range,
      self.default_category,
      self.default_priority
    );
  }

  pub fn open_edit(
    &mut self,
    id: &str
  ) -> bool {
    let Some(task) = self.store.get(id)
    else {
      debug!(%id, "edit requested for unknown task");
      return false;
    };
    let task = task.clone();
    self.drag = DragSelection::default();
    self
      .form
      .open_edit(&task, self.default_priority);
    true
  }

  pub fn save_form(&mut self) -> SaveOutcome {
    self.form.save(&mut self.store)
  }

  pub fn cancel_form(&mut self) {
    self.form.cancel();
  }

  pub fn delete_from_form(&mut self) -> bool {
    self.form.delete(&mut self.store)
  }

  pub fn delete_task(
    &mut self,
    id: &str
  ) -> bool {
    self.store.delete(id)
  }
}

fn month_of(today: NaiveDate) -> NaiveDate {
  first_day_of_month(
    today.year(),
    today.month()
  )
}
