use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{
  Context,
  anyhow
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer
};
use tracing::trace;

use crate::calendar::add_days;
use crate::task::{
  Category,
  Priority,
  Task
};

/// Rolling window starting today and reaching `weeks` weeks forward.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct TimeRange {
  weeks: u32
}

impl TimeRange {
  pub fn weeks(
    weeks: u32
  ) -> anyhow::Result<Self> {
    if weeks == 0 {
      return Err(anyhow!(
        "time range must span at least \
         one week"
      ));
    }
    Ok(Self {
      weeks
    })
  }

  #[must_use]
  pub fn label(&self) -> String {
    if self.weeks == 1 {
      "1 week".to_string()
    } else {
      format!("{} weeks", self.weeks)
    }
  }

  #[must_use]
  pub fn range_end(
    &self,
    today: NaiveDate
  ) -> NaiveDate {
    add_days(
      today,
      i64::from(self.weeks) * 7
    )
  }
}

impl FromStr for TimeRange {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let label_re = Regex::new(
      r"(?i)^\s*(?P<weeks>\d+)\s*(?:w|wk|wks|week|weeks)\s*$"
    )
    .map_err(|e| {
      anyhow!(
        "internal regex compile \
         failure: {e}"
      )
    })?;
    let caps = label_re
      .captures(s)
      .ok_or_else(|| {
        anyhow!(
          "invalid time range label: \
           {s:?}"
        )
      })?;
    let weeks: u32 = caps["weeks"]
      .parse()
      .with_context(|| {
        format!(
          "invalid week count in {s:?}"
        )
      })?;
    TimeRange::weeks(weeks)
  }
}

impl fmt::Display for TimeRange {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.label())
  }
}

impl Serialize for TimeRange {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(&self.label())
  }
}

impl<'de> Deserialize<'de> for TimeRange {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      String::deserialize(deserializer)?;
    raw
      .parse()
      .map_err(serde::de::Error::custom)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
  pub categories:   BTreeSet<Category>,
  pub priorities:   BTreeSet<Priority>,
  pub search_query: String,
  pub time_range:   Option<TimeRange>
}

impl Default for Filters {
  fn default() -> Self {
    Self {
      categories:   Category::ALL
        .into_iter()
        .collect(),
      priorities:   Priority::ALL
        .into_iter()
        .collect(),
      search_query: String::new(),
      time_range:   None
    }
  }
}

impl Filters {
  /// Filters that restrict nothing.
  #[must_use]
  pub fn unrestricted() -> Self {
    Self {
      categories:   BTreeSet::new(),
      priorities:   BTreeSet::new(),
      search_query: String::new(),
      time_range:   None
    }
  }

  pub fn toggle_category(
    &mut self,
    category: Category
  ) {
    if !self.categories.remove(&category)
    {
      self.categories.insert(category);
    }
  }

  pub fn toggle_priority(
    &mut self,
    priority: Priority
  ) {
    if !self.priorities.remove(&priority)
    {
      self.priorities.insert(priority);
    }
  }

  pub fn set_search_query(
    &mut self,
    query: impl Into<String>
  ) {
    self.search_query = query.into();
  }

  pub fn set_time_range(
    &mut self,
    range: Option<TimeRange>
  ) {
    self.time_range = range;
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }

  /// True when some task could be hidden by these filters.
  #[must_use]
  pub fn is_narrowed(&self) -> bool {
    let all_categories = self
      .categories
      .is_empty()
      || self.categories.len()
        == Category::ALL.len();
    let all_priorities = self
      .priorities
      .is_empty()
      || self.priorities.len()
        == Priority::ALL.len();

    !all_categories
      || !all_priorities
      || !self.search_query.is_empty()
      || self.time_range.is_some()
  }

  #[must_use]
  pub fn matches(
    &self,
    task: &Task,
    today: NaiveDate
  ) -> bool {
    if !self.categories.is_empty()
      && !self
        .categories
        .contains(&task.category)
    {
      trace!(id = %task.id, "excluded by category");
      return false;
    }

    if let Some(priority) = task.priority
      && !self.priorities.is_empty()
      && !self.priorities.contains(&priority)
    {
      trace!(id = %task.id, "excluded by priority");
      return false;
    }

    if !self.search_query.is_empty() {
      let needle =
        self.search_query.to_lowercase();
      if !task
        .name
        .to_lowercase()
        .contains(&needle)
      {
        trace!(id = %task.id, "excluded by search");
        return false;
      }
    }

    if let Some(range) = self.time_range {
      let range_end =
        range.range_end(today);
      if task.end_date < today
        || task.start_date > range_end
      {
        trace!(id = %task.id, %range_end, "excluded by time range");
        return false;
      }
    }

    true
  }

  pub fn apply<'a>(
    &self,
    tasks: &'a [Task],
    today: NaiveDate
  ) -> Vec<&'a Task> {
    tasks
      .iter()
      .filter(|task| {
        self.matches(task, today)
      })
      .collect()
  }
}

/// Tasks from an already-filtered list that cover `day`, in list order.
pub fn tasks_for_day<'a>(
  tasks: &[&'a Task],
  day: NaiveDate
) -> Vec<&'a Task> {
  tasks
    .iter()
    .copied()
    .filter(|task| task.occurs_on(day))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::task::DateRange;

  fn day(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn task(
    name: &str,
    category: Category,
    priority: Option<Priority>,
    start: NaiveDate,
    end: NaiveDate
  ) -> Task {
    let mut task = Task::new(
      name,
      category,
      DateRange::new(start, end)
    );
    task.priority = priority;
    task
  }

  #[test]
  fn category_and_priority_membership() {
    let today = day(2024, 6, 15);
    let a = task(
      "A",
      Category::ToDo,
      Some(Priority::High),
      day(2024, 6, 10),
      day(2024, 6, 20)
    );

    let mut filters = Filters {
      categories:   [Category::ToDo]
        .into_iter()
        .collect(),
      priorities:   [Priority::High]
        .into_iter()
        .collect(),
      search_query: String::new(),
      time_range:   None
    };
    assert!(filters.matches(&a, today));

    filters.categories =
      [Category::Completed]
        .into_iter()
        .collect();
    assert!(!filters.matches(&a, today));
  }

  #[test]
  fn empty_sets_restrict_nothing() {
    let today = day(2024, 6, 15);
    let t = task(
      "anything",
      Category::Review,
      Some(Priority::Low),
      day(2024, 1, 1),
      day(2024, 1, 2)
    );
    assert!(
      Filters::unrestricted()
        .matches(&t, today)
    );
  }

  #[test]
  fn tasks_without_priority_ignore_priority_filter()
   {
    let today = day(2024, 6, 15);
    let t = task(
      "no priority",
      Category::ToDo,
      None,
      day(2024, 6, 15),
      day(2024, 6, 15)
    );
    let mut filters = Filters::default();
    filters.priorities =
      [Priority::Low].into_iter().collect();
    assert!(filters.matches(&t, today));
  }

  #[test]
  fn search_is_case_insensitive_substring() {
    let today = day(2024, 6, 15);
    let t = task(
      "Quarterly Review Prep",
      Category::ToDo,
      None,
      today,
      today
    );
    let mut filters = Filters::default();

    filters.set_search_query("review");
    assert!(filters.matches(&t, today));
    filters.set_search_query("PREP");
    assert!(filters.matches(&t, today));
    filters.set_search_query("retro");
    assert!(!filters.matches(&t, today));
  }

  #[test]
  fn one_week_window_keeps_overlapping_tasks()
   {
    let today = day(2024, 6, 15);
    let range: TimeRange =
      "1 week".parse().expect("label");
    assert_eq!(
      range.range_end(today),
      day(2024, 6, 22)
    );

    let mut filters = Filters::default();
    filters.set_time_range(Some(range));

    let b = task(
      "B",
      Category::ToDo,
      None,
      day(2024, 6, 25),
      day(2024, 6, 26)
    );
    let c = task(
      "C",
      Category::ToDo,
      None,
      day(2024, 6, 14),
      day(2024, 6, 16)
    );
    let past = task(
      "past",
      Category::ToDo,
      None,
      day(2024, 6, 1),
      day(2024, 6, 14)
    );
    let boundary = task(
      "boundary",
      Category::ToDo,
      None,
      day(2024, 6, 22),
      day(2024, 6, 30)
    );

    assert!(!filters.matches(&b, today));
    assert!(filters.matches(&c, today));
    assert!(!filters.matches(&past, today));
    assert!(filters.matches(&boundary, today));
  }

  #[test]
  fn enabling_category_only_removes_tasks() {
    let today = day(2024, 6, 15);
    let tasks: Vec<Task> = Category::ALL
      .into_iter()
      .map(|category| {
        task(
          category.label(),
          category,
          Some(Priority::Medium),
          today,
          today
        )
      })
      .collect();

    let before = Filters::default();
    let mut after = before.clone();
    after.categories =
      [Category::Review]
        .into_iter()
        .collect();

    let kept_before: Vec<&str> = before
      .apply(&tasks, today)
      .iter()
      .map(|t| t.id.as_str())
      .collect();
    let kept_after = after.apply(&tasks, today);

    assert_eq!(kept_after.len(), 1);
    assert!(kept_after.iter().all(|t| {
      kept_before.contains(&t.id.as_str())
    }));
  }

  #[test]
  fn apply_is_pure() {
    let today = day(2024, 6, 15);
    let tasks = vec![task(
      "A",
      Category::ToDo,
      Some(Priority::High),
      today,
      today
    )];
    let snapshot = tasks.clone();
    let filters = Filters::default();

    let first: Vec<Task> = filters
      .apply(&tasks, today)
      .into_iter()
      .cloned()
      .collect();
    let second: Vec<Task> = filters
      .apply(&tasks, today)
      .into_iter()
      .cloned()
      .collect();

    assert_eq!(first, second);
    assert_eq!(tasks, snapshot);
  }

  #[test]
  fn toggles_flip_membership() {
    let mut filters = Filters::default();
    assert!(!filters.is_narrowed());

    filters.toggle_category(Category::ToDo);
    assert!(
      !filters
        .categories
        .contains(&Category::ToDo)
    );
    assert!(filters.is_narrowed());

    filters.toggle_category(Category::ToDo);
    assert!(
      filters
        .categories
        .contains(&Category::ToDo)
    );

    filters.toggle_priority(Priority::Low);
    assert!(
      !filters
        .priorities
        .contains(&Priority::Low)
    );
    filters.clear();
    assert_eq!(filters, Filters::default());
  }

  #[test]
  fn huge_window_saturates_instead_of_collapsing()
   {
    let today = day(2024, 6, 15);
    let range: TimeRange =
      "20000000 weeks".parse().expect("label");
    assert_eq!(
      range.range_end(today),
      NaiveDate::MAX
    );

    let mut filters = Filters::default();
    filters.set_time_range(Some(range));
    let tomorrow = task(
      "tomorrow",
      Category::ToDo,
      None,
      day(2024, 6, 16),
      day(2024, 6, 16)
    );
    assert!(filters.matches(&tomorrow, today));
  }

  #[test]
  fn time_range_labels_round_trip() {
    for weeks in 1..=3 {
      let range = TimeRange::weeks(weeks)
        .expect("non-zero");
      let parsed: TimeRange = range
        .label()
        .parse()
        .expect("parse label");
      assert_eq!(parsed, range);
    }
    assert!(
      "0 weeks".parse::<TimeRange>().is_err()
    );
    assert!(
      "soon".parse::<TimeRange>().is_err()
    );
  }

  #[test]
  fn tasks_for_day_selects_covering_tasks() {
    let a = task(
      "A",
      Category::ToDo,
      None,
      day(2024, 6, 3),
      day(2024, 6, 5)
    );
    let b = task(
      "B",
      Category::ToDo,
      None,
      day(2024, 6, 5),
      day(2024, 6, 6)
    );
    let all = vec![&a, &b];

    let on_fourth =
      tasks_for_day(&all, day(2024, 6, 4));
    let on_fifth =
      tasks_for_day(&all, day(2024, 6, 5));

    assert_eq!(on_fourth.len(), 1);
    assert_eq!(on_fifth.len(), 2);
  }
}
