use anyhow::Context;
use chrono::Weekday;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::calendar::parse_week_start;
use crate::filter::TimeRange;
use crate::task::{
  Category,
  Priority
};

pub const DEFAULT_STORAGE_KEY: &str =
  "calendar-tasks";

fn default_title() -> String {
  "Month View Task Planner".to_string()
}

fn default_week_start() -> String {
  "sunday".to_string()
}

fn default_storage_key() -> String {
  DEFAULT_STORAGE_KEY.to_string()
}

fn default_time_range_weeks() -> Vec<u32>
{
  vec![1, 2, 3]
}

fn default_category() -> Category {
  Category::ToDo
}

fn default_priority() -> Priority {
  Priority::Medium
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PlannerConfig {
  #[serde(default)]
  pub version:  u32,
  #[serde(default = "default_title")]
  pub title:    String,
  #[serde(default)]
  pub calendar: CalendarSection,
  #[serde(default)]
  pub storage:  StorageSection,
  #[serde(default)]
  pub filters:  FilterSection,
  #[serde(default)]
  pub form:     FormSection
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarSection {
  #[serde(
    default = "default_week_start"
  )]
  pub week_start: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct StorageSection {
  #[serde(
    default = "default_storage_key"
  )]
  pub key: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct FilterSection {
  #[serde(
    default = "default_time_range_weeks"
  )]
  pub time_range_weeks: Vec<u32>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct FormSection {
  #[serde(default = "default_category")]
  pub default_category: Category,
  #[serde(default = "default_priority")]
  pub default_priority: Priority
}

impl Default for CalendarSection {
  fn default() -> Self {
    Self {
      week_start: default_week_start()
    }
  }
}

impl Default for StorageSection {
  fn default() -> Self {
    Self {
      key: default_storage_key()
    }
  }
}

impl Default for FilterSection {
  fn default() -> Self {
    Self {
      time_range_weeks:
        default_time_range_weeks()
    }
  }
}

impl Default for FormSection {
  fn default() -> Self {
    Self {
      default_category: default_category(
      ),
      default_priority: default_priority(
      )
    }
  }
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      version:  1,
      title:    default_title(),
      calendar: CalendarSection::default(),
      storage:  StorageSection::default(),
      filters:  FilterSection::default(),
      form:     FormSection::default()
    }
  }
}

impl PlannerConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config: PlannerConfig =
      toml::from_str(raw).context(
        "failed parsing planner config"
      )?;
    config.sanitize();
    Ok(config)
  }

  /// Parses `raw`, logging and falling back to defaults on failure.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          version = config.version,
          week_start = %config.calendar.week_start,
          storage_key = %config.storage.key,
          "loaded planner config"
        );
        config
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed parsing planner config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if parse_week_start(
      &self.calendar.week_start
    )
    .is_err()
    {
      warn!(
        week_start = %self.calendar.week_start,
        "unsupported week start; using sunday"
      );
      self.calendar.week_start =
        default_week_start();
    }

    if self.storage.key.trim().is_empty() {
      warn!(
        "empty storage key; using default"
      );
      self.storage.key =
        default_storage_key();
    }

    let weeks =
      &mut self.filters.time_range_weeks;
    weeks.retain(|w| *w > 0);
    weeks.sort_unstable();
    weeks.dedup();
    if weeks.is_empty() {
      debug!(
        "no time range presets; using \
         defaults"
      );
      *weeks = default_time_range_weeks();
    }
  }

  #[must_use]
  pub fn week_start(&self) -> Weekday {
    parse_week_start(
      &self.calendar.week_start
    )
    .unwrap_or(Weekday::Sun)
  }

  pub fn time_ranges(
    &self
  ) -> Vec<TimeRange> {
    self
      .filters
      .time_range_weeks
      .iter()
      .filter_map(|weeks| {
        TimeRange::weeks(*weeks).ok()
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config =
      PlannerConfig::from_toml_str("")
        .expect("parse empty");
    assert_eq!(
      config.storage.key,
      DEFAULT_STORAGE_KEY
    );
    assert_eq!(config.week_start(), Weekday::Sun);
    assert_eq!(
      config.filters.time_range_weeks,
      vec![1, 2, 3]
    );
    assert_eq!(
      config.form.default_category,
      Category::ToDo
    );
    assert_eq!(
      config.form.default_priority,
      Priority::Medium
    );
  }

  #[test]
  fn sections_override_defaults() {
    let raw = r#"
version = 1
title = "Team board"

[calendar]
week_start = "monday"

[storage]
key = "team-tasks"

[filters]
time_range_weeks = [4, 2, 2, 0]

[form]
default_category = "In Progress"
default_priority = "high"
"#;
    let config =
      PlannerConfig::from_toml_str(raw)
        .expect("parse");

    assert_eq!(config.title, "Team board");
    assert_eq!(config.week_start(), Weekday::Mon);
    assert_eq!(config.storage.key, "team-tasks");
    assert_eq!(
      config.filters.time_range_weeks,
      vec![2, 4]
    );
    assert_eq!(
      config.form.default_category,
      Category::InProgress
    );
    assert_eq!(
      config.form.default_priority,
      Priority::High
    );
  }

  #[test]
  fn bad_values_are_sanitized() {
    let raw = r#"
[calendar]
week_start = "friday"

[storage]
key = "  "

[filters]
time_range_weeks = []
"#;
    let config =
      PlannerConfig::from_toml_str(raw)
        .expect("parse");
    assert_eq!(config.calendar.week_start, "sunday");
    assert_eq!(
      config.storage.key,
      DEFAULT_STORAGE_KEY
    );
    assert_eq!(config.time_ranges().len(), 3);
  }

  #[test]
  fn malformed_document_falls_back() {
    let config = PlannerConfig::load_or_default(
      "[calendar\nweek_start = 3"
    );
    assert_eq!(config, PlannerConfig::default());
  }
}
