use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub enum Category {
  #[serde(rename = "To Do")]
  ToDo,
  #[serde(rename = "In Progress")]
  InProgress,
  #[serde(rename = "Review")]
  Review,
  #[serde(rename = "Completed")]
  Completed
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::ToDo,
    Category::InProgress,
    Category::Review,
    Category::Completed
  ];

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      | Category::ToDo => "To Do",
      | Category::InProgress => {
        "In Progress"
      }
      | Category::Review => "Review",
      | Category::Completed => {
        "Completed"
      }
    }
  }

  #[must_use]
  pub fn color(self) -> &'static str {
    match self {
      | Category::ToDo => "#FF9800",
      | Category::InProgress => {
        "#2196F3"
      }
      | Category::Review => "#9C27B0",
      | Category::Completed => "#4CAF50"
    }
  }
}

impl fmt::Display for Category {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Category {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    Category::ALL
      .into_iter()
      .find(|category| {
        category
          .label()
          .eq_ignore_ascii_case(trimmed)
      })
      .ok_or_else(|| {
        anyhow!(
          "unknown category: {trimmed}"
        )
      })
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High
}

impl Priority {
  pub const ALL: [Priority; 3] = [
    Priority::Low,
    Priority::Medium,
    Priority::High
  ];

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      | Priority::Low => "low",
      | Priority::Medium => "medium",
      | Priority::High => "high"
    }
  }

  #[must_use]
  pub fn color(self) -> &'static str {
    match self {
      | Priority::Low => "#8BC34A",
      | Priority::Medium => "#FFC107",
      | Priority::High => "#F44336"
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Priority {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "low" => Ok(Priority::Low),
      | "medium" => Ok(Priority::Medium),
      | "high" => Ok(Priority::High),
      | other => {
        Err(anyhow!(
          "unknown priority: {other}"
        ))
      }
    }
  }
}

/// An inclusive span of calendar days with `start <= end`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DateRange {
  start: NaiveDate,
  end:   NaiveDate
}

impl DateRange {
  /// Builds a range from two endpoints given in either order.
  #[must_use]
  pub fn new(
    a: NaiveDate,
    b: NaiveDate
  ) -> Self {
    if a <= b {
      Self {
        start: a,
        end:   b
      }
    } else {
      Self {
        start: b,
        end:   a
      }
    }
  }

  #[must_use]
  pub fn single(day: NaiveDate) -> Self {
    Self {
      start: day,
      end:   day
    }
  }

  #[must_use]
  pub fn start(&self) -> NaiveDate {
    self.start
  }

  #[must_use]
  pub fn end(&self) -> NaiveDate {
    self.end
  }

  #[must_use]
  pub fn contains(
    &self,
    day: NaiveDate
  ) -> bool {
    self.start <= day && day <= self.end
  }
}

impl fmt::Display for DateRange {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{} to {}",
      self.start.format("%Y-%m-%d"),
      self.end.format("%Y-%m-%d")
    )
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:          String,
  pub name:        String,
  pub category:    Category,
  pub start_date:  NaiveDate,
  pub end_date:    NaiveDate,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:    Option<Priority>
}

impl Task {
  pub fn new(
    name: impl Into<String>,
    category: Category,
    range: DateRange
  ) -> Self {
    Self {
      id: new_task_id(),
      name: name.into(),
      category,
      start_date: range.start(),
      end_date: range.end(),
      description: None,
      priority: None
    }
  }

  #[must_use]
  pub fn with_priority(
    mut self,
    priority: Priority
  ) -> Self {
    self.priority = Some(priority);
    self
  }

  #[must_use]
  pub fn with_description(
    mut self,
    description: impl Into<String>
  ) -> Self {
    self.description =
      Some(description.into());
    self
  }

  /// Inclusive calendar-date membership. A task whose end precedes its
  /// start occurs on no day.
  #[must_use]
  pub fn occurs_on(
    &self,
    day: NaiveDate
  ) -> bool {
    self.start_date <= day
      && day <= self.end_date
  }

  #[must_use]
  pub fn has_reversed_range(
    &self
  ) -> bool {
    self.end_date < self.start_date
  }

  #[must_use]
  pub fn range(&self) -> DateRange {
    DateRange::new(
      self.start_date,
      self.end_date
    )
  }
}

pub fn new_task_id() -> String {
  Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn serializes_with_persisted_schema() {
    let task = Task {
      id:          "1718000000000"
        .to_string(),
      name:        "Ship release"
        .to_string(),
      category:    Category::InProgress,
      start_date:  day(2024, 6, 10),
      end_date:    day(2024, 6, 20),
      description: None,
      priority:    Some(Priority::High)
    };

    let json = serde_json::to_value(&task)
      .expect("serialize task");
    assert_eq!(
      json["category"],
      "In Progress"
    );
    assert_eq!(
      json["startDate"],
      "2024-06-10"
    );
    assert_eq!(json["endDate"], "2024-06-20");
    assert_eq!(json["priority"], "high");
    assert!(json.get("description").is_none());
  }

  #[test]
  fn parses_stored_task_without_optionals()
  {
    let raw = r#"{"id":"a","name":"Plan","category":"To Do","startDate":"2024-06-01","endDate":"2024-06-02"}"#;
    let task: Task = serde_json::from_str(raw)
      .expect("parse task");
    assert_eq!(task.category, Category::ToDo);
    assert_eq!(task.priority, None);
    assert_eq!(task.description, None);
  }

  #[test]
  fn membership_is_inclusive_on_both_ends()
  {
    let task = Task::new(
      "span",
      Category::Review,
      DateRange::new(
        day(2024, 6, 10),
        day(2024, 6, 12)
      )
    );

    assert!(!task.occurs_on(day(2024, 6, 9)));
    assert!(task.occurs_on(day(2024, 6, 10)));
    assert!(task.occurs_on(day(2024, 6, 11)));
    assert!(task.occurs_on(day(2024, 6, 12)));
    assert!(!task.occurs_on(day(2024, 6, 13)));
  }

  #[test]
  fn date_range_orders_endpoints() {
    let range = DateRange::new(
      day(2024, 6, 5),
      day(2024, 6, 3)
    );
    assert_eq!(range.start(), day(2024, 6, 3));
    assert_eq!(range.end(), day(2024, 6, 5));
    assert_eq!(
      range.to_string(),
      "2024-06-03 to 2024-06-05"
    );
  }

  #[test]
  fn category_and_priority_parse_labels() {
    assert_eq!(
      "in progress"
        .parse::<Category>()
        .expect("category"),
      Category::InProgress
    );
    assert_eq!(
      "HIGH"
        .parse::<Priority>()
        .expect("priority"),
      Priority::High
    );
    assert!("urgent".parse::<Priority>().is_err());
  }
}
