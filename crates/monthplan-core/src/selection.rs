use chrono::NaiveDate;
use tracing::trace;

use crate::task::DateRange;

/// Pending drag-to-create range. `anchor` is where the pointer went down,
/// `current` is the most recently hovered day.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct DragSelection {
  anchor:  Option<NaiveDate>,
  current: Option<NaiveDate>
}

impl DragSelection {
  pub fn begin(
    &mut self,
    day: NaiveDate
  ) {
    trace!(%day, "drag begin");
    self.anchor = Some(day);
    self.current = Some(day);
  }

  pub fn extend(
    &mut self,
    day: NaiveDate
  ) {
    if self.anchor.is_some() {
      trace!(%day, "drag extend");
      self.current = Some(day);
    }
  }

  /// Ends the drag. Returns the ordered range when one was pending; the
  /// selection is cleared either way.
  pub fn finish(
    &mut self
  ) -> Option<DateRange> {
    let range = match (
      self.anchor,
      self.current
    ) {
      | (Some(a), Some(b)) => {
        Some(DateRange::new(a, b))
      }
      | _ => None
    };
    *self = Self::default();
    range
  }

  /// Drops a pending selection without producing a range, e.g. when the
  /// pointer was released somewhere that never reported it.
  pub fn cancel(&mut self) {
    if self.anchor.is_some() {
      trace!("drag cancelled");
    }
    *self = Self::default();
  }

  #[must_use]
  pub fn is_active(&self) -> bool {
    self.anchor.is_some()
  }

  #[must_use]
  pub fn covers(
    &self,
    day: NaiveDate
  ) -> bool {
    match (self.anchor, self.current) {
      | (Some(a), Some(b)) => {
        DateRange::new(a, b).contains(day)
      }
      | _ => false
    }
  }
}
