use anyhow::anyhow;
use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};

pub fn parse_week_start(
  raw: &str
) -> anyhow::Result<Weekday> {
  match raw
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "sunday" | "sun" => {
      Ok(Weekday::Sun)
    }
    | "monday" | "mon" => {
      Ok(Weekday::Mon)
    }
    | other => {
      Err(anyhow!(
        "unsupported week start: {other}"
      ))
    }
  }
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  // December of the last representable year has no successor month.
  NaiveDate::from_ymd_opt(
    next_year, next_month, 1
  )
  .and_then(|next| next.pred_opt())
  .unwrap_or(NaiveDate::MAX)
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

/// Adds `days` to `date`, saturating at the representable date bounds.
pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  Duration::try_days(days)
    .and_then(|delta| {
      date.checked_add_signed(delta)
    })
    .unwrap_or(if days < 0 {
      NaiveDate::MIN
    } else {
      NaiveDate::MAX
    })
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

pub fn end_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    start_of_week(day, week_start),
    6
  )
}

/// Moves `date` by whole months, clamping the day to the target month.
pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

#[must_use]
pub fn is_same_month(
  a: NaiveDate,
  b: NaiveDate
) -> bool {
  a.year() == b.year()
    && a.month() == b.month()
}

/// Every date from the start of the week holding the 1st of `reference`'s
/// month through the end of the week holding its last day.
pub fn calendar_days(
  reference: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let first = first_day_of_month(
    reference.year(),
    reference.month()
  );
  let last = last_day_of_month(
    reference.year(),
    reference.month()
  );
  let grid_start =
    start_of_week(first, week_start);
  let grid_end =
    end_of_week(last, week_start);

  grid_start
    .iter_days()
    .take_while(|day| *day <= grid_end)
    .collect()
}

pub fn weeks(
  days: &[NaiveDate]
) -> Vec<Vec<NaiveDate>> {
  days
    .chunks(7)
    .map(<[NaiveDate]>::to_vec)
    .collect()
}

pub fn weekday_labels(
  week_start: Weekday
) -> Vec<&'static str> {
  match week_start {
    | Weekday::Mon => {
      vec![
        "MON", "TUE", "WED", "THU",
        "FRI", "SAT", "SUN",
      ]
    }
    | _ => {
      vec![
        "SUN", "MON", "TUE", "WED",
        "THU", "FRI", "SAT",
      ]
    }
  }
}

pub fn month_title(
  date: NaiveDate
) -> String {
  date.format("%B %Y").to_string()
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
  fn june_2024_pads_both_ends_sunday_start()
   {
    let days = calendar_days(
      day(2024, 6, 15),
      Weekday::Sun
    );

    assert_eq!(days.len(), 42);
    assert_eq!(days[0], day(2024, 5, 26));
    assert_eq!(
      days[days.len() - 1],
      day(2024, 7, 6)
    );
  }

  #[test]
  fn february_2015_fits_four_weeks() {
    let days = calendar_days(
      day(2015, 2, 10),
      Weekday::Sun
    );
    assert_eq!(days.len(), 28);
    assert_eq!(days[0], day(2015, 2, 1));
    assert_eq!(days[27], day(2015, 2, 28));
  }

  #[test]
  fn grid_tiles_whole_weeks_for_every_month()
   {
    for week_start in
      [Weekday::Sun, Weekday::Mon]
    {
      for year in [2023, 2024, 2025] {
        for month in 1..=12 {
          let reference =
            day(year, month, 1);
          let days = calendar_days(
            reference,
            week_start
          );

          assert_eq!(days.len() % 7, 0);
          assert!((28..=42)
            .contains(&days.len()));
          assert_eq!(
            days[0].weekday(),
            week_start
          );
          assert_eq!(
            days[days.len() - 1].weekday(),
            week_start.pred()
          );
          assert!(days.contains(
            &first_day_of_month(year, month)
          ));
          assert!(days.contains(
            &last_day_of_month(year, month)
          ));
          assert!(days
            .windows(2)
            .all(|pair| pair[1]
              == add_days(pair[0], 1)));
        }
      }
    }
  }

  #[test]
  fn grid_is_independent_of_day_in_month() {
    let a = calendar_days(
      day(2024, 3, 1),
      Weekday::Mon
    );
    let b = calendar_days(
      day(2024, 3, 31),
      Weekday::Mon
    );
    assert_eq!(a, b);
  }

  #[test]
  fn weeks_chunk_into_rows_of_seven() {
    let days = calendar_days(
      day(2024, 6, 1),
      Weekday::Sun
    );
    let rows = weeks(&days);
    assert_eq!(rows.len(), 6);
    assert!(
      rows.iter().all(|row| row.len() == 7)
    );
  }

  #[test]
  fn add_days_saturates_at_bounds() {
    assert_eq!(
      add_days(day(2024, 6, 15), i64::MAX),
      NaiveDate::MAX
    );
    assert_eq!(
      add_days(NaiveDate::MIN, -1),
      NaiveDate::MIN
    );
    assert_eq!(
      add_days(day(2024, 2, 28), 1),
      day(2024, 2, 29)
    );
  }

  #[test]
  fn last_december_still_yields_a_grid() {
    let year = NaiveDate::MAX.year();
    assert_eq!(
      last_day_of_month(year, 12),
      NaiveDate::MAX
    );

    let days = calendar_days(
      NaiveDate::MAX,
      Weekday::Sun
    );
    assert!(!days.is_empty());
    assert_eq!(days[0].weekday(), Weekday::Sun);
    assert_eq!(
      days[days.len() - 1],
      NaiveDate::MAX
    );
    assert!(days.contains(
      &first_day_of_month(year, 12)
    ));
  }

  #[test]
  fn shift_months_clamps_day() {
    assert_eq!(
      shift_months(day(2024, 1, 31), 1),
      day(2024, 2, 29)
    );
    assert_eq!(
      shift_months(day(2024, 1, 15), -1),
      day(2023, 12, 15)
    );
    assert_eq!(
      shift_months(day(2024, 12, 31), 1),
      day(2025, 1, 31)
    );
  }

  #[test]
  fn week_start_names_parse() {
    assert_eq!(
      parse_week_start("Sunday")
        .expect("sunday"),
      Weekday::Sun
    );
    assert_eq!(
      parse_week_start("mon")
        .expect("monday"),
      Weekday::Mon
    );
    assert!(
      parse_week_start("friday").is_err()
    );
  }

  #[test]
  fn month_title_uses_full_name() {
    assert_eq!(
      month_title(day(2024, 6, 15)),
      "June 2024"
    );
  }
}
