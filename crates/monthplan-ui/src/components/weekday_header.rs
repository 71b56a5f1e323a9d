use chrono::Weekday;
use monthplan_core::calendar::weekday_labels;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WeekdayHeaderProps {
  pub week_start: Weekday
}

#[function_component(WeekdayHeader)]
pub fn weekday_header(
  props: &WeekdayHeaderProps
) -> Html {
  html! {
      <div class="weekday-row">
          {
              for weekday_labels(props.week_start).into_iter().map(|label| html! {
                  <div class="weekday">{ label }</div>
              })
          }
      </div>
  }
}
