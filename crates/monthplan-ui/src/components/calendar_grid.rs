use chrono::NaiveDate;
use monthplan_core::calendar::is_same_month;
use monthplan_core::{
  DragSelection,
  Task
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::day_cell::DayCell;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
  /// Each visible day with the filtered tasks that cover it.
  pub days:           Vec<(NaiveDate, Vec<Task>)>,
  pub current_month:  NaiveDate,
  pub today:          NaiveDate,
  pub drag:           DragSelection,
  pub on_mouse_down:  Callback<NaiveDate>,
  pub on_mouse_enter:
    Callback<(NaiveDate, bool)>,
  pub on_mouse_up:    Callback<MouseEvent>,
  pub on_add:         Callback<NaiveDate>,
  pub on_task_open:   Callback<String>,
  pub on_task_delete: Callback<String>
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(
  props: &CalendarGridProps
) -> Html {
  html! {
      <div class="calendar-grid" onmouseup={props.on_mouse_up.clone()}>
          {
              for props.days.iter().map(|(day, tasks)| {
                  let day = *day;
                  html! {
                      <DayCell
                          key={day.to_string()}
                          day={day}
                          in_month={is_same_month(day, props.current_month)}
                          is_today={day == props.today}
                          selected={props.drag.covers(day)}
                          tasks={tasks.clone()}
                          on_mouse_down={props.on_mouse_down.clone()}
                          on_mouse_enter={props.on_mouse_enter.clone()}
                          on_add={props.on_add.clone()}
                          on_task_open={props.on_task_open.clone()}
                          on_task_delete={props.on_task_delete.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
