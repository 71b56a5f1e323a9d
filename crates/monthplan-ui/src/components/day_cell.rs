use chrono::{
  Datelike,
  NaiveDate
};
use monthplan_core::Task;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::task_chip::TaskChip;

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
  pub day:            NaiveDate,
  pub in_month:       bool,
  pub is_today:       bool,
  pub selected:       bool,
  pub tasks:          Vec<Task>,
  pub on_mouse_down:  Callback<NaiveDate>,
  /// The day entered and whether the primary button is still held.
  pub on_mouse_enter:
    Callback<(NaiveDate, bool)>,
  pub on_add:         Callback<NaiveDate>,
  pub on_task_open:   Callback<String>,
  pub on_task_delete: Callback<String>
}

#[function_component(DayCell)]
pub fn day_cell(
  props: &DayCellProps
) -> Html {
  let day = props.day;
  let on_mouse_down = {
    let cb = props.on_mouse_down.clone();
    Callback::from(move |e: MouseEvent| {
      if e.button() == 0 {
        e.prevent_default();
        cb.emit(day);
      }
    })
  };
  let on_mouse_enter = {
    let cb = props.on_mouse_enter.clone();
    Callback::from(move |e: MouseEvent| {
      cb.emit((day, e.buttons() & 1 != 0));
    })
  };
  let add_button = if props.in_month {
    let on_add = props.on_add.clone();
    html! {
        <button
            type="button"
            class="add-task"
            title="Add task"
            onmousedown={Callback::from(|e: MouseEvent| e.stop_propagation())}
            onclick={Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_add.emit(day);
            })}
        >
            { "+" }
        </button>
    }
  } else {
    html! {}
  };
  let month_hint =
    if day.day() == 1 && !props.in_month {
      html! {
          <span class="month-hint">{ day.format("%b").to_string() }</span>
      }
    } else {
      html! {}
    };

  html! {
      <div
          class={classes!(
              "day-cell",
              (!props.in_month).then_some("outside"),
              props.selected.then_some("selected"),
          )}
          onmousedown={on_mouse_down}
          onmouseenter={on_mouse_enter}
      >
          { month_hint }
          <div class="day-head">
              <span class={classes!("day-number", props.is_today.then_some("today"))}>
                  { day.day() }
              </span>
              { add_button }
          </div>
          <div class="day-tasks">
              {
                  for props.tasks.iter().map(|task| html! {
                      <TaskChip
                          key={task.id.clone()}
                          task={task.clone()}
                          on_open={props.on_task_open.clone()}
                          on_delete={props.on_task_delete.clone()}
                      />
                  })
              }
          </div>
      </div>
  }
}
