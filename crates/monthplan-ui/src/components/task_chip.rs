use monthplan_core::Task;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::swatch_style::{
  dot_style,
  filled_style
};

#[derive(Properties, PartialEq)]
pub struct TaskChipProps {
  pub task:      Task,
  pub on_open:   Callback<String>,
  pub on_delete: Callback<String>
}

#[function_component(TaskChip)]
pub fn task_chip(
  props: &TaskChipProps
) -> Html {
  let task = &props.task;
  let title = match &task.description {
    | Some(desc) => {
      format!("{}\n{desc}", task.name)
    }
    | None => task.name.clone()
  };

  let on_open = {
    let on_open = props.on_open.clone();
    let id = task.id.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_open.emit(id.clone());
    })
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    let id = task.id.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_delete.emit(id.clone());
    })
  };
  // Keep the owning cell from starting a drag.
  let swallow_press =
    Callback::from(|e: MouseEvent| {
      e.stop_propagation();
    });

  html! {
      <div
          class="task-chip"
          style={filled_style(task.category.color())}
          title={title}
          onmousedown={swallow_press.clone()}
          onclick={on_open}
      >
          {
              if let Some(priority) = task.priority {
                  html! { <span class="priority-dot" style={dot_style(priority.color())}></span> }
              } else {
                  html! {}
              }
          }
          <span class="task-name">{ task.name.clone() }</span>
          <button
              type="button"
              class="chip-delete"
              title="Delete task"
              onmousedown={swallow_press}
              onclick={on_delete}
          >
              { "×" }
          </button>
      </div>
  }
}
