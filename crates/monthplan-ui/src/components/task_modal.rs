use std::str::FromStr;

use monthplan_core::{
  Category,
  Priority,
  TaskDraft
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub draft:                TaskDraft,
  pub on_name_input:        Callback<String>,
  pub on_category_change:
    Callback<Category>,
  pub on_priority_change:
    Callback<Priority>,
  pub on_description_input:
    Callback<String>,
  pub on_save:              Callback<MouseEvent>,
  pub on_cancel:            Callback<MouseEvent>,
  pub on_delete:            Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let draft = &props.draft;
  let is_edit = draft.is_edit();

  let on_name_input = {
    let cb = props.on_name_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      cb.emit(input.value());
    })
  };
  let on_description_input = {
    let cb =
      props.on_description_input.clone();
    Callback::from(move |e: InputEvent| {
      let area: web_sys::HtmlTextAreaElement =
        e.target_unchecked_into();
      cb.emit(area.value());
    })
  };
  let on_category_change = {
    let cb =
      props.on_category_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      match Category::from_str(&select.value()) {
        | Ok(category) => cb.emit(category),
        | Err(err) => {
          tracing::warn!(error = %err, "ignoring category selection");
        }
      }
    })
  };
  let on_priority_change = {
    let cb =
      props.on_priority_change.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      match Priority::from_str(&select.value()) {
        | Ok(priority) => cb.emit(priority),
        | Err(err) => {
          tracing::warn!(error = %err, "ignoring priority selection");
        }
      }
    })
  };
  // Clicks inside the dialog must not reach the backdrop.
  let stop = Callback::from(|e: MouseEvent| {
    e.stop_propagation();
  });

  html! {
      <div class="modal-backdrop" onclick={props.on_cancel.clone()}>
          <div class="modal" onclick={stop}>
              <h3>{ if is_edit { "Edit Task" } else { "New Task" } }</h3>
              <div class="field-label">{ "Dates" }</div>
              <div class="range-readout">{ draft.range().to_string() }</div>

              <label class="field-label" for="task-name">{ "Name" }</label>
              <input
                  id="task-name"
                  type="text"
                  placeholder="Task name"
                  value={draft.name.clone()}
                  oninput={on_name_input}
              />

              <label class="field-label" for="task-category">{ "Category" }</label>
              <select id="task-category" onchange={on_category_change}>
                  {
                      for Category::ALL.into_iter().map(|category| html! {
                          <option
                              value={category.label()}
                              selected={category == draft.category}
                          >
                              { category.label() }
                          </option>
                      })
                  }
              </select>

              <label class="field-label" for="task-priority">{ "Priority" }</label>
              <select id="task-priority" onchange={on_priority_change}>
                  {
                      for Priority::ALL.into_iter().map(|priority| html! {
                          <option
                              value={priority.label()}
                              selected={priority == draft.priority}
                          >
                              { priority.label() }
                          </option>
                      })
                  }
              </select>

              <label class="field-label" for="task-description">{ "Description" }</label>
              <textarea
                  id="task-description"
                  rows="3"
                  value={draft.description.clone()}
                  oninput={on_description_input}
              />

              <div class="modal-actions">
                  {
                      if is_edit {
                          html! {
                              <button type="button" class="btn danger" onclick={props.on_delete.clone()}>
                                  { "Delete" }
                              </button>
                          }
                      } else {
                          html! {}
                      }
                  }
                  <span class="spacer"></span>
                  <button type="button" class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
                  <button
                      type="button"
                      class="btn primary"
                      disabled={!draft.can_save()}
                      onclick={props.on_save.clone()}
                  >
                      { if is_edit { "Update" } else { "Create" } }
                  </button>
              </div>
          </div>
      </div>
  }
}
