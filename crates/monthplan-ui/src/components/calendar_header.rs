use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarHeaderProps {
  pub month_title:       String,
  pub search_query:      String,
  pub filters_narrowed:  bool,
  pub filters_open:      bool,
  pub on_prev:           Callback<MouseEvent>,
  pub on_today:          Callback<MouseEvent>,
  pub on_next:           Callback<MouseEvent>,
  pub on_search_input:
    Callback<InputEvent>,
  pub on_toggle_filters:
    Callback<MouseEvent>
}

#[function_component(CalendarHeader)]
pub fn calendar_header(
  props: &CalendarHeaderProps
) -> Html {
  html! {
      <div class="calendar-header">
          <div class="actions calendar-nav-actions">
              <button class="btn" type="button" onclick={props.on_today.clone()}>{ "Today" }</button>
              <button class="btn icon" type="button" title="Previous month" onclick={props.on_prev.clone()}>{ "‹" }</button>
              <h2 class="month-title">{ props.month_title.clone() }</h2>
              <button class="btn icon" type="button" title="Next month" onclick={props.on_next.clone()}>{ "›" }</button>
          </div>
          <div class="actions">
              <input
                  class="search"
                  type="search"
                  value={props.search_query.clone()}
                  placeholder="Search tasks..."
                  oninput={props.on_search_input.clone()}
              />
              <button
                  type="button"
                  class={classes!("btn", props.filters_open.then_some("active"), props.filters_narrowed.then_some("narrowed"))}
                  onclick={props.on_toggle_filters.clone()}
              >
                  { "Filters" }
              </button>
          </div>
      </div>
  }
}
