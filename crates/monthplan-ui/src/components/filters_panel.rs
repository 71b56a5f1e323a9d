use monthplan_core::{
  Category,
  Filters,
  Priority,
  TimeRange
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::swatch_style::{
  filled_style,
  outlined_style
};

#[derive(Properties, PartialEq)]
pub struct FiltersPanelProps {
  pub filters:            Filters,
  pub time_ranges:        Vec<TimeRange>,
  pub on_toggle_category:
    Callback<Category>,
  pub on_toggle_priority:
    Callback<Priority>,
  pub on_time_range:
    Callback<Option<TimeRange>>,
  pub on_clear:           Callback<MouseEvent>
}

#[function_component(FiltersPanel)]
pub fn filters_panel(
  props: &FiltersPanelProps
) -> Html {
  let filters = &props.filters;

  let category_chips = Category::ALL
    .into_iter()
    .map(|category| {
      let on = filters
        .categories
        .contains(&category);
      let style = if on {
        filled_style(category.color())
      } else {
        outlined_style(category.color())
      };
      let on_toggle =
        props.on_toggle_category.clone();
      html! {
          <button
              type="button"
              class={classes!("chip", on.then_some("on"))}
              style={style}
              onclick={Callback::from(move |_| on_toggle.emit(category))}
          >
              { category.label() }
          </button>
      }
    })
    .collect::<Html>();

  let priority_chips = Priority::ALL
    .into_iter()
    .map(|priority| {
      let on = filters
        .priorities
        .contains(&priority);
      let style = if on {
        filled_style(priority.color())
      } else {
        outlined_style(priority.color())
      };
      let on_toggle =
        props.on_toggle_priority.clone();
      html! {
          <button
              type="button"
              class={classes!("chip", on.then_some("on"))}
              style={style}
              onclick={Callback::from(move |_| on_toggle.emit(priority))}
          >
              { priority.label() }
          </button>
      }
    })
    .collect::<Html>();

  let time_options = props
    .time_ranges
    .iter()
    .copied()
    .map(Some)
    .chain(std::iter::once(None))
    .map(|range| {
      let label = range
        .map(|r| r.label())
        .unwrap_or_else(|| {
          "All".to_string()
        });
      let checked =
        filters.time_range == range;
      let on_time_range =
        props.on_time_range.clone();
      html! {
          <label class="radio">
              <input
                  type="radio"
                  name="time-range"
                  checked={checked}
                  onchange={Callback::from(move |_| on_time_range.emit(range))}
              />
              { label }
          </label>
      }
    })
    .collect::<Html>();

  html! {
      <div class="panel filters-panel">
          <fieldset class="field">
              <legend>{ "Categories" }</legend>
              <div class="chip-row">{ category_chips }</div>
          </fieldset>
          <fieldset class="field">
              <legend>{ "Priorities" }</legend>
              <div class="chip-row">{ priority_chips }</div>
          </fieldset>
          <fieldset class="field">
              <legend>{ "Time Range" }</legend>
              <div class="radio-row">{ time_options }</div>
          </fieldset>
          <div class="actions">
              <button class="btn" type="button" onclick={props.on_clear.clone()}>{ "Reset filters" }</button>
          </div>
      </div>
  }
}
