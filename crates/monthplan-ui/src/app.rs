use chrono::NaiveDate;
use gloo::console::log;
use monthplan_core::calendar::month_title;
use monthplan_core::{
  Category,
  Planner,
  PlannerConfig,
  Priority,
  SaveOutcome,
  TimeRange
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::{
  CalendarGrid,
  CalendarHeader,
  FiltersPanel,
  TaskModal,
  WeekdayHeader
};
use crate::storage::LocalStorage;

const PLANNER_CONFIG_TOML: &str =
  include_str!("../assets/planner.toml");

type PlannerState =
  UseStateHandle<Planner<LocalStorage>>;

fn today() -> NaiveDate {
  chrono::Local::now().date_naive()
}

/// Clones the current planner, applies `change`, and stores the result.
fn update_planner(
  planner: &PlannerState,
  change: impl FnOnce(
    &mut Planner<LocalStorage>
  )
) {
  let mut next = (**planner).clone();
  change(&mut next);
  planner.set(next);
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(|| {
    PlannerConfig::load_or_default(
      PLANNER_CONFIG_TOML
    )
  });
  let planner = {
    let config = config.clone();
    use_state(move || {
      Planner::new(
        LocalStorage::new(
          config.storage.key.clone()
        ),
        &*config,
        today()
      )
    })
  };
  let today = today();

  let on_prev = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      update_planner(&planner, |p| {
        p.prev_month()
      });
    })
  };
  let on_next = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      update_planner(&planner, |p| {
        p.next_month()
      });
    })
  };
  let on_today = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      update_planner(&planner, |p| {
        p.go_to_today(today)
      });
    })
  };
  let on_search_input = {
    let planner = planner.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let query = input.value();
      update_planner(&planner, |p| {
        p.set_search_query(query)
      });
    })
  };
  let on_toggle_filters = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      update_planner(&planner, |p| {
        p.toggle_filters_panel()
      });
    })
  };

  let on_toggle_category = {
    let planner = planner.clone();
    Callback::from(
      move |category: Category| {
        ui_debug(
          "filter.category",
          category.label()
        );
        update_planner(&planner, |p| {
          p.toggle_category(category)
        });
      }
    )
  };
  let on_toggle_priority = {
    let planner = planner.clone();
    Callback::from(
      move |priority: Priority| {
        ui_debug(
          "filter.priority",
          priority.label()
        );
        update_planner(&planner, |p| {
          p.toggle_priority(priority)
        });
      }
    )
  };
  let on_time_range = {
    let planner = planner.clone();
    Callback::from(
      move |range: Option<TimeRange>| {
        let detail = range
          .map(|r| r.label())
          .unwrap_or_else(|| {
            "all".to_string()
          });
        ui_debug(
          "filter.time_range",
          &detail
        );
        update_planner(&planner, |p| {
          p.set_time_range(range)
        });
      }
    )
  };
  let on_clear_filters = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      update_planner(&planner, |p| {
        p.clear_filters()
      });
    })
  };

  let on_mouse_down = {
    let planner = planner.clone();
    Callback::from(move |day: NaiveDate| {
      update_planner(&planner, |p| {
        p.begin_drag(day)
      });
    })
  };
  let on_mouse_enter = {
    let planner = planner.clone();
    Callback::from(
      move |(day, held): (NaiveDate, bool)| {
        if !planner.drag().is_active() {
          return;
        }
        if held {
          update_planner(&planner, |p| {
            p.extend_drag(day)
          });
        } else {
          // Released outside the grid.
          ui_debug(
            "grid.drag.cancel",
            &day.to_string()
          );
          update_planner(&planner, |p| {
            p.cancel_drag()
          });
        }
      }
    )
  };
  let on_mouse_up = {
    let planner = planner.clone();
    Callback::from(move |_: MouseEvent| {
      if !planner.drag().is_active() {
        return;
      }
      update_planner(&planner, |p| {
        if p.finish_drag() {
          ui_debug(
            "grid.drag.finish",
            "opened new task form"
          );
        }
      });
    })
  };
  let on_add = {
    let planner = planner.clone();
    Callback::from(move |day: NaiveDate| {
      ui_debug(
        "day.add.click",
        &day.to_string()
      );
      update_planner(&planner, |p| {
        p.open_new_on(day)
      });
    })
  };
  let on_task_open = {
    let planner = planner.clone();
    Callback::from(move |id: String| {
      ui_debug("task.open", &id);
      update_planner(&planner, |p| {
        p.open_edit(&id);
      });
    })
  };
  let on_task_delete = {
    let planner = planner.clone();
    Callback::from(move |id: String| {
      ui_debug("task.delete", &id);
      update_planner(&planner, |p| {
        p.delete_task(&id);
      });
    })
  };

  let modal = match planner.form().draft() {
    | Some(draft) => {
      let on_name_input = {
        let planner = planner.clone();
        Callback::from(move |name: String| {
          update_planner(&planner, |p| {
            if let Some(draft) =
              p.form_mut().draft_mut()
            {
              draft.name = name;
            }
          });
        })
      };
      let on_category_change = {
        let planner = planner.clone();
        Callback::from(
          move |category: Category| {
            update_planner(&planner, |p| {
              if let Some(draft) =
                p.form_mut().draft_mut()
              {
                draft.category = category;
              }
            });
          }
        )
      };
      let on_priority_change = {
        let planner = planner.clone();
        Callback::from(
          move |priority: Priority| {
            update_planner(&planner, |p| {
              if let Some(draft) =
                p.form_mut().draft_mut()
              {
                draft.priority = priority;
              }
            });
          }
        )
      };
      let on_description_input = {
        let planner = planner.clone();
        Callback::from(move |text: String| {
          update_planner(&planner, |p| {
            if let Some(draft) =
              p.form_mut().draft_mut()
            {
              draft.description = text;
            }
          });
        })
      };
      let on_save = {
        let planner = planner.clone();
        Callback::from(move |_: MouseEvent| {
          update_planner(&planner, |p| {
            let outcome = p.save_form();
            ui_debug(
              "button.save.click",
              &format!("{outcome:?}")
            );
            if outcome == SaveOutcome::Missing {
              tracing::warn!(
                "edited task no longer exists"
              );
            }
          });
        })
      };
      let on_cancel = {
        let planner = planner.clone();
        Callback::from(move |_: MouseEvent| {
          update_planner(&planner, |p| {
            p.cancel_form()
          });
        })
      };
      let on_delete = {
        let planner = planner.clone();
        Callback::from(move |_: MouseEvent| {
          update_planner(&planner, |p| {
            p.delete_from_form();
          });
        })
      };

      html! {
          <TaskModal
              draft={draft.clone()}
              on_name_input={on_name_input}
              on_category_change={on_category_change}
              on_priority_change={on_priority_change}
              on_description_input={on_description_input}
              on_save={on_save}
              on_cancel={on_cancel}
              on_delete={on_delete}
          />
      }
    }
    | None => html! {}
  };

  let filters_panel = if planner.show_filters() {
    html! {
        <FiltersPanel
            filters={planner.filters().clone()}
            time_ranges={config.time_ranges()}
            on_toggle_category={on_toggle_category}
            on_toggle_priority={on_toggle_priority}
            on_time_range={on_time_range}
            on_clear={on_clear_filters}
        />
    }
  } else {
    html! {}
  };

  let day_tasks = planner
    .visible_days()
    .into_iter()
    .map(|day| {
      let tasks = planner
        .tasks_for_day(day, today)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
      (day, tasks)
    })
    .collect::<Vec<_>>();

  html! {
      <div class="planner-app">
          <h1 class="app-title">{ config.title.clone() }</h1>
          <div class="panel">
              <CalendarHeader
                  month_title={month_title(planner.current_month())}
                  search_query={planner.filters().search_query.clone()}
                  filters_narrowed={planner.filters().is_narrowed()}
                  filters_open={planner.show_filters()}
                  on_prev={on_prev}
                  on_today={on_today}
                  on_next={on_next}
                  on_search_input={on_search_input}
                  on_toggle_filters={on_toggle_filters}
              />
              { filters_panel }
              <WeekdayHeader week_start={planner.week_start()} />
              <CalendarGrid
                  days={day_tasks}
                  current_month={planner.current_month()}
                  today={today}
                  drag={*planner.drag()}
                  on_mouse_down={on_mouse_down}
                  on_mouse_enter={on_mouse_enter}
                  on_mouse_up={on_mouse_up}
                  on_add={on_add}
                  on_task_open={on_task_open}
                  on_task_delete={on_task_delete}
              />
          </div>
          { modal }
      </div>
  }
}
