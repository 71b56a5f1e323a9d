use anyhow::{
  Context,
  anyhow
};
use monthplan_core::storage::{
  TaskStorage,
  decode_tasks,
  encode_tasks
};
use monthplan_core::Task;
use wasm_bindgen::JsValue;

/// Task list kept under one key of the browser's `localStorage`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorage {
  key: String
}

impl LocalStorage {
  pub fn new(
    key: impl Into<String>
  ) -> Self {
    Self {
      key: key.into()
    }
  }
}

fn browser_storage()
-> anyhow::Result<web_sys::Storage> {
  let window = web_sys::window()
    .ok_or_else(|| {
      anyhow!("no browser window")
    })?;
  window
    .local_storage()
    .map_err(|err: JsValue| {
      anyhow!(
        "local storage unavailable: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "local storage disabled"
      )
    })
}

impl TaskStorage for LocalStorage {
  #[tracing::instrument(skip(self), fields(key = %self.key))]
  fn load(
    &self
  ) -> anyhow::Result<Vec<Task>> {
    let stored = browser_storage()?
      .get_item(&self.key)
      .map_err(|err: JsValue| {
        anyhow!(
          "failed reading local \
           storage: {err:?}"
        )
      })?;

    match stored {
      | Some(raw) => {
        decode_tasks(&raw).with_context(
          || {
            format!(
              "failed decoding {}",
              self.key
            )
          }
        )
      }
      | None => Ok(vec![])
    }
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.key))]
  fn save(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let payload = encode_tasks(tasks)?;
    tracing::debug!(
      count = tasks.len(),
      bytes = payload.len(),
      "writing local storage"
    );
    browser_storage()?
      .set_item(&self.key, &payload)
      .map_err(|err: JsValue| {
        anyhow!(
          "failed writing local \
           storage: {err:?}"
        )
      })
  }
}
