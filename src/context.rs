//! List Context
//!
//! Shared handle provided via Leptos Context API. Owns the loader timer and
//! runs the commands the reducer asks for.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::board::{Action, Command, Submission};
use crate::config::AppConfig;
use crate::store::{store_apply, BoardStore};

#[derive(Clone, Copy)]
pub struct ListContext {
    pub store: BoardStore,
    config: StoredValue<AppConfig>,
    /// Loader timer; dropping it clears the interval
    progress_timer: StoredValue<Option<Interval>, LocalStorage>,
}

impl ListContext {
    pub fn new(store: BoardStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            progress_timer: StoredValue::new_local(None),
        }
    }

    /// Start the loader. The interval is released with the owning component.
    pub fn start_progress(&self) {
        let ctx = *self;
        let (step, millis) = self
            .config
            .with_value(|config| (config.progress_step, config.progress_interval_ms));
        let interval = Interval::new(millis, move || {
            ctx.dispatch(Action::AdvanceProgress { step });
        });
        self.progress_timer.set_value(Some(interval));
        on_cleanup(move || ctx.stop_progress());
    }

    fn stop_progress(&self) {
        if let Some(Some(interval)) = self.progress_timer.try_update_value(Option::take) {
            drop(interval);
            tracing::debug!("loader timer cleared");
        }
    }

    /// Re-run the list request after a failure
    pub fn retry(&self) {
        tracing::info!("retrying list fetch");
        self.dispatch(Action::Fetch);
    }

    pub fn dispatch(&self, action: Action) {
        for command in store_apply(&self.store, action) {
            self.run(command);
        }
    }

    fn run(&self, command: Command) {
        match command {
            Command::StopProgress => self.stop_progress(),
            Command::StartFetch => self.start_fetch(),
            Command::Alert(err) => {
                tracing::info!(%err, "merge rejected");
                if let Err(js_err) = window().alert_with_message(&err.to_string()) {
                    tracing::warn!(error = ?js_err, "alert failed");
                }
            }
            Command::Submit(submission) => report_submission(&submission),
        }
    }

    fn start_fetch(&self) {
        let ctx = *self;
        let url = self.config.with_value(|config| config.api_url.clone());
        spawn_local(async move {
            let action = match api::fetch_lists(&url).await {
                Ok(items) => Action::FetchSucceeded(items),
                Err(err) => {
                    tracing::warn!(%err, "list fetch failed");
                    Action::FetchFailed(err.user_message().to_string())
                }
            };
            ctx.dispatch(action);
        });
    }
}

pub fn use_list_context() -> ListContext {
    use_context::<ListContext>().expect("ListContext should be provided")
}

/// Hand the final lists downstream. No submission endpoint exists yet,
/// so the snapshot goes to the log and to the console as a JS object.
fn report_submission(submission: &Submission) {
    match serde_json::to_string(submission) {
        Ok(json) => tracing::info!(
            list_one = submission.list_one.len(),
            list_two = submission.list_two.len(),
            list_three = submission.list_three.len(),
            %json,
            "submitting lists"
        ),
        Err(err) => tracing::warn!(%err, "could not serialize submission"),
    }
    if let Ok(value) = serde_wasm_bindgen::to_value(submission) {
        web_sys::console::log_2(&"Submitting lists:".into(), &value);
    }
}
