//! Harness helpers for widget and page tests.

use std::sync::Arc;
use std::time::Duration;

use dormmeal_business::BusinessConfig;
use dormmeal_business::test_utils::RecordingUserApi;
use dormmeal_business::User;
use egui_kittest::Harness;
use tokio::runtime::Handle;

use crate::state::State;

/// Frames plus a short sleep, enough for in-memory API tasks to finish.
const SETTLE_ROUNDS: usize = 3;

pub struct TestCtx<'a> {
    pub api: RecordingUserApi,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Must be called from inside a tokio runtime.
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a, users: Vec<User>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let api = RecordingUserApi::with_users(users);
        let state = State::with_api(
            BusinessConfig::new("http://127.0.0.1:0"),
            Handle::current(),
            Arc::new(api.clone()),
            None,
        );

        Self {
            api,
            harness: Harness::new_ui_state(app, state),
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    /// Lets spawned commands run and renders their results.
    pub async fn settle(&mut self) {
        for _ in 0..SETTLE_ROUNDS {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
        }
    }
}
