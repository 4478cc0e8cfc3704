use std::sync::Arc;

use chrono::{DateTime, Utc};
use dormmeal_business::BusinessConfig;
use dormmeal_business::user_management::{
    Dispatcher, HttpUserApi, UserApi, UserApiError, UserCommand, UserManagementAction,
    UserManagementState,
};
use dormmeal_states::{RepaintHook, Store};
use tokio::runtime::Handle;

/// Something the page asked for while rendering.
///
/// Widgets only read state; they return intents which are applied once the
/// frame's widgets are done.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// A synchronous transition.
    Local(UserManagementAction),
    /// Work for the user API.
    Remote(UserCommand),
}

impl From<UserManagementAction> for Intent {
    fn from(action: UserManagementAction) -> Self {
        Self::Local(action)
    }
}

impl From<UserCommand> for Intent {
    fn from(command: UserCommand) -> Self {
        Self::Remote(command)
    }
}

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    pub store: Store<UserManagementState>,
    dispatcher: Dispatcher,
    mounted: bool,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("dispatcher", &self.dispatcher)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl State {
    /// Builds the HTTP client from `config`. `repaint` wakes the UI when a
    /// request finishes.
    pub fn new(
        config: BusinessConfig,
        runtime: Handle,
        repaint: Option<RepaintHook>,
    ) -> Result<Self, UserApiError> {
        let api = HttpUserApi::new(&config)?;
        Ok(Self::with_api(config, runtime, Arc::new(api), repaint))
    }

    pub fn with_api(
        config: BusinessConfig,
        runtime: Handle,
        api: Arc<dyn UserApi>,
        repaint: Option<RepaintHook>,
    ) -> Self {
        let mut store = Store::new(UserManagementState::with_toast_lifetime(
            config.toast_lifetime,
        ));
        if let Some(hook) = repaint {
            store.set_repaint_hook(hook);
        }
        let dispatcher = Dispatcher::new(runtime, api, store.updater());

        Self {
            config,
            store,
            dispatcher,
            mounted: false,
        }
    }

    /// State talking to a mock server at `base_url`.
    pub fn test(base_url: String, runtime: Handle) -> Result<Self, UserApiError> {
        Self::new(BusinessConfig::new(base_url), runtime, None)
    }

    pub fn page(&self) -> &UserManagementState {
        self.store.state()
    }

    /// Applies finished async work, mounts the page on the first call and
    /// drops expired toasts.
    pub fn begin_frame(&mut self, now: DateTime<Utc>) {
        self.store.sync();

        if !self.mounted {
            self.mounted = true;
            self.apply(Intent::Remote(UserCommand::Fetch { show_loading: true }));
        }

        if self.page().toasts().next_expiry().is_some_and(|at| at <= now) {
            self.store.dispatch(UserManagementAction::ExpireToasts(now));
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Local(action) => self.store.dispatch(action),
            Intent::Remote(command) => {
                self.dispatcher.dispatch(command);
                // Pick up the in-flight markers queued by the dispatcher.
                self.store.sync();
            }
        }
    }

    pub fn apply_all(&mut self, intents: impl IntoIterator<Item = Intent>) {
        for intent in intents {
            self.apply(intent);
        }
    }

    /// Commands dispatched since startup.
    pub fn dispatched(&self) -> u64 {
        self.dispatcher.dispatched()
    }
}
