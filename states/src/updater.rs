use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use flume::Sender;
use log::warn;

use crate::StoreError;

/// Callback fired after an action is queued from outside the UI thread.
///
/// The UI wires this to `egui::Context::request_repaint` so a finished request
/// is rendered without waiting for the next input event.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Send-side handle into a [`crate::Store`].
///
/// Cheap to clone; hand one to every async task that needs to report back.
pub struct Updater<A> {
    send: Sender<A>,
    repaint: Option<RepaintHook>,
}

impl<A> Clone for Updater<A> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
            repaint: self.repaint.clone(),
        }
    }
}

impl<A> fmt::Debug for Updater<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("action", &type_name::<A>())
            .field("queued", &self.send.len())
            .field("has_repaint", &self.repaint.is_some())
            .finish()
    }
}

impl<A> Updater<A> {
    pub(crate) fn new(send: Sender<A>, repaint: Option<RepaintHook>) -> Self {
        Self { send, repaint }
    }

    /// Queue an action, failing if the store is gone.
    pub fn try_set(&self, action: A) -> Result<(), StoreError> {
        self.send
            .send(action)
            .map_err(|_| StoreError::disconnected(type_name::<A>()))?;

        if let Some(repaint) = &self.repaint {
            repaint();
        }
        Ok(())
    }

    /// Queue an action.
    ///
    /// A dropped store means the page that asked for the work is gone, so the
    /// action is logged and discarded.
    pub fn set(&self, action: A) {
        if let Err(err) = self.try_set(action) {
            warn!("{err}");
        }
    }
}
