use std::fmt;

use flume::{Receiver, Sender};
use log::trace;

use crate::{RepaintHook, Updater};

/// A state type whose every transition goes through an action.
pub trait Reducer {
    type Action: Send + 'static;

    fn reduce(&mut self, action: Self::Action);
}

/// Owns a reducer state plus the channel async work reports into.
pub struct Store<R: Reducer> {
    state: R,
    send: Sender<R::Action>,
    recv: Receiver<R::Action>,
    repaint: Option<RepaintHook>,
}

impl<R> Default for Store<R>
where
    R: Reducer + Default,
{
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> fmt::Debug for Store<R>
where
    R: Reducer + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("queued", &self.recv.len())
            .finish_non_exhaustive()
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            state,
            send,
            recv,
            repaint: None,
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    /// Apply an action right away, on the calling thread.
    pub fn dispatch(&mut self, action: R::Action) {
        self.state.reduce(action);
    }

    /// Updaters created after this call invoke `hook` whenever they queue an action.
    pub fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub fn updater(&self) -> Updater<R::Action> {
        Updater::new(self.send.clone(), self.repaint.clone())
    }

    /// Apply every queued action in arrival order. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.recv.try_recv() {
            self.state.reduce(action);
            applied += 1;
        }
        if applied > 0 {
            trace!("store synced {applied} queued action(s)");
        }
        applied
    }

    /// Actions queued but not yet applied.
    pub fn queued(&self) -> usize {
        self.recv.len()
    }
}
