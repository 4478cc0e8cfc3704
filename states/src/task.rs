//! Identifiers for spawned async work.
//!
//! A `TaskId` pairs a static label (the command kind) with a generation
//! counter. Later generations of the same label were dispatched later, which
//! is what log lines need to tell overlapping requests apart.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    label: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn new(label: &'static str, generation: u64) -> Self {
        Self { label, generation }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.generation)
    }
}

/// Hands out task ids with a single, monotonically increasing generation.
#[derive(Debug, Default)]
pub struct TaskIdGen {
    next: u64,
}

impl TaskIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, label: &'static str) -> TaskId {
        self.next += 1;
        TaskId::new(label, self.next)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
