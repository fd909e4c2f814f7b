//! In-flight Request Tracking
//!
//! A load supersedes the one before it; completions carrying an old ticket
//! are dropped. Retiring the tracker (component teardown) makes every
//! outstanding ticket stale.

/// Identifies one load started by a tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    retired: bool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the reload flag changes. Only `true` starts a load.
    pub fn on_reload(&mut self, reload: bool) -> Option<Ticket> {
        if reload { self.begin() } else { None }
    }

    pub fn begin(&mut self) -> Option<Ticket> {
        if self.retired {
            return None;
        }
        self.generation += 1;
        Some(Ticket(self.generation))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.retired && ticket.0 == self.generation
    }

    /// False once the owning component is gone
    pub fn is_live(&self) -> bool {
        !self.retired
    }

    pub fn retire(&mut self) {
        self.retired = true;
    }
}
